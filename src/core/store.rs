use crate::domain::model::{Birthday, Contact, Phone};
use crate::utils::error::{BookError, Result};

/// In-memory address book. Lookups scan in insertion order and stop at the
/// first contact with a matching name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn add_contact(&mut self, name: &str, phone: &str, birthday: Option<&str>) -> Result<()> {
        let phone = Phone::parse(phone)?;
        let birthday = birthday.map(Birthday::parse).transpose()?;

        if self.position(name).is_some() {
            tracing::warn!("Adding a second contact named '{}'; lookups use the first one", name);
        }

        self.contacts.push(Contact::new(name, phone, birthday));
        tracing::debug!("Added contact '{}' ({} total)", name, self.contacts.len());
        Ok(())
    }

    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> Result<()> {
        let index = self.require(name)?;
        let birthday = Birthday::parse(birthday)?;
        self.replace(index, |contact| contact.with_birthday(birthday));
        tracing::debug!("Set birthday for '{}'", name);
        Ok(())
    }

    pub fn change_phone(&mut self, name: &str, new_phone: &str) -> Result<()> {
        let index = self.require(name)?;
        let phone = Phone::parse(new_phone)?;
        self.replace(index, |contact| contact.with_phone(phone));
        tracing::debug!("Changed phone for '{}'", name);
        Ok(())
    }

    pub fn show_phone(&self, name: &str) -> Result<&Phone> {
        self.find(name).map(Contact::phone)
    }

    /// `Ok(None)` means the contact exists but has no birthday set.
    pub fn show_birthday(&self, name: &str) -> Result<Option<&Birthday>> {
        self.find(name).map(Contact::birthday)
    }

    /// `None` when the book is empty.
    pub fn list_all(&self) -> Option<&[Contact]> {
        if self.contacts.is_empty() {
            None
        } else {
            Some(&self.contacts)
        }
    }

    pub fn find(&self, name: &str) -> Result<&Contact> {
        let index = self.require(name)?;
        Ok(&self.contacts[index])
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name() == name)
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.position(name).ok_or_else(|| BookError::ContactNotFound {
            name: name.to_string(),
        })
    }

    fn replace(&mut self, index: usize, update: impl FnOnce(Contact) -> Contact) {
        let current = self.contacts[index].clone();
        self.contacts[index] = update(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> ContactStore {
        let mut store = ContactStore::new();
        store.add_contact("Alice", "0123456789", None).unwrap();
        store
            .add_contact("Bob", "0987654321", Some("15-06-1990"))
            .unwrap();
        store
    }

    #[test]
    fn test_add_contact_and_show_phone() {
        let store = sample_store();
        assert_eq!(store.len(), 2);
        assert_eq!(store.show_phone("Alice").unwrap().as_str(), "0123456789");
        assert_eq!(
            store.show_birthday("Bob").unwrap().unwrap().as_str(),
            "15-06-1990"
        );
        assert!(store.show_birthday("Alice").unwrap().is_none());
    }

    #[test]
    fn test_add_contact_rejects_invalid_fields() {
        let mut store = sample_store();
        let before = store.clone();

        for phone in ["", "123", "01234567890", "+012345678", "01234-5678", "abcdefghij"] {
            assert!(matches!(
                store.add_contact("Carol", phone, None),
                Err(BookError::InvalidPhone { .. })
            ));
        }
        assert!(matches!(
            store.add_contact("Carol", "0123456789", Some("31-02-2000")),
            Err(BookError::InvalidBirthday { .. })
        ));

        assert_eq!(store, before);
    }

    #[test]
    fn test_phone_is_checked_before_birthday() {
        let mut store = ContactStore::new();
        assert!(matches!(
            store.add_contact("Carol", "bad", Some("bad")),
            Err(BookError::InvalidPhone { .. })
        ));
    }

    #[test]
    fn test_add_birthday() {
        let mut store = sample_store();
        store.add_birthday("Alice", "01-01-2000").unwrap();
        assert_eq!(
            store.show_birthday("Alice").unwrap().unwrap().as_str(),
            "01-01-2000"
        );

        // overwrite
        store.add_birthday("Alice", "02-02-2002").unwrap();
        assert_eq!(
            store.show_birthday("Alice").unwrap().unwrap().as_str(),
            "02-02-2002"
        );

        assert!(matches!(
            store.add_birthday("Alice", "2002-02-02"),
            Err(BookError::InvalidBirthday { .. })
        ));
        assert_eq!(
            store.show_birthday("Alice").unwrap().unwrap().as_str(),
            "02-02-2002"
        );
    }

    #[test]
    fn test_change_phone() {
        let mut store = sample_store();
        store.change_phone("Bob", "1111111111").unwrap();
        assert_eq!(store.show_phone("Bob").unwrap().as_str(), "1111111111");

        assert!(matches!(
            store.change_phone("Bob", "111"),
            Err(BookError::InvalidPhone { .. })
        ));
        assert_eq!(store.show_phone("Bob").unwrap().as_str(), "1111111111");
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let mut store = sample_store();
        assert!(matches!(
            store.show_phone("Zed"),
            Err(BookError::ContactNotFound { .. })
        ));
        assert!(matches!(
            store.show_birthday("Zed"),
            Err(BookError::ContactNotFound { .. })
        ));
        assert!(matches!(
            store.add_birthday("Zed", "01-01-2000"),
            Err(BookError::ContactNotFound { .. })
        ));
        assert!(matches!(
            store.change_phone("Zed", "0123456789"),
            Err(BookError::ContactNotFound { .. })
        ));
    }

    #[test]
    fn test_not_found_wins_over_invalid_input() {
        let mut store = sample_store();
        assert!(matches!(
            store.change_phone("Zed", "bad"),
            Err(BookError::ContactNotFound { .. })
        ));
        assert!(matches!(
            store.add_birthday("Zed", "bad"),
            Err(BookError::ContactNotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_names_use_first_match() {
        let mut store = ContactStore::new();
        store.add_contact("Alice", "0000000001", None).unwrap();
        store.add_contact("Alice", "0000000002", None).unwrap();
        assert_eq!(store.len(), 2);

        store.change_phone("Alice", "0000000003").unwrap();
        assert_eq!(store.contacts()[0].phone().as_str(), "0000000003");
        assert_eq!(store.contacts()[1].phone().as_str(), "0000000002");
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        assert!(ContactStore::new().list_all().is_none());

        let store = sample_store();
        let names: Vec<&str> = store.list_all().unwrap().iter().map(Contact::name).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }
}
