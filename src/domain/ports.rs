use crate::domain::model::Contact;
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Result of reading persisted contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<Contact>),
    /// Nothing has been saved yet. Not an error.
    Missing,
}

impl LoadOutcome {
    pub fn into_contacts(self) -> Vec<Contact> {
        match self {
            LoadOutcome::Loaded(contacts) => contacts,
            LoadOutcome::Missing => Vec::new(),
        }
    }
}

pub trait ContactRepository {
    fn load(&self) -> Result<LoadOutcome>;
    fn save(&self, contacts: &[Contact]) -> Result<()>;
    fn location(&self) -> String;
}

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
