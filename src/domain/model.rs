use crate::utils::error::{BookError, Result};
use crate::utils::validation::{is_valid_phone, parse_birthday};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 10-digit phone number.
///
/// Deserialization does not re-validate; values read back from disk are trusted
/// the way they were written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: &str) -> Result<Self> {
        if is_valid_phone(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(BookError::InvalidPhone {
                value: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday in `DD-MM-YYYY` form, kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(String);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self> {
        parse_birthday(value)?;
        Ok(Self(value.to_string()))
    }

    /// Re-parses the stored text. Fails only for values that bypassed `parse`,
    /// i.e. ones loaded from a hand-edited file.
    pub fn date(&self) -> Result<NaiveDate> {
        parse_birthday(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: String,
    phone: Phone,
    birthday: Option<Birthday>,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: Phone, birthday: Option<Birthday>) -> Self {
        Self {
            name: name.into(),
            phone,
            birthday,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn with_phone(self, phone: Phone) -> Self {
        Self { phone, ..self }
    }

    pub fn with_birthday(self, birthday: Birthday) -> Self {
        Self {
            birthday: Some(birthday),
            ..self
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Birthday: {}",
            self.name,
            self.phone,
            self.birthday.as_ref().map_or("N/A", Birthday::as_str)
        )
    }
}

/// What to do with a Feb 29 birthday when the target year has no Feb 29.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeapDayPolicy {
    /// Celebrate on Feb 28.
    #[default]
    Clamp,
    /// Leave the contact out and report it as skipped.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    InvalidBirthday,
    NoLeapDay { year: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBirthday {
    pub name: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::InvalidBirthday => {
                write!(f, "Invalid birthday format for {}. Skipping.", self.name)
            }
            SkipReason::NoLeapDay { year } => {
                write!(f, "No 29 February in {} for {}. Skipping.", year, self.name)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayReport {
    pub upcoming: Vec<UpcomingBirthday>,
    pub skipped: Vec<SkippedBirthday>,
}

impl BirthdayReport {
    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }
}
