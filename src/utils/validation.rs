use crate::utils::error::{BookError, Result};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

pub const PHONE_LENGTH: usize = 10;
pub const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

// chrono's %d/%m/%Y accept one-digit days and months, so the shape is checked first.
static BIRTHDAY_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("valid birthday pattern"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == PHONE_LENGTH && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a `DD-MM-YYYY` birthday into a calendar date.
pub fn parse_birthday(birthday: &str) -> Result<NaiveDate> {
    let invalid = || BookError::InvalidBirthday {
        value: birthday.to_string(),
    };

    if !BIRTHDAY_SHAPE.is_match(birthday) {
        return Err(invalid());
    }

    let date = NaiveDate::parse_from_str(birthday, BIRTHDAY_FORMAT).map_err(|_| invalid())?;
    if date.year() < 1 {
        return Err(invalid());
    }
    Ok(date)
}

pub fn is_valid_birthday(birthday: &str) -> bool {
    parse_birthday(birthday).is_ok()
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(BookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(BookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
