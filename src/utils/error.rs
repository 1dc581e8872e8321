use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Invalid phone number format. Phone number must be 10 digits long and contain only digits.")]
    InvalidPhone { value: String },

    #[error("Invalid birthday format. Use: DD-MM-YYYY")]
    InvalidBirthday { value: String },

    #[error("Contact not found.")]
    ContactNotFound { name: String },

    #[error("Invalid number of arguments. Usage: {usage}")]
    Usage { usage: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Corrupt data in {path}: {reason}")]
    CorruptData { path: String, reason: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Lookup,
    Usage,
    Persistence,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BookError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BookError::InvalidPhone { .. } | BookError::InvalidBirthday { .. } => {
                ErrorCategory::Validation
            }
            BookError::ContactNotFound { .. } => ErrorCategory::Lookup,
            BookError::Usage { .. } => ErrorCategory::Usage,
            BookError::IoError(_) | BookError::CorruptData { .. } => ErrorCategory::Persistence,
            BookError::TomlError(_)
            | BookError::ConfigError { .. }
            | BookError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 輸入錯誤可在同一個 session 中恢復，持久化錯誤則不行
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::Lookup | ErrorCategory::Usage => {
                ErrorSeverity::Low
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Persistence => ErrorSeverity::Critical,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BookError::IoError(e) => format!("Could not access the address book file: {}", e),
            BookError::CorruptData { path, .. } => {
                format!("The address book file '{}' cannot be read", path)
            }
            BookError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BookError::InvalidPhone { .. } => "Enter exactly 10 digits, e.g. 0501234567",
            BookError::InvalidBirthday { .. } => "Enter the date as DD-MM-YYYY, e.g. 05-03-1990",
            BookError::ContactNotFound { .. } => "Use 'all' to list the stored names",
            BookError::Usage { .. } => "Check the number of arguments",
            BookError::IoError(_) => "Check that the data file location exists and is writable",
            BookError::CorruptData { .. } => {
                "Restore the file from a backup or move it aside to start a new address book"
            }
            BookError::TomlError(_)
            | BookError::ConfigError { .. }
            | BookError::InvalidConfigValueError { .. } => "Fix the configuration file and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, BookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_match_console_text() {
        let err = BookError::InvalidPhone {
            value: "123".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid phone number format. Phone number must be 10 digits long and contain only digits."
        );

        let err = BookError::InvalidBirthday {
            value: "1990-03-05".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid birthday format. Use: DD-MM-YYYY");

        let err = BookError::ContactNotFound {
            name: "Bob".to_string(),
        };
        assert_eq!(err.to_string(), "Contact not found.");
    }

    #[test]
    fn test_severity_by_category() {
        let usage = BookError::Usage { usage: "all" };
        assert_eq!(usage.category(), ErrorCategory::Usage);
        assert!(usage.is_recoverable());

        let corrupt = BookError::CorruptData {
            path: "book.json".to_string(),
            reason: "expected value".to_string(),
        };
        assert_eq!(corrupt.category(), ErrorCategory::Persistence);
        assert_eq!(corrupt.severity(), ErrorSeverity::Critical);
        assert!(!corrupt.is_recoverable());
    }
}
