pub mod birthdays;
pub mod command;
pub mod session;
pub mod store;

pub use crate::domain::model::{BirthdayReport, Contact, LeapDayPolicy};
pub use crate::domain::ports::{Clock, ContactRepository, LoadOutcome};
pub use crate::utils::error::Result;
