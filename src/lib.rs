pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::JsonFileStorage;
pub use core::{
    birthdays::BirthdayWindowQuery, command::Command, session::Reply, session::Session,
    store::ContactStore,
};
pub use domain::ports::{FixedClock, SystemClock};
pub use utils::error::{BookError, Result};
