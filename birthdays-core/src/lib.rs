//! Core types for the birthdays CLI.
//!
//! - `birthday` holds the record and draft types handed to and from a store
//! - `engine` derives today's and upcoming birthdays, ages and greetings
//! - `store` defines the entity store trait and the local TOML-backed store
//! - `config` loads `~/.config/birthdays/config.toml`

pub mod birthday;
pub mod config;
pub mod engine;
pub mod error;
pub mod store;

pub use birthday::{BirthdayDraft, BirthdayRecord, DEFAULT_RELATIONSHIP, parse_date};
pub use engine::{DateEngine, LeapDayPolicy, UpcomingEntry};
pub use error::{BirthdayError, BirthdayResult};
pub use store::{BirthdayStore, LocalStore};
