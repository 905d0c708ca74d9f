use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use birthdays_core::store::{self, BirthdayStore};
use birthdays_core::{BirthdayRecord, DateEngine};
use chrono::NaiveDate;

/// Everything a command needs: where records live, how dates are computed
/// and which day counts as today.
pub struct App {
    pub store: Box<dyn BirthdayStore>,
    pub engine: DateEngine,
    pub today: NaiveDate,
    pub upcoming_limit: NonZeroUsize,
}

impl App {
    /// Fetch a fresh snapshot of every record.
    pub fn records(&self) -> Result<Vec<BirthdayRecord>> {
        self.store.list().context("Failed to load birthdays")
    }

    /// Fetch a fresh snapshot and resolve `query` against it.
    pub fn find(&self, query: &str) -> Result<BirthdayRecord> {
        let records = self.records()?;
        let record = store::lookup(&records, query)?;
        Ok(record.clone())
    }
}
