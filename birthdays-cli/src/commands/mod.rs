pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod today;
pub mod upcoming;
pub mod wish;

use anyhow::Result;
use birthdays_core::{BirthdayDraft, parse_date};
use clap::Args;

/// Form fields shared by `add` and `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct RecordArgs {
    /// Person's name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Birth date (YYYY-MM-DD)
    #[arg(short, long)]
    pub birth_date: Option<String>,

    /// Relationship, e.g. "Sister" (defaults to Friend)
    #[arg(short, long)]
    pub relationship: Option<String>,

    #[arg(short, long)]
    pub phone: Option<String>,

    #[arg(short, long)]
    pub email: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

impl RecordArgs {
    /// Overwrite draft fields that were given on the command line.
    /// An empty value clears an optional field.
    pub fn apply_to(self, draft: &mut BirthdayDraft) -> Result<()> {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(birth_date) = self.birth_date {
            draft.birth_date = parse_date(&birth_date)?;
        }
        if let Some(relationship) = self.relationship {
            draft.relationship = Some(relationship);
        }
        if let Some(phone) = self.phone {
            draft.phone = Some(phone);
        }
        if let Some(email) = self.email {
            draft.email = Some(email);
        }
        if let Some(notes) = self.notes {
            draft.notes = Some(notes);
        }
        Ok(())
    }
}
