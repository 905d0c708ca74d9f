//! Birthday records and the form data used to create or update them.
//!
//! Records are owned by a [`BirthdayStore`](crate::store::BirthdayStore).
//! Everything else only reads them.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{BirthdayError, BirthdayResult};

/// Relationship shown for records that don't carry one.
pub const DEFAULT_RELATIONSHIP: &str = "Friend";

/// A stored birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayRecord {
    /// Opaque identifier assigned by the store
    pub id: String,
    pub name: String,
    /// Actual birth date. The year only matters for age.
    #[serde(alias = "birthDate")]
    pub birth_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BirthdayRecord {
    /// Build a record from validated draft data and a store-assigned id.
    pub fn from_draft(id: impl Into<String>, draft: BirthdayDraft) -> Self {
        BirthdayRecord {
            id: id.into(),
            name: draft.name,
            birth_date: draft.birth_date,
            relationship: draft.relationship,
            phone: draft.phone,
            email: draft.email,
            notes: draft.notes,
        }
    }

    /// Relationship for display, falling back to [`DEFAULT_RELATIONSHIP`].
    pub fn relationship_label(&self) -> &str {
        self.relationship.as_deref().unwrap_or(DEFAULT_RELATIONSHIP)
    }

    /// First eight characters of the id, enough to address a record from the CLI.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }
}

impl fmt::Display for BirthdayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Data collected by a form and sent to `create` / `update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayDraft {
    pub name: String,
    #[serde(alias = "birthDate")]
    pub birth_date: NaiveDate,
    pub relationship: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

impl BirthdayDraft {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate) -> Self {
        BirthdayDraft {
            name: name.into(),
            birth_date,
            relationship: None,
            phone: None,
            email: None,
            notes: None,
        }
    }

    /// Trim every text field, drop empty optionals and require a name.
    pub fn validated(self) -> BirthdayResult<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(BirthdayError::Validation("name is required".into()));
        }

        Ok(BirthdayDraft {
            name,
            birth_date: self.birth_date,
            relationship: normalize(self.relationship),
            phone: normalize(self.phone),
            email: normalize(self.email),
            notes: normalize(self.notes),
        })
    }
}

impl From<&BirthdayRecord> for BirthdayDraft {
    fn from(record: &BirthdayRecord) -> Self {
        BirthdayDraft {
            name: record.name.clone(),
            birth_date: record.birth_date,
            relationship: record.relationship.clone(),
            phone: record.phone.clone(),
            email: record.email.clone(),
            notes: record.notes.clone(),
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a YYYY-MM-DD date.
pub fn parse_date(s: &str) -> BirthdayResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| BirthdayError::InvalidDate(s.to_string()))
}
