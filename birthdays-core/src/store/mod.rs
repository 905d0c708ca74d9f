//! Entity store for birthday records.
//!
//! The store owns record identity and persistence. Callers fetch a fresh
//! snapshot with [`BirthdayStore::list`] after every mutation instead of
//! patching what they already hold.

mod filename;
mod local;

pub use local::LocalStore;

use crate::birthday::{BirthdayDraft, BirthdayRecord};
use crate::error::{BirthdayError, BirthdayResult};

pub trait BirthdayStore {
    /// All records, ordered by name then id.
    fn list(&self) -> BirthdayResult<Vec<BirthdayRecord>>;

    fn get(&self, id: &str) -> BirthdayResult<BirthdayRecord> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| BirthdayError::NotFound(id.to_string()))
    }

    fn create(&self, draft: BirthdayDraft) -> BirthdayResult<BirthdayRecord>;

    fn update(&self, id: &str, draft: BirthdayDraft) -> BirthdayResult<BirthdayRecord>;

    fn delete(&self, id: &str) -> BirthdayResult<()>;
}

/// Resolve a user-supplied query to a single record.
///
/// Tries an exact id, then a unique id prefix, then a case-insensitive name.
pub fn lookup<'a>(records: &'a [BirthdayRecord], query: &str) -> BirthdayResult<&'a BirthdayRecord> {
    let query = query.trim();
    if query.is_empty() {
        return Err(BirthdayError::NotFound(query.to_string()));
    }

    if let Some(record) = records.iter().find(|r| r.id == query) {
        return Ok(record);
    }

    let by_prefix: Vec<_> = records.iter().filter(|r| r.id.starts_with(query)).collect();
    if by_prefix.len() == 1 {
        return Ok(by_prefix[0]);
    }

    let lowered = query.to_lowercase();
    let by_name: Vec<_> = records
        .iter()
        .filter(|r| r.name.to_lowercase() == lowered)
        .collect();

    match by_name.as_slice() {
        [record] => Ok(*record),
        [] if by_prefix.len() > 1 => Err(ambiguous(query, &by_prefix)),
        [] => Err(BirthdayError::NotFound(query.to_string())),
        many => Err(ambiguous(query, many)),
    }
}

fn ambiguous(query: &str, matches: &[&BirthdayRecord]) -> BirthdayError {
    let candidates = matches
        .iter()
        .map(|r| format!("{} ({})", r.name, r.short_id()))
        .collect::<Vec<_>>()
        .join(", ");

    BirthdayError::Ambiguous {
        query: query.to_string(),
        candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, name: &str) -> BirthdayRecord {
        BirthdayRecord::from_draft(
            id,
            BirthdayDraft::new(name, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()),
        )
    }

    fn records() -> Vec<BirthdayRecord> {
        vec![
            record("a1b2c3", "Ada"),
            record("a1ffff", "Grace"),
            record("d4e5f6", "Linus"),
            record("0000aa", "linus"),
        ]
    }

    #[test]
    fn lookup_by_exact_id() {
        let records = records();
        assert_eq!(lookup(&records, "d4e5f6").unwrap().name, "Linus");
    }

    #[test]
    fn lookup_by_unique_prefix() {
        let records = records();
        assert_eq!(lookup(&records, "a1b").unwrap().name, "Ada");
    }

    #[test]
    fn lookup_by_name_ignores_case() {
        let records = records();
        assert_eq!(lookup(&records, "grace").unwrap().id, "a1ffff");
    }

    #[test]
    fn lookup_ambiguous_prefix() {
        let records = records();
        assert!(matches!(
            lookup(&records, "a1"),
            Err(BirthdayError::Ambiguous { .. })
        ));
    }

    #[test]
    fn lookup_ambiguous_name() {
        let records = records();
        let err = lookup(&records, "LINUS").unwrap_err();
        assert!(err.to_string().contains("Linus (d4e5f6)"));
    }

    #[test]
    fn lookup_missing() {
        let records = records();
        assert!(matches!(
            lookup(&records, "nobody"),
            Err(BirthdayError::NotFound(_))
        ));
    }
}
