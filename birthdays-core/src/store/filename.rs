//! Human-readable filenames for record files.

use std::path::Path;

use crate::birthday::BirthdayRecord;
use crate::error::{BirthdayError, BirthdayResult};

pub const EXTENSION: &str = "toml";

/// Longest slug kept in a filename.
const MAX_SLUG_LEN: usize = 50;

/// Base filename for a record, without collision suffix.
pub fn base_filename(record: &BirthdayRecord) -> String {
    let mut slug = slug::slugify(&record.name);
    slug.truncate(MAX_SLUG_LEN);
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        format!("birthday.{EXTENSION}")
    } else {
        format!("{slug}.{EXTENSION}")
    }
}

/// Parse the contents of a record file.
pub fn parse_record(content: &str) -> Option<BirthdayRecord> {
    toml::from_str(content).ok()
}

/// Pick a filename in `dir` for the record, adding -2, -3, etc. when another
/// record already owns the base name.
pub fn filename_for(record: &BirthdayRecord, dir: &Path) -> BirthdayResult<String> {
    let base_filename = base_filename(record);
    let base = base_filename.trim_end_matches(&format!(".{EXTENSION}")).to_string();

    if is_available(dir, &base_filename, &record.id) {
        return Ok(base_filename);
    }

    for n in 2..=100 {
        let suffixed = format!("{base}-{n}.{EXTENSION}");
        if is_available(dir, &suffixed, &record.id) {
            return Ok(suffixed);
        }
    }

    Err(BirthdayError::Validation(format!(
        "Too many filename collisions for {base_filename}"
    )))
}

/// Free, or already holding the record with `own_id`.
fn is_available(dir: &Path, filename: &str, own_id: &str) -> bool {
    let path = dir.join(filename);
    if !path.exists() {
        return true;
    }

    std::fs::read_to_string(&path)
        .ok()
        .and_then(|content| parse_record(&content))
        .is_some_and(|existing| existing.id == own_id)
}
