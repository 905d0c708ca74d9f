//! Colored terminal rendering for birthday records and derived views.

use birthdays_core::{BirthdayRecord, DateEngine, UpcomingEntry};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

/// Human label for a distance in days (e.g. "Today", "Tomorrow", "in 12 days")
pub fn days_label(days: i64) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        n => format!("in {} {}", n, pluralize("day", n)),
    }
}

fn pluralize(word: &str, count: i64) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// One line per record for `birthdays list`.
pub fn render_record(record: &BirthdayRecord, engine: &DateEngine, today: NaiveDate) -> String {
    let age = engine.age(record.birth_date, today);
    let days = engine.days_until(record.birth_date, today);
    let relationship = format!("({})", record.relationship_label());
    let id = format!("[{}]", record.short_id());

    format!(
        "  {} {}  {} {}, born {} · next {}  {}",
        record.name.bold(),
        relationship.dimmed(),
        age,
        pluralize("year", i64::from(age)),
        record.birth_date.format("%Y-%m-%d"),
        days_label(days),
        id.dimmed()
    )
}

/// One line per entry for `birthdays upcoming`.
pub fn render_upcoming(entry: &UpcomingEntry<'_>, engine: &DateEngine) -> String {
    let turning = engine.age(entry.record.birth_date, entry.next_occurrence);
    let when = days_label(entry.days_until);
    let when = if entry.days_until == 0 {
        when.green().bold().to_string()
    } else {
        when.yellow().to_string()
    };

    format!(
        "  {} {}  {} turns {}  {}",
        entry.next_occurrence.format("%a %b %-d").to_string().bold(),
        format!("({when})"),
        entry.record.name,
        turning,
        format!("[{}]", entry.record.relationship_label()).dimmed()
    )
}

/// One line per record for `birthdays today`.
pub fn render_today(record: &BirthdayRecord, engine: &DateEngine, today: NaiveDate) -> String {
    format!(
        "  🎂 {} turns {} today  {}",
        record.name.bold(),
        engine.age(record.birth_date, today),
        format!("[{}]", record.short_id()).dimmed()
    )
}

/// Phone and email lines, for following up on a greeting.
pub fn contact_lines(record: &BirthdayRecord) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(phone) = &record.phone {
        lines.push(format!("  {} {}", "Phone:".bold(), phone));
    }
    if let Some(email) = &record.email {
        lines.push(format!("  {} {}", "Email:".bold(), email));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use birthdays_core::BirthdayDraft;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sam() -> BirthdayRecord {
        let mut draft = BirthdayDraft::new("Sam", date(1990, 6, 15));
        draft.relationship = Some("Sister".into());
        draft.email = Some("sam@example.com".into());
        BirthdayRecord::from_draft("0123456789", draft)
    }

    #[test]
    fn days_labels() {
        assert_eq!(days_label(0), "Today");
        assert_eq!(days_label(1), "Tomorrow");
        assert_eq!(days_label(2), "in 2 days");
        assert_eq!(days_label(364), "in 364 days");
    }

    #[test]
    fn record_line_shows_age_and_next_birthday() {
        let line = render_record(&sam(), &DateEngine::default(), date(2024, 6, 12));
        assert!(line.contains("Sam"));
        assert!(line.contains("(Sister)"));
        assert!(line.contains("33 years, born 1990-06-15"));
        assert!(line.contains("next in 3 days"));
        assert!(line.contains("[01234567]"));
    }

    #[test]
    fn upcoming_line_shows_age_turning() {
        let engine = DateEngine::default();
        let record = sam();
        let entry = UpcomingEntry {
            record: &record,
            next_occurrence: date(2024, 6, 15),
            days_until: 1,
        };

        let line = render_upcoming(&entry, &engine);
        assert!(line.contains("Sat Jun 15"));
        assert!(line.contains("Tomorrow"));
        assert!(line.contains("Sam turns 34"));
    }

    #[test]
    fn contact_lines_skip_missing_fields() {
        let lines = contact_lines(&sam());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("sam@example.com"));
    }
}
