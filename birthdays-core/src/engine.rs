//! Birthday date arithmetic.
//!
//! Every operation is a pure function of a caller-owned snapshot of records
//! and an explicit reference date. The engine keeps no state between calls
//! besides its leap-day policy and optional greeting template.

use std::num::NonZeroUsize;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::birthday::BirthdayRecord;

/// Greeting used when no template is configured.
pub const DEFAULT_GREETING: &str = "🎉 Happy {age_ordinal} Birthday, {name}! 🎂 Hope you have a wonderful day filled with joy and celebration! 🎈";

/// How a Feb 29 birthday is observed in years without a Feb 29.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeapDayPolicy {
    /// Month/day must match exactly, so Feb 29 is never "today" in a common
    /// year. Occurrence arithmetic rolls over to Mar 1.
    ///
    /// On Mar 1 of a common year such a record therefore ranks first in
    /// `upcoming_birthdays` with `days_until == 0`, yet `todays_birthdays`
    /// leaves it out. Use `February28` or `March1` to make the two agree.
    #[default]
    Strict,
    /// Observed on Feb 28 in common years.
    February28,
    /// Observed on Mar 1 in common years.
    March1,
}

/// A record together with its next birthday relative to a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingEntry<'a> {
    pub record: &'a BirthdayRecord,
    pub next_occurrence: NaiveDate,
    /// Whole days from the reference date, 0 when the birthday is today
    pub days_until: i64,
}

#[derive(Debug, Clone, Default)]
pub struct DateEngine {
    leap_day: LeapDayPolicy,
    greeting: Option<String>,
}

impl DateEngine {
    pub fn new(leap_day: LeapDayPolicy) -> Self {
        DateEngine {
            leap_day,
            greeting: None,
        }
    }

    /// Replace the default greeting. `{name}`, `{age}` and `{age_ordinal}`
    /// are substituted.
    pub fn with_greeting(mut self, template: impl Into<String>) -> Self {
        self.greeting = Some(template.into());
        self
    }

    pub fn leap_day(&self) -> LeapDayPolicy {
        self.leap_day
    }

    /// Records whose birthday falls on `reference`, in input order.
    pub fn todays_birthdays<'a>(
        &self,
        records: &'a [BirthdayRecord],
        reference: NaiveDate,
    ) -> Vec<&'a BirthdayRecord> {
        records
            .iter()
            .filter(|r| self.is_birthday(r.birth_date, reference))
            .collect()
    }

    /// Whether a person born on `birth_date` celebrates on `reference`.
    pub fn is_birthday(&self, birth_date: NaiveDate, reference: NaiveDate) -> bool {
        match self.leap_day {
            LeapDayPolicy::Strict => {
                birth_date.month() == reference.month() && birth_date.day() == reference.day()
            }
            LeapDayPolicy::February28 | LeapDayPolicy::March1 => {
                self.occurrence_in(birth_date, reference.year()) == Some(reference)
            }
        }
    }

    /// First occurrence of the birthday on or after `reference`.
    ///
    /// Always within 366 days of `reference`. Saturates at the end of the
    /// representable calendar.
    pub fn next_occurrence(&self, birth_date: NaiveDate, reference: NaiveDate) -> NaiveDate {
        let this_year = self
            .occurrence_in(birth_date, reference.year())
            .unwrap_or(reference);
        if this_year >= reference {
            return this_year;
        }

        self.occurrence_in(birth_date, reference.year() + 1)
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn days_until(&self, birth_date: NaiveDate, reference: NaiveDate) -> i64 {
        (self.next_occurrence(birth_date, reference) - reference).num_days()
    }

    /// The `limit` soonest birthdays, ascending by days until.
    ///
    /// Ties keep their input order.
    pub fn upcoming_birthdays<'a>(
        &self,
        records: &'a [BirthdayRecord],
        reference: NaiveDate,
        limit: NonZeroUsize,
    ) -> Vec<UpcomingEntry<'a>> {
        let mut entries = self.all_upcoming(records, reference);
        entries.truncate(limit.get());
        entries
    }

    /// Every record ranked by next occurrence, without truncation.
    pub fn all_upcoming<'a>(
        &self,
        records: &'a [BirthdayRecord],
        reference: NaiveDate,
    ) -> Vec<UpcomingEntry<'a>> {
        let mut entries: Vec<UpcomingEntry<'a>> = records
            .iter()
            .map(|record| {
                let next_occurrence = self.next_occurrence(record.birth_date, reference);
                UpcomingEntry {
                    record,
                    next_occurrence,
                    days_until: (next_occurrence - reference).num_days(),
                }
            })
            .collect();

        // sort_by_key is stable
        entries.sort_by_key(|e| e.days_until);
        entries
    }

    /// Whole years lived as of `reference`. Birth dates in the future yield 0.
    pub fn age(&self, birth_date: NaiveDate, reference: NaiveDate) -> u32 {
        let mut years = reference.year() - birth_date.year();

        let not_yet = match self.leap_day {
            LeapDayPolicy::Strict => {
                (reference.month(), reference.day()) < (birth_date.month(), birth_date.day())
            }
            LeapDayPolicy::February28 | LeapDayPolicy::March1 => self
                .occurrence_in(birth_date, reference.year())
                .is_some_and(|observed| reference < observed),
        };
        if not_yet {
            years -= 1;
        }

        u32::try_from(years).unwrap_or(0)
    }

    /// Greeting text for `record` on `reference`.
    pub fn compose_greeting(&self, record: &BirthdayRecord, reference: NaiveDate) -> String {
        let age = self.age(record.birth_date, reference);
        let template = self.greeting.as_deref().unwrap_or(DEFAULT_GREETING);

        // Name goes in last so braces in it are left alone
        template
            .replace("{age_ordinal}", &ordinal(age))
            .replace("{age}", &age.to_string())
            .replace("{name}", &record.name)
    }

    /// The date a birthday is observed on in `year`.
    fn occurrence_in(&self, birth_date: NaiveDate, year: i32) -> Option<NaiveDate> {
        if let Some(date) = NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day()) {
            return Some(date);
        }

        // Only Feb 29 in a common year gets here
        match self.leap_day {
            LeapDayPolicy::February28 => NaiveDate::from_ymd_opt(year, 2, 28),
            LeapDayPolicy::Strict | LeapDayPolicy::March1 => NaiveDate::from_ymd_opt(year, 3, 1),
        }
    }
}

/// English ordinal for a number, e.g. "1st", "12th", "23rd".
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
