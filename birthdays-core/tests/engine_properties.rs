use std::num::NonZeroUsize;

use birthdays_core::{BirthdayDraft, BirthdayRecord, DateEngine, LeapDayPolicy};
use chrono::{Datelike, Duration, Months, NaiveDate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(id: usize, birth_date: NaiveDate) -> BirthdayRecord {
    BirthdayRecord::from_draft(id.to_string(), BirthdayDraft::new(format!("P{id}"), birth_date))
}

/// Birth dates spread over the calendar, without Feb 29.
fn birth_dates() -> Vec<NaiveDate> {
    vec![
        date(1990, 1, 1),
        date(1985, 2, 28),
        date(2001, 3, 1),
        date(1990, 6, 15),
        date(1977, 7, 31),
        date(1964, 10, 3),
        date(2010, 12, 30),
        date(1999, 12, 31),
    ]
}

/// Every day from 2023-01-01 through 2025-01-01, spanning a leap year.
fn reference_dates() -> impl Iterator<Item = NaiveDate> {
    date(2023, 1, 1)
        .iter_days()
        .take_while(|d| *d <= date(2025, 1, 1))
}

#[test]
fn next_occurrence_is_on_or_after_reference_within_a_year() {
    let engine = DateEngine::default();
    for birth in birth_dates().into_iter().chain([date(2000, 2, 29)]) {
        for reference in reference_dates() {
            let next = engine.next_occurrence(birth, reference);
            assert!(next >= reference, "{birth} vs {reference}");
            assert!((next - reference).num_days() <= 366);
            assert!(next.year() == reference.year() || next.year() == reference.year() + 1);
        }
    }
}

#[test]
fn day_after_occurrence_jumps_a_year() {
    let engine = DateEngine::default();
    for birth in birth_dates() {
        for reference in reference_dates() {
            let next = engine.next_occurrence(birth, reference);
            let after = engine.next_occurrence(birth, next + Duration::days(1));
            assert_eq!(after, next + Months::new(12), "{birth} vs {reference}");
        }
    }
}

#[test]
fn upcoming_length_and_order() {
    let engine = DateEngine::default();
    let records: Vec<_> = birth_dates()
        .into_iter()
        .enumerate()
        .map(|(i, b)| record(i, b))
        .collect();

    for reference in reference_dates().step_by(7) {
        for limit in [1, 3, 8, 20] {
            let upcoming = engine.upcoming_birthdays(
                &records,
                reference,
                NonZeroUsize::new(limit).unwrap(),
            );
            assert_eq!(upcoming.len(), limit.min(records.len()));
            assert!(upcoming.windows(2).all(|w| w[0].days_until <= w[1].days_until));
            assert!(upcoming.iter().all(|e| e.days_until >= 0));
        }
    }
}

#[test]
fn upcoming_of_empty_collection_is_empty() {
    let engine = DateEngine::default();
    let upcoming = engine.upcoming_birthdays(&[], date(2024, 6, 15), NonZeroUsize::MIN);
    assert!(upcoming.is_empty());
}

#[test]
fn today_matches_zero_days_until() {
    for policy in [LeapDayPolicy::Strict, LeapDayPolicy::February28, LeapDayPolicy::March1] {
        let engine = DateEngine::new(policy);
        let records: Vec<_> = birth_dates()
            .into_iter()
            .enumerate()
            .map(|(i, b)| record(i, b))
            .collect();

        for reference in reference_dates() {
            let today: Vec<_> = engine
                .todays_birthdays(&records, reference)
                .into_iter()
                .map(|r| r.id.clone())
                .collect();
            let zero: Vec<_> = engine
                .all_upcoming(&records, reference)
                .into_iter()
                .filter(|e| e.days_until == 0)
                .map(|e| e.record.id.clone())
                .collect();
            assert_eq!(today, zero, "{reference}");
        }
    }
}

#[test]
fn leap_day_policies_agree_with_days_until() {
    // Strict is left out: it never matches on a common year's Mar 1 even
    // though occurrence arithmetic lands there.
    for policy in [LeapDayPolicy::February28, LeapDayPolicy::March1] {
        let engine = DateEngine::new(policy);
        let records = vec![record(0, date(2000, 2, 29))];
        for reference in reference_dates() {
            let matched = !engine.todays_birthdays(&records, reference).is_empty();
            assert_eq!(matched, engine.days_until(date(2000, 2, 29), reference) == 0);
        }
    }
}

#[test]
fn age_is_constant_within_a_birthday_year() {
    let engine = DateEngine::default();
    for birth in birth_dates() {
        for k in [0u32, 1, 17, 40] {
            let start = birth + Months::new(12 * k);
            let end = birth + Months::new(12 * (k + 1));
            for reference in start.iter_days().take_while(|d| *d < end) {
                assert_eq!(engine.age(birth, reference), k, "{birth} at {reference}");
            }
        }
    }
}

#[test]
fn scenario_birthday_today() {
    let engine = DateEngine::default();
    let records = vec![record(1, date(1990, 6, 15))];
    let reference = date(2024, 6, 15);

    assert_eq!(engine.age(date(1990, 6, 15), reference), 34);
    assert_eq!(engine.todays_birthdays(&records, reference).len(), 1);
    let upcoming = engine.upcoming_birthdays(&records, reference, NonZeroUsize::MIN);
    assert_eq!(upcoming[0].days_until, 0);
}

#[test]
fn scenario_day_after_birthday() {
    let engine = DateEngine::default();
    let birth = date(1990, 6, 15);
    let reference = date(2024, 6, 16);

    assert_eq!(engine.next_occurrence(birth, reference), date(2025, 6, 15));
    assert_eq!(engine.days_until(birth, reference), 364);
    assert_eq!(engine.age(birth, reference), 34);

    // Spanning Feb 29, 2024
    assert_eq!(engine.days_until(birth, date(2023, 6, 16)), 365);
}

#[test]
fn scenario_five_of_ten() {
    let engine = DateEngine::default();
    let records: Vec<_> = (0..10)
        .map(|i| record(i, date(1980 + i as i32, 12 - i as u32, 10)))
        .collect();

    let upcoming =
        engine.upcoming_birthdays(&records, date(2024, 1, 1), NonZeroUsize::new(5).unwrap());

    assert_eq!(upcoming.len(), 5);
    let months: Vec<_> = upcoming.iter().map(|e| e.next_occurrence.month()).collect();
    assert_eq!(months, vec![3, 4, 5, 6, 7]);
}
