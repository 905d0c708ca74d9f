use anyhow::{Context, Result};
use birthdays_core::BirthdayDraft;
use owo_colors::OwoColorize;

use super::RecordArgs;
use crate::app::App;

pub fn run(app: &App, query: &str, args: RecordArgs) -> Result<()> {
    let existing = app.find(query)?;

    let mut draft = BirthdayDraft::from(&existing);
    args.apply_to(&mut draft)?;

    let updated = app
        .store
        .update(&existing.id, draft)
        .context("Failed to save birthday")?;

    println!("{}", format!("  Birthday updated successfully! ({})", updated.name).green());
    println!("{}", format!("  {} birthdays saved", app.records()?.len()).dimmed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{app, date};

    #[test]
    fn edit_changes_given_fields_and_clears_empty_ones() {
        let (_dir, app) = app();
        let mut draft = BirthdayDraft::new("Sam", date(1990, 6, 15));
        draft.phone = Some("555-0100".into());
        draft.notes = Some("old note".into());
        let created = app.store.create(draft).unwrap();

        run(
            &app,
            "sam",
            RecordArgs {
                relationship: Some("Brother".into()),
                notes: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();

        let updated = app.store.get(&created.id).unwrap();
        assert_eq!(updated.relationship.as_deref(), Some("Brother"));
        assert_eq!(updated.phone.as_deref(), Some("555-0100"));
        assert_eq!(updated.notes, None);
    }

    #[test]
    fn edit_unknown_record_fails() {
        let (_dir, app) = app();
        assert!(run(&app, "nobody", RecordArgs::default()).is_err());
    }
}
