use anyhow::{Context, Result};
use birthdays_core::{BirthdayDraft, BirthdayRecord, parse_date};
use chrono::NaiveDate;
use dialoguer::Input;
use owo_colors::OwoColorize;

use super::RecordArgs;
use crate::app::App;

pub fn run(app: &App, args: RecordArgs) -> Result<()> {
    let interactive = args.name.is_none() || args.birth_date.is_none();

    let draft = if interactive {
        prompt_draft(args)?
    } else {
        draft_from_args(args)?
    };

    let record = create(app, draft)?;

    if interactive {
        println!();
    }
    println!("{}", format!("  Birthday added successfully! ({})", record.name).green());
    println!("{}", format!("  {} birthdays saved", app.records()?.len()).dimmed());

    Ok(())
}

/// Save a new record.
pub fn create(app: &App, draft: BirthdayDraft) -> Result<BirthdayRecord> {
    app.store.create(draft).context("Failed to save birthday")
}

/// Build a draft when both required fields came from the command line.
pub fn draft_from_args(args: RecordArgs) -> Result<BirthdayDraft> {
    let name = args.name.clone().context("Name is required")?;
    let birth_date = parse_date(args.birth_date.as_deref().context("Birth date is required")?)?;

    let mut draft = BirthdayDraft::new(name, birth_date);
    args.apply_to(&mut draft)?;
    Ok(draft)
}

fn prompt_draft(args: RecordArgs) -> Result<BirthdayDraft> {
    // --- Name ---
    let name = match &args.name {
        Some(n) => n.clone(),
        None => Input::<String>::new()
            .with_prompt("  Name")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("Please enter a name")
                } else {
                    Ok(())
                }
            })
            .interact_text()?,
    };

    // --- Birth date ---
    let birth_date = match &args.birth_date {
        Some(s) => parse_date(s)?,
        None => prompt_birth_date()?,
    };

    let mut draft = BirthdayDraft::new(name, birth_date);

    // --- Optional fields ---
    draft.relationship = prompt_optional("  Relationship (Friend)", &args.relationship)?;
    draft.phone = prompt_optional("  Phone (skip)", &args.phone)?;
    draft.email = prompt_optional("  Email (skip)", &args.email)?;
    draft.notes = prompt_optional("  Notes (skip)", &args.notes)?;

    Ok(draft)
}

/// Prompt for a birth date with retry on parse errors.
fn prompt_birth_date() -> Result<NaiveDate> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Birth date (YYYY-MM-DD)")
            .interact_text()?;
        match parse_date(&input) {
            Ok(date) => return Ok(date),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn prompt_optional(prompt: &str, given: &Option<String>) -> Result<Option<String>> {
    if given.is_some() {
        return Ok(given.clone());
    }

    let value: String = Input::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?;

    Ok(if value.is_empty() { None } else { Some(value) })
}
