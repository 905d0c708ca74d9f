use anyhow::Result;
use birthdays_core::BirthdayRecord;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render;

pub fn run(app: &App, json: bool) -> Result<()> {
    let records = app.records()?;
    let todays = todays(app, &records);

    if json {
        println!("{}", serde_json::to_string_pretty(&todays)?);
        return Ok(());
    }

    if todays.is_empty() {
        println!("{}", "No birthdays today".dimmed());
        return Ok(());
    }

    println!("{}", "Today's birthdays".bold());
    for record in &todays {
        println!("{}", render::render_today(record, &app.engine, app.today));
    }
    println!();
    println!("{}", "  Send a wish with `birthdays wish <name>`".dimmed());

    Ok(())
}

fn todays<'a>(app: &App, records: &'a [BirthdayRecord]) -> Vec<&'a BirthdayRecord> {
    app.engine.todays_birthdays(records, app.today)
}
