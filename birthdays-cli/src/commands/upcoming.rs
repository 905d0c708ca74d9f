use std::num::NonZeroUsize;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render;

pub fn run(app: &App, limit: Option<NonZeroUsize>, json: bool) -> Result<()> {
    let records = app.records()?;
    let limit = limit.unwrap_or(app.upcoming_limit);
    let upcoming = app.engine.upcoming_birthdays(&records, app.today, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&upcoming)?);
        return Ok(());
    }

    if upcoming.is_empty() {
        println!("{}", "No upcoming birthdays".dimmed());
        return Ok(());
    }

    println!("{}", "Upcoming birthdays".bold());
    for entry in &upcoming {
        println!("{}", render::render_upcoming(entry, &app.engine));
    }

    Ok(())
}
