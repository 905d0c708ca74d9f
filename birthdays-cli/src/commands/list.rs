use anyhow::Result;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render;

pub fn run(app: &App, json: bool) -> Result<()> {
    let records = app.records()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", "No birthdays yet. Add one with `birthdays add`".dimmed());
        return Ok(());
    }

    for record in &records {
        println!("{}", render::render_record(record, &app.engine, app.today));
        for line in render::contact_lines(record) {
            println!("  {line}");
        }
        if let Some(notes) = &record.notes {
            println!("    {}", notes.dimmed());
        }
    }

    Ok(())
}
