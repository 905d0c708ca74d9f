use anyhow::{Context, Result};
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::app::App;

pub fn run(app: &App, query: &str, yes: bool) -> Result<()> {
    let record = app.find(query)?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete {}'s birthday?", record.name))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Nothing deleted".dimmed());
            return Ok(());
        }
    }

    app.store
        .delete(&record.id)
        .context("Failed to delete birthday")?;

    println!("{}", format!("  Birthday deleted successfully! ({})", record.name).green());
    println!("{}", format!("  {} birthdays saved", app.records()?.len()).dimmed());

    Ok(())
}
