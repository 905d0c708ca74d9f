use std::path::Path;

use anyhow::Result;
use birthdays_core::config::BirthdaysConfig;
use owo_colors::OwoColorize;

pub fn run(config_path: &Path, config: &BirthdaysConfig) -> Result<()> {
    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Birthdays:  {}", config.data_path().display());

    println!();
    println!("{}", "Settings".bold());
    println!("  Upcoming limit:  {}", config.upcoming_limit);
    println!("  Leap day:        {:?}", config.leap_day);
    if let Some(greeting) = &config.greeting {
        println!("  Greeting:        {greeting}");
    }

    Ok(())
}
