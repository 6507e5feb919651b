use anyhow::Result;
use owo_colors::OwoColorize;
use tickler_core::extract::extract;

use crate::cli::ParseCommand;
use crate::util::{local_now, parse_reference_time};

pub fn parse_text(command: ParseCommand) -> Result<()> {
    let now = match command.now.as_deref() {
        Some(reference) => parse_reference_time(reference)?,
        None => local_now(),
    };
    let result = extract(&command.text.join(" "), now);

    if command.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let none = || "none".bright_black().to_string();
    println!(
        "Date: {}",
        result.date.map(|_| result.date_string().cyan().to_string()).unwrap_or_else(none)
    );
    println!(
        "Time: {}",
        result.time.map(|_| result.time_string().cyan().to_string()).unwrap_or_else(none)
    );
    println!("Text: {}", result.clean_text);
    Ok(())
}
