//! Interactive input collection: city name and unit preference.

use anyhow::{Context, Result};
use forecast_core::Units;
use inquire::Text;

/// Capitalize the first letter of each whitespace-separated token,
/// lowercasing the rest. The geocoding endpoint is lenient about case but
/// works best with capitalized input. Content is not validated; the
/// resolver is the sole arbiter of what names exist.
pub fn normalize_city(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Exactly "1" selects metric and "2" imperial; anything else re-prompts.
pub fn parse_units_choice(line: &str) -> Option<Units> {
    match line.trim() {
        "1" => Some(Units::Metric),
        "2" => Some(Units::Imperial),
        _ => None,
    }
}

/// Loop over an input source until it yields a valid units choice.
///
/// The loop is unbounded: persistent bad input keeps re-prompting. It only
/// returns early if the input source itself fails (closed stdin, Ctrl-C).
pub fn collect_units(mut read_line: impl FnMut() -> Result<String>) -> Result<Units> {
    loop {
        let line = read_line()?;
        match parse_units_choice(&line) {
            Some(units) => return Ok(units),
            None => println!("\tPlease try again."),
        }
    }
}

pub fn prompt_city() -> Result<String> {
    let raw = Text::new("Please enter the city you want to get weather for:")
        .prompt()
        .context("Failed to read city from input")?;

    Ok(normalize_city(&raw))
}

pub fn prompt_units_line() -> Result<String> {
    Text::new("Units preference? -- Input (1) for Metric, or (2) for Imperial:")
        .prompt()
        .context("Failed to read units preference from input")
}
