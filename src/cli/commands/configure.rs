//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{Select, Text};

use crate::config::{
    ArtlConfig, ConfigFile, ConfigManager, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR,
};
use crate::translation::{DEFAULT_TARGET_LANG, TARGET_LANGUAGES};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command to edit or display default settings.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        return show_configuration();
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn show_configuration() -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();

    print_current_defaults(&config);
    println!(
        "{}",
        Style::secondary(format!(
            "Config file: {}",
            manager.config_path().display()
        ))
    );
    Ok(())
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    print_current_defaults(&config);

    let input = prompt_directory(
        "Source directory:",
        config.artl.input.as_deref().unwrap_or(DEFAULT_INPUT_DIR),
    )?;
    let output = prompt_directory(
        "Destination directory:",
        config.artl.output.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR),
    )?;
    let to = select_target_language(
        config.artl.to.as_deref().unwrap_or(DEFAULT_TARGET_LANG),
    )?;

    config.artl = ArtlConfig {
        input: Some(input),
        output: Some(output),
        to: Some(to),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}   {}",
        Style::label("input"),
        config
            .artl
            .input
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("output"),
        config
            .artl
            .output
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("to"),
        config
            .artl
            .to
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

fn prompt_directory(label: &str, default: &str) -> Result<String> {
    let value = Text::new(label).with_default(default).prompt()?;

    if value.trim().is_empty() {
        bail!("Directory cannot be empty");
    }

    Ok(value.trim().to_string())
}

fn select_target_language(default: &str) -> Result<String> {
    // Build options with format "code - Name"
    let options: Vec<String> = TARGET_LANGUAGES
        .iter()
        .map(|(code, name)| format!("{code} - {name}"))
        .collect();

    let default_index = TARGET_LANGUAGES
        .iter()
        .position(|(code, _)| *code == default)
        .unwrap_or(0);

    let selection = Select::new("Default target language:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);

    Ok(code.to_string())
}
