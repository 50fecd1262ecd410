//! Config command handler

use crate::args::ConfigSubcommand;
use kintrace::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => show_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => {
            apply_change(config, |c| c.set(&key, &value));
            println!("✓ {key} set to {value}");
        }
        Some(ConfigSubcommand::Unset { key }) => {
            apply_change(config, |c| c.unset(&key, defaults));
            println!("✓ {key} restored to default");
        }
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Print every configuration value
fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    print!("{config}");
}

/// Print a single configuration value by key
fn show_key(config: &Config, key: &str) {
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => eprintln!("Unknown config key: '{key}'"),
    }
}

/// Apply a mutation to the config and persist it, exiting on failure
fn apply_change<F>(config: &mut Config, change: F)
where
    F: FnOnce(&mut Config) -> Result<(), String>,
{
    if let Err(e) = change(config) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
}

/// Handle the config reset subcommand (with confirmation prompt)
fn handle_config_reset() {
    print!("Reset all configuration to defaults? [y/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        eprintln!("Failed to read confirmation");
        std::process::exit(1);
    }

    if !matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        println!("Aborted.");
        return;
    }

    if let Err(e) = Config::reset() {
        eprintln!("Failed to reset config: {e}");
        std::process::exit(1);
    }

    println!("✓ Configuration reset to defaults");
}
