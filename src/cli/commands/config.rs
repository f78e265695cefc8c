//! Config command handler

use crate::args::ConfigSubcommand;
use dept_advisor::core::config::Config;
use std::io::{self, Write};

/// Dispatch config subcommands; no subcommand prints everything
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> bool {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            let edit = config.set(&key, &value);
            let ok = persist(config, edit);
            if ok {
                println!("✓ Set {key} = {value}");
            }
            ok
        }
        Some(ConfigSubcommand::Unset { key }) => {
            let edit = config.unset(&key, defaults);
            let ok = persist(config, edit);
            if ok {
                println!("✓ Reset {key} to default");
            }
            ok
        }
        Some(ConfigSubcommand::Reset) => reset_with_confirmation(),
    }
}

fn show(config: &Config, key: Option<&str>) -> bool {
    let Some(key) = key else {
        println!("\n=== Department Advisor Configuration ===");
        println!("({})\n", Config::get_config_file_path().display());
        print!("{config}");
        return true;
    };

    if let Some(value) = config.get(key) {
        println!("{value}");
        true
    } else {
        eprintln!("✗ Unknown config key: '{key}'");
        false
    }
}

/// Save after a successful in-memory edit
fn persist(config: &Config, edit: Result<(), String>) -> bool {
    if let Err(e) = edit {
        eprintln!("✗ {e}");
        return false;
    }
    if let Err(e) = config.save() {
        eprintln!("✗ Failed to save config: {e}");
        return false;
    }
    true
}

fn reset_with_confirmation() -> bool {
    let path = Config::get_config_file_path();
    if !path.exists() {
        println!("✓ Config is already at defaults");
        return true;
    }

    print!("Reset {} to defaults? (y/n): ", path.display());
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let answer = response.trim();
    if !(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")) {
        println!("✗ Reset cancelled");
        return true;
    }

    match Config::reset() {
        Ok(()) => {
            println!("✓ Config reset to defaults");
            true
        }
        Err(e) => {
            eprintln!("✗ Failed to remove config file: {e}");
            false
        }
    }
}
