//! Preference commands.

use clap::Subcommand;
use etime_core::{Background, Shell};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current preferences
    Show,
    /// Set the time display format
    SetFormat {
        /// "24" or "12"
        format: String,
    },
    /// Toggle between 24-hour and 12-hour display
    ToggleFormat,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut shell = Shell::open()?;

    match action {
        ConfigAction::Show => {
            let settings = shell.settings().settings();
            println!(
                "format: {}",
                if settings.use_24_hour { "24-hour" } else { "12-hour" }
            );
            println!("background: {}", describe(&settings.background));
        }
        ConfigAction::SetFormat { format } => {
            let use_24_hour = match format.as_str() {
                "24" => true,
                "12" => false,
                other => return Err(format!("unknown format '{other}' (use 24 or 12)").into()),
            };
            shell.settings_mut().set_use_24_hour(use_24_hour);
            println!("format: {}", if use_24_hour { "24-hour" } else { "12-hour" });
        }
        ConfigAction::ToggleFormat => {
            shell.toggle_format();
            println!(
                "format: {}",
                if shell.settings().use_24_hour() { "24-hour" } else { "12-hour" }
            );
        }
    }
    Ok(())
}

/// Uploaded data URIs are megabytes of base64; keep listings readable.
pub fn describe(background: &Background) -> String {
    match background {
        Background::Uploaded(data_uri) => {
            format!("uploaded image ({} bytes inline)", data_uri.len())
        }
        other => other.value().to_string(),
    }
}
