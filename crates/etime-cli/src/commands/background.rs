//! Background selection commands.

use std::path::PathBuf;

use clap::Subcommand;
use etime_core::{background, ImageSearch, Shell, PRESET_BACKGROUNDS};

use super::config::describe;

#[derive(Subcommand)]
pub enum BackgroundAction {
    /// List built-in preset backgrounds
    Presets,
    /// Show the active background and its render style
    Show,
    /// Select a preset background by number
    Set {
        /// Preset number (1-based, see `presets`)
        index: usize,
    },
    /// Use a custom image URL
    SetUrl {
        /// Direct link to a jpg/jpeg/png/gif/webp image
        url: String,
    },
    /// Use a local image file, stored inline as a data URI
    Upload {
        /// Path to the image file
        path: PathBuf,
    },
    /// Fetch fresh space imagery candidates
    Search {
        /// Apply the n-th result (1-based) as the background
        #[arg(long)]
        apply: Option<usize>,
    },
}

pub fn run(action: BackgroundAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut shell = Shell::open()?;

    match action {
        BackgroundAction::Presets => {
            for (i, preset) in PRESET_BACKGROUNDS.iter().enumerate() {
                println!("{}. {preset}", i + 1);
            }
        }
        BackgroundAction::Show => {
            let bg = shell.settings().background();
            println!("active: {}", describe(bg));
            println!("style: {}", bg.resolve().css());
        }
        BackgroundAction::Set { index } => {
            shell.select_preset(index)?;
            println!("Background set: {}", describe(shell.settings().background()));
        }
        BackgroundAction::SetUrl { url } => {
            shell.select_custom_url(&url)?;
            println!("Background set: {url}");
        }
        BackgroundAction::Upload { path } => {
            let data_uri = background::data_uri_from_file(&path)?;
            shell.accept_upload(data_uri);
            println!("Background uploaded: {}", describe(shell.settings().background()));
        }
        BackgroundAction::Search { apply } => {
            let runtime = tokio::runtime::Runtime::new()?;
            let candidates = runtime.block_on(ImageSearch::new().fetch());
            if candidates.is_empty() {
                println!("No results. Try again (searches are retried manually).");
                return Ok(());
            }
            for (i, url) in candidates.iter().enumerate() {
                println!("{}. {url}", i + 1);
            }
            if let Some(index) = apply {
                let url = index
                    .checked_sub(1)
                    .and_then(|i| candidates.get(i))
                    .ok_or_else(|| format!("no such result: {index} (1-{})", candidates.len()))?;
                shell.select_background(url);
                println!("Background set: {url}");
            }
        }
    }
    Ok(())
}
