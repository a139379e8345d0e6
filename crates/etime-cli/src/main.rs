use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "etime-cli", version, about = "E-Time -- developer's clock CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clock display
    Clock {
        #[command(subcommand)]
        action: commands::clock::ClockAction,
    },
    /// Preference management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Task tracker
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Background selection
    Background {
        #[command(subcommand)]
        action: commands::background::BackgroundAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Clock { action } => commands::clock::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Background { action } => commands::background::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
