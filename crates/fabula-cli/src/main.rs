//! CLI frontend for the Fabula story interpreter.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fabula",
    about = "Fabula — an interpreter for .story text adventures",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a story file and report diagnostics
    Check {
        /// Path to the .story file
        file: PathBuf,
    },

    /// Run a story in plain line mode on the current terminal
    Run {
        /// Path to the .story file
        file: PathBuf,
    },

    /// Play a story in the full-screen terminal player
    Play {
        /// Path to the .story file
        file: PathBuf,

        /// Characters revealed per tick
        #[arg(long, default_value = "2")]
        speed: usize,

        /// Milliseconds per tick
        #[arg(long, default_value = "25")]
        tick_ms: u64,
    },

    /// Export the parsed instruction list to a different format
    Export {
        /// Path to the .story file
        file: PathBuf,

        /// Output format: json, text
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { file } => commands::check::run(&file),
        Commands::Run { file } => commands::run::run(&file),
        Commands::Play {
            file,
            speed,
            tick_ms,
        } => {
            let config = tui::PlayerConfig::default()
                .with_speed(speed)
                .with_tick_ms(tick_ms);
            commands::load_story(&file).and_then(|story| tui::run(&story, config))
        }
        Commands::Export {
            file,
            format,
            output,
        } => commands::export::run(&file, &format, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
