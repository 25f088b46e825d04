//! `sp0256` command line tool.

#![deny(unsafe_code)]

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cts256::{Allophone, RuleTable, RuleTableConfig, encode};
use sp0256::speaker::{SerialLink, Speaker, SpeakerOptions};
use sp0256::{Settings, load_settings, load_settings_from_path, normalize_lines};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Text to speech for the SP0256-AL2.
#[derive(Parser, Debug)]
#[command(name = "sp0256", version, about = "Text to speech for the SP0256-AL2")]
struct Cli {
    /// Settings file (defaults to `~/.sp0256/settings.json`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON rule table to use instead of the built-in rules.
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// Serial device of the chip.
    #[arg(long, global = true)]
    device: Option<PathBuf>,

    /// Baud rate of the serial device.
    #[arg(long, global = true)]
    baud: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate text from stdin and write allophone codes to stdout.
    Translate {
        /// Print allophone names instead of raw codes.
        #[arg(long)]
        symbols: bool,
    },
    /// Send allophone codes from stdin to the chip.
    Speak,
    /// Translate text from stdin and speak it.
    Say,
    /// Print the built-in rule table as JSON.
    Rules,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_table(settings: &Settings) -> Result<RuleTable> {
    match &settings.rules {
        Some(path) => RuleTable::from_json_path(path)
            .with_context(|| format!("Failed to load rule table: {}", path.display())),
        None => RuleTable::builtin().context("Failed to compile built-in rules"),
    }
}

fn read_text(table: &RuleTable) -> Result<Vec<Allophone>> {
    let text = normalize_lines(io::stdin().lock()).context("Failed to read stdin")?;
    info!(chars = text.len(), "read text");
    table.translate(&text).context("Failed to translate input")
}

fn open_speaker(settings: &Settings) -> Result<Speaker<SerialLink>> {
    let link = SerialLink::open(&settings.device, settings.baud)
        .with_context(|| format!("Failed to open {}", settings.device.display()))?;
    Speaker::connect(link, SpeakerOptions::from(settings)).context("Failed to wake the chip")
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => load_settings_from_path(path),
        None => load_settings(),
    }
    .context("Failed to load settings")?;
    if let Some(rules) = cli.rules {
        settings.rules = Some(rules);
    }
    if let Some(device) = cli.device {
        settings.device = device;
    }
    if let Some(baud) = cli.baud {
        settings.baud = baud;
    }

    match cli.command {
        Command::Translate { symbols } => {
            let allophones = read_text(&load_table(&settings)?)?;
            let mut stdout = io::stdout().lock();
            if symbols {
                let names: Vec<_> = allophones.iter().map(|a| a.name()).collect();
                writeln!(stdout, "{}", names.join(" "))?;
            } else {
                stdout.write_all(&encode(&allophones))?;
            }
            stdout.flush()?;
        }
        Command::Speak => {
            let mut codes = Vec::new();
            let _ = io::stdin().lock().read_to_end(&mut codes)?;
            open_speaker(&settings)?.speak(&codes)?;
        }
        Command::Say => {
            let codes = encode(&read_text(&load_table(&settings)?)?);
            open_speaker(&settings)?.speak(&codes)?;
        }
        Command::Rules => {
            println!("{}", RuleTableConfig::builtin().to_json_pretty()?);
        }
    }
    Ok(())
}
