//! Morsewire - text to Morse code converter
//!
//! This is the main entry point for morsewire conversions

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use morsewire_codec::prelude::*;
use morsewire_tools::{clipboard, convert, AppConfig, ColorMode, Direction, Session};

/// Morsewire text to Morse converter
#[derive(Parser)]
#[command(name = "morsewire")]
#[command(about = "Convert between plain text and Morse code")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text to Morse
    Encode(ConvertArgs),
    /// Decode Morse to text
    Decode(ConvertArgs),
    /// Interactive two-way session
    Interactive(InteractiveArgs),
    /// Print the symbol table
    Table(TableArgs),
}

/// One-shot conversion arguments
#[derive(Args, Clone)]
pub struct ConvertArgs {
    /// Input to convert; reads standard input when absent
    pub input: Option<String>,

    /// Read input from a file instead
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Copy the result to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Interactive session arguments
#[derive(Args, Clone)]
pub struct InteractiveArgs {
    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Surface to edit first
    #[arg(short, long, value_enum)]
    pub direction: Option<Direction>,

    /// Prompt color scheme
    #[arg(long, value_enum)]
    pub color_mode: Option<ColorMode>,
}

/// Table listing arguments
#[derive(Args, Clone)]
pub struct TableArgs {
    /// Emit the table as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct TableEntry {
    character: char,
    token: &'static str,
}

fn run_convert(args: &ConvertArgs, direction: Direction) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;
    let input = convert::read_input(args.input.as_deref(), args.file.as_deref())?;
    let output = convert::convert(&input, direction);

    println!("{output}");

    if args.copy || config.copy_on_convert {
        clipboard::copy_and_notify(&output, &mut |ok| {
            if ok {
                eprintln!("copied to clipboard");
            } else {
                eprintln!("clipboard copy failed");
            }
        });
    }

    Ok(())
}

fn run_interactive(args: &InteractiveArgs) -> Result<()> {
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(direction) = args.direction {
        config.start_direction = direction;
    }
    if let Some(color_mode) = args.color_mode {
        config.color_mode = color_mode;
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(&config).run(stdin.lock(), stdout.lock())
}

fn show_table(args: &TableArgs) -> Result<()> {
    let table = MorseTable::shared();

    if args.json {
        let entries: Vec<TableEntry> = table
            .entries()
            .into_iter()
            .map(|(character, token)| TableEntry { character, token })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("=== Morsewire Symbol Table ===");
    println!("{} characters; space encodes as '{}'", table.len(), WORD_SEPARATOR);
    for (character, token) in table.entries() {
        let shown = if character == ' ' { "(space)".to_string() } else { character.to_string() };
        println!("  {shown:>7}  {token}");
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("morsewire starting");

    match &cli.command {
        Commands::Encode(args) => run_convert(args, Direction::Text)?,
        Commands::Decode(args) => run_convert(args, Direction::Morse)?,
        Commands::Interactive(args) => run_interactive(args)?,
        Commands::Table(args) => show_table(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn encode_accepts_positional_input() {
        let cli = Cli::parse_from(["morsewire", "encode", "SOS", "--copy"]);
        match cli.command {
            Commands::Encode(args) => {
                assert_eq!(args.input.as_deref(), Some("SOS"));
                assert!(args.copy);
            }
            _ => panic!("expected encode subcommand"),
        }
    }

    #[test]
    fn interactive_accepts_direction_override() {
        let cli = Cli::parse_from(["morsewire", "interactive", "--direction", "morse"]);
        match cli.command {
            Commands::Interactive(args) => {
                assert_eq!(args.direction, Some(Direction::Morse));
            }
            _ => panic!("expected interactive subcommand"),
        }
    }
}
