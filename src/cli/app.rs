//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use propreport::output::OutputMode;

/// propreport - Sorted, fault-tolerant property reports
#[derive(Parser, Debug)]
#[command(
    name = "propreport",
    version,
    about = "Sorted, fault-tolerant property reports",
    long_about = "Dump a snapshot of configuration properties for debugging.\n\n\
                  Properties are read from a TOML file and -P definitions.\n\
                  A value that cannot be rendered is marked in the report instead of failing it."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Display properties
    Properties(PropertiesArgs),

    /// Show version
    Version,
}

/// Arguments of the `properties` command
#[derive(Args, Debug)]
pub struct PropertiesArgs {
    /// A specific property to output
    #[arg(long)]
    pub property: Option<String>,

    /// TOML file to read properties from
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Define a property (NAME=VALUE); overrides the file
    #[arg(short = 'P', value_name = "NAME=VALUE")]
    pub define: Vec<String>,

    /// Header title
    #[arg(long)]
    pub title: Option<String>,

    /// Omit the header block
    #[arg(long)]
    pub no_header: bool,

    /// Never colour output
    #[arg(long)]
    pub no_color: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = OutputMode::from_json_flag(cli.json);

    match cli.command {
        Some(Command::Properties(args)) => commands::properties(&args, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("propreport v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("propreport v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'propreport --help' for usage");
                println!("Run 'propreport properties' to report ./properties.toml");
            }
            Ok(())
        },
    }
}
