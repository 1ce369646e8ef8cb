//! spritekv - sprite asset store tool
//!
//! Builds a key-value store of encoded spritesheet pictures, animations and
//! tag lists from YAML metadata, and inspects encoded payloads.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use spritekv_common::{animation_key, tag_key};
use std::path::PathBuf;

mod inspect;
mod manifest;
mod pack;

use inspect::PayloadKind;

#[derive(Parser)]
#[command(name = "spritekv")]
#[command(about = "Sprite animation asset store tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a store from a manifest file
    Build {
        /// Path to spritekv.toml manifest
        #[arg(default_value = "spritekv.toml")]
        manifest: PathBuf,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate manifest and metadata without building
    Check {
        /// Path to spritekv.toml manifest
        #[arg(default_value = "spritekv.toml")]
        manifest: PathBuf,
    },

    /// Decode an encoded payload file and print a summary
    Inspect {
        /// Encoded payload file
        input: PathBuf,

        /// Payload kind
        #[arg(short, long, value_enum)]
        kind: PayloadKind,
    },

    /// Print the namespaced store key for a logical key
    Key {
        /// Namespace
        #[arg(value_enum)]
        namespace: Namespace,

        /// Logical key
        key: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Namespace {
    Anim,
    Tag,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Build { manifest, output } => {
            tracing::debug!("Building store from {:?}", manifest);
            let report = pack::build(&manifest, output)?;
            println!(
                "Stored {} pictures, {} animations, {} tag entries",
                report.pictures, report.animations, report.tags
            );
        }
        Commands::Check { manifest } => {
            let (sheets, animations) = pack::check(&manifest)?;
            println!("OK: {sheets} spritesheets, {animations} animations");
        }
        Commands::Inspect { input, kind } => {
            print!("{}", inspect::inspect_file(&input, kind)?);
        }
        Commands::Key { namespace, key } => {
            let key = match namespace {
                Namespace::Anim => animation_key(&key),
                Namespace::Tag => tag_key(&key),
            };
            println!("{key}");
        }
    }

    Ok(())
}
