//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use fitcheck::config::Config;
use fitcheck::core::models::Rounding;
use fitcheck::output::OutputMode;

/// fitcheck - How much of an outfit can you wear from your own wardrobe?
#[derive(Parser, Debug)]
#[command(
    name = "fitcheck",
    version,
    about = "Score how well a wardrobe can reproduce an outfit",
    long_about = "Score how well a wardrobe can reproduce a curated outfit.\n\n\
                  Each outfit slot earns full credit for an exact match, half credit\n\
                  when only color, subtype and material line up, nothing otherwise."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Rounding for .5 scores: half-away-from-zero or half-even
    #[arg(long, global = true)]
    pub rounding: Option<Rounding>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score one outfit file against one wardrobe file
    Score {
        /// Outfit file (.toml or .json)
        #[arg(short, long)]
        outfit: PathBuf,

        /// Wardrobe file (.toml or .json)
        #[arg(short, long)]
        wardrobe: PathBuf,
    },

    /// Show which wardrobe items cover each outfit slot
    Explain {
        /// Outfit file (.toml or .json)
        #[arg(short, long)]
        outfit: PathBuf,

        /// Wardrobe file (.toml or .json)
        #[arg(short, long)]
        wardrobe: PathBuf,
    },

    /// Score catalog outfits against a user's wardrobe, in the order given
    Catalog {
        /// Catalog root (contains wardrobes/ and outfits/)
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Wardrobe owner
        #[arg(short, long)]
        user: String,

        /// Outfit ids to score
        #[arg(required = true)]
        outfits: Vec<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let options = Config::load().score_options(cli.rounding);
    log::debug!("rounding: {}", options.rounding);

    match cli.command {
        Some(Command::Score { outfit, wardrobe }) => {
            commands::score(&outfit, &wardrobe, options, output_mode)
        },
        Some(Command::Explain { outfit, wardrobe }) => {
            commands::explain(&outfit, &wardrobe, options, output_mode)
        },
        Some(Command::Catalog {
            root,
            user,
            outfits,
        }) => commands::catalog(root, &user, &outfits, options, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": fitcheck::VERSION
                    })
                );
            } else {
                println!("fitcheck v{}", fitcheck::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": fitcheck::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("fitcheck v{}", fitcheck::VERSION);
                println!("\nRun 'fitcheck --help' for usage");
                println!("Run 'fitcheck score --outfit <file> --wardrobe <file>' to get started");
            }
            Ok(())
        },
    }
}
