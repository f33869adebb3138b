//! share-menu: share menus for a social feed, in the terminal.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use share_menu::{
    cli::{self, ConfigOutput, DemoOverrides},
    config::load_config,
    ShareAction,
};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "share-menu")]
#[command(version)]
#[command(about = "Per-post share menus for a social feed", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Error occurred

EXAMPLES:
    # Browse a feed and share posts
    share-menu demo --items 30

    # Build a WhatsApp link for a post
    share-menu share-url whatsapp http://localhost:8000/meep/42/

    # Copy a post link to the clipboard
    share-menu share-url copy http://localhost:8000/meep/42/ --open")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (the demo discards them otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a feed of posts with share menus
    Demo {
        /// Number of posts in the feed
        #[arg(long)]
        items: Option<usize>,

        /// Site root used to build post links
        #[arg(long, env = "SHARE_MENU_BASE_URL")]
        base_url: Option<String>,
    },

    /// List the available share actions
    Actions,

    /// Print the link an action hands off for a URL
    ShareUrl {
        /// Share action
        #[arg(value_enum)]
        action: ShareAction,

        /// Item URL
        url: String,

        /// Also perform the action (copy to clipboard, open the browser)
        #[arg(long)]
        open: bool,
    },

    /// Show the effective configuration, its schema, or an example file
    Config {
        /// Print the JSON Schema for the config file format
        #[arg(long, conflicts_with = "example")]
        schema: bool,

        /// Print a commented example config file
        #[arg(long)]
        example: bool,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(cli: &Cli) -> Result<()> {
    let log_level = if cli.verbose { "debug" } else { "info" };

    // The demo owns the terminal, so its logs go to a file or nowhere.
    let writer = match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None if matches!(cli.command, Commands::Demo { .. }) => BoxMakeWriter::new(io::sink),
        None => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(cli.log_file.is_none())
                .with_writer(writer),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let mut stdout = io::stdout();
    let exit_code = match cli.command {
        Commands::Demo { items, base_url } => {
            let overrides = DemoOverrides { items, base_url };
            cli::run_demo(cli.config.as_deref(), &overrides)?
        }
        Commands::Actions => cli::run_actions(&mut stdout)?,
        Commands::ShareUrl { action, url, open } => {
            let (config, _) = load_config(cli.config.as_deref())?;
            cli::run_share_url(action, &url, &config, open, &mut stdout)?
        }
        Commands::Config {
            schema,
            example,
            output,
        } => {
            let format = if schema {
                ConfigOutput::Schema
            } else if example {
                ConfigOutput::Example
            } else {
                ConfigOutput::Effective
            };
            cli::run_config(
                cli.config.as_deref(),
                format,
                output.as_deref(),
                &mut stdout,
            )?
        }
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "share-menu", &mut stdout);
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
