//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use lbtas::config::Config;
use lbtas::output::OutputMode;

/// lbtas - Leveson-Based Trade Assessment Scale
#[derive(Parser, Debug)]
#[command(
    name = "lbtas",
    version,
    about = "Rate commerce exchanges on the Leveson-Based Trade Assessment Scale",
    long_about = "Record ratings for exchanges on a six-point scale (-1 to 4).\n\n\
                  Each exchange is rated per category; lbtas keeps every rating,\n\
                  summarizes averages and ranks exchanges in a system report."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Ratings file (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Rating categories, comma separated (overrides config)
    #[arg(long, global = true, value_delimiter = ',', value_name = "LIST")]
    pub categories: Option<Vec<String>>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default .lbtas.toml in the current directory
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Register a new exchange
    Create {
        /// Exchange name
        exchange: String,
    },

    /// Rate an exchange interactively, one prompt per category
    Rate {
        /// Exchange name (created if missing)
        exchange: String,
    },

    /// Record a single rating
    #[command(alias = "record")]
    Add {
        /// Exchange name (created if missing)
        exchange: String,

        /// Category to rate
        criterion: String,

        /// Rating from -1 to 4
        #[arg(allow_hyphen_values = true)]
        rating: String,
    },

    /// Show average ratings for an exchange
    View {
        /// Exchange name
        exchange: String,
    },

    /// List registered exchanges
    List,

    /// Show the system report
    Report,

    /// Export all ratings
    Export {
        /// Format: csv or json
        format: String,

        /// Output file
        output: PathBuf,
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

    let Some(command) = cli.command else {
        print_usage();
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let mut config = Config::load(&cwd);
    if let Some(path) = cli.storage {
        config.storage.path = path;
    }
    if let Some(categories) = cli.categories {
        config.ratings.categories = categories;
    }

    let open = || commands::open_store(&config);

    match command {
        Command::Init { force } => commands::init(&cwd, force, output_mode),
        Command::Create { exchange } => commands::create(&mut open()?, &exchange, output_mode),
        Command::Rate { exchange } => commands::rate(&mut open()?, &exchange, output_mode),
        Command::Add {
            exchange,
            criterion,
            rating,
        } => commands::add(&mut open()?, &exchange, &criterion, &rating, output_mode),
        Command::View { exchange } => commands::view(&open()?, &exchange, output_mode),
        Command::List => commands::list(&open()?, output_mode),
        Command::Report => commands::report(&open()?, output_mode),
        Command::Export { format, output } => {
            commands::export(&open()?, &format, &output, output_mode)
        },
        Command::Version => {
            if output_mode == OutputMode::Json {
                println!("{}", serde_json::json!({ "version": lbtas::VERSION }));
            } else {
                println!("lbtas {}", lbtas::VERSION);
            }
            Ok(())
        },
    }
}

fn print_usage() {
    println!("LBTAS - Leveson-Based Trade Assessment Scale");
    println!("\nUsage:");
    println!("  lbtas create <exchange>");
    println!("  lbtas rate <exchange>");
    println!("  lbtas add <exchange> <criterion> <rating>");
    println!("  lbtas view <exchange>");
    println!("  lbtas list");
    println!("  lbtas report");
    println!("  lbtas export <csv|json> <output>");
    println!("\nRun 'lbtas --help' for all options.");
}
