//! CLI frontend for the Arena hero-vs-mercenary battle game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use arena_core::Role;

#[derive(Parser)]
#[command(
    name = "arena",
    about = "Arena: pit heroes against mercenaries in turn-based battles",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data file (default: platform data dir, or ARENA_DATA)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Config file (default: arena.toml next to the data file)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Login token from `arena login`
    #[arg(long, global = true, env = "ARENA_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data file with the default rosters and a config template
    Init,

    /// List the heroes
    Heroes,

    /// List the mercenaries
    Mercenaries,

    /// Create an account
    Register {
        /// Login name (at least 3 characters)
        username: String,

        /// Email address
        email: String,

        /// Password, at least 6 characters (read from stdin if omitted)
        #[arg(short, long, env = "ARENA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log in and print a token
    Login {
        /// Login name
        username: String,

        /// Password (read from stdin if omitted)
        #[arg(short, long, env = "ARENA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Revoke the current token
    Logout,

    /// Fight a battle between a hero and a mercenary
    Battle {
        /// Hero id (see `arena heroes`)
        #[arg(long)]
        hero: u32,

        /// Mercenary id (see `arena mercenaries`)
        #[arg(long)]
        mercenary: u32,

        /// RNG seed for a reproducible battle (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Shorthand for --format json
        #[arg(long)]
        json: bool,
    },

    /// Show your past battles, newest first
    History {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// How a battle is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Markdown,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let ctx = commands::Context::new(cli.data, cli.config, cli.token);
    let result = match cli.command {
        Commands::Init => commands::init::run(&ctx),
        Commands::Heroes => commands::roster::run(&ctx, Role::Hero),
        Commands::Mercenaries => commands::roster::run(&ctx, Role::Mercenary),
        Commands::Register {
            username,
            email,
            password,
        } => commands::account::register(&ctx, &username, &email, password),
        Commands::Login { username, password } => {
            commands::account::login(&ctx, &username, password)
        }
        Commands::Logout => commands::account::logout(&ctx),
        Commands::Battle {
            hero,
            mercenary,
            seed,
            format,
            json,
        } => {
            let format = if json { Format::Json } else { format };
            commands::battle::run(&ctx, hero, mercenary, seed, format)
        }
        Commands::History { json } => commands::history::run(&ctx, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `ARENA_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("ARENA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
