//! Text front-end for the Voxtale voice agents.
//!
//! Each REPL stands in for the speech pipeline: a typed line is one spoken
//! turn, and the printed reply is what the agent would say.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vx_adventure::WorldName;

#[derive(Parser)]
#[command(
    name = "vx",
    about = "Voxtale: voice-first shop assistant and storytelling game masters",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a branching adventure with a game master
    Adventure {
        /// Bundled world: aetherwyn or gita
        #[arg(short, long, default_value = "aetherwyn", value_parser = parse_world)]
        world: WorldName,

        /// Load the world from a JSON file instead
        #[arg(long)]
        world_file: Option<PathBuf>,

        /// Name the game master addresses you by
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Talk to Jarvis, the shop assistant
    Shop {
        /// Order file
        #[arg(short, long, env = "VX_ORDERS_FILE", default_value = "orders.json")]
        orders: PathBuf,
    },

    /// List catalog products
    Catalog {
        /// Free-text search over names and descriptions
        #[arg(short, long)]
        query: Option<String>,

        /// Category (phone, tee, mug, ...)
        #[arg(short, long)]
        category: Option<String>,

        /// Lowest price (inclusive)
        #[arg(long)]
        min_price: Option<u64>,

        /// Highest price (inclusive)
        #[arg(long)]
        max_price: Option<u64>,

        /// Color
        #[arg(long)]
        color: Option<String>,

        /// Size
        #[arg(long)]
        size: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the most recent stored order
    LastOrder {
        /// Order file
        #[arg(short, long, env = "VX_ORDERS_FILE", default_value = "orders.json")]
        orders: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print an agent's system prompt (jarvis, aetherwyn, gita)
    Prompt {
        /// Agent name
        agent: String,
    },

    /// Validate a world and list its scenes
    Scenes {
        /// Bundled world: aetherwyn or gita
        #[arg(short, long, default_value = "aetherwyn", value_parser = parse_world)]
        world: WorldName,

        /// Load the world from a JSON file instead
        #[arg(long)]
        world_file: Option<PathBuf>,
    },
}

fn parse_world(s: &str) -> Result<WorldName, String> {
    WorldName::parse(s).ok_or_else(|| format!("unknown world '{s}' (expected aetherwyn or gita)"))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Adventure {
            world,
            world_file,
            name,
        } => commands::adventure::run(world, world_file, name),
        Commands::Shop { orders } => commands::shop::run(orders),
        Commands::Catalog {
            query,
            category,
            min_price,
            max_price,
            color,
            size,
            json,
        } => commands::catalog::run(
            commands::catalog::CatalogArgs {
                query,
                category,
                min_price,
                max_price,
                color,
                size,
            },
            json,
        ),
        Commands::LastOrder { orders, json } => commands::last_order::run(&orders, json),
        Commands::Prompt { agent } => commands::prompt::run(&agent),
        Commands::Scenes { world, world_file } => commands::scenes::run(world, world_file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
