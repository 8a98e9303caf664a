//! CLI entry point for the `transit` command-line tool.

use std::io::{self, Write};
use std::process;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use transit_graph::cli::{commands, CliError, OutputFormat};
use transit_graph::{downtown_network, GraphError};

#[derive(Parser)]
#[command(
    name = "transit",
    about = "Transit network planner — traversals, shortest paths and spanning trees over the sample bus network"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every stop and its direct routes
    Topology,
    /// Depth-first inspection route
    Dfs {
        /// Starting stop index
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        start: i64,
    },
    /// Breadth-first service-area analysis
    Bfs {
        /// Starting stop index
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        start: i64,
    },
    /// Shortest travel time to every stop
    ShortestPath {
        /// Starting stop index
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        start: i64,
    },
    /// Minimum spanning tree of the start stop's component
    Mst {
        /// Stop to grow the tree from
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        start: i64,
    },
    /// Run every query (the default)
    All {
        /// Starting stop index
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        start: i64,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let result = downtown_network().map_err(CliError::from).and_then(|graph| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let format = cli.format;
        let result = match cli.command.unwrap_or(Commands::All { start: 0 }) {
            Commands::Topology => commands::cmd_topology(&graph, &mut out, format),
            Commands::Dfs { start } => commands::cmd_dfs(&graph, start, &mut out, format),
            Commands::Bfs { start } => commands::cmd_bfs(&graph, start, &mut out, format),
            Commands::ShortestPath { start } => {
                commands::cmd_shortest_path(&graph, start, &mut out, format)
            }
            Commands::Mst { start } => commands::cmd_mst(&graph, start, &mut out, format),
            Commands::All { start } => commands::cmd_all(&graph, start, &mut out, format),
        };
        result.and_then(|()| out.flush().map_err(CliError::from))
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            CliError::Io(_) => 1,
            CliError::Graph(GraphError::InvalidVertex { .. })
            | CliError::Graph(GraphError::InvalidEdge { .. })
            | CliError::Graph(GraphError::LabelCountMismatch { .. }) => 4,
            CliError::Json(_) => 5,
        };
        process::exit(code);
    }
}
