//! CLI argument parsing for trellis
//!
//! Uses clap for argument parsing. Every data-bearing subcommand takes a
//! graph file in the JSON record format (or `-` for stdin).
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for trellis commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

/// Trellis - graph algorithms CLI for scripts and pipelines
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "TRELLIS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a graph file (mode flags, counts, sources, sinks)
    Info {
        /// Graph file, or - for stdin
        graph: String,
    },

    /// Connected components, ignoring edge direction
    Components {
        /// Graph file, or - for stdin
        graph: String,
    },

    /// Topological order of an acyclic graph
    Topsort {
        /// Graph file, or - for stdin
        graph: String,
    },

    /// Check whether the graph is free of cycles
    Acyclic {
        /// Graph file, or - for stdin
        graph: String,
    },

    /// Strongly connected components (Tarjan)
    Tarjan {
        /// Graph file, or - for stdin
        graph: String,
    },

    /// Cycles: strongly connected components of size > 1, plus self-loops
    Cycles {
        /// Graph file, or - for stdin
        graph: String,
    },

    /// Depth-first preorder from one or more roots
    Preorder {
        /// Graph file, or - for stdin
        graph: String,

        /// Root node (can be specified multiple times)
        #[arg(long, required = true, action = clap::ArgAction::Append)]
        root: Vec<String>,
    },

    /// Depth-first postorder from one or more roots
    Postorder {
        /// Graph file, or - for stdin
        graph: String,

        /// Root node (can be specified multiple times)
        #[arg(long, required = true, action = clap::ArgAction::Append)]
        root: Vec<String>,
    },

    /// Shortest paths by edge weight (numeric edge labels, default 1)
    Dijkstra {
        /// Graph file, or - for stdin
        graph: String,

        /// Source node
        #[arg(long, short)]
        source: Option<String>,

        /// Run from every source
        #[arg(long)]
        all: bool,
    },

    /// All-pairs shortest paths via Floyd-Warshall
    FloydWarshall {
        /// Graph file, or - for stdin
        graph: String,
    },

    /// Minimum spanning tree (Prim)
    Prim {
        /// Graph file, or - for stdin
        graph: String,
    },

    /// Keep only the listed nodes and the edges between them
    Filter {
        /// Graph file, or - for stdin
        graph: String,

        /// Node to keep (can be specified multiple times)
        #[arg(long, required = true, action = clap::ArgAction::Append)]
        keep: Vec<String>,
    },

    /// Micro-benchmark suite over a seeded random graph
    Bench {
        /// Number of nodes in the generated graph
        #[arg(long, default_value_t = 100)]
        nodes: usize,

        /// Edge density relative to a complete graph
        #[arg(long, default_value_t = 0.2)]
        density: f64,

        /// RNG seed for reproducible runs
        #[arg(long, env = "TRELLIS_BENCH_SEED")]
        seed: Option<u64>,
    },
}
