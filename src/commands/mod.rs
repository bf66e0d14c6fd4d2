//! Command implementations, one module per subcommand.

mod acyclic;
mod bench;
mod components;
mod cycles;
mod dijkstra;
mod filter;
mod floyd_warshall;
mod helpers;
mod info;
mod prim;
mod tarjan;
mod topsort;
mod traverse;

use trellis_core::error::Result;

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Info { graph } => info::run(graph, cli.format),
        Commands::Components { graph } => components::run(graph, cli.format),
        Commands::Topsort { graph } => topsort::run(graph, cli.format),
        Commands::Acyclic { graph } => acyclic::run(graph, cli.format),
        Commands::Tarjan { graph } => tarjan::run(graph, cli.format),
        Commands::Cycles { graph } => cycles::run(graph, cli.format),
        Commands::Preorder { graph, root } => {
            traverse::run(graph, root, trellis_core::alg::Order::Pre, cli.format)
        }
        Commands::Postorder { graph, root } => {
            traverse::run(graph, root, trellis_core::alg::Order::Post, cli.format)
        }
        Commands::Dijkstra { graph, source, all } => {
            dijkstra::run(graph, source.as_deref(), *all, cli.format)
        }
        Commands::FloydWarshall { graph } => floyd_warshall::run(graph, cli.format),
        Commands::Prim { graph } => prim::run(graph, cli.format),
        Commands::Filter { graph, keep } => filter::run(graph, keep, cli.format),
        Commands::Bench {
            nodes,
            density,
            seed,
        } => bench::run(*nodes, *density, *seed, cli.format),
    }
}
