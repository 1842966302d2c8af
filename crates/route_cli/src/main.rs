mod config;
mod session;

use std::io;
use std::io::BufRead;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use clap::Parser;
use dense_dijkstra::AdjacencyMatrix;
use dense_dijkstra::demo_graph;
use dense_dijkstra::try_shortest_path;
use flexi_logger::Logger;
use log::info;

use crate::config::GraphConfig;
use crate::session::Session;
use crate::session::write_result;

/// Shortest routes on a small weighted graph.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML graph file; the built-in six-vertex graph is used when omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// 1-based start vertex for a single query (requires --dest)
    #[arg(short, long, requires = "dest")]
    start: Option<usize>,

    /// 1-based destination vertex for a single query (requires --start)
    #[arg(short, long, requires = "start")]
    dest: Option<usize>,

    /// Do not print the adjacency table
    #[arg(long)]
    quiet_matrix: bool,

    /// Log specification, e.g. `info` or `dense_dijkstra=trace`; RUST_LOG wins
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str(&cli.log_level)?
        .log_to_stderr()
        .start()?;

    let graph = load_graph(&cli)?;
    let stdin = io::stdin();
    run(&cli, &graph, stdin.lock(), io::stdout().lock())
}

fn run<R: BufRead, W: Write>(
    cli: &Cli,
    graph: &AdjacencyMatrix,
    input: R,
    mut out: W,
) -> Result<()> {
    if !cli.quiet_matrix {
        write!(out, "{graph}")?;
    }

    match (cli.start, cli.dest) {
        (Some(start), Some(dest)) => {
            let (Some(s), Some(d)) = (start.checked_sub(1), dest.checked_sub(1)) else {
                bail!("vertices are numbered from 1");
            };
            let result = try_shortest_path(graph, s, d)
                .with_context(|| format!("query {start} -> {dest}"))?;
            write_result(&mut out, s, d, &result)?;
        }
        _ => Session::new(graph, input, out).run()?,
    }

    Ok(())
}

fn load_graph(cli: &Cli) -> Result<AdjacencyMatrix> {
    match &cli.graph {
        Some(path) => {
            let config = GraphConfig::load(path)
                .with_context(|| format!("loading graph {}", path.display()))?;
            Ok(config.to_matrix())
        }
        None => {
            info!("using built-in demo graph");
            Ok(demo_graph())
        }
    }
}
