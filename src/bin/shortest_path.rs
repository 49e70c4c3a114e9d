use std::error::Error;

use bidirectional_paths::{
    bidirectional_dijkstra,
    graphs::{edge::DirectedWeightedEdge, reversible_hash_graph::ReversibleHashGraph},
};
use clap::Parser;
use log::info;

/// Answers a single shortest path query on a graph given edge by edge and
/// prints the path as json. An unreachable target prints an empty vertex
/// list with distance `null`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directed edge as <tail>,<head>,<weight>, may be given multiple times
    #[arg(short, long = "edge")]
    edges: Vec<DirectedWeightedEdge<String>>,
    /// Vertex the path starts at
    #[arg(short, long)]
    source: String,
    /// Vertex the path ends at
    #[arg(short, long)]
    target: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::init();

    let graph = ReversibleHashGraph::from_edges(&args.edges);
    info!("built graph with {} edges", args.edges.len());

    let path = bidirectional_dijkstra(&graph, &args.source, &args.target);
    println!("{}", serde_json::to_string_pretty(&path)?);

    Ok(())
}
