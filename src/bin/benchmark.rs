use bidirectional_paths::{
    graphs::graph_functions::{
        generate_random_graph, generate_random_pair_test_cases, validate_path_and_time,
    },
    search::{bidirectional::BidirectionalDijkstra, dijkstra::Dijkstra},
    utility::average_duration,
    Graph,
};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

/// Does a single threaded benchmark of the bidirectional search against the
/// one directional Dijkstra on a random graph. Every answer is validated.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices of the random graph
    #[arg(short, long, default_value = "10000")]
    vertices: u32,
    /// Number of edges of the random graph
    #[arg(short, long, default_value = "50000")]
    edges: u32,
    /// Largest edge weight
    #[arg(short, long, default_value = "100")]
    max_weight: u32,
    /// Number of queries to be run
    #[arg(short, long, default_value = "1000")]
    queries: u32,
    /// Seed for the random graph and queries
    #[arg(short, long, default_value = "0")]
    seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let graph = generate_random_graph(&mut rng, args.vertices, args.edges, args.max_weight)?;
    info!(
        "generated graph with {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );

    let test_cases =
        generate_random_pair_test_cases(&mut rng, &graph, args.vertices, args.queries);

    let dijkstra = Dijkstra { graph: &graph };
    let dijkstra_times = validate_path_and_time(&test_cases, &dijkstra, &graph)?;

    let bidirectional = BidirectionalDijkstra { graph: &graph };
    let bidirectional_times = validate_path_and_time(&test_cases, &bidirectional, &graph)?;

    println!("Value over {} sequential searches", test_cases.len());
    println!(
        "Average dijkstra duration is {:?}",
        average_duration(&dijkstra_times)
    );
    println!(
        "Average bidirectional dijkstra duration is {:?}",
        average_duration(&bidirectional_times)
    );

    Ok(())
}
