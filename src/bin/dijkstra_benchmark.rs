use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use road_paths::{
    graphs::graph_factory::GraphFactory,
    search::dijkstra::Dijkstra,
    utility::{benchmark, generate_test_cases, validate_path},
};

/// Times random shortest path queries on a road file and validates the paths
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Road file with one `from,to,road,miles` record per line
    #[arg(short, long, default_value = "data/roads.txt")]
    file: PathBuf,

    /// Number of random queries
    #[arg(short, long, default_value_t = 1_000)]
    number_of_queries: usize,

    /// Seed of the query generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut graph = GraphFactory::from_file(&args.file)?;
    let mut rng = StdRng::seed_from_u64(args.seed);
    let test_cases = generate_test_cases(&graph, args.number_of_queries, &mut rng);

    let mut unreachable = 0;
    for (source, target) in &test_cases {
        let path = Dijkstra::new(&mut graph).shortest_path(source, target)?;
        match path {
            Some(path) => validate_path(&graph, source, target, &path)?,
            None => unreachable += 1,
        }
    }
    println!(
        "validated {} queries, {} without a path",
        test_cases.len(),
        unreachable
    );

    let average_duration = benchmark(&mut graph, &test_cases)?;
    println!("average dijkstra duration is {:?}", average_duration);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
