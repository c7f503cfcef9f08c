use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::Parser;
use itertools::Itertools;
use road_paths::graphs::graph_factory::GraphFactory;

/// Prints every place of a road file with its degree and both traversal
/// orders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Road file with one `from,to,road,miles` record per line
    #[arg(short, long, default_value = "data/roads.txt")]
    file: PathBuf,

    /// Remove these places before investigating
    #[arg(short, long)]
    without: Vec<String>,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut graph = GraphFactory::from_file(&args.file)?;
    for label in &args.without {
        graph.remove_vertex(label)?;
    }

    println!(
        "{} vertices, {} edges",
        graph.count(),
        graph.number_of_edges()
    );
    for line in graph.summary()? {
        println!("{}", line);
    }

    let mut depth_first = Vec::new();
    graph.depth_first(|label| depth_first.push(label.clone()))?;
    println!("depth first: {}", depth_first.iter().join(", "));

    let mut breadth_first = Vec::new();
    graph.breadth_first(|label| breadth_first.push(label.clone()))?;
    println!("breadth first: {}", breadth_first.iter().join(", "));

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
