use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::info;
use road_paths::{
    graphs::graph_factory::GraphFactory,
    search::{
        report::RouteReport,
        travel_time::{SpeedTable, DEFAULT_SPEED, INTERSTATE_LABEL, INTERSTATE_SPEED},
    },
    OutputFormat,
};

/// Finds the shortest route between two places and estimates the driving time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Road file with one `from,to,road,miles` record per line
    #[arg(short, long, default_value = "data/roads.txt")]
    file: PathBuf,

    /// Starting place, asked for on stdin if missing
    #[arg(short, long)]
    source: Option<String>,

    /// Destination, asked for on stdin if missing
    #[arg(short, long)]
    destination: Option<String>,

    /// Road driven at the fast speed
    #[arg(long, default_value = INTERSTATE_LABEL)]
    fast_road: String,

    /// Speed on the fast road in miles per hour
    #[arg(long, default_value_t = INTERSTATE_SPEED)]
    fast_speed: f64,

    /// Speed on every other road in miles per hour
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    default_speed: f64,

    /// How to print the report
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn prompt(question: &str) -> io::Result<String> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let speeds = SpeedTable::new(&args.fast_road, args.fast_speed, args.default_speed)?;
    let mut graph = GraphFactory::from_file(&args.file)?;

    let source = match args.source {
        Some(source) => source,
        None => prompt("Start vertex: ")?,
    };
    let destination = match args.destination {
        Some(destination) => destination,
        None => prompt("End vertex: ")?,
    };
    info!("searching route from {} to {}", source, destination);

    let report = RouteReport::plan(&mut graph, &source, &destination, &speeds)?;
    match args.format {
        OutputFormat::Text => print!("\n{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

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
