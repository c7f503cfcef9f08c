use std::path::Path;

use clap::ValueEnum;
use error::InputError;
use graphs::graph_factory::{GraphFactory, RoadGraph};
use search::{report::RouteReport, travel_time::SpeedTable};

pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Reads the road file and answers a single route query.
pub fn plan_route(
    path: &Path,
    source: &str,
    destination: &str,
    speeds: &SpeedTable,
) -> Result<RouteReport<String>, InputError> {
    let mut graph: RoadGraph = GraphFactory::from_file(path)?;
    let report = RouteReport::plan(
        &mut graph,
        &source.to_string(),
        &destination.to_string(),
        speeds,
    )?;
    Ok(report)
}
