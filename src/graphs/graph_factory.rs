use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{info, warn};

use super::{undirected_graph::UndirectedGraph, Weight};
use crate::{
    error::{GraphError, InputError},
    utility::get_progressspinner,
};

/// Graph of places connected by named roads, weighted in miles.
pub type RoadGraph = UndirectedGraph<String, String>;

/// One row of the input: two places, the road between them, and its length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub label: String,
    pub weight: Weight,
}

impl EdgeRecord {
    /// Parses `from,to,label,weight`. `line` is only used for error messages.
    pub fn parse(line: usize, text: &str) -> Result<EdgeRecord, InputError> {
        let malformed = |reason: String| InputError::MalformedRecord { line, reason };

        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        let [from, to, label, weight] = fields[..] else {
            return Err(malformed(format!("expected 4 fields, found {}", fields.len())));
        };

        if let Some(position) = [from, to, label].iter().position(|field| field.is_empty()) {
            return Err(malformed(format!("field {} is empty", position + 1)));
        }
        let weight: Weight = weight
            .parse()
            .map_err(|_| malformed(format!("unable to parse weight {:?}", weight)))?;

        Ok(EdgeRecord {
            from: from.to_string(),
            to: to.to_string(),
            label: label.to_string(),
            weight,
        })
    }
}

/// Reads records line by line, skipping blank lines and lines starting with
/// `#`.
pub fn parse_edge_records<R: BufRead>(reader: R) -> Result<Vec<EdgeRecord>, InputError> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        records.push(EdgeRecord::parse(index + 1, trimmed)?);
    }

    Ok(records)
}

pub fn read_edge_records(path: &Path) -> Result<Vec<EdgeRecord>, InputError> {
    let reader = BufReader::new(File::open(path)?);
    let spinner = get_progressspinner(&format!("Reading {}", path.display()));
    let records = parse_edge_records(reader);
    spinner.finish_and_clear();

    let records = records?;
    info!("read {} edge records from {}", records.len(), path.display());
    Ok(records)
}

pub struct GraphFactory {}

impl GraphFactory {
    /// Builds a graph by inserting both endpoints and then the edge of every
    /// record, in record order. Rows that would add a loop or a second edge
    /// between the same places are skipped with a warning.
    pub fn from_records(records: &[EdgeRecord]) -> Result<RoadGraph, InputError> {
        let mut graph = RoadGraph::new();

        for record in records {
            graph.insert_vertex(record.from.clone());
            graph.insert_vertex(record.to.clone());

            match graph.add_edge(&record.from, &record.to, record.label.clone(), record.weight) {
                Ok(()) => {}
                Err(err @ (GraphError::SelfLoop { .. } | GraphError::DuplicateEdge { .. })) => {
                    warn!("skipping record {:?}: {}", record, err);
                }
                Err(err) => return Err(err.into()),
            }
        }

        info!(
            "graph has {} vertices and {} edges",
            graph.count(),
            graph.number_of_edges()
        );
        Ok(graph)
    }

    pub fn from_file(path: &Path) -> Result<RoadGraph, InputError> {
        let records = read_edge_records(path)?;
        Self::from_records(&records)
    }
}
