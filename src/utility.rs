use std::{
    fmt::Debug,
    hash::Hash,
    time::{Duration, Instant},
};

use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use log::warn;
use rand::Rng;

use crate::{
    error::GraphError,
    graphs::{undirected_graph::UndirectedGraph, Distance},
    search::{dijkstra::Dijkstra, Path},
};

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

/// Random pairs of distinct vertex labels. Empty if the graph has fewer than
/// two vertices.
pub fn generate_test_cases<V, E, R>(
    graph: &UndirectedGraph<V, E>,
    number_of_test_cases: usize,
    rng: &mut R,
) -> Vec<(V, V)>
where
    V: Clone,
    R: Rng,
{
    let labels: Vec<&V> = graph.vertices().map(|(_, vertex)| vertex.label()).collect();
    if labels.len() < 2 {
        return Vec::new();
    }

    (0..number_of_test_cases)
        .map(|_| {
            // guarantee that source != target
            let source = rng.gen_range(0..labels.len());
            let mut target = rng.gen_range(0..labels.len() - 1);
            if target >= source {
                target += 1;
            }
            (labels[source].clone(), labels[target].clone())
        })
        .collect()
}

/// Checks that `path` starts at `source`, ends at `target`, follows edges of
/// the graph, and that those edges add up to the reported distance.
pub fn validate_path<V, E>(
    graph: &UndirectedGraph<V, E>,
    source: &V,
    target: &V,
    path: &Path<V>,
) -> Result<(), String>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone,
{
    if path.vertices.first() != Some(source) {
        return Err("first vertex of path is not the source".to_string());
    }
    if path.vertices.last() != Some(target) {
        return Err("last vertex of path is not the target".to_string());
    }

    let legs = path
        .legs(graph)
        .ok_or_else(|| "path uses an edge that is not in the graph".to_string())?;
    let true_distance: Distance = legs.iter().map(|edge| Distance::from(edge.weight())).sum();
    if true_distance != path.distance {
        return Err(format!(
            "path distance is {} but its edges add up to {}",
            path.distance, true_distance
        ));
    }

    Ok(())
}

/// Average duration of a shortest path query over `test_cases`. Stops at the
/// first query that fails.
pub fn benchmark<V, E>(
    graph: &mut UndirectedGraph<V, E>,
    test_cases: &[(V, V)],
) -> Result<Duration, GraphError<V>>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone,
{
    if test_cases.is_empty() {
        return Ok(Duration::ZERO);
    }

    let mut dijkstra = Dijkstra::new(graph);
    let start = Instant::now();
    for (source, target) in test_cases
        .iter()
        .progress_with(get_progressbar("Benchmarking", test_cases.len() as u64))
    {
        if let Err(err) = dijkstra.shortest_path(source, target) {
            warn!("benchmark query from {:?} to {:?} failed: {}", source, target, err);
            return Err(err);
        }
    }
    Ok(start.elapsed() / test_cases.len() as u32)
}
