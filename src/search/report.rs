use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
};

use serde::Serialize;

use super::{dijkstra::Dijkstra, travel_time::SpeedTable};
use crate::{
    error::GraphError,
    graphs::{undirected_graph::UndirectedGraph, Distance},
};

/// Answer to a route query: distance, vertices along the way, and the
/// estimated driving time. `distance` is `None` if the destination cannot be
/// reached, in which case the path is empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteReport<V> {
    pub source: V,
    pub destination: V,
    pub distance: Option<Distance>,
    pub path: Vec<V>,
    pub estimated_minutes: f64,
}

impl<V> RouteReport<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Runs the shortest path query and estimates the driving time along the
    /// result.
    pub fn plan<E>(
        graph: &mut UndirectedGraph<V, E>,
        source: &V,
        destination: &V,
        speeds: &SpeedTable,
    ) -> Result<RouteReport<V>, GraphError<V>>
    where
        E: Clone + AsRef<str>,
    {
        let Some(path) = Dijkstra::new(graph).shortest_path(source, destination)? else {
            return Ok(RouteReport {
                source: source.clone(),
                destination: destination.clone(),
                distance: None,
                path: Vec::new(),
                estimated_minutes: 0.0,
            });
        };

        let missing_edge = || GraphError::EdgeNotFound {
            from: source.clone(),
            to: destination.clone(),
        };
        let estimated_minutes = speeds
            .estimate_minutes(graph, &path)
            .ok_or_else(missing_edge)?;

        Ok(RouteReport {
            source: source.clone(),
            destination: destination.clone(),
            distance: Some(path.distance),
            path: path.vertices,
            estimated_minutes,
        })
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }

    pub fn estimated_hours(&self) -> f64 {
        self.estimated_minutes / 60.0
    }
}

impl<V: Display> Display for RouteReport<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(distance) = self.distance else {
            return writeln!(f, "No path from {} to {}", self.source, self.destination);
        };

        writeln!(f, "Distance: {}", distance)?;
        writeln!(f, "Path:")?;
        let last = self.path.len().saturating_sub(1);
        for (position, label) in self.path.iter().enumerate() {
            if position < last {
                writeln!(f, "{} to", label)?;
            } else {
                writeln!(f, "{}", label)?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Estimated time: {:.1} minutes", self.estimated_minutes)?;
        writeln!(f, "or about {:.2} hours", self.estimated_minutes / 60.0)
    }
}
