use std::{fmt::Debug, hash::Hash};

use super::Path;
use crate::graphs::{edge::Edge, undirected_graph::UndirectedGraph};

pub const INTERSTATE_LABEL: &str = "I-5";
/// Miles per hour on the interstate.
pub const INTERSTATE_SPEED: f64 = 65.0;
/// Miles per hour on every other road.
pub const DEFAULT_SPEED: f64 = 55.0;

/// Speed lookup by edge label: one distinguished label drives at its own
/// speed, every other label at the default speed.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedTable {
    fast_label: String,
    fast_speed: f64,
    default_speed: f64,
}

impl Default for SpeedTable {
    fn default() -> Self {
        SpeedTable {
            fast_label: INTERSTATE_LABEL.to_string(),
            fast_speed: INTERSTATE_SPEED,
            default_speed: DEFAULT_SPEED,
        }
    }
}

impl SpeedTable {
    /// Both speeds have to be finite and positive.
    pub fn new(
        fast_label: &str,
        fast_speed: f64,
        default_speed: f64,
    ) -> Result<SpeedTable, String> {
        for speed in [fast_speed, default_speed] {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(format!("speed must be positive, got {}", speed));
            }
        }

        Ok(SpeedTable {
            fast_label: fast_label.to_string(),
            fast_speed,
            default_speed,
        })
    }

    pub fn speed_for(&self, label: &str) -> f64 {
        if label == self.fast_label {
            self.fast_speed
        } else {
            self.default_speed
        }
    }

    /// Hours needed to drive the given edges one after another.
    pub fn hours<'a, E, I>(&self, legs: I) -> f64
    where
        E: AsRef<str> + 'a,
        I: IntoIterator<Item = &'a Edge<E>>,
    {
        legs.into_iter()
            .map(|edge| f64::from(edge.weight()) / self.speed_for(edge.label().as_ref()))
            .sum()
    }

    /// Estimated minutes to drive `path` through `graph`, or `None` if one of
    /// its legs is not an edge of the graph.
    pub fn estimate_minutes<V, E>(
        &self,
        graph: &UndirectedGraph<V, E>,
        path: &Path<V>,
    ) -> Option<f64>
    where
        V: Clone + Eq + Hash + Debug,
        E: Clone + AsRef<str>,
    {
        let legs = path.legs(graph)?;
        Some(self.hours(legs) * 60.0)
    }
}
