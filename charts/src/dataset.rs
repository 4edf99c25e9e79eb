//! Display-ready datasets and axis bounds derived from raw samples.

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;

use crate::series::{Sample, Step};

/// One display point: bucket label plus value.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// Bucket label, formatted per the active [`Step`].
    pub label: String,
    /// The sample's value.
    pub value: f64,
}

/// An identified, ordered sequence of display points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    /// Identifier for the series (used by the chart collaborator).
    pub id: String,
    /// Points in sample order.
    pub points: Vec<Point>,
}

impl Dataset {
    /// Derive axis bounds from the observed values.
    ///
    /// Without overrides, the maximum is the largest observed value with a
    /// floor of zero, and the minimum is the smallest observed value capped
    /// at that maximum (so an empty dataset yields `[0, 0]`). A supplied
    /// override replaces the respective derived bound; `Some(0.0)` is a real
    /// override, not "unset".
    #[must_use]
    pub fn bounds(&self, min_override: Option<f64>, max_override: Option<f64>) -> Bounds {
        let max = max_override
            .unwrap_or_else(|| self.points.iter().fold(0.0_f64, |acc, p| acc.max(p.value)));
        let min = min_override
            .unwrap_or_else(|| self.points.iter().fold(max, |acc, p| acc.min(p.value)));
        Bounds { min, max }
    }
}

/// Raw axis bounds plus the padded display range derived from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Smallest value the axis must include.
    pub min: f64,
    /// Largest value the axis must include.
    pub max: f64,
}

impl Bounds {
    /// Lower edge of the display range: `min` padded down by 10% of itself.
    #[must_use]
    pub fn display_min(&self) -> f64 {
        self.min - self.min * 0.1
    }

    /// Upper edge of the display range: `max` padded up by 10% of itself.
    #[must_use]
    pub fn display_max(&self) -> f64 {
        self.max + self.max * 0.1
    }
}

/// Turn raw samples into a labeled dataset.
///
/// Each input sample maps to exactly one output point; samples are expected
/// to be pre-aggregated to `step` and pre-sorted by the query collaborator.
#[must_use]
pub fn build_dataset(id: &str, samples: &[Sample], step: Step) -> Dataset {
    Dataset {
        id: id.to_owned(),
        points: samples
            .iter()
            .map(|s| Point {
                label: step.label(s.created_at),
                value: s.amount,
            })
            .collect(),
    }
}
