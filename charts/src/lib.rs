//! Time-series presentation layer for channel statistics.
//!
//! The server returns pre-aggregated, pre-sorted samples for a requested
//! range and bucket granularity; this crate turns them into a display-ready
//! dataset: one labeled point per sample, axis bounds with a padding margin,
//! and compact value formatting. It never merges, re-buckets, or re-sorts;
//! that is the query collaborator's job.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`series`] | Wire types: metrics, ranges, steps, samples, queries |
//! | [`dataset`] | Labeled point sequences and axis bounds |
//! | [`format`] | Short-number and value formatting for display |

pub mod dataset;
pub mod format;
pub mod series;

pub use dataset::{Bounds, Dataset, Point, build_dataset};
pub use format::{format_value, short_number};
pub use series::{Metric, Range, Sample, SortOrder, StatsQuery, Step};
