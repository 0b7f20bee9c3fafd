//! Polyline paths and arc-length measurement.
//!
//! A [`Path`] is a single open contour of straight segments. [`PathMeasure`]
//! caches the cumulative length at every vertex so callers can map a distance
//! along the path back to a position, or cut a prefix of the path by length.

mod measure;
mod polyline;

pub use measure::PathMeasure;
pub use polyline::Path;
