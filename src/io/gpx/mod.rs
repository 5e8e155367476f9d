//! Write parsed geometries as GPX tracks.

mod writer;

pub use writer::{to_gpx, write_gpx};
