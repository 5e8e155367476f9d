//! Readers and writers for the formats this crate moves between: WKT in, GPX out, plus
//! conversion to [`geo`] types and the line-oriented record driver.

pub mod geo;
pub mod gpx;
pub mod track;
pub mod wkt;
