//! Convert to [`geo`] geometries.

mod scalar;

pub use scalar::{coord_to_geo, geometry_to_geo, line_string_to_geo, multi_line_string_to_geo};
