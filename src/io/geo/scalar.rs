use crate::error::{Result, TrackError};
use crate::geometry::{Coord, Coords, WktGeometry};

/// Convert a parsed coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept. A coordinate with fewer than two ordinates
/// fails with [TrackError::InvalidCoordinate].
pub fn coord_to_geo(coord: &[f64]) -> Result<geo::Coord> {
    match coord {
        [x, y, ..] => Ok(geo::Coord { x: *x, y: *y }),
        _ => Err(TrackError::InvalidCoordinate(coord.len())),
    }
}

/// Convert a parsed line string to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &[Coord]) -> Result<geo::LineString> {
    let coords = line_string
        .iter()
        .map(|coord| coord_to_geo(coord))
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::LineString::new(coords))
}

/// Convert parsed line strings to a [`geo::MultiLineString`].
pub fn multi_line_string_to_geo(lines: &[Vec<Coord>]) -> Result<geo::MultiLineString> {
    let lines = lines
        .iter()
        .map(|line| line_string_to_geo(line))
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::MultiLineString::new(lines))
}

/// Convert a parsed geometry to a [`geo::Geometry`], or `None` when it is empty.
///
/// Only the first two dimensions will be kept.
pub fn geometry_to_geo(geometry: &WktGeometry) -> Result<Option<geo::Geometry>> {
    let geometry = match &geometry.coords {
        Coords::Empty(_) => None,
        Coords::LineString(line) => Some(geo::Geometry::LineString(line_string_to_geo(line)?)),
        Coords::MultiLineString(lines) => Some(geo::Geometry::MultiLineString(
            multi_line_string_to_geo(lines)?,
        )),
    };
    Ok(geometry)
}

impl From<&geo::LineString> for WktGeometry {
    fn from(value: &geo::LineString) -> Self {
        WktGeometry::new(
            Default::default(),
            Coords::LineString(line_from_geo(value)),
        )
    }
}

impl From<&geo::MultiLineString> for WktGeometry {
    fn from(value: &geo::MultiLineString) -> Self {
        WktGeometry::new(
            Default::default(),
            Coords::MultiLineString(value.iter().map(line_from_geo).collect()),
        )
    }
}

fn line_from_geo(line: &geo::LineString) -> Vec<Coord> {
    line.coords().map(|coord| vec![coord.x, coord.y]).collect()
}
