//! Owned coordinate trees produced by the WKT reader.

use serde::ser::{Serialize, Serializer};

use crate::dimension::Dimension;

const LINESTRING: &str = "LINESTRING";
const MULTILINESTRING: &str = "MULTILINESTRING";

/// A single point: `dim.size()` ordinates in x, y, [z], [m] order.
pub type Coord = Vec<f64>;

/// The coordinates of a parsed geometry.
///
/// The variant records which geometry type was read, so consumers never have to inspect
/// nesting depth. Serializing with serde produces the plain nested arrays, e.g.
/// `[[0.0,0.0],[1.0,1.0]]` for a line string and `[]` for an empty geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Coords {
    /// Any geometry declared `EMPTY`, with its upper-cased type keyword.
    Empty(String),
    LineString(Vec<Coord>),
    MultiLineString(Vec<Vec<Coord>>),
}

impl Default for Coords {
    fn default() -> Self {
        Coords::Empty(LINESTRING.to_string())
    }
}

impl Coords {
    pub fn is_empty(&self) -> bool {
        matches!(self, Coords::Empty(_))
    }

    /// Iterate over the line strings of this geometry. A line string yields itself once.
    pub fn lines(&self) -> Box<dyn Iterator<Item = &[Coord]> + '_> {
        match self {
            Coords::Empty(_) => Box::new(std::iter::empty()),
            Coords::LineString(line) => Box::new(std::iter::once(line.as_slice())),
            Coords::MultiLineString(lines) => Box::new(lines.iter().map(|line| line.as_slice())),
        }
    }

    /// Total number of points across all line strings.
    pub fn num_coords(&self) -> usize {
        self.lines().map(|line| line.len()).sum()
    }
}

impl Serialize for Coords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Coords::Empty(_) => serializer.collect_seq(std::iter::empty::<Coord>()),
            Coords::LineString(line) => line.serialize(serializer),
            Coords::MultiLineString(lines) => lines.serialize(serializer),
        }
    }
}

/// A geometry read from WKT: its coordinate layout plus its coordinates.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct WktGeometry {
    pub dim: Dimension,
    pub coords: Coords,
}

impl WktGeometry {
    pub fn new(dim: Dimension, coords: Coords) -> Self {
        Self { dim, coords }
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The WKT type keyword matching the coordinates. Empty geometries report the keyword
    /// they were declared with.
    pub fn geometry_type(&self) -> &str {
        match &self.coords {
            Coords::Empty(keyword) => keyword.as_str(),
            Coords::LineString(_) => LINESTRING,
            Coords::MultiLineString(_) => MULTILINESTRING,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serializes_as_nested_arrays() {
        let line = Coords::LineString(vec![vec![0., 0.], vec![1., 1.]]);
        assert_eq!(serde_json::to_string(&line).unwrap(), "[[0.0,0.0],[1.0,1.0]]");

        let multi = Coords::MultiLineString(vec![vec![vec![0., 0.]], vec![vec![2., 2.]]]);
        assert_eq!(
            serde_json::to_string(&multi).unwrap(),
            "[[[0.0,0.0]],[[2.0,2.0]]]"
        );

        let empty = Coords::Empty("MULTILINESTRING".to_string());
        assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
    }

    #[test]
    fn lines_and_counts() {
        let multi = Coords::MultiLineString(vec![
            vec![vec![0., 0.], vec![1., 1.]],
            vec![vec![2., 2.], vec![3., 3.], vec![4., 4.]],
        ]);
        assert_eq!(multi.lines().count(), 2);
        assert_eq!(multi.num_coords(), 5);
        assert_eq!(Coords::default().lines().count(), 0);
        assert_eq!(Coords::default().num_coords(), 0);
    }

    #[test]
    fn geometry_serializes_dimension() {
        let geom = WktGeometry::new(
            Dimension::XYZ,
            Coords::LineString(vec![vec![0., 0., 1.]]),
        );
        assert_eq!(
            serde_json::to_value(&geom).unwrap(),
            serde_json::json!({ "dim": "XYZ", "coords": [[0.0, 0.0, 1.0]] })
        );
    }
}
