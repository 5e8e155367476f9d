use std::fmt::{Display, Error, Write};

use crate::geometry::{Coord, Coords, WktGeometry};

/// Write a geometry as WKT.
///
/// Numbers are formatted with [ryu], which produces the shortest text that reads back to the
/// same `f64`.
pub fn write_wkt<W: Write>(geometry: &WktGeometry, writer: &mut W) -> Result<(), Error> {
    writer.write_str(geometry.geometry_type())?;

    let suffix = geometry.dim.suffix();
    if !suffix.is_empty() {
        writer.write_char(' ')?;
        writer.write_str(suffix)?;
    }

    match &geometry.coords {
        Coords::Empty(_) => writer.write_str(" EMPTY"),
        Coords::LineString(line) => {
            writer.write_char(' ')?;
            add_coords(writer, line)
        }
        Coords::MultiLineString(lines) => {
            writer.write_str(" (")?;
            let mut lines = lines.iter();
            if let Some(first) = lines.next() {
                add_coords(writer, first)?;
            }
            for line in lines {
                writer.write_char(',')?;
                add_coords(writer, line)?;
            }
            writer.write_char(')')
        }
    }
}

fn add_coord<W: Write>(writer: &mut W, coord: &Coord) -> Result<(), Error> {
    let mut buffer = ryu::Buffer::new();
    for (i, value) in coord.iter().enumerate() {
        if i > 0 {
            writer.write_char(' ')?;
        }
        writer.write_str(buffer.format(*value))?;
    }
    Ok(())
}

fn add_coords<W: Write>(writer: &mut W, coords: &[Coord]) -> Result<(), Error> {
    writer.write_char('(')?;
    let mut coords = coords.iter();
    if let Some(first) = coords.next() {
        add_coord(writer, first)?;
    }
    for coord in coords {
        writer.write_char(',')?;
        add_coord(writer, coord)?;
    }
    writer.write_char(')')
}

impl Display for WktGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_wkt(self, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dimension::Dimension;

    #[test]
    fn line_string() {
        let geom = WktGeometry::new(
            Dimension::XY,
            Coords::LineString(vec![vec![0., 0.], vec![1.5, -2.]]),
        );
        assert_eq!(geom.to_string(), "LINESTRING (0.0 0.0,1.5 -2.0)");
    }

    #[test]
    fn multi_line_string_z() {
        let geom = WktGeometry::new(
            Dimension::XYZ,
            Coords::MultiLineString(vec![
                vec![vec![0., 0., 1.], vec![1., 1., 2.]],
                vec![vec![2., 2., 3.]],
            ]),
        );
        assert_eq!(
            geom.to_string(),
            "MULTILINESTRING Z ((0.0 0.0 1.0,1.0 1.0 2.0),(2.0 2.0 3.0))"
        );
    }

    #[test]
    fn empty() {
        let geom = WktGeometry::new(Dimension::XYM, Coords::default());
        assert_eq!(geom.to_string(), "LINESTRING M EMPTY");

        let text = "MULTILINESTRING Z EMPTY";
        let geom: WktGeometry = text.parse().unwrap();
        assert_eq!(geom.to_string(), text);
    }

    #[test]
    fn scientific_values_read_back() {
        let geom = WktGeometry::new(
            Dimension::XY,
            Coords::LineString(vec![vec![-1.5e10, 2.5e-7], vec![1e21, 0.1]]),
        );
        let text = geom.to_string();
        let parsed: WktGeometry = text.parse().unwrap();
        assert_eq!(parsed, geom);
    }
}
