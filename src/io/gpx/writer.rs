use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::algorithm::reproject::Transformer;
use crate::dimension::Dimension;
use crate::error::{Result, TrackError};
use crate::geometry::{Coord, WktGeometry};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?><gpx><trk>"#;
const FOOTER: &str = "</trk></gpx>";

/// Write a geometry as a single GPX track.
///
/// Every line string becomes one `<trkseg>`. Points are reprojected with `transformer`. A z
/// ordinate is written as `<ele>` and an m ordinate, read as Unix seconds, as `<time>`.
pub fn write_gpx<W: Write>(
    geometry: &WktGeometry,
    transformer: &dyn Transformer,
    writer: &mut W,
) -> Result<()> {
    writer.write_str(HEADER)?;
    for line in geometry.coords.lines() {
        write_segment(line, geometry.dim, transformer, writer)?;
    }
    writer.write_str(FOOTER)?;
    Ok(())
}

/// Render a geometry as a GPX document, or `None` when it has no coordinates.
pub fn to_gpx(geometry: &WktGeometry, transformer: &dyn Transformer) -> Result<Option<String>> {
    if geometry.is_empty() {
        return Ok(None);
    }
    let mut out = String::with_capacity(HEADER.len() + geometry.coords.num_coords() * 48);
    write_gpx(geometry, transformer, &mut out)?;
    Ok(Some(out))
}

fn write_segment<W: Write>(
    line: &[Coord],
    dim: Dimension,
    transformer: &dyn Transformer,
    writer: &mut W,
) -> Result<()> {
    writer.write_str("<trkseg>")?;
    for coord in line {
        write_point(coord, dim, transformer, writer)?;
    }
    writer.write_str("</trkseg>")?;
    Ok(())
}

fn write_point<W: Write>(
    coord: &Coord,
    dim: Dimension,
    transformer: &dyn Transformer,
    writer: &mut W,
) -> Result<()> {
    let (lon, lat) = transformer.reproject(coord)?;
    let mut buffer = ryu::Buffer::new();

    writer.write_str("<trkpt lat=\"")?;
    writer.write_str(buffer.format(lat))?;
    writer.write_str("\" lon=\"")?;
    writer.write_str(buffer.format(lon))?;
    writer.write_str("\">")?;

    if dim.has_z() {
        if let Some(z) = coord.get(2) {
            writer.write_str("<ele>")?;
            writer.write_str(buffer.format(*z))?;
            writer.write_str("</ele>")?;
        }
    }

    if let Some(m) = dim.m_index().and_then(|idx| coord.get(idx)) {
        writer.write_str("<time>")?;
        writer.write_str(&format_time(*m)?)?;
        writer.write_str("</time>")?;
    }

    writer.write_str("</trkpt>")?;
    Ok(())
}

/// Format Unix seconds as an RFC 3339 UTC timestamp with millisecond precision.
fn format_time(seconds: f64) -> Result<String> {
    let millis = (seconds * 1000.0).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return Err(TrackError::InvalidTimestamp(seconds));
    }
    let time = DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .ok_or(TrackError::InvalidTimestamp(seconds))?;
    Ok(time.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::reproject::{Identity, WebMercator};
    use crate::io::wkt::read_wkt;
    use crate::test::linestring::ls_mercator;
    use crate::test::multilinestring::ml0;

    fn gpx(wkt: &str) -> String {
        to_gpx(&read_wkt(wkt).unwrap(), &Identity).unwrap().unwrap()
    }

    #[test]
    fn line_string_xy() {
        assert_eq!(
            gpx("LINESTRING(1 2, 3 4)"),
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?><gpx><trk><trkseg>"#,
                r#"<trkpt lat="2.0" lon="1.0"></trkpt>"#,
                r#"<trkpt lat="4.0" lon="3.0"></trkpt>"#,
                "</trkseg></trk></gpx>"
            )
        );
    }

    #[test]
    fn elevation_from_z() {
        let out = gpx("LINESTRING Z (1 2 30.5)");
        assert!(out.contains(r#"<trkpt lat="2.0" lon="1.0"><ele>30.5</ele></trkpt>"#));
        assert!(!out.contains("<time>"));
    }

    #[test]
    fn time_from_m() {
        let out = gpx("LINESTRING M (1 2 1600000000)");
        assert!(out.contains(
            r#"<trkpt lat="2.0" lon="1.0"><time>2020-09-13T12:26:40.000Z</time></trkpt>"#
        ));
        assert!(!out.contains("<ele>"));
    }

    #[test]
    fn elevation_and_time_from_zm() {
        let out = gpx("LINESTRING ZM (1 2 3 1600000000.25)");
        assert!(out.contains(
            r#"<ele>3.0</ele><time>2020-09-13T12:26:40.250Z</time></trkpt>"#
        ));
    }

    #[test]
    fn one_segment_per_line() {
        let geom = WktGeometry::from(&ml0());
        let out = to_gpx(&geom, &Identity).unwrap().unwrap();
        assert_eq!(out.matches("<trkseg>").count(), 1);

        let out = gpx("MULTILINESTRING((0 0,1 1),(2 2,3 3),(4 4,5 5))");
        assert_eq!(out.matches("<trkseg>").count(), 3);
        assert_eq!(out.matches("<trkpt ").count(), 6);
    }

    #[test]
    fn empty_has_no_document() {
        let geom = read_wkt("LINESTRING EMPTY").unwrap();
        assert_eq!(to_gpx(&geom, &Identity).unwrap(), None);
    }

    #[test]
    fn reprojects_points() {
        let geom = read_wkt(ls_mercator()).unwrap();
        let out = to_gpx(&geom, &WebMercator).unwrap().unwrap();
        assert!(out.contains(r#"<trkpt lat="0.0" lon="0.0">"#));
        assert!(out.contains(r#"lon="1.0""#));
    }

    #[test]
    fn invalid_timestamp() {
        assert!(matches!(
            format_time(1e300),
            Err(TrackError::InvalidTimestamp(_))
        ));
    }
}
