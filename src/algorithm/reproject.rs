//! Reproject planar x/y pairs into longitude/latitude.

use std::f64::consts::FRAC_PI_2;

use crate::error::{Result, TrackError};

/// Radius of the sphere used by web mercator, in metres.
const EARTH_RADIUS: f64 = 6_378_137.0;

const WGS84: &str = "EPSG:4326";
const WEB_MERCATOR: [&str; 3] = ["EPSG:3857", "EPSG:900913", "EPSG:102100"];

/// Transform a coordinate from one reference system into another.
pub trait Transformer {
    /// Transform a single x/y pair.
    fn transform(&self, x: f64, y: f64) -> Result<(f64, f64)>;

    /// Transform the first two ordinates of a coordinate. Any z or m ordinates are ignored.
    fn reproject(&self, coord: &[f64]) -> Result<(f64, f64)> {
        match coord {
            [x, y, ..] => self.transform(*x, *y),
            _ => Err(TrackError::InvalidCoordinate(coord.len())),
        }
    }
}

/// Leaves coordinates untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transformer for Identity {
    fn transform(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        Ok((x, y))
    }
}

/// Spherical web mercator (EPSG:3857) to WGS84 longitude/latitude (EPSG:4326).
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMercator;

impl Transformer for WebMercator {
    fn transform(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let lon = (x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
        // Wrap longitudes from coordinates past the antimeridian
        let lon = if lon.abs() > 180.0 {
            lon - 360.0 * ((lon + 180.0) / 360.0).floor()
        } else {
            lon
        };
        Ok((lon, lat))
    }
}

/// Reproject using PROJ, for any pair of reference systems PROJ knows.
#[cfg(feature = "proj")]
pub struct ProjTransformer {
    proj: proj::Proj,
}

#[cfg(feature = "proj")]
impl ProjTransformer {
    pub fn new(from: &str, to: &str) -> Result<Self> {
        let proj = proj::Proj::new_known_crs(from, to, None)?;
        Ok(Self { proj })
    }
}

#[cfg(feature = "proj")]
impl Transformer for ProjTransformer {
    fn transform(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        Ok(self.proj.convert((x, y))?)
    }
}

/// Pick a [Transformer] between two reference systems, given as `AUTHORITY:CODE` identifiers.
///
/// Identical systems and web mercator to WGS84 are handled natively. Other pairs need the
/// `proj` feature.
pub fn transformer_for(from: &str, to: &str) -> Result<Box<dyn Transformer>> {
    if from.eq_ignore_ascii_case(to) {
        return Ok(Box::new(Identity));
    }

    let from_mercator = WEB_MERCATOR
        .iter()
        .any(|code| code.eq_ignore_ascii_case(from));
    if from_mercator && to.eq_ignore_ascii_case(WGS84) {
        return Ok(Box::new(WebMercator));
    }

    #[cfg(feature = "proj")]
    {
        Ok(Box::new(ProjTransformer::new(from, to)?))
    }

    #[cfg(not(feature = "proj"))]
    {
        Err(TrackError::UnsupportedCrs {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn web_mercator_origin() {
        let (lon, lat) = WebMercator.transform(0.0, 0.0).unwrap();
        assert_eq!(lon, 0.0);
        assert_relative_eq!(lat, 0.0);
    }

    #[test]
    fn web_mercator_one_degree() {
        // echo 1 1 | cs2cs EPSG:4326 EPSG:3857
        let (lon, lat) = WebMercator
            .transform(111319.49079327357, 111325.14286638486)
            .unwrap();
        assert_relative_eq!(lon, 1.0, epsilon = 1e-9);
        assert_relative_eq!(lat, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn web_mercator_southern_hemisphere() {
        let (lon, lat) = WebMercator
            .transform(-13358338.895192828, -5465442.183322752)
            .unwrap();
        assert_relative_eq!(lon, -120.0, epsilon = 1e-9);
        assert_relative_eq!(lat, -44.0, epsilon = 1e-9);
    }

    #[test]
    fn reproject_ignores_extra_ordinates() {
        let coord = [111319.49079327357, 0.0, 12.0, 1_600_000_000.0];
        let (lon, lat) = WebMercator.reproject(&coord).unwrap();
        assert_relative_eq!(lon, 1.0, epsilon = 1e-9);
        assert_relative_eq!(lat, 0.0);

        assert!(matches!(
            Identity.reproject(&[1.0]),
            Err(TrackError::InvalidCoordinate(1))
        ));
    }

    #[test]
    fn picks_transformers() {
        let identity = transformer_for("EPSG:4326", "epsg:4326").unwrap();
        assert_eq!(identity.transform(3.0, 4.0).unwrap(), (3.0, 4.0));

        let mercator = transformer_for("EPSG:3857", "EPSG:4326").unwrap();
        let (lon, _) = mercator.transform(111319.49079327357, 0.0).unwrap();
        assert_relative_eq!(lon, 1.0, epsilon = 1e-9);
    }

    #[cfg(not(feature = "proj"))]
    #[test]
    fn unknown_pair_without_proj() {
        assert!(matches!(
            transformer_for("EPSG:27700", "EPSG:4326"),
            Err(TrackError::UnsupportedCrs { .. })
        ));
    }
}
