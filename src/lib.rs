//! Read line geometries from Well-Known Text and write them out as GPX tracks.
//!
//! # Reading
//!
//! [io::wkt::read_wkt] parses the `LINESTRING` and `MULTILINESTRING` subset of WKT, with
//! optional `Z`, `M` and `ZM` layouts and the `EMPTY` marker, into a [WktGeometry]:
//!
//! ```
//! use wkt_gpx::{Coords, WktGeometry};
//!
//! let geom: WktGeometry = "MULTILINESTRING((0 0,1 1),(2 2,3 3))".parse().unwrap();
//! assert_eq!(
//!     geom.coords,
//!     Coords::MultiLineString(vec![
//!         vec![vec![0., 0.], vec![1., 1.]],
//!         vec![vec![2., 2.], vec![3., 3.]],
//!     ])
//! );
//! ```
//!
//! Other geometry types fail with [WktError::UnsupportedGeometry] rather than being read
//! partially.
//!
//! # Writing
//!
//! [io::gpx] turns a geometry into a GPX track, reprojecting every point with an
//! [algorithm::reproject::Transformer]. [io::track] applies the whole conversion to
//! `id|activities|wkt` record files line by line.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use dimension::Dimension;
pub use error::{Result, TrackError, WktError};
pub use geometry::{Coord, Coords, WktGeometry};

pub mod algorithm;
pub mod cli;
pub mod dimension;
pub mod error;
pub mod geometry;
pub mod io;
