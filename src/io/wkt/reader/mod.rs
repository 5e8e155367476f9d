//! Tokenizer and recursive descent parser for the supported WKT subset.

mod lexer;
mod parser;
mod token;

pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{Token, TokenKind, TokenValue};

use crate::error::WktError;
use crate::geometry::WktGeometry;

/// Parse a single WKT string into a [WktGeometry].
///
/// Only `LINESTRING` and `MULTILINESTRING` bodies are read. Any geometry declared `EMPTY`
/// yields empty coordinates. Other geometry types fail with
/// [WktError::UnsupportedGeometry].
///
/// ```
/// use wkt_gpx::io::wkt::read_wkt;
/// use wkt_gpx::{Coords, Dimension};
///
/// let geom = read_wkt("LINESTRING Z (0 0 0, 1 1 1)").unwrap();
/// assert_eq!(geom.dim, Dimension::XYZ);
/// assert_eq!(
///     geom.coords,
///     Coords::LineString(vec![vec![0., 0., 0.], vec![1., 1., 1.]])
/// );
/// ```
pub fn read_wkt(wkt: &str) -> Result<WktGeometry, WktError> {
    Parser::new(Lexer::new(wkt)).parse()
}

impl std::str::FromStr for WktGeometry {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_wkt(s)
    }
}
