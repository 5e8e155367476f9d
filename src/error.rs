//! Defines [`WktError`] and [`TrackError`], representing all errors returned by this crate.

use thiserror::Error;

/// Errors raised while tokenizing or parsing a single WKT string.
///
/// Every variant aborts the parse call that produced it. None of them carry state that
/// outlives that call, so a caller processing many records can report the error and move on.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WktError {
    /// A character that cannot start any token.
    #[error("Unexpected character: {character} at position {position}")]
    Lex { character: char, position: usize },

    /// A numeric slice that does not form a valid floating point literal, such as `-` or `1e`.
    #[error("Invalid number `{literal}` at position {position}")]
    InvalidNumber { literal: String, position: usize },

    /// A token that does not fit the grammar at this point.
    #[error("Unexpected `{token}` at position {position} in `{wkt}`")]
    Syntax {
        token: String,
        position: usize,
        wkt: String,
    },

    /// A valid WKT geometry type outside the supported line subset.
    #[error("Not handled: {0}")]
    UnsupportedGeometry(String),
}

impl WktError {
    /// The byte offset this error points at, if it refers to a location in the input.
    pub fn position(&self) -> Option<usize> {
        match self {
            WktError::Lex { position, .. }
            | WktError::InvalidNumber { position, .. }
            | WktError::Syntax { position, .. } => Some(*position),
            WktError::UnsupportedGeometry(_) => None,
        }
    }

    /// Whether this error was raised by the lexer rather than the grammar.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            WktError::Lex { .. } | WktError::InvalidNumber { .. }
        )
    }
}

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TrackError {
    /// [WktError]
    #[error(transparent)]
    Wkt(#[from] WktError),

    /// A record line that does not have the `id|activities|wkt` shape.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// No transformer is available between the two coordinate reference systems.
    #[error("Unsupported reprojection from {from} to {to}")]
    UnsupportedCrs { from: String, to: String },

    /// A coordinate with fewer than two ordinates was handed to a reprojection.
    #[error("Coordinate has {0} ordinates, expected at least 2")]
    InvalidCoordinate(usize),

    /// A coordinate could not be converted to a timestamp.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(f64),

    /// [proj::ProjError]
    #[cfg(feature = "proj")]
    #[error(transparent)]
    ProjError(#[from] proj::ProjError),

    /// [proj::ProjCreateError]
    #[cfg(feature = "proj")]
    #[error(transparent)]
    ProjCreateError(#[from] proj::ProjCreateError),

    /// [std::fmt::Error]
    #[error(transparent)]
    FmtError(#[from] std::fmt::Error),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, TrackError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn syntax_message_embeds_input() {
        let err = WktError::Syntax {
            token: "1".to_string(),
            position: 15,
            wkt: "LINESTRING(0 0 1,1 1)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected `1` at position 15 in `LINESTRING(0 0 1,1 1)`"
        );
        assert_eq!(err.position(), Some(15));
        assert!(!err.is_lexical());
    }

    #[test]
    fn unsupported_has_no_position() {
        let err = WktError::UnsupportedGeometry("POINT".to_string());
        assert_eq!(err.to_string(), "Not handled: POINT");
        assert_eq!(err.position(), None);
    }

    #[test]
    fn wkt_error_converts_into_track_error() {
        let err: TrackError = WktError::Lex {
            character: '#',
            position: 3,
        }
        .into();
        assert!(matches!(err, TrackError::Wkt(WktError::Lex { .. })));
    }
}
