use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The coordinate layout of a parsed geometry.
///
/// Exactly one layout applies to a whole geometry. It is read from the optional `Z`, `M` or
/// `ZM` suffix after the geometry type and defaults to [Dimension::XY].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Resolve a WKT dimension suffix keyword. The keyword must already be upper-cased.
    pub fn from_suffix(keyword: &str) -> Option<Self> {
        match keyword {
            "Z" => Some(Dimension::XYZ),
            "M" => Some(Dimension::XYM),
            "ZM" => Some(Dimension::XYZM),
            _ => None,
        }
    }

    /// The suffix written after the geometry type, empty for [Dimension::XY].
    pub fn suffix(&self) -> &'static str {
        match self {
            Dimension::XY => "",
            Dimension::XYZ => "Z",
            Dimension::XYM => "M",
            Dimension::XYZM => "ZM",
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// Index of the measure ordinate within a coordinate, if this layout has one.
    pub fn m_index(&self) -> Option<usize> {
        match self {
            Dimension::XYM => Some(2),
            Dimension::XYZM => Some(3),
            _ => None,
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_suffix() {
        assert_eq!(Dimension::from_suffix("Z"), Some(Dimension::XYZ));
        assert_eq!(Dimension::from_suffix("M"), Some(Dimension::XYM));
        assert_eq!(Dimension::from_suffix("ZM"), Some(Dimension::XYZM));
    }

    #[test]
    fn from_bad_suffix() {
        assert_eq!(Dimension::from_suffix("EMPTY"), None);
        assert_eq!(Dimension::from_suffix("MZ"), None);
        assert_eq!(Dimension::from_suffix("z"), None);
    }

    #[test]
    fn sizes_match_ordinates() {
        let dims = [
            Dimension::XY,
            Dimension::XYZ,
            Dimension::XYM,
            Dimension::XYZM,
        ];
        for dim in dims {
            let expected = 2 + usize::from(dim.has_z()) + usize::from(dim.has_m());
            assert_eq!(dim.size(), expected);
            if let Some(idx) = dim.m_index() {
                assert_eq!(idx, dim.size() - 1);
            }
        }
    }

    #[test]
    fn suffix_round_trip() {
        for dim in [Dimension::XYZ, Dimension::XYM, Dimension::XYZM] {
            assert_eq!(Dimension::from_suffix(dim.suffix()), Some(dim));
        }
        assert_eq!(Dimension::XY.suffix(), "");
        assert_eq!(Dimension::XYZM.to_string(), "XYZM");
    }
}
