use crate::dimension::Dimension;
use crate::error::WktError;
use crate::geometry::{Coord, Coords, WktGeometry};
use crate::io::wkt::reader::lexer::Lexer;
use crate::io::wkt::reader::token::{Token, TokenKind};

const EMPTY: &str = "EMPTY";

/// Recursive descent parser over the tokens of a [Lexer].
///
/// Holds one token of lookahead and the layout declared by the geometry's type clause.
#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    token: Token,
    dim: Dimension,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self {
            lexer,
            token: Token::start(),
            dim: Dimension::XY,
        }
    }

    /// Parse the whole input as a single geometry.
    pub fn parse(mut self) -> Result<WktGeometry, WktError> {
        self.consume()?;
        let geometry = self.parse_geometry()?;
        if !self.is_token_type(TokenKind::Eof) {
            return Err(self.unexpected());
        }
        Ok(geometry)
    }

    fn consume(&mut self) -> Result<(), WktError> {
        self.token = self.lexer.next_token()?;
        Ok(())
    }

    /// Whether the current token is of the given kind. Never consumes.
    pub fn is_token_type(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    /// Consume the current token if it is of the given kind.
    ///
    /// Returns `Ok(false)` and leaves the parser untouched on a mismatch. Only a lexical error
    /// while fetching the following token fails.
    pub fn match_token(&mut self, kind: TokenKind) -> Result<bool, WktError> {
        let is_match = self.is_token_type(kind);
        if is_match {
            self.consume()?;
        }
        Ok(is_match)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), WktError> {
        if self.match_token(kind)? {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> WktError {
        WktError::Syntax {
            token: self.token.display_value(),
            position: self.token.position,
            wkt: self.lexer.wkt().to_string(),
        }
    }

    fn parse_geometry(&mut self) -> Result<WktGeometry, WktError> {
        let geometry_type = match self.token.as_text() {
            Some(text) => text.to_string(),
            None => return Err(self.unexpected()),
        };
        self.consume()?;

        if geometry_type == "GEOMETRYCOLLECTION" {
            return Err(WktError::UnsupportedGeometry(geometry_type));
        }

        self.dim = self.parse_geometry_layout()?;
        if self.is_empty_geometry()? {
            return Ok(WktGeometry::new(self.dim, Coords::Empty(geometry_type)));
        }

        let coords = match geometry_type.as_str() {
            "LINESTRING" => Coords::LineString(self.parse_line_string_text()?),
            "MULTILINESTRING" => Coords::MultiLineString(self.parse_multi_line_string_text()?),
            _ => return Err(WktError::UnsupportedGeometry(geometry_type)),
        };
        Ok(WktGeometry::new(self.dim, coords))
    }

    /// Read the optional `Z`, `M` or `ZM` suffix. Any other token is left in place.
    fn parse_geometry_layout(&mut self) -> Result<Dimension, WktError> {
        match self.token.as_text().and_then(Dimension::from_suffix) {
            Some(dim) => {
                self.consume()?;
                Ok(dim)
            }
            None => Ok(Dimension::XY),
        }
    }

    fn is_empty_geometry(&mut self) -> Result<bool, WktError> {
        let is_empty = self.token.as_text() == Some(EMPTY);
        if is_empty {
            self.consume()?;
        }
        Ok(is_empty)
    }

    /// Exactly `dim.size()` numbers.
    fn parse_point(&mut self) -> Result<Coord, WktError> {
        let dimensions = self.dim.size();
        let mut coord = Vec::with_capacity(dimensions);
        while coord.len() < dimensions {
            match self.token.as_number() {
                Some(number) => {
                    self.consume()?;
                    coord.push(number);
                }
                None => return Err(self.unexpected()),
            }
        }
        Ok(coord)
    }

    /// One or more items separated by commas.
    fn parse_list<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, WktError>,
    ) -> Result<Vec<T>, WktError> {
        let mut items = vec![item(self)?];
        while self.match_token(TokenKind::Comma)? {
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// Items wrapped in one pair of parentheses.
    fn parse_parenthesized<T>(
        &mut self,
        inner: impl FnOnce(&mut Self) -> Result<T, WktError>,
    ) -> Result<T, WktError> {
        self.expect(TokenKind::LeftParen)?;
        let value = inner(self)?;
        self.expect(TokenKind::RightParen)?;
        Ok(value)
    }

    fn parse_point_list(&mut self) -> Result<Vec<Coord>, WktError> {
        self.parse_list(Self::parse_point)
    }

    fn parse_line_string_text(&mut self) -> Result<Vec<Coord>, WktError> {
        self.parse_parenthesized(Self::parse_point_list)
    }

    fn parse_line_string_text_list(&mut self) -> Result<Vec<Vec<Coord>>, WktError> {
        self.parse_list(Self::parse_line_string_text)
    }

    fn parse_multi_line_string_text(&mut self) -> Result<Vec<Vec<Coord>>, WktError> {
        self.parse_parenthesized(Self::parse_line_string_text_list)
    }
}
