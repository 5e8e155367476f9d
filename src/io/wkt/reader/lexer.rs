use crate::error::WktError;
use crate::io::wkt::reader::token::{Token, TokenKind, TokenValue};

/// Splits a WKT string into [Token]s on demand.
///
/// The cursor always rests on the first byte that has not been consumed yet. Every byte the
/// lexer consumes is ASCII, so the cursor is always on a character boundary.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    wkt: &'a str,
    index: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(wkt: &'a str) -> Self {
        Self { wkt, index: 0 }
    }

    /// The full input this lexer reads from.
    pub fn wkt(&self) -> &'a str {
        self.wkt
    }

    fn peek(&self) -> Option<u8> {
        self.wkt.as_bytes().get(self.index).copied()
    }

    /// Fetch and return the next token.
    ///
    /// Once the input is exhausted every call returns an EOF token positioned at the input
    /// length.
    pub fn next_token(&mut self) -> Result<Token, WktError> {
        loop {
            let position = self.index;
            let Some(c) = self.peek() else {
                return Ok(Token::eof(self.wkt.len()));
            };

            match c {
                b'(' => {
                    self.index += 1;
                    return Ok(Token::punct(TokenKind::LeftParen, '(', position));
                }
                b',' => {
                    self.index += 1;
                    return Ok(Token::punct(TokenKind::Comma, ',', position));
                }
                b')' => {
                    self.index += 1;
                    return Ok(Token::punct(TokenKind::RightParen, ')', position));
                }
                b'0'..=b'9' | b'.' | b'-' => return self.read_number(c),
                c if c.is_ascii_alphabetic() => return Ok(self.read_text()),
                b' ' | b'\t' | b'\r' | b'\n' => self.index += 1,
                _ => {
                    let character = self.wkt[position..]
                        .chars()
                        .next()
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(WktError::Lex {
                        character,
                        position,
                    });
                }
            }
        }
    }

    fn read_number(&mut self, first: u8) -> Result<Token, WktError> {
        let start = self.index;
        let mut decimal = first == b'.';
        let mut scientific = false;
        let mut previous = first;
        self.index += 1;

        while let Some(c) = self.peek() {
            let accept = match c {
                b'0'..=b'9' => true,
                b'.' if !decimal => {
                    decimal = true;
                    true
                }
                b'e' | b'E' if !scientific => {
                    scientific = true;
                    true
                }
                // A sign belongs to the number only right after the exponent marker
                b'-' | b'+' => matches!(previous, b'e' | b'E'),
                _ => false,
            };
            if !accept {
                break;
            }
            previous = c;
            self.index += 1;
        }

        let literal = &self.wkt[start..self.index];
        let number = literal
            .parse::<f64>()
            .map_err(|_| WktError::InvalidNumber {
                literal: literal.to_string(),
                position: start,
            })?;

        Ok(Token {
            position: start,
            kind: TokenKind::Number,
            value: Some(TokenValue::Number(number)),
        })
    }

    fn read_text(&mut self) -> Token {
        let start = self.index;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.index += 1;
        }

        Token {
            position: start,
            kind: TokenKind::Text,
            value: Some(TokenValue::Text(
                self.wkt[start..self.index].to_ascii_uppercase(),
            )),
        }
    }
}
