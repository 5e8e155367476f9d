use std::fmt::Display;

/// The classification of a [Token].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Placeholder held by the parser before the first token is read.
    Start,
    Text,
    LeftParen,
    RightParen,
    Number,
    Comma,
    Eof,
}

/// The payload of a [Token].
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Upper-cased keyword.
    Text(String),
    Number(f64),
    /// One of `(`, `)` or `,`.
    Char(char),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{text}"),
            TokenValue::Number(number) => write!(f, "{number}"),
            TokenValue::Char(c) => write!(f, "{c}"),
        }
    }
}

/// A classified lexical unit and the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub position: usize,
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
}

impl Token {
    pub(crate) fn start() -> Self {
        Self {
            position: 0,
            kind: TokenKind::Start,
            value: None,
        }
    }

    pub(crate) fn eof(position: usize) -> Self {
        Self {
            position,
            kind: TokenKind::Eof,
            value: None,
        }
    }

    pub(crate) fn punct(kind: TokenKind, c: char, position: usize) -> Self {
        Self {
            position,
            kind,
            value: Some(TokenValue::Char(c)),
        }
    }

    /// The numeric payload, if this is a number token.
    pub fn as_number(&self) -> Option<f64> {
        match self.value {
            Some(TokenValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// The keyword payload, if this is a text token.
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// The payload as it is quoted in error messages. Tokens without a value render as an
    /// empty string.
    pub fn display_value(&self) -> String {
        self.value
            .as_ref()
            .map(|value| value.to_string())
            .unwrap_or_default()
    }
}
