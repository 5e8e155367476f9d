//! Read and write the `LINESTRING` / `MULTILINESTRING` subset of WKT.

mod reader;
mod writer;

pub use reader::{read_wkt, Lexer, Parser, Token, TokenKind, TokenValue};
pub use writer::write_wkt;
