pub mod ast;
mod lexer;
mod parser;
pub mod visit;

pub use lexer::TokenKind;
pub use parser::{Parser, MAX_DEPTH};

/// Rolled in place of any input that yields no tokens.
pub const DEFAULT_EXPRESSION: &str = "1d20";

/// Tokens past this many are dropped; it bounds the height of the tree.
pub const MAX_TOKENS: usize = 1024;

/// Tokenizes `s`, falling back to [DEFAULT_EXPRESSION] when nothing in it is
/// part of the grammar. At most [MAX_TOKENS] tokens are kept.
pub fn tokenize(s: &str) -> Vec<TokenKind> {
    let mut tokens = lexer::tokenize(s);
    tokens.truncate(MAX_TOKENS);
    if tokens.is_empty() {
        lexer::tokenize(DEFAULT_EXPRESSION)
    } else {
        tokens
    }
}

pub fn parse(tokens: &[TokenKind]) -> ast::Expression {
    Parser::new(tokens).parse()
}

/// Rejoins tokens with single spaces, showing what was actually read.
pub fn normalize(tokens: &[TokenKind]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
