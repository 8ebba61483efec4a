use crate::common::*;
use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+", |lex| saturating_int(lex.slice()))]
    Integer(Int),

    #[token("d")]
    Dice,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[regex(r"[ \t\r\n]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub const ADDITION_OPS: &'static [Self] = &[Self::Plus, Self::Minus];

    pub const MULTIPLICATION_OPS: &'static [Self] = &[Self::Star, Self::Slash];

    pub fn as_binary_op(&self) -> Option<BinaryOperator> {
        use BinaryOperator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::Slash => Div,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenKind::*;

        let s = match self {
            Integer(x) => return fmt::Display::fmt(x, f),
            Dice => "d",
            LeftParen => "(",
            RightParen => ")",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Error => "<error>",
        };
        f.write_str(s)
    }
}

/// Scans `s` into grammar tokens. Anything that is not a digit run or one of
/// `d + - * / ( )` is dropped without producing a token.
pub fn tokenize(s: &str) -> Vec<TokenKind> {
    TokenKind::lexer(s)
        .filter(|kind| *kind != TokenKind::Error)
        .collect()
}

// The regex only admits ASCII digits, so the sole failure is overflow.
fn saturating_int(s: &str) -> Int {
    s.parse().unwrap_or(Int::MAX)
}

#[cfg(test)]
mod tests {
    use super::TokenKind::*;
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_dice() {
        assert_eq!(tokenize("2d6+3"), vec![Integer(2), Dice, Integer(6), Plus, Integer(3)]);
        assert_eq!(tokenize("d20"), vec![Dice, Integer(20)]);
        assert_eq!(
            tokenize("(1d4 + 2) * 3"),
            vec![LeftParen, Integer(1), Dice, Integer(4), Plus, Integer(2), RightParen, Star, Integer(3)]
        );
    }

    #[test]
    fn test_tokenize_drops_unknown() {
        assert_eq!(tokenize(""), vec![]);
        assert_eq!(tokenize("abc"), vec![]);
        assert_eq!(tokenize("  \t\n"), vec![]);
        assert_eq!(tokenize("roll 2d6 for fire!"), vec![Integer(2), Dice, Integer(6)]);
        assert_eq!(tokenize("add 1"), vec![Dice, Dice, Integer(1)]);
        assert_eq!(tokenize("3 % 2 ^ é"), vec![Integer(3), Integer(2)]);
        assert_eq!(tokenize("2D6"), vec![Integer(2), Integer(6)]);
    }

    #[test]
    fn test_tokenize_never_signs_integers() {
        assert_eq!(tokenize("-5"), vec![Minus, Integer(5)]);
        assert_eq!(tokenize("10-4"), vec![Integer(10), Minus, Integer(4)]);
    }

    #[test]
    fn test_tokenize_saturates() {
        assert_eq!(tokenize("99999999999999999999999"), vec![Integer(Int::MAX)]);
        assert_eq!(tokenize("007"), vec![Integer(7)]);
    }

    #[test]
    fn test_display() {
        let tokens = tokenize("(2d6)/3*1-4");
        let s: Vec<_> = tokens.iter().map(ToString::to_string).collect();
        assert_eq!(s.join(" "), "( 2 d 6 ) / 3 * 1 - 4");
    }
}
