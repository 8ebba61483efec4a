use super::{ast::*, lexer::TokenKind};
use crate::common::BinaryOperator;
use std::iter::{Copied, Peekable};
use std::slice;

/// Deepest parenthesis nesting the parser descends into.
pub const MAX_DEPTH: usize = 64;

/// Recursive-descent parser over a token slice.
///
/// Parsing never fails: a missing operand becomes a literal `0`, an unclosed
/// `(` is treated as closed at the end of input, and tokens left over once the
/// top-level expression is complete are ignored. A `(` nested deeper than
/// [MAX_DEPTH] counts as a missing operand, ending the expression there.
pub struct Parser<'t> {
    tokens: Peekable<Copied<slice::Iter<'t, TokenKind>>>,
    depth: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [TokenKind]) -> Self {
        Self {
            tokens: tokens.iter().copied().peekable(),
            depth: 0,
        }
    }

    pub fn parse(mut self) -> Expression {
        self.parse_expression()
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.tokens.next()
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        self.tokens.peek().map_or(false, |&peeked| peeked == kind)
    }

    fn matches_any(&mut self, options: &[TokenKind]) -> bool {
        self.tokens
            .peek()
            .map_or(false, |peeked| options.contains(peeked))
    }

    /// Consumes `kind` if it is next. Absence is not an error.
    fn skip(&mut self, kind: TokenKind) -> bool {
        let found = self.matches(kind);
        if found {
            self.advance();
        }
        found
    }

    fn next_op(&mut self, options: &[TokenKind]) -> Option<BinaryOperator> {
        if self.matches_any(options) {
            self.advance().and_then(|kind| kind.as_binary_op())
        } else {
            None
        }
    }

    fn parse_expression(&mut self) -> Expression {
        let mut lhs = self.parse_term();

        while let Some(op) = self.next_op(TokenKind::ADDITION_OPS) {
            let rhs = self.parse_term();

            lhs = Expression::new_binary(op, lhs, rhs);
        }

        lhs
    }

    fn parse_term(&mut self) -> Expression {
        let mut lhs = self.parse_dice();

        while let Some(op) = self.next_op(TokenKind::MULTIPLICATION_OPS) {
            let rhs = self.parse_dice();

            lhs = Expression::new_binary(op, lhs, rhs);
        }

        lhs
    }

    fn parse_dice(&mut self) -> Expression {
        if self.skip(TokenKind::Dice) {
            let sides = self.parse_factor();
            return Expression::new_dice(Expression::new_literal(1), sides);
        }

        let count = self.parse_factor();
        if self.skip(TokenKind::Dice) {
            let sides = self.parse_factor();
            Expression::new_dice(count, sides)
        } else {
            count
        }
    }

    fn parse_factor(&mut self) -> Expression {
        match self.tokens.peek().copied() {
            Some(TokenKind::LeftParen) if self.depth < MAX_DEPTH => {
                self.advance();
                self.depth += 1;
                let inner = self.parse_expression();
                self.depth -= 1;
                self.skip(TokenKind::RightParen);
                inner
            }
            Some(TokenKind::Integer(x)) => {
                self.advance();
                Expression::new_literal(x)
            }
            _ => Expression::new_literal(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::BinaryOperator::*;
    use crate::parse::lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn lit(x: i64) -> Expression {
        Expression::new_literal(x)
    }

    fn bin(op: BinaryOperator, l: Expression, r: Expression) -> Expression {
        Expression::new_binary(op, l, r)
    }

    fn dice(count: Expression, sides: Expression) -> Expression {
        Expression::new_dice(count, sides)
    }

    fn check(s: &str, expected: Expression) {
        let tokens = tokenize(s);
        assert_eq!(Parser::new(&tokens).parse(), expected, "parsing {:?}", s);
    }

    #[test]
    fn test_parse_nums() {
        check("32", lit(32));
        check("(32)", lit(32));
    }

    #[test]
    fn test_parse_dice() {
        check("2d6", dice(lit(2), lit(6)));
        check("d20", dice(lit(1), lit(20)));
        check("(2)d(6)", dice(lit(2), lit(6)));
        check("(1+1)d6", dice(bin(Add, lit(1), lit(1)), lit(6)));
        check("(0-5)d6", dice(bin(Sub, lit(0), lit(5)), lit(6)));
        check("d(d4)", dice(lit(1), dice(lit(1), lit(4))));
    }

    #[test]
    fn test_parse_precedence() {
        check("2+3*4", bin(Add, lit(2), bin(Mul, lit(3), lit(4))));
        check("2*3+4", bin(Add, bin(Mul, lit(2), lit(3)), lit(4)));
        check(
            "(1d4+2)*3",
            bin(Mul, bin(Add, dice(lit(1), lit(4)), lit(2)), lit(3)),
        );
        check("2*d6", bin(Mul, lit(2), dice(lit(1), lit(6))));
    }

    #[test]
    fn test_parse_left_associative() {
        check("8-3-2", bin(Sub, bin(Sub, lit(8), lit(3)), lit(2)));
        check("8/3/2", bin(Div, bin(Div, lit(8), lit(3)), lit(2)));
        check("1+2-3+4", bin(Add, bin(Sub, bin(Add, lit(1), lit(2)), lit(3)), lit(4)));
    }

    #[test]
    fn test_parse_missing_operands() {
        check("", lit(0));
        check("5+", bin(Add, lit(5), lit(0)));
        check("*", bin(Mul, lit(0), lit(0)));
        check("3d", dice(lit(3), lit(0)));
        check("d", dice(lit(1), lit(0)));
        check("()", lit(0));
    }

    #[test]
    fn test_parse_leading_minus() {
        check("-5", bin(Sub, lit(0), lit(5)));
        check("2*-3", bin(Sub, bin(Mul, lit(2), lit(0)), lit(3)));
    }

    #[test]
    fn test_parse_unbalanced_parens() {
        check("(1+2", bin(Add, lit(1), lit(2)));
        check("((2d6", dice(lit(2), lit(6)));
        check("2)+3", lit(2));
    }

    #[test]
    fn test_parse_depth_limit() {
        check(&format!("{}7", "(".repeat(MAX_DEPTH)), lit(7));
        check(&format!("{}7", "(".repeat(MAX_DEPTH + 1)), lit(0));
        check(&format!("1+{}7", "(".repeat(MAX_DEPTH + 1)), bin(Add, lit(1), lit(0)));

        let mut nested = lit(0);
        for _ in 0..MAX_DEPTH {
            nested = dice(lit(1), nested);
        }
        check(&format!("{}6", "d(".repeat(MAX_DEPTH + 1)), dice(lit(1), nested));
    }

    #[test]
    fn test_parse_ignores_trailing_tokens() {
        check("2 3", lit(2));
        check("2d6d8", dice(lit(2), lit(6)));
    }
}
