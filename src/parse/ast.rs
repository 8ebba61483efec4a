use crate::common::*;
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expression {
    Literal(Int),
    Binary(BinaryOperator, Box<Expression>, Box<Expression>),
    Dice(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn new_literal(x: Int) -> Self {
        Self::Literal(x)
    }

    pub fn new_binary(op: BinaryOperator, lhs: Self, rhs: Self) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn new_dice(count: Self, sides: Self) -> Self {
        Self::Dice(Box::new(count), Box::new(sides))
    }
}

/// Fully parenthesized rendering, so the grouping chosen by the parser is visible.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(x) => write!(f, "{}", x),
            Self::Binary(op, l, r) => write!(f, "({} {} {})", l, op, r),
            Self::Dice(count, sides) => {
                fmt_dice_operand(count, f)?;
                f.write_str("d")?;
                fmt_dice_operand(sides, f)
            }
        }
    }
}

fn fmt_dice_operand(x: &Expression, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match x {
        Expression::Dice(..) => write!(f, "({})", x),
        _ => write!(f, "{}", x),
    }
}
