use crate::common::*;
use crate::parse::ast;

pub trait AstVisitor {
    type Output;

    fn visit<T: ?Sized>(&mut self, node: &T) -> Self::Output
    where
        T: Accept<Self>,
    {
        node.accept(self)
    }

    fn visit_literal(&mut self, x: &Int) -> Self::Output;

    fn visit_binary(
        &mut self,
        op: &BinaryOperator,
        l: &ast::Expression,
        r: &ast::Expression,
    ) -> Self::Output;

    fn visit_dice(&mut self, count: &ast::Expression, sides: &ast::Expression) -> Self::Output;
}

pub trait Accept<V: AstVisitor + ?Sized> {
    fn accept(&self, v: &mut V) -> V::Output;
}

impl<V: AstVisitor + ?Sized> Accept<V> for ast::Expression {
    fn accept(&self, v: &mut V) -> V::Output {
        match self {
            Self::Literal(x) => v.visit_literal(x),
            Self::Binary(op, l, r) => v.visit_binary(op, l, r),
            Self::Dice(count, sides) => v.visit_dice(count, sides),
        }
    }
}
