use super::{limits::Limits, record::*, roller::Roller, RResult};
use crate::common::*;
use crate::parse::{
    ast,
    visit::{Accept, AstVisitor},
};
use tracing::trace;

pub type DefaultRoller = rand::rngs::ThreadRng;

/// Walks an expression tree, rolling dice with `R` and keeping a log of every roll.
pub struct RollContext<R = DefaultRoller> {
    limits: Limits,
    roller: R,
    log: Vec<RollRecord>,
}

impl<R: Roller> RollContext<R> {
    pub fn new(limits: Limits, roller: R) -> Self {
        Self {
            limits,
            roller,
            log: Vec::new(),
        }
    }

    /// Evaluates `expr` left to right, depth first. The roll log starts empty
    /// on every call.
    pub fn eval(&mut self, expr: &ast::Expression, math: String) -> RResult<Evaluation> {
        self.log.clear();
        let total = expr.accept(self);
        let log = std::mem::take(&mut self.log);
        Ok(Evaluation {
            total: total?,
            log,
            math,
        })
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new(Limits::default(), rand::thread_rng())
    }
}

impl<R: Roller> AstVisitor for RollContext<R> {
    type Output = RResult<Int>;

    fn visit_literal(&mut self, x: &Int) -> Self::Output {
        Ok(*x)
    }

    fn visit_binary(
        &mut self,
        op: &BinaryOperator,
        l: &ast::Expression,
        r: &ast::Expression,
    ) -> Self::Output {
        let left = self.visit(l)?;
        let right = self.visit(r)?;
        Ok(op.apply(left, right))
    }

    fn visit_dice(&mut self, count: &ast::Expression, sides: &ast::Expression) -> Self::Output {
        let count = self.visit(count)?;
        let sides = self.visit(sides)?;

        let count = self.limits.clamp_count(count);
        let sides = self.limits.clamp_sides(sides);
        let rolls = self.roller.roll_n(count, sides)?;

        let record = RollRecord::new(count, sides, rolls);
        trace!(roll = %record, "rolled dice");
        let total = record.total();
        self.log.push(record);
        Ok(total)
    }
}
