mod ctx;
mod error;
mod limits;
mod record;
mod roller;

use crate::parse::ast;

type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext};
pub use error::RollError;
pub use limits::Limits;
pub use record::{Evaluation, RollRecord};
pub use roller::{Roller, Scripted};

pub fn eval<R: Roller>(
    expr: &ast::Expression,
    math: String,
    roller: R,
    limits: Limits,
) -> RResult<Evaluation> {
    let mut ctx = RollContext::new(limits, roller);
    ctx.eval(expr, math)
}
