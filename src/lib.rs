//! Evaluates tabletop dice notation such as `2d6+3`, `d20` or `(1d4+2)*3`.
//!
//! Input is never rejected: characters outside the grammar are ignored, missing
//! operands count as `0`, unclosed parentheses are closed at the end of input,
//! division by zero yields `0`, and input with nothing to roll rolls `1d20`.
//! Every dice roll has its count clamped to `0..=100` and its sides to
//! `1..=1000` (see [roll::Limits]). The only possible error is a fault in the
//! random source.
//!
//! ```
//! let result = dice_eval::evaluate_dice("2d6 + 3")?;
//! assert!((5..=15).contains(&result.total));
//! assert_eq!(result.math, "2 d 6 + 3");
//! assert_eq!(result.log.len(), 1);
//! # Ok::<(), dice_eval::RollError>(())
//! ```

pub mod common;
pub mod parse;
pub mod roll;

pub use roll::{Evaluation, RollError, RollRecord};

use roll::{Limits, Roller};
use tracing::debug;

/// Evaluates `expression` with the thread-local RNG and the default [Limits].
pub fn evaluate_dice(expression: &str) -> Result<Evaluation, RollError> {
    evaluate_dice_with(expression, rand::thread_rng(), Limits::default())
}

/// Evaluates `expression`, drawing every die from `roller`.
#[tracing::instrument(level = "debug", skip(roller))]
pub fn evaluate_dice_with<R: Roller>(
    expression: &str,
    roller: R,
    limits: Limits,
) -> Result<Evaluation, RollError> {
    let tokens = parse::tokenize(expression);
    let math = parse::normalize(&tokens);
    let expr = parse::parse(&tokens);
    debug!(%math, tree = %expr, "parsed");

    let evaluation = roll::eval(&expr, math, roller, limits)?;
    debug!(total = evaluation.total, rolls = evaluation.log.len(), "evaluated");
    Ok(evaluation)
}
