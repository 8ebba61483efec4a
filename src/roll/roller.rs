use super::{error::RollError, RResult};
use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// A source of die faces.
pub trait Roller {
    /// Rolls one die, returning a face in `1..=sides`.
    fn roll(&mut self, sides: NonZeroUInt) -> RResult<UInt>;

    /// Rolls `num` dice, in order.
    fn roll_n(&mut self, num: usize, sides: NonZeroUInt) -> RResult<Vec<UInt>> {
        (0..num).map(|_| self.roll(sides)).collect()
    }
}

impl<R: Rng> Roller for R {
    fn roll(&mut self, sides: NonZeroUInt) -> RResult<UInt> {
        Ok(Uniform::new_inclusive(1, sides.get()).sample(self))
    }

    fn roll_n(&mut self, num: usize, sides: NonZeroUInt) -> RResult<Vec<UInt>> {
        Ok(Uniform::new_inclusive(1, sides.get())
            .sample_iter(self)
            .take(num)
            .collect())
    }
}

/// Replays a fixed sequence of faces, e.g. for reproducing a roll.
///
/// Running out of faces is reported as [RollError::Exhausted], and a face that
/// does not fit the die being rolled as [RollError::OutOfRange].
///
/// ```
/// use dice_eval::{evaluate_dice_with, roll::{Limits, Scripted}};
///
/// let result = evaluate_dice_with("3d6", Scripted::new([1, 1, 1]), Limits::default())?;
/// assert_eq!(result.total, 3);
/// # Ok::<(), dice_eval::RollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scripted<I: Iterator<Item = UInt>> {
    faces: I,
}

impl<I: Iterator<Item = UInt>> Scripted<I> {
    pub fn new(faces: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            faces: faces.into_iter(),
        }
    }
}

impl<I: Iterator<Item = UInt>> Roller for Scripted<I> {
    fn roll(&mut self, sides: NonZeroUInt) -> RResult<UInt> {
        let value = self.faces.next().ok_or(RollError::Exhausted)?;
        if (1..=sides.get()).contains(&value) {
            Ok(value)
        } else {
            Err(RollError::OutOfRange {
                value,
                sides: sides.get(),
            })
        }
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;

#[cfg(test)]
mod step {
    use super::*;

    /// Counts upward from `initial` by `step`, wrapping around each die's sides.
    pub(crate) struct StepRoller {
        current: UInt,
        step: UInt,
    }

    impl StepRoller {
        pub fn new(initial: NonZeroUInt, step: UInt) -> Self {
            Self {
                current: initial.get(),
                step,
            }
        }
    }

    impl Roller for StepRoller {
        fn roll(&mut self, sides: NonZeroUInt) -> RResult<UInt> {
            let ret = (self.current - 1) % sides.get() + 1;
            self.current += self.step;
            Ok(ret)
        }
    }
}
