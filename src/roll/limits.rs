use crate::common::{Int, NonZeroUInt, UInt};

/// Safety bounds applied to every dice roll, whatever its operands evaluated to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Limits {
    pub max_count: usize,
    pub max_sides: NonZeroUInt,
}

impl Limits {
    pub const DEFAULT_MAX_COUNT: usize = 100;
    pub const DEFAULT_MAX_SIDES: NonZeroUInt = match NonZeroUInt::new(1000) {
        Some(x) => x,
        None => panic!("default max sides must be non-zero"),
    };

    pub fn new(max_count: usize, max_sides: NonZeroUInt) -> Self {
        Self {
            max_count,
            max_sides,
        }
    }

    /// Clamps a dice count into `0..=max_count`.
    pub fn clamp_count(&self, count: Int) -> usize {
        let max = Int::try_from(self.max_count).unwrap_or(Int::MAX);
        usize::try_from(count.clamp(0, max)).unwrap_or(self.max_count)
    }

    /// Clamps a number of sides into `1..=max_sides`.
    pub fn clamp_sides(&self, sides: Int) -> NonZeroUInt {
        let clamped = sides.clamp(1, Int::from(self.max_sides.get()));
        UInt::try_from(clamped)
            .ok()
            .and_then(NonZeroUInt::new)
            .unwrap_or(self.max_sides)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_count: Self::DEFAULT_MAX_COUNT,
            max_sides: Self::DEFAULT_MAX_SIDES,
        }
    }
}
