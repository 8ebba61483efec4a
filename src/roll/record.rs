use crate::common::*;
use std::fmt;

/// One evaluated dice roll: the clamped count and sides, and each face rolled.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RollRecord {
    pub count: usize,
    pub sides: NonZeroUInt,
    pub rolls: Vec<UInt>,
}

impl RollRecord {
    pub fn new(count: usize, sides: NonZeroUInt, rolls: Vec<UInt>) -> Self {
        Self {
            count,
            sides,
            rolls,
        }
    }

    pub fn total(&self) -> Int {
        self.rolls.iter().map(|&x| Int::from(x)).sum()
    }
}

impl fmt::Display for RollRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}: [", self.count, self.sides)?;
        for (i, roll) in self.rolls.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", roll)?;
        }
        f.write_str("]")
    }
}

/// The outcome of evaluating a dice expression.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Evaluation {
    pub total: Int,
    /// Every dice roll, in the order it was evaluated.
    pub log: Vec<RollRecord>,
    /// The tokens that were actually read, separated by single spaces.
    pub math: String,
}

impl Evaluation {
    pub fn log_lines(&self) -> Vec<String> {
        self.log.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.math, self.total)?;
        for record in &self.log {
            write!(f, "\n  {}", record)?;
        }
        Ok(())
    }
}
