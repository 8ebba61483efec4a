use crate::common::UInt;
use thiserror::Error;

/// Faults of the random source. Nothing else about an expression can fail.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RollError {
    #[error("random source exhausted")]
    Exhausted,
    #[error("random source produced {value}, outside of 1..={sides}")]
    OutOfRange { value: UInt, sides: UInt },
}
