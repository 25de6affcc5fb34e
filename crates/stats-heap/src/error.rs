use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Lifecycle of a [`crate::heap::BoundedMaxHeap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Populating,
    Queryable,
    Finalized,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Empty => "empty",
            Phase::Populating => "populating",
            Phase::Queryable => "queryable",
            Phase::Finalized => "finalized",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("The heap capacity must be at least 1")]
    InvalidCapacity,
    #[error("Unable to allocate a heap for `{capacity}` elements")]
    CapacityTooLarge { capacity: usize },
    #[error("The heap is already holding its full capacity of `{capacity}` elements")]
    CapacityExceeded { capacity: usize },
    #[error("The heap holds no elements")]
    EmptyHeap,
    #[error("The operation is not allowed while the heap is `{phase}`")]
    InvalidState { phase: Phase },
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Unable to read from the source `{0}`")]
    Io(#[from] std::io::Error),
    #[error("The source does not start with an element count")]
    MissingCount,
    #[error("Unable to parse `{token}` as an integer")]
    Parse { token: String },
    #[error("The value `{value}` is outside of the accepted range {min}..={max}")]
    OutOfRange { value: i32, min: i32, max: i32 },
    #[error("The source declared `{declared}` values but only `{read}` were read")]
    Truncated { declared: usize, read: usize },
}

#[derive(Error, Debug)]
pub enum MedianError {
    #[error(transparent)]
    Heap(#[from] HeapError),
    #[error(transparent)]
    Source(#[from] SourceError),
}
