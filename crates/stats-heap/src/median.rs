use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::error::{MedianError, SourceError};
use crate::heap::BoundedMaxHeap;
use crate::source::IntegerSource;

/// How the median is read out of a fully loaded heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Heapsort in place, then index the middle slot.
    #[default]
    Sort,
    /// Pop the upper half of the heap.
    Pop,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Sort => write!(f, "sort"),
            Strategy::Pop => write!(f, "pop"),
        }
    }
}

/**
Sizes a heap with the source's declared count and inserts every value it
yields. A source that ends before its declared count is reported as truncated,
one that keeps going past it fails on the first surplus insert.
*/
pub fn load_heap<S: IntegerSource>(source: S) -> Result<BoundedMaxHeap, MedianError> {
    let declared = source.declared_count();
    let mut heap = BoundedMaxHeap::new(declared)?;
    for value in source {
        heap.insert(value?)?;
    }
    if heap.len() < declared {
        return Err(SourceError::Truncated {
            declared,
            read: heap.len(),
        }
        .into());
    }
    tracing::debug!(declared, "Loaded the heap from the source");
    Ok(heap)
}

pub fn median_of<S: IntegerSource>(source: S, strategy: Strategy) -> Result<i32, MedianError> {
    let mut heap = load_heap(source)?;
    let median = match strategy {
        Strategy::Sort => heap.get_median()?,
        Strategy::Pop => heap.pop_for_median()?,
    };
    Ok(median)
}
