//! Median of a bounded stream of integers, computed with a fixed-capacity,
//! array-backed max-heap.

pub mod macros;
pub mod error;
pub mod heap;
pub mod median;
pub mod source;

#[doc(hidden)]
pub use tracing;

pub use error::{HeapError, MedianError, Phase, SourceError};
pub use heap::BoundedMaxHeap;
pub use median::{load_heap, median_of, Strategy};
pub use source::{IntegerSource, TextSource, DEFAULT_VALUE_RANGE};
