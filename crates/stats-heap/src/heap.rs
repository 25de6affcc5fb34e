use crate::error::{HeapError, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finish {
    Sorted,
    Drained,
}

/**
A fixed-capacity binary max-heap stored in a single pre-allocated buffer.

Slot 0 is never used so the children of the node at index `k` live at `2k` and
`2k + 1` and its parent at `k / 2`. Once one of the median operations or
`heapsort` has run the heap is finalized and only the read-only accessors keep
working.
*/
#[derive(Debug, Clone)]
pub struct BoundedMaxHeap {
    heap: Vec<i32>,
    size: usize,
    finish: Option<Finish>,
}

impl BoundedMaxHeap {
    pub fn new(capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::InvalidCapacity);
        }
        let too_large = HeapError::CapacityTooLarge { capacity };
        let slots = capacity.checked_add(1).ok_or(too_large.clone())?;
        let mut heap = Vec::new();
        heap.try_reserve_exact(slots).map_err(|_| too_large)?;
        heap.resize(slots, 0);
        Ok(Self {
            heap,
            size: 0,
            finish: None,
        })
    }

    /**
    Builds a heap holding exactly `values`, copying them in as they are and
    then restoring the heap property in a single bottom-up pass.
    */
    pub fn from_values(values: &[i32]) -> Result<Self, HeapError> {
        let mut heap = Self::new(values.len())?;
        heap.heap[1..].copy_from_slice(values);
        heap.size = values.len();
        heap.rebuild();
        Ok(heap)
    }

    pub fn capacity(&self) -> usize {
        self.heap.len() - 1
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    pub fn phase(&self) -> Phase {
        match (self.finish, self.size) {
            (Some(_), _) => Phase::Finalized,
            (None, 0) => Phase::Empty,
            (None, size) if size < self.capacity() => Phase::Populating,
            _ => Phase::Queryable,
        }
    }

    /// Occupied slots in their current order.
    pub fn as_slice(&self) -> &[i32] {
        &self.heap[1..=self.size]
    }

    /**
    Ascending view of every element, available once the heap has been
    finalized by sorting (`heapsort` or `get_median`).
    */
    pub fn sorted(&self) -> Result<&[i32], HeapError> {
        match self.finish {
            Some(Finish::Sorted) => Ok(self.as_slice()),
            _ => Err(HeapError::InvalidState {
                phase: self.phase(),
            }),
        }
    }

    pub fn insert(&mut self, value: i32) -> Result<(), HeapError> {
        self.ensure_open()?;
        if self.is_full() {
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        self.size += 1;
        self.heap[self.size] = value;
        self.swim(self.size);
        Ok(())
    }

    /// Max element without removing it from the heap.
    pub fn peek_max(&self) -> Result<i32, HeapError> {
        self.ensure_open()?;
        self.ensure_not_empty()?;
        Ok(self.heap[1])
    }

    pub fn delete_max(&mut self) -> Result<i32, HeapError> {
        self.ensure_open()?;
        self.ensure_not_empty()?;

        let max = self.heap[1];
        self.heap.swap(1, self.size);
        self.heap[self.size] = 0;
        self.size -= 1;
        self.sink(1, self.size);
        Ok(max)
    }

    pub fn heapify(&mut self) -> Result<(), HeapError> {
        self.ensure_open()?;
        self.rebuild();
        Ok(())
    }

    /**
    Sorts the occupied slots in place into ascending order. The heap can no
    longer be used as a priority queue afterwards; read the result through
    [`BoundedMaxHeap::sorted`].
    */
    pub fn heapsort(&mut self) -> Result<(), HeapError> {
        self.ensure_open()?;
        self.rebuild();

        let mut bottom = self.size;
        while bottom > 1 {
            self.heap.swap(1, bottom);
            bottom -= 1;
            self.sink(1, bottom);
        }
        self.finish = Some(Finish::Sorted);
        tracing::debug!(len = self.size, "Sorted the heap in place");
        Ok(())
    }

    /**
    Sorts the heap and returns the element of rank `ceil(n / 2)`. For an even
    number of elements this is the lower of the two middle values.
    */
    pub fn get_median(&mut self) -> Result<i32, HeapError> {
        self.ensure_open()?;
        self.ensure_not_empty()?;
        self.heapsort()?;
        Ok(self.heap[(self.size + 1) / 2])
    }

    /**
    Pops the upper half of the heap and returns the last popped value, which is
    the same lower median `get_median` returns. The popped values are lost.
    */
    pub fn pop_for_median(&mut self) -> Result<i32, HeapError> {
        self.ensure_open()?;
        self.ensure_not_empty()?;

        let median_index = self.size / 2;
        let mut median = self.delete_max()?;
        for _ in 0..median_index {
            median = self.delete_max()?;
        }
        self.finish = Some(Finish::Drained);
        tracing::debug!(remaining = self.size, "Popped the heap down to its median");
        Ok(median)
    }

    fn ensure_open(&self) -> Result<(), HeapError> {
        if self.finish.is_some() {
            return Err(HeapError::InvalidState {
                phase: Phase::Finalized,
            });
        }
        Ok(())
    }

    fn ensure_not_empty(&self) -> Result<(), HeapError> {
        if self.size == 0 {
            return Err(HeapError::EmptyHeap);
        }
        Ok(())
    }

    fn rebuild(&mut self) {
        for node in (1..=self.size / 2).rev() {
            self.sink(node, self.size);
        }
    }

    fn swim(&mut self, mut node: usize) {
        while node > 1 {
            let parent = node / 2;
            if self.heap[parent] >= self.heap[node] {
                break;
            }
            self.heap.swap(node, parent);
            node = parent;
        }
    }

    /// Sinks `node` while it is smaller than a child, looking no further than `bottom`.
    fn sink(&mut self, mut node: usize, bottom: usize) {
        while node * 2 <= bottom {
            let mut child = node * 2;
            // Ties keep the left child
            if child < bottom && self.heap[child] < self.heap[child + 1] {
                child += 1;
            }
            if self.heap[node] >= self.heap[child] {
                break;
            }
            self.heap.swap(node, child);
            node = child;
        }
    }
}
