//! Fixed-capacity ring buffer backing savak channels.
//!
//! [`Ring`] is a plain FIFO over preallocated storage. It is not internally
//! synchronized: the channel's core mutex supplies thread safety, so the ring
//! itself stays free of atomics.

#![warn(missing_docs)]

/// A bounded FIFO over fixed storage.
///
/// Capacity is exact, never rounded: a ring is full at `len() == capacity()`,
/// which is what decides whether a non-blocking channel send reports full.
/// Capacity 0 is a valid ring that is simultaneously empty and full.
pub struct Ring<T> {
    /// Slot storage; its length is the capacity.
    slots: Box<[Option<T>]>,

    /// Index of the oldest element.
    head: usize,

    /// Number of occupied slots.
    len: usize,
}

impl<T> Ring<T> {
    /// Creates a ring with the given capacity.
    pub fn with_capacity(capacity: usize) -> Ring<T> {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Ring {
            slots: slots.into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    /// Returns the capacity of the ring.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of buffered elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the ring holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the ring has no free slot.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Pushes an element onto the tail of the ring.
    ///
    /// Returns the element back if the ring is full.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        let index = self.wrap(self.head + self.len);
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Pops the oldest element off the head of the ring.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        let value = self.slots[self.head].take();
        self.head = self.wrap(self.head + 1);
        self.len -= 1;
        value
    }

    // head + len never exceeds 2 * capacity, so one subtraction suffices.
    fn wrap(&self, index: usize) -> usize {
        if index >= self.slots.len() {
            index - self.slots.len()
        } else {
            index
        }
    }
}
