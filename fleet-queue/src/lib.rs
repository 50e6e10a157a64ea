use errors::QueueError;
pub mod errors;

/// Number of slots of the queue used to store planes. One slot always stays empty.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1000;

/// A fixed-capacity FIFO queue backed by a circular buffer.
///
/// `front` points to the oldest element and `rear` to the next free slot; both wrap
/// modulo the capacity. One slot is always kept empty so that `front == rear` can only
/// mean "empty", which caps the number of live elements at `capacity - 1`.
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    rear: usize,
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularQueue<T> {
    /// Creates a new, empty queue with `DEFAULT_QUEUE_CAPACITY` slots.
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(DEFAULT_QUEUE_CAPACITY);
        slots.resize_with(DEFAULT_QUEUE_CAPACITY, || None);
        CircularQueue {
            slots,
            front: 0,
            rear: 0,
        }
    }

    /// Creates a new, empty queue with the given number of slots.
    ///
    /// # Parameters
    /// - `capacity`: The number of slots. The queue can hold `capacity - 1` elements.
    ///
    /// # Returns
    /// * `Result<CircularQueue<T>, QueueError<T>>` - The queue, or `QueueError::InvalidCapacity`
    ///   if `capacity` is lower than 2.
    pub fn with_capacity(capacity: usize) -> Result<Self, QueueError<T>> {
        if capacity < 2 {
            return Err(QueueError::InvalidCapacity(capacity));
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(CircularQueue {
            slots,
            front: 0,
            rear: 0,
        })
    }

    /// Inserts an element at the rear of the queue.
    ///
    /// # Parameters
    /// - `item`: The element to insert. The queue takes ownership of it.
    ///
    /// # Returns
    /// * `Result<(), QueueError<T>>` - `Ok(())` if the element was stored, or
    ///   `QueueError::Full(item)` giving the element back when `capacity - 1` elements
    ///   are already stored. The queue is left untouched on failure.
    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError<T>> {
        if self.is_full() {
            return Err(QueueError::Full(item));
        }
        self.slots[self.rear] = Some(item);
        self.rear = (self.rear + 1) % self.capacity();
        Ok(())
    }

    /// Removes and returns the element at the front of the queue, or `None` if it is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        item
    }

    /// Returns a reference to the element at the front without removing it.
    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Number of elements currently stored.
    pub fn size(&self) -> usize {
        (self.capacity() + self.rear - self.front) % self.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    pub fn is_full(&self) -> bool {
        self.size() >= self.capacity() - 1
    }

    /// Number of slots, including the one that is always kept free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// How many more elements can be enqueued before the queue is full.
    pub fn remaining(&self) -> usize {
        self.capacity() - 1 - self.size()
    }
}
