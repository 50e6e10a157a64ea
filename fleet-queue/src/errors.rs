use std::fmt::{self, Debug, Display};

/// Enum representing the possible errors that can occur within the `CircularQueue`.
///
/// The possible errors are:
///
/// - `Full`: the queue already holds `capacity - 1` elements. The rejected element is
///   handed back so the caller keeps ownership of it.
/// - `InvalidCapacity`: the queue was built with a capacity that cannot hold any element.
#[derive(PartialEq)]
pub enum QueueError<T> {
    Full(T),
    InvalidCapacity(usize),
}

impl<T> QueueError<T> {
    /// Returns the rejected element, if this error carries one.
    pub fn into_inner(self) -> Option<T> {
        match self {
            QueueError::Full(item) => Some(item),
            QueueError::InvalidCapacity(_) => None,
        }
    }
}

impl<T> Debug for QueueError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Full(_) => write!(f, "Full(..)"),
            QueueError::InvalidCapacity(capacity) => write!(f, "InvalidCapacity({})", capacity),
        }
    }
}

impl<T> Display for QueueError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Full(_) => write!(f, "[Full]: The queue has no free slots left"),
            QueueError::InvalidCapacity(capacity) => write!(
                f,
                "[InvalidCapacity]: A queue needs a capacity of at least 2, got {}",
                capacity
            ),
        }
    }
}

impl<T> std::error::Error for QueueError<T> {}
