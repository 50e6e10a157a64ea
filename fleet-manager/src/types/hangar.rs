use std::fmt;
use std::io::Write;

use fleet_queue::errors::QueueError;
use fleet_queue::CircularQueue;

use super::fleet_error::FleetError;
use super::plane::Plane;

/// The planes of the fleet, kept in a bounded FIFO queue.
///
/// The queue only exposes its front, so reading every plane is done by rotating the
/// whole queue once: each plane is dequeued, visited and enqueued again at the rear.
/// After a complete rotation the queue holds the same planes in the same order.
pub struct Hangar {
    planes: CircularQueue<Plane>,
}

/// Result of counting planes by category.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeTally {
    /// One entry per category, in the order the categories were given.
    pub counts: Vec<(String, usize)>,
    /// Planes whose type matched none of the categories.
    pub unmatched: usize,
}

impl TypeTally {
    /// Sum of the category counts. Unmatched planes are not included.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn count_of(&self, label: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(category, _)| category == label)
            .map(|(_, count)| *count)
    }
}

impl fmt::Display for TypeTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nPlane Type Count:")?;
        for (label, count) in &self.counts {
            writeln!(f, "Type {}: {}", label, count)?;
        }
        if self.unmatched > 0 {
            writeln!(f, "Planes with an unlisted type: {}", self.unmatched)?;
        }
        Ok(())
    }
}

impl Default for Hangar {
    fn default() -> Self {
        Self::new()
    }
}

impl Hangar {
    pub fn new() -> Self {
        Hangar {
            planes: CircularQueue::new(),
        }
    }

    /// Creates a hangar whose queue has `capacity` slots, so it holds `capacity - 1` planes.
    pub fn with_capacity(capacity: usize) -> Result<Self, FleetError> {
        let planes = CircularQueue::with_capacity(capacity)
            .map_err(|e: QueueError<Plane>| FleetError::InvalidInput(e.to_string()))?;
        Ok(Hangar { planes })
    }

    /// Adds a plane at the back of the queue.
    ///
    /// # Errors
    /// - `FleetError::HangarFull` if the queue has no free slot. The rejected plane is
    ///   dropped and the queue is left untouched.
    pub fn add_plane(&mut self, plane: Plane) -> Result<(), FleetError> {
        self.planes.enqueue(plane).map_err(|e| match e {
            QueueError::Full(rejected) => FleetError::HangarFull(rejected.plane_id),
            QueueError::InvalidCapacity(capacity) => {
                FleetError::InvalidInput(format!("invalid hangar capacity {}", capacity))
            }
        })
    }

    /// Visits every plane from front to back by rotating the queue once.
    ///
    /// The rotation always runs to completion, even if `visit` fails, so the queue keeps
    /// its order. The first error returned by `visit` is returned afterwards.
    pub fn traverse<F>(&mut self, mut visit: F) -> Result<(), FleetError>
    where
        F: FnMut(&Plane) -> Result<(), FleetError>,
    {
        let mut first_error = None;
        let size = self.planes.size();

        for _ in 0..size {
            let Some(plane) = self.planes.dequeue() else {
                break;
            };

            if first_error.is_none() {
                if let Err(e) = visit(&plane) {
                    first_error = Some(e);
                }
            }

            // A slot was just freed, so this cannot be rejected
            if let Err(e) = self.planes.enqueue(plane) {
                let plane_id = e.into_inner().map(|p| p.plane_id).unwrap_or_default();
                return Err(FleetError::HangarFull(plane_id));
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Writes the details of every plane, front to back.
    pub fn list_all<W: Write>(&mut self, out: &mut W) -> Result<(), FleetError> {
        writeln!(out, "\nPlane Details:")?;
        if self.is_empty() {
            writeln!(out, "No planes available.")?;
        }
        self.traverse(|plane| {
            writeln!(out, "{}", plane)?;
            Ok(())
        })
    }

    /// Counts planes whose type equals one of `categories` exactly. The first matching
    /// category wins; planes matching none are only reported in `unmatched`.
    pub fn count_by_type(&mut self, categories: &[&str]) -> Result<TypeTally, FleetError> {
        let mut counts: Vec<(String, usize)> = categories
            .iter()
            .map(|label| (label.to_string(), 0))
            .collect();
        let mut unmatched = 0;

        self.traverse(|plane| {
            match counts
                .iter_mut()
                .find(|(label, _)| *label == plane.plane_type)
            {
                Some((_, count)) => *count += 1,
                None => unmatched += 1,
            }
            Ok(())
        })?;

        Ok(TypeTally { counts, unmatched })
    }

    /// Collects a copy of every plane, front to back.
    pub fn snapshot(&mut self) -> Result<Vec<Plane>, FleetError> {
        let mut planes = Vec::with_capacity(self.len());
        self.traverse(|plane| {
            planes.push(plane.clone());
            Ok(())
        })?;
        Ok(planes)
    }

    pub fn peek_front(&self) -> Option<&Plane> {
        self.planes.peek_front()
    }

    pub fn len(&self) -> usize {
        self.planes.size()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.planes.is_full()
    }

    pub fn remaining(&self) -> usize {
        self.planes.remaining()
    }
}
