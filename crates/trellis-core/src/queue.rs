//! Minimum-priority queue with decrease-key.
//!
//! A binary heap over string keys paired with an auxiliary key -> slot map,
//! so [`PriorityQueue::decrease`] can find and sift an arbitrary entry in
//! O(log n). Used by the Dijkstra and Prim algorithms.

use std::collections::HashMap;

use crate::error::{GraphError, Result};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    priority: f64,
}

/// A minimum-priority queue over string keys.
///
/// Heap order is restored with plain sift operations and strict comparisons,
/// so a fixed sequence of operations always yields the same removal order.
#[derive(Debug, Clone, Default)]
pub struct PriorityQueue {
    entries: Vec<Entry>,
    positions: HashMap<String, usize>,
}

impl PriorityQueue {
    pub fn new() -> Self {
        PriorityQueue::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys currently in the queue, in arbitrary order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    pub fn has(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// The key's current priority, or `None` if it is not in the queue.
    pub fn priority(&self, key: &str) -> Option<f64> {
        self.positions.get(key).map(|&slot| self.entries[slot].priority)
    }

    /// Peek the minimum-priority key without removing it.
    pub fn min(&self) -> Result<&str> {
        self.entries
            .first()
            .map(|e| e.key.as_str())
            .ok_or(GraphError::QueueUnderflow)
    }

    /// Insert the key; returns `false` without effect if it is already
    /// present.
    pub fn add(&mut self, key: impl Into<String>, priority: f64) -> bool {
        let key = key.into();
        if self.positions.contains_key(&key) {
            return false;
        }
        let slot = self.entries.len();
        self.positions.insert(key.clone(), slot);
        self.entries.push(Entry { key, priority });
        self.sift_up(slot);
        true
    }

    /// Remove and return the minimum-priority key.
    pub fn remove_min(&mut self) -> Result<String> {
        if self.entries.is_empty() {
            return Err(GraphError::QueueUnderflow);
        }
        let last = self.entries.len() - 1;
        self.swap(0, last);
        let Some(entry) = self.entries.pop() else {
            return Err(GraphError::QueueUnderflow);
        };
        self.positions.remove(&entry.key);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(entry.key)
    }

    /// Lower the key's priority. Fails if the key is absent or the new
    /// priority is greater than the current one.
    pub fn decrease(&mut self, key: &str, priority: f64) -> Result<()> {
        let Some(&slot) = self.positions.get(key) else {
            return Err(GraphError::QueueKeyNotFound {
                key: key.to_string(),
            });
        };
        let current = self.entries[slot].priority;
        if priority > current {
            return Err(GraphError::PriorityNotDecreased {
                key: key.to_string(),
                current,
                new: priority,
            });
        }
        self.entries[slot].priority = priority;
        self.sift_up(slot);
        Ok(())
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.positions.insert(self.entries[a].key.clone(), a);
        self.positions.insert(self.entries[b].key.clone(), b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[parent].priority <= self.entries[slot].priority {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < self.entries.len()
                && self.entries[left].priority < self.entries[smallest].priority
            {
                smallest = left;
            }
            if right < self.entries.len()
                && self.entries[right].priority < self.entries[smallest].priority
            {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
