//! `IndexedMinHeap`: a binary min-heap over dense node handles with
//! decrease-key.
//!
//! Every item is a `NodeId` keyed by a `u64` score. A position table maps
//! each handle to its slot in the heap array, so a key can be lowered (or a
//! popped item re-inserted) in O(log n) without a linear search.

use crate::types::NodeId;

const ABSENT: usize = usize::MAX;

/// Min-priority queue of node handles keyed by score.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    /// Heap array of (score, node)
    data: Vec<(u64, NodeId)>,
    /// Slot of each node in `data`, or `ABSENT`
    position: Vec<usize>,
}

impl IndexedMinHeap {
    /// Creates an empty heap able to hold handles `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            position: vec![ABSENT; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.position
            .get(node.index())
            .is_some_and(|&slot| slot != ABSENT)
    }

    /// Current score of `node`, if queued.
    pub fn score(&self, node: NodeId) -> Option<u64> {
        if self.contains(node) {
            Some(self.data[self.position[node.index()]].0)
        } else {
            None
        }
    }

    /// Inserts `node`, or moves it to `score` if already queued.
    pub fn push(&mut self, node: NodeId, score: u64) {
        if node.index() >= self.position.len() {
            self.position.resize(node.index() + 1, ABSENT);
        }

        let slot = self.position[node.index()];
        if slot == ABSENT {
            self.data.push((score, node));
            let last = self.data.len() - 1;
            self.position[node.index()] = last;
            self.sift_up(last);
            return;
        }

        let old = self.data[slot].0;
        self.data[slot].0 = score;
        if score < old {
            self.sift_up(slot);
        } else if score > old {
            self.sift_down(slot);
        }
    }

    /// Lowers the score of `node` to `score` if that is an improvement,
    /// inserting it when not queued. Returns whether anything changed.
    pub fn decrease_key(&mut self, node: NodeId, score: u64) -> bool {
        match self.score(node) {
            Some(current) if current <= score => false,
            _ => {
                self.push(node, score);
                true
            }
        }
    }

    /// Removes and returns the lowest-scored node.
    pub fn pop(&mut self) -> Option<(NodeId, u64)> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.swap(0, last);
        let (score, node) = self.data.pop()?;
        self.position[node.index()] = ABSENT;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some((node, score))
    }

    pub fn peek(&self) -> Option<(NodeId, u64)> {
        self.data.first().map(|&(score, node)| (node, score))
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.data[slot].0 < self.data[parent].0 {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.data[right].0 < self.data[left].0 {
                smaller = right;
            }

            if self.data[smaller].0 < self.data[slot].0 {
                self.swap(slot, smaller);
                slot = smaller;
            } else {
                break;
            }
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.position[self.data[a].1.index()] = a;
        self.position[self.data[b].1.index()] = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: usize) -> NodeId {
        NodeId::from_index(i)
    }

    #[test]
    fn test_pops_in_score_order() {
        let mut heap = IndexedMinHeap::with_capacity(5);
        for (i, score) in [7, 3, 9, 1, 5].into_iter().enumerate() {
            heap.push(n(i), score);
        }

        let order: Vec<u64> = std::iter::from_fn(|| heap.pop()).map(|(_, s)| s).collect();
        assert_eq!(order, vec![1, 3, 5, 7, 9]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_decrease_key_moves_to_front() {
        let mut heap = IndexedMinHeap::with_capacity(3);
        heap.push(n(0), 10);
        heap.push(n(1), 20);
        heap.push(n(2), 30);

        assert!(heap.decrease_key(n(2), 5));
        assert_eq!(heap.peek(), Some((n(2), 5)));
        assert!(!heap.decrease_key(n(2), 8));
        assert_eq!(heap.score(n(2)), Some(5));
    }

    #[test]
    fn test_decrease_key_reinserts_popped() {
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.push(n(0), 1);
        heap.push(n(1), 2);
        assert_eq!(heap.pop(), Some((n(0), 1)));
        assert!(!heap.contains(n(0)));

        assert!(heap.decrease_key(n(0), 4));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.pop(), Some((n(1), 2)));
        assert_eq!(heap.pop(), Some((n(0), 4)));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_push_raises_key() {
        let mut heap = IndexedMinHeap::with_capacity(2);
        heap.push(n(0), 1);
        heap.push(n(1), 2);
        heap.push(n(0), 3);
        assert_eq!(heap.pop(), Some((n(1), 2)));
    }

    #[test]
    fn test_grows_past_capacity() {
        let mut heap = IndexedMinHeap::with_capacity(0);
        heap.push(n(4), 2);
        assert!(heap.contains(n(4)));
        assert!(!heap.contains(n(9)));
    }
}
