use std::collections::VecDeque;

use crate::types::{Pose, RequestId};

/// Pending target owned by a single request
#[derive(Debug, Clone, Copy)]
pub struct QueueEntry {
    pub id: RequestId,
    pub target: Pose,
}

/// FIFO of in-flight requests. Only the head may drive the camera.
#[derive(Debug, Default)]
pub struct TransitionQueue {
    entries: VecDeque<QueueEntry>,
}

impl TransitionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: RequestId, target: Pose) {
        self.entries.push_back(QueueEntry { id, target });
    }

    pub fn head(&self) -> Option<RequestId> {
        self.entries.front().map(|entry| entry.id)
    }

    pub fn is_head(&self, id: RequestId) -> bool {
        self.head() == Some(id)
    }

    pub fn contains(&self, id: RequestId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Target of the most recently queued request
    pub fn last_target(&self) -> Option<Pose> {
        self.entries.back().map(|entry| entry.target)
    }

    /// Remove the head, but only if it belongs to `id`
    pub fn pop_head(&mut self, id: RequestId) -> Option<QueueEntry> {
        if self.is_head(id) {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Drop every entry; returns how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    fn pose(width: f32) -> Pose {
        Pose::new(Mat4::IDENTITY, width)
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = TransitionQueue::new();
        queue.push(RequestId(1), pose(1.0));
        queue.push(RequestId(2), pose(2.0));

        assert_eq!(queue.head(), Some(RequestId(1)));
        assert_eq!(queue.last_target().map(|p| p.width), Some(2.0));
        assert!(queue.pop_head(RequestId(1)).is_some());
        assert_eq!(queue.head(), Some(RequestId(2)));
    }

    #[test]
    fn test_pop_head_requires_owner() {
        let mut queue = TransitionQueue::new();
        queue.push(RequestId(1), pose(1.0));
        queue.push(RequestId(2), pose(2.0));

        assert!(queue.pop_head(RequestId(2)).is_none());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_membership_uses_ids_not_values() {
        let mut queue = TransitionQueue::new();
        queue.push(RequestId(1), pose(3.0));
        queue.push(RequestId(2), pose(3.0));

        assert!(queue.contains(RequestId(2)));
        assert!(!queue.is_head(RequestId(2)));
        assert!(!queue.contains(RequestId(3)));
    }

    #[test]
    fn test_clear() {
        let mut queue = TransitionQueue::new();
        queue.push(RequestId(1), pose(1.0));
        queue.push(RequestId(2), pose(2.0));

        assert_eq!(queue.clear(), 2);
        assert!(queue.is_empty());
        assert_eq!(queue.head(), None);
        assert!(queue.last_target().is_none());
    }
}
