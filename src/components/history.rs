//! Undo/redo history of full-buffer snapshots.
//!
//! Each entry is a complete copy of the working buffer at some prior point
//! in time. The stacks are uncapped: history is bounded only by available
//! memory, and the byte total is tracked so the UI can show it.

use image::RgbImage;

pub struct SnapshotHistory {
    undo_stack: Vec<RgbImage>,
    redo_stack: Vec<RgbImage>,
    /// Running byte total across both stacks.
    total_bytes: usize,
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            total_bytes: 0,
        }
    }

    /// Record the buffer state as it was *before* a mutating operation.
    /// Any redoable states become unreachable and are dropped.
    pub fn push(&mut self, snapshot: RgbImage) {
        for dropped in self.redo_stack.drain(..) {
            self.total_bytes = self.total_bytes.saturating_sub(snapshot_bytes(&dropped));
        }
        self.total_bytes += snapshot_bytes(&snapshot);
        self.undo_stack.push(snapshot);
    }

    /// Pop the most recent snapshot, parking `current` on the redo stack.
    /// Returns the buffer to restore, or `None` when there is nothing left
    /// to undo.
    pub fn undo(&mut self, current: &RgbImage) -> Option<RgbImage> {
        let snapshot = self.undo_stack.pop()?;
        self.total_bytes = self.total_bytes.saturating_sub(snapshot_bytes(&snapshot));
        self.total_bytes += snapshot_bytes(current);
        self.redo_stack.push(current.clone());
        Some(snapshot)
    }

    /// Inverse of [`undo`](Self::undo).
    pub fn redo(&mut self, current: &RgbImage) -> Option<RgbImage> {
        let snapshot = self.redo_stack.pop()?;
        self.total_bytes = self.total_bytes.saturating_sub(snapshot_bytes(&snapshot));
        self.total_bytes += snapshot_bytes(current);
        self.undo_stack.push(current.clone());
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Current memory held by the history, in bytes (O(1) via cached total).
    pub fn memory_usage(&self) -> usize {
        self.total_bytes
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.total_bytes = 0;
    }
}

fn snapshot_bytes(image: &RgbImage) -> usize {
    image.as_raw().len()
}
