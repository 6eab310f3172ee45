//! Undo/redo bookkeeping for committed strokes.

use crate::stroke::Stroke;

/// Committed strokes in draw order plus the strokes that were undone.
///
/// Every stroke lives in exactly one of the two collections. Committing a new
/// stroke drops the redo branch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeHistory {
    committed: Vec<Stroke>,
    undone: Vec<Stroke>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished stroke and discard anything that could be redone.
    pub fn commit(&mut self, stroke: Stroke) {
        log::debug!(
            target: "history",
            "commit stroke with {} points (dropping {} undone)",
            stroke.points().len(),
            self.undone.len()
        );
        self.committed.push(stroke);
        self.undone.clear();
    }

    /// Move the newest committed stroke to the redo collection.
    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(stroke) = self.committed.pop() else {
            return false;
        };
        self.undone.push(stroke);
        log::debug!(target: "history", "undo -> {} committed", self.committed.len());
        true
    }

    /// Move the most recently undone stroke back to the committed strokes.
    /// Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(stroke) = self.undone.pop() else {
            return false;
        };
        self.committed.push(stroke);
        log::debug!(target: "history", "redo -> {} committed", self.committed.len());
        true
    }

    /// Committed strokes in draw order. The iterator is `Clone`, so it can be
    /// replayed as often as needed.
    pub fn snapshot(&self) -> std::slice::Iter<'_, Stroke> {
        self.committed.iter()
    }

    /// Undone strokes, least recently undone first.
    pub fn undone(&self) -> std::slice::Iter<'_, Stroke> {
        self.undone.iter()
    }

    pub fn committed_len(&self) -> usize {
        self.committed.len()
    }

    pub fn undone_len(&self) -> usize {
        self.undone.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Drop both collections.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.undone.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use tiny_skia::Color;

    fn sample_stroke(id: u8) -> Stroke {
        let offset = id as f32;
        Stroke::from_points(
            Color::from_rgba8(id, 0, 0, 255),
            5.0,
            [Point::new(offset, offset), Point::new(offset + 1.0, offset + 1.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_new_commit_clears_redo() {
        let mut history = StrokeHistory::new();
        history.commit(sample_stroke(0));
        assert!(history.undo());
        assert_eq!(history.undone_len(), 1);

        history.commit(sample_stroke(1));
        assert_eq!(history.undone_len(), 0);
        assert_eq!(history.committed_len(), 1);
        assert!(!history.redo());
        assert_eq!(history.committed_len(), 1);
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut history = StrokeHistory::new();
        let first = sample_stroke(1);
        let second = sample_stroke(2);
        history.commit(first.clone());
        history.commit(second.clone());

        assert!(history.undo());
        assert_eq!(history.snapshot().collect::<Vec<_>>(), vec![&first]);
        assert_eq!(history.undone().collect::<Vec<_>>(), vec![&second]);

        assert!(history.undo());
        assert!(!history.undo());
        assert_eq!(history.committed_len(), 0);
        // Most recently undone is last
        assert_eq!(history.undone().collect::<Vec<_>>(), vec![&second, &first]);

        assert!(history.redo());
        assert!(history.redo());
        assert!(!history.redo());
        assert_eq!(history.snapshot().collect::<Vec<_>>(), vec![&first, &second]);
    }

    #[test]
    fn test_undo_then_redo_is_identity() {
        let mut history = StrokeHistory::new();
        for id in 0..5 {
            history.commit(sample_stroke(id));
        }
        history.undo();
        let before = history.clone();

        assert!(history.undo());
        assert!(history.redo());
        assert_eq!(history, before);
    }

    #[test]
    fn test_noops_on_empty() {
        let mut history = StrokeHistory::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(history, StrokeHistory::default());
    }

    #[test]
    fn test_each_stroke_owned_once() {
        let mut history = StrokeHistory::new();
        for id in 0..4 {
            history.commit(sample_stroke(id));
        }
        history.undo();
        history.undo();
        history.redo();
        assert_eq!(history.committed_len() + history.undone_len(), 4);
        for stroke in history.snapshot() {
            assert!(!history.undone().any(|s| s == stroke));
        }
    }

    #[test]
    fn test_snapshot_is_restartable() {
        let mut history = StrokeHistory::new();
        history.commit(sample_stroke(7));
        history.commit(sample_stroke(8));
        let snapshot = history.snapshot();
        let first_pass: Vec<_> = snapshot.clone().collect();
        let second_pass: Vec<_> = snapshot.collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut history = StrokeHistory::new();
        history.commit(sample_stroke(1));
        history.commit(sample_stroke(2));
        history.undo();
        history.clear();
        assert_eq!(history.committed_len(), 0);
        assert_eq!(history.undone_len(), 0);
    }
}
