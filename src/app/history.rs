use crate::core::Drawing;
use std::sync::Arc;

/// Übernommener Stand der Shape-Sammlung.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der Klon der Sammlung passiert erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case. Ein Snapshot wird danach nie mehr verändert.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Shape-Sammlung (Arc-Klon)
    pub drawing: Arc<Drawing>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            drawing: state.drawing.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.drawing = self.drawing;
    }
}

/// Lineare History übernommener Zustände mit Cursor.
///
/// `entries[cursor]` ist der aktive Stand; Einträge dahinter sind Redo-Zukunft
/// und werden beim nächsten `commit` verworfen.
#[derive(Debug)]
pub struct EditHistory {
    entries: Vec<Snapshot>,
    cursor: usize,
    max_depth: Option<usize>,
}

impl EditHistory {
    /// Erstellt eine History ohne Längenbegrenzung.
    pub fn unbounded() -> Self {
        Self::new_with_capacity(0)
    }

    /// Erstellt einen neuen History-Manager mit maximaler Tiefe; `0` heißt unbegrenzt.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = (max_depth > 0).then_some(max_depth);
        Self {
            entries: Vec::with_capacity(max_depth.unwrap_or(64).min(64)),
            cursor: 0,
            max_depth,
        }
    }

    /// Ersetzt die History durch genau einen Eintrag.
    pub fn reset(&mut self, initial: Snapshot) {
        self.entries.clear();
        self.entries.push(initial);
        self.cursor = 0;
    }

    /// Hängt einen neuen Stand an und verwirft die Redo-Zukunft.
    ///
    /// Nur bei gesetzter Maximaltiefe fällt der älteste Eintrag heraus.
    pub fn commit(&mut self, snap: Snapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(snap);
        if let Some(max_depth) = self.max_depth {
            if self.entries.len() > max_depth {
                let overflow = self.entries.len() - max_depth;
                self.entries.drain(..overflow);
            }
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Maximaltiefe, `None` bei unbegrenzter History.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Setzt den Cursor einen Schritt zurück und gibt den dortigen Stand zurück.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Setzt den Cursor einen Schritt vor und gibt den dortigen Stand zurück.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Aktiver Stand.
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor)
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position des aktiven Eintrags.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Point, Shape, ShapeId, ShapeKind};

    fn make_snapshot_with_shape_count(count: usize) -> Snapshot {
        let shapes = (1..=count)
            .map(|i| {
                let f = i as f64;
                Shape::new(
                    ShapeId(i as u64),
                    ShapeKind::Line,
                    vec![Point::new(f, f), Point::new(f * 10.0, f * 7.0)],
                    false,
                    format!("Linie {}", i),
                )
            })
            .collect();
        Snapshot {
            drawing: Arc::new(Drawing::from_shapes(shapes)),
        }
    }

    fn count(snap: &Snapshot) -> usize {
        snap.drawing.shape_count()
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
        assert!(history.current().is_none());
    }

    #[test]
    fn reset_leaves_single_entry() {
        let mut history = EditHistory::new_with_capacity(10);
        history.commit(make_snapshot_with_shape_count(1));
        history.commit(make_snapshot_with_shape_count(2));
        history.reset(make_snapshot_with_shape_count(5));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert!(!history.can_undo());
        assert_eq!(count(history.current().expect("Eintrag vorhanden")), 5);
    }

    #[test]
    fn undo_and_redo_move_the_cursor() {
        let mut history = EditHistory::new_with_capacity(10);
        history.reset(make_snapshot_with_shape_count(1));
        history.commit(make_snapshot_with_shape_count(2));
        history.commit(make_snapshot_with_shape_count(3));

        assert_eq!(count(&history.undo().expect("undo vorhanden")), 2);
        assert_eq!(count(&history.undo().expect("undo vorhanden")), 1);
        assert!(history.undo().is_none());
        assert_eq!(history.cursor(), 0);

        assert_eq!(count(&history.redo().expect("redo vorhanden")), 2);
        assert_eq!(count(&history.redo().expect("redo vorhanden")), 3);
        assert!(history.redo().is_none());
    }

    #[test]
    fn commit_truncates_redo_future() {
        let mut history = EditHistory::new_with_capacity(10);
        history.reset(make_snapshot_with_shape_count(1));
        history.commit(make_snapshot_with_shape_count(2));
        history.commit(make_snapshot_with_shape_count(3));
        history.undo();
        history.undo();

        history.commit(make_snapshot_with_shape_count(7));
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(count(&history.undo().expect("undo vorhanden")), 1);
        assert_eq!(count(&history.redo().expect("redo vorhanden")), 7);
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        history.reset(make_snapshot_with_shape_count(1));
        for i in 2..=6 {
            history.commit(make_snapshot_with_shape_count(i));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);

        let mut undo_count = 0;
        while history.undo().is_some() {
            undo_count += 1;
        }
        assert_eq!(undo_count, 2);
        assert_eq!(count(history.current().expect("Eintrag vorhanden")), 4);
    }

    #[test]
    fn unbounded_history_keeps_every_commit() {
        let mut history = EditHistory::unbounded();
        assert_eq!(history.max_depth(), None);
        history.reset(make_snapshot_with_shape_count(0));
        for i in 1..=300 {
            history.commit(make_snapshot_with_shape_count(i % 7));
        }
        assert_eq!(history.len(), 301);

        for i in (0..300).rev() {
            assert_eq!(count(&history.undo().expect("undo vorhanden")), i % 7);
        }
        assert!(!history.can_undo());
        for i in 1..=300 {
            assert_eq!(count(&history.redo().expect("redo vorhanden")), i % 7);
        }
        assert!(!history.can_redo());
    }

    #[test]
    fn snapshots_share_the_drawing_until_mutation() {
        let snap = make_snapshot_with_shape_count(2);
        let mut live = snap.drawing.clone();
        assert!(Arc::ptr_eq(&live, &snap.drawing));

        Arc::make_mut(&mut live).shapes.clear();
        assert_eq!(count(&snap), 2);
        assert_eq!(live.shape_count(), 0);
    }
}
