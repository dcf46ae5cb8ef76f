//! Selection session - one drag gesture across the board
//!
//! `Idle -> Dragging -> Idle`, once per gesture. The session records the
//! ordered tile positions and the letters they spell. It borrows the board
//! per call instead of holding on to it, so it can be driven in isolation.
//!
//! Additions that break a rule (already selected, not adjacent to the last
//! tile, blocked, off the board) are ignored and reported through
//! [`AddResult`]; they never fail the gesture.

use crate::board::Board;
use crate::types::Position;

/// Gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// What happened to a tile offered to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    Added,
    AlreadySelected,
    NotAdjacent,
    Blocked,
    OutOfBounds,
    /// No gesture in progress.
    NotDragging,
}

impl AddResult {
    pub fn is_added(&self) -> bool {
        matches!(self, AddResult::Added)
    }
}

/// Tiles submitted at the end of a gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub positions: Vec<Position>,
    /// Letters of the selected tiles, in order.
    pub word: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSession {
    state: DragState,
    positions: Vec<Position>,
    word: String,
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Selected positions in selection order
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Word spelled by the current selection
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Begin a new gesture on `position`.
    ///
    /// Any previous selection is dropped first. The first tile has nothing to
    /// be adjacent to, but it must still exist and must not be blocked.
    pub fn start_drag(&mut self, board: &mut Board, position: Position) -> AddResult {
        self.clear(board);
        self.state = DragState::Dragging;
        self.add_tile(board, position)
    }

    /// Extend the gesture with `position` if every selection rule holds.
    pub fn add_tile(&mut self, board: &mut Board, position: Position) -> AddResult {
        if !self.is_dragging() {
            return AddResult::NotDragging;
        }
        if self.positions.contains(&position) {
            return AddResult::AlreadySelected;
        }
        if let Some(&last) = self.positions.last() {
            if !last.is_adjacent(position) {
                return AddResult::NotAdjacent;
            }
        }
        let Some(tile) = board.tile_mut(position) else {
            return AddResult::OutOfBounds;
        };
        if tile.is_blocked() {
            return AddResult::Blocked;
        }

        tile.select();
        self.word.push(tile.letter());
        self.positions.push(position);
        tracing::trace!(%position, word = %self.word, "tile added to selection");
        AddResult::Added
    }

    /// Finish the gesture.
    ///
    /// Returns the candidate word when more than one tile was selected; a
    /// single tile never forms a word. The selection is always cleared.
    pub fn end_drag(&mut self, board: &mut Board) -> Option<Candidate> {
        let candidate = (self.positions.len() > 1).then(|| Candidate {
            positions: self.positions.clone(),
            word: self.word.clone(),
        });
        self.clear(board);
        candidate
    }

    /// Deselect every selected tile and return to idle.
    pub fn clear(&mut self, board: &mut Board) {
        for &position in &self.positions {
            if let Some(tile) = board.tile_mut(position) {
                tile.deselect();
            }
        }
        self.positions.clear();
        self.word.clear();
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LevelConfig;
    use crate::types::LevelType;

    fn board() -> Board {
        // x=0: C A T, x=1: O #X R, x=2: D E #S
        Board::from_config(
            &LevelConfig::from_columns(LevelType::WordCountGoal, &["CAT", "O#XR", "DE#S"]).unwrap(),
        )
    }

    #[test]
    fn test_diagonal_chain() {
        let mut b = board();
        let mut s = SelectionSession::new();
        assert_eq!(s.start_drag(&mut b, Position::new(0, 0)), AddResult::Added);
        // (1,1) is blocked; walk the other diagonal instead
        assert_eq!(s.add_tile(&mut b, Position::new(1, 0)), AddResult::Added);
        assert_eq!(s.add_tile(&mut b, Position::new(2, 1)), AddResult::Added);
        assert_eq!(s.word(), "COE");
        assert_eq!(s.len(), 3);
        assert!(b.tile_at(2, 1).unwrap().is_selected());
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let mut b = board();
        let mut s = SelectionSession::new();
        s.start_drag(&mut b, Position::new(0, 0));

        assert_eq!(s.add_tile(&mut b, Position::new(0, 0)), AddResult::AlreadySelected);
        assert_eq!(s.add_tile(&mut b, Position::new(2, 2)), AddResult::NotAdjacent);
        assert_eq!(s.add_tile(&mut b, Position::new(1, 1)), AddResult::Blocked);
        assert_eq!(s.add_tile(&mut b, Position::new(-1, 0)), AddResult::OutOfBounds);
        assert_eq!(s.word(), "C");
        assert_eq!(s.positions(), &[Position::new(0, 0)]);
    }

    #[test]
    fn test_add_without_drag_is_ignored() {
        let mut b = board();
        let mut s = SelectionSession::new();
        assert_eq!(s.add_tile(&mut b, Position::new(0, 0)), AddResult::NotDragging);
        assert!(s.is_empty());
    }

    #[test]
    fn test_start_drag_on_blocked_tile_selects_nothing() {
        let mut b = board();
        let mut s = SelectionSession::new();
        assert_eq!(s.start_drag(&mut b, Position::new(1, 1)), AddResult::Blocked);
        assert!(s.is_empty());
        assert!(s.end_drag(&mut b).is_none());
    }

    #[test]
    fn test_start_drag_discards_previous_selection() {
        let mut b = board();
        let mut s = SelectionSession::new();
        s.start_drag(&mut b, Position::new(0, 0));
        s.add_tile(&mut b, Position::new(0, 1));

        s.start_drag(&mut b, Position::new(2, 1));
        assert_eq!(s.word(), "E");
        assert!(!b.tile_at(0, 0).unwrap().is_selected());
        assert!(!b.tile_at(0, 1).unwrap().is_selected());
    }

    #[test]
    fn test_end_drag_single_tile_forms_nothing() {
        let mut b = board();
        let mut s = SelectionSession::new();
        s.start_drag(&mut b, Position::new(0, 2));
        assert!(s.end_drag(&mut b).is_none());
        assert!(!b.tile_at(0, 2).unwrap().is_selected());
        assert_eq!(s.state(), DragState::Idle);
    }

    #[test]
    fn test_end_drag_returns_candidate_and_clears() {
        let mut b = board();
        let mut s = SelectionSession::new();
        s.start_drag(&mut b, Position::new(0, 0));
        s.add_tile(&mut b, Position::new(0, 1));
        s.add_tile(&mut b, Position::new(0, 2));

        let candidate = s.end_drag(&mut b).unwrap();
        assert_eq!(candidate.word, "CAT");
        assert_eq!(
            candidate.positions,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
        assert!(s.is_empty());
        assert!(s.word().is_empty());
        assert!(b.tiles().iter().all(|t| !t.is_selected()));
    }
}
