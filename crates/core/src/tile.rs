//! Tile module - a single grid cell
//!
//! A tile carries one uppercase letter, a kind, and its fixed grid position.
//! The only kind transition is the one-way unblock (Blocked -> Normal).

use crate::scoring::letter_score;
use crate::types::{Position, TileKind, BONUS_MULTIPLIER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    letter: char,
    kind: TileKind,
    position: Position,
    selected: bool,
}

impl Tile {
    pub fn new(letter: char, kind: TileKind, position: Position) -> Self {
        Self {
            letter,
            kind,
            position,
            selected: false,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_blocked(&self) -> bool {
        self.kind == TileKind::Blocked
    }

    pub fn is_bonus(&self) -> bool {
        self.kind == TileKind::Bonus
    }

    /// Unblock this tile if it is blocked.
    ///
    /// Returns true only when the kind actually changed.
    pub fn try_unblock(&mut self) -> bool {
        if self.is_blocked() {
            self.kind = TileKind::Normal;
            true
        } else {
            false
        }
    }

    /// Letter score, doubled for bonus tiles
    pub fn score(&self) -> u32 {
        let base = letter_score(self.letter);
        if self.is_bonus() {
            base * BONUS_MULTIPLIER
        } else {
            base
        }
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_unblock_is_one_way() {
        let mut tile = Tile::new('Q', TileKind::Blocked, Position::new(0, 0));
        assert!(tile.try_unblock());
        assert_eq!(tile.kind(), TileKind::Normal);

        // Second attempt is a no-op
        assert!(!tile.try_unblock());
        assert_eq!(tile.kind(), TileKind::Normal);
    }

    #[test]
    fn test_unblock_never_touches_bonus() {
        let mut tile = Tile::new('B', TileKind::Bonus, Position::new(2, 1));
        assert!(!tile.try_unblock());
        assert_eq!(tile.kind(), TileKind::Bonus);
    }

    #[test]
    fn test_tile_score() {
        assert_eq!(Tile::new('C', TileKind::Normal, Position::new(0, 0)).score(), 3);
        assert_eq!(Tile::new('C', TileKind::Bonus, Position::new(0, 0)).score(), 6);
        assert_eq!(Tile::new('Z', TileKind::Blocked, Position::new(0, 0)).score(), 26);
    }

    #[test]
    fn test_selection_flag() {
        let mut tile = Tile::new('A', TileKind::Normal, Position::new(0, 0));
        assert!(!tile.is_selected());
        tile.select();
        assert!(tile.is_selected());
        tile.deselect();
        assert!(!tile.is_selected());
    }
}
