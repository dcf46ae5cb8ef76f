//! Board module - manages the letter grid
//!
//! The board is a `width x height` grid of tiles stored in a flat vector using
//! the same column-major layout as level data (see [`grid_index`]).
//! Coordinates: (x, y) where x ranges 0..width and y ranges 0..height.
//!
//! The board is always rebuilt to exactly the configured size, so no tile from
//! a previous, larger level can survive outside the new footprint.

use arrayvec::ArrayVec;

use crate::config::{grid_index, grid_position, LevelConfig};
use crate::framing::{frame_for_grid, CameraFraming};
use crate::tile::Tile;
use crate::types::{GridSize, Position};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    size: GridSize,
    /// Flat vector of tiles, column-major (x * height + y)
    tiles: Vec<Tile>,
}

impl Board {
    /// Create an empty 0x0 board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board for the given level
    pub fn from_config(config: &LevelConfig) -> Self {
        let mut board = Self::new();
        board.initialize(config);
        board
    }

    /// Replace every tile with the level's authored grid.
    pub fn initialize(&mut self, config: &LevelConfig) {
        let size = config.grid_size;
        self.size = size;
        self.tiles.clear();
        self.tiles.reserve(size.tile_count());
        for (index, cell) in config.cells().iter().enumerate() {
            // cells() always matches size, so the position exists
            if let Some(position) = grid_position(index, size) {
                self.tiles.push(Tile::new(cell.letter, cell.kind, position));
            }
        }
        tracing::debug!(width = size.x, height = size.y, "board initialized");
    }

    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Get tile at position (x, y)
    /// Returns None if out of bounds
    pub fn tile_at(&self, x: i32, y: i32) -> Option<&Tile> {
        self.tile(Position::new(x, y))
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        grid_index(position, self.size).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        grid_index(position, self.size).map(move |i| &mut self.tiles[i])
    }

    pub fn contains(&self, position: Position) -> bool {
        grid_index(position, self.size).is_some()
    }

    /// All tiles in column-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Try to unblock the four edge-sharing neighbours of `position`.
    ///
    /// Diagonal neighbours are never touched. Returns the positions whose
    /// tile actually changed from blocked to normal.
    pub fn unblock_neighbors_of(&mut self, position: Position) -> ArrayVec<Position, 4> {
        let mut unblocked = ArrayVec::new();
        for neighbor in position.orthogonal_neighbors() {
            if let Some(tile) = self.tile_mut(neighbor) {
                if tile.try_unblock() {
                    unblocked.push(neighbor);
                }
            }
        }
        unblocked
    }

    /// Clear the selected flag on every tile
    pub fn deselect_all(&mut self) {
        for tile in &mut self.tiles {
            tile.deselect();
        }
    }

    /// Number of tiles still blocked
    pub fn blocked_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_blocked()).count()
    }

    /// Camera parameters that frame the whole grid for the given aspect ratio
    pub fn framing(&self, aspect_ratio: f32) -> Option<CameraFraming> {
        frame_for_grid(self.size, aspect_ratio)
    }

    /// Letters as rows, top row first, for display and debugging.
    pub fn rows(&self) -> Vec<String> {
        (0..self.size.y as i32)
            .rev()
            .map(|y| {
                (0..self.size.x as i32)
                    .filter_map(|x| self.tile_at(x, y).map(Tile::letter))
                    .collect()
            })
            .collect()
    }
}
