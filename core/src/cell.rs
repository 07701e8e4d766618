use serde::{Deserialize, Serialize};

use crate::*;

/// One grid position, as seen by the engine and handed to renderers.
///
/// A cell is never revealed and flagged at the same time. `neighbor_mines` is only meaningful
/// for cells without a mine and stays 0 on mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    pub(crate) neighbor_mines: u8,
    row: Coord,
    col: Coord,
}

impl Cell {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self {
            is_mine: false,
            is_revealed: false,
            is_flagged: false,
            neighbor_mines: 0,
            row,
            col,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn neighbor_mines(&self) -> u8 {
        self.neighbor_mines
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn col(&self) -> Coord {
        self.col
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    /// Hidden and not flagged, i.e. something a reveal would act on.
    pub const fn is_revealable(&self) -> bool {
        !self.is_revealed && !self.is_flagged
    }
}
