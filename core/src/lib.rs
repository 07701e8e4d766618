use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use clock::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use score::*;
pub use shared::*;
pub use store::*;
pub use types::*;

mod board;
mod cell;
mod clock;
mod engine;
mod error;
mod generator;
mod reveal;
mod score;
mod shared;
mod store;
mod types;

pub const DEFAULT_ROWS: Coord = 9;
pub const DEFAULT_COLS: Coord = 9;
pub const DEFAULT_MINES: CellCount = 10;

/// Board dimensions and mine count for a game.
///
/// Always satisfies `rows > 0`, `cols > 0` and `0 < mines < rows * cols`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    rows: Coord,
    cols: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if mines == 0 {
            return Err(GameError::NoMines);
        }
        if mines >= mult(rows, cols) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_MINES)
    }
}

/// Outcome of toggling a flag
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    /// Whether this outcome produced a different snapshot
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Flagged => true,
            Self::Unflagged => true,
        }
    }
}

/// Outcome of revealing a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome produced a different snapshot
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_nine_by_nine_with_ten_mines() {
        let config = GameConfig::default();

        assert_eq!(config.size(), (9, 9));
        assert_eq!(config.mines(), 10);
        assert_eq!(config.safe_cells(), 71);
    }

    #[test]
    fn config_rejects_degenerate_values() {
        assert_eq!(GameConfig::new(0, 9, 10), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new(9, 0, 10), Err(GameError::InvalidDimensions));
        assert_eq!(GameConfig::new(9, 9, 0), Err(GameError::NoMines));
        assert_eq!(GameConfig::new(3, 3, 9), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(3, 3, 8).map(|c| c.mines()), Ok(8));
    }

    #[test]
    fn outcomes_report_updates() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::HitMine.has_update());
        assert!(!FlagOutcome::NoChange.has_update());
        assert!(FlagOutcome::Unflagged.has_update());
    }
}
