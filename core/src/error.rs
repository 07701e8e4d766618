use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    InvalidDimensions,
    #[error("At least one mine is required")]
    NoMines,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Mines were already placed on this board")]
    MinesAlreadyPlaced,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failure reading or writing the persisted high score.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("High score storage unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed high score record: {0}")]
    Format(#[from] serde_json::Error),
}
