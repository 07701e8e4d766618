use crate::*;
pub use random::*;

mod random;

/// Source of randomness for mine placement.
pub trait MineSampler {
    /// Picks `amount` distinct entries of `candidates`, every subset equally likely.
    fn sample(&mut self, candidates: &[Coord2], amount: usize) -> Vec<Coord2>;
}

impl<T: MineSampler + ?Sized> MineSampler for &mut T {
    fn sample(&mut self, candidates: &[Coord2], amount: usize) -> Vec<Coord2> {
        (**self).sample(candidates, amount)
    }
}

/// Board with every cell hidden, unflagged and mine-free.
pub fn create_empty_board(config: &GameConfig) -> Board {
    Board::new(config.size())
}

/// Places `mines` mines anywhere except `exclude`, then fills in neighbor counts.
///
/// Meant to run once per game, right before the first reveal.
pub fn place_mines<R: MineSampler + ?Sized>(
    board: &mut Board,
    mines: CellCount,
    exclude: Coord2,
    sampler: &mut R,
) -> Result<()> {
    if !board.contains(exclude) {
        return Err(GameError::InvalidCoords);
    }
    if board.mine_count() > 0 {
        return Err(GameError::MinesAlreadyPlaced);
    }

    let candidates: Vec<Coord2> = board
        .cells()
        .map(Cell::coords)
        .filter(|&coords| coords != exclude)
        .collect();
    let amount = usize::from(mines);
    if amount > candidates.len() {
        return Err(GameError::TooManyMines);
    }

    for coords in sampler.sample(&candidates, amount) {
        if coords == exclude || !board.contains(coords) {
            log::warn!("Sampler proposed unusable mine position {:?}, skipped", coords);
            continue;
        }
        board[coords].is_mine = true;
    }
    board.update_neighbor_counts();

    // double check mine count
    let placed = board.mine_count();
    if placed != mines {
        log::warn!(
            "Placed mine count mismatch, actual: {}, requested: {}",
            placed,
            mines
        );
    }
    log::debug!("Placed {} mines, first reveal at {:?}", placed, exclude);

    Ok(())
}
