use std::collections::VecDeque;

use crate::*;

/// Reveals the cell at `coords` and flood-fills outward through zero-count cells.
///
/// Out-of-bounds, revealed and flagged targets are left alone. Flagged cells inside the
/// cascade stay hidden. Returns how many cells were newly revealed, 0 meaning no-op.
pub fn reveal_cell(board: &mut Board, coords: Coord2) -> usize {
    match board.get(coords) {
        Some(cell) if cell.is_revealable() => {}
        _ => return 0,
    }

    let mut revealed = 0;
    let mut to_visit = VecDeque::from([coords]);

    while let Some(visit_coords) = to_visit.pop_front() {
        let cell = &mut board[visit_coords];

        // skip cells reached twice or flagged along the way
        if !cell.is_revealable() {
            continue;
        }

        cell.is_revealed = true;
        revealed += 1;
        let spreads = !cell.is_mine && cell.neighbor_mines == 0;
        log::trace!(
            "Revealed cell at {:?}, adjacent mines: {}",
            visit_coords,
            cell.neighbor_mines
        );

        if spreads {
            to_visit.extend(
                board
                    .iter_neighbors(visit_coords)
                    .filter(|&pos| board[pos].is_revealable()),
            );
        }
    }

    revealed
}

/// Whether every cell without a mine has been revealed; flags are irrelevant.
pub fn check_win_condition(board: &Board) -> bool {
    board
        .cells()
        .all(|cell| cell.is_mine() || cell.is_revealed())
}

/// Reveals every mine for the end-of-game display, clearing any flag on it.
pub fn reveal_all_mines(board: &mut Board) -> usize {
    let mut revealed = 0;
    for cell in board.cells_mut().filter(|cell| cell.is_mine) {
        if !cell.is_revealed {
            cell.is_revealed = true;
            cell.is_flagged = false;
            revealed += 1;
        }
    }
    revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_mine_coords(size, mines).unwrap()
    }

    fn revealed_coords(board: &Board) -> Vec<Coord2> {
        board
            .cells()
            .filter(|cell| cell.is_revealed())
            .map(Cell::coords)
            .collect()
    }

    #[test]
    fn numbered_cell_reveals_only_itself() {
        let mut board = board((3, 3), &[(0, 0)]);

        assert_eq!(reveal_cell(&mut board, (1, 1)), 1);
        assert_eq!(revealed_coords(&board), vec![(1, 1)]);
    }

    #[test]
    fn zero_cell_cascades_to_region_and_border() {
        // column 2 is a wall of mines, the region left of it is zero then numbered
        let mines = [(0, 2), (1, 2), (2, 2), (3, 2)];
        let mut board = board((4, 4), &mines);

        let count = reveal_cell(&mut board, (0, 0));

        assert_eq!(count, 8);
        for row in 0..4 {
            assert_eq!(board[(row, 0)].neighbor_mines(), 0);
            assert!(board[(row, 0)].is_revealed());
            assert!(board[(row, 1)].is_revealed());
            assert!(!board[(row, 2)].is_revealed());
            assert!(!board[(row, 3)].is_revealed());
        }
    }

    #[test]
    fn cascade_stops_at_numbered_border() {
        let mut board = board((5, 5), &[(4, 4)]);

        reveal_cell(&mut board, (0, 0));

        assert!(board[(3, 3)].is_revealed());
        assert_eq!(board[(3, 3)].neighbor_mines(), 1);
        assert!(!board[(4, 4)].is_revealed());
        assert_eq!(board.revealed_count(), 24);
    }

    #[test]
    fn cascade_does_not_cross_flags() {
        let mut board = board((1, 5), &[(0, 4)]);
        board[(0, 1)].is_flagged = true;

        let count = reveal_cell(&mut board, (0, 0));

        assert_eq!(count, 1);
        assert!(board[(0, 1)].is_flagged());
        assert!(!board[(0, 1)].is_revealed());
        assert!(!board[(0, 2)].is_revealed());
    }

    #[test]
    fn flagged_revealed_and_out_of_bounds_targets_are_no_ops() {
        let mut board = board((2, 2), &[(0, 0)]);
        board[(0, 1)].is_flagged = true;
        reveal_cell(&mut board, (1, 1));
        let before = board.clone();

        assert_eq!(reveal_cell(&mut board, (0, 1)), 0);
        assert_eq!(reveal_cell(&mut board, (1, 1)), 0);
        assert_eq!(reveal_cell(&mut board, (2, 0)), 0);
        assert_eq!(reveal_cell(&mut board, (0, 200)), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn revealing_a_mine_marks_only_that_mine() {
        let mut board = board((2, 2), &[(0, 0), (1, 1)]);

        assert_eq!(reveal_cell(&mut board, (0, 0)), 1);
        assert!(board[(0, 0)].is_revealed());
        assert!(!board[(1, 1)].is_revealed());
    }

    #[test]
    fn large_open_board_cascades_without_recursion() {
        let mut board = board((255, 255), &[(254, 254)]);

        let count = reveal_cell(&mut board, (0, 0));

        assert_eq!(count, 255 * 255 - 1);
        assert!(check_win_condition(&board));
    }

    #[test]
    fn win_requires_every_safe_cell_revealed() {
        let mut board = board((2, 2), &[(0, 0)]);
        assert!(!check_win_condition(&board));

        reveal_cell(&mut board, (0, 1));
        reveal_cell(&mut board, (1, 0));
        assert!(!check_win_condition(&board));

        reveal_cell(&mut board, (1, 1));
        assert!(check_win_condition(&board));
    }

    #[test]
    fn win_ignores_flags() {
        let mut board = board((1, 3), &[(0, 0)]);
        board[(0, 0)].is_flagged = true;
        reveal_cell(&mut board, (0, 1));
        reveal_cell(&mut board, (0, 2));

        assert!(check_win_condition(&board));

        let mut unflagged = Board::from_mine_coords((1, 3), &[(0, 0)]).unwrap();
        reveal_cell(&mut unflagged, (0, 2));
        reveal_cell(&mut unflagged, (0, 1));
        assert!(check_win_condition(&unflagged));
    }

    #[test]
    fn reveal_all_mines_clears_flags_on_mines() {
        let mut board = board((2, 2), &[(0, 0), (1, 1)]);
        board[(1, 1)].is_flagged = true;
        board[(0, 1)].is_flagged = true;

        assert_eq!(reveal_all_mines(&mut board), 2);
        assert!(board[(0, 0)].is_revealed());
        assert!(board[(1, 1)].is_revealed());
        assert!(!board[(1, 1)].is_flagged());
        // misplaced flag stays
        assert!(board[(0, 1)].is_flagged());
        assert!(!board[(1, 0)].is_revealed());
    }
}
