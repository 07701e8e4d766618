use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use sweeper_core::{Cell, GameState, GameStatus};

fn cell_symbol(cell: &Cell) -> char {
    if cell.is_flagged() {
        'F'
    } else if !cell.is_revealed() {
        '#'
    } else if cell.is_mine() {
        '*'
    } else {
        match cell.neighbor_mines() {
            0 => '.',
            count => char::from(b'0' + count),
        }
    }
}

fn format_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn status_text(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "Playing",
        GameStatus::Won => "You Won!",
        GameStatus::Lost => "Game Over",
    }
}

/// Draws the grid with row/column labels and the status panel below it.
pub fn render(state: &GameState, now: DateTime<Utc>) -> String {
    let board = state.board();
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..board.cols() {
        let _ = write!(out, "{col:>2}");
    }
    out.push('\n');

    for row in 0..board.rows() {
        let _ = write!(out, "{row:>2} ");
        for cell in board.row(row) {
            let _ = write!(out, " {}", cell_symbol(cell));
        }
        out.push('\n');
    }

    let score_label = if state.status().is_playing() {
        "Potential score"
    } else {
        "Score"
    };
    let _ = writeln!(
        out,
        "Mines: {} | Time: {} | {}: {} | High score: {}",
        state.mines_left(),
        format_time(state.elapsed_secs(now)),
        score_label,
        state.live_score(now),
        state.high_score()
    );
    let _ = writeln!(out, "{}", status_text(state.status()));

    out
}
