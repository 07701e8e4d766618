use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// Only a reset leaves a finished game.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Full snapshot of a game, produced by [`GameEngine`] commands and read by renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    mine_count: CellCount,
    flag_count: CellCount,
    status: GameStatus,
    first_click: bool,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    current_score: u32,
    high_score: u32,
}

impl GameState {
    /// Fresh game: empty board, no mines placed yet.
    pub fn new(config: &GameConfig, high_score: u32) -> Self {
        Self {
            board: create_empty_board(config),
            mine_count: config.mines(),
            flag_count: 0,
            status: GameStatus::Playing,
            first_click: true,
            started_at: None,
            ended_at: None,
            current_score: 0,
            high_score,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.board.get(coords)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// How many mines have not been flagged yet
    pub fn mines_left(&self) -> isize {
        (self.mine_count as isize) - (self.flag_count as isize)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_first_click(&self) -> bool {
        self.first_click
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    pub fn current_score(&self) -> u32 {
        self.current_score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// How many seconds have passed since game started, 0 if it hasn't started
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        match self.started_at {
            Some(started_at) => elapsed_secs(started_at, self.ended_at.unwrap_or(now)),
            None => 0,
        }
    }

    /// Score a win at `now` would earn while playing, the recorded score once finished.
    pub fn live_score(&self, now: DateTime<Utc>) -> u32 {
        match (self.status, self.started_at) {
            (GameStatus::Playing, Some(started_at)) => calculate_score(started_at, now),
            (GameStatus::Playing, None) => 0,
            (GameStatus::Won | GameStatus::Lost, _) => self.current_score,
        }
    }
}

/// A command's resulting snapshot and what the command did.
///
/// When `outcome` reports no update, `state` equals the snapshot the command was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<O> {
    pub state: GameState,
    pub outcome: O,
}

impl<O> Transition<O> {
    fn new(state: GameState, outcome: O) -> Self {
        Self { state, outcome }
    }
}

/// Everything a presentation layer can ask of the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Reveal(Coord2),
    ToggleFlag(Coord2),
    Reset,
}

/// Applies commands to [`GameState`] snapshots.
///
/// Owns the collaborators a game needs (high score storage, clock and randomness) but never the
/// snapshot itself, every command takes the previous state and returns the next one.
#[derive(Debug)]
pub struct GameEngine<S, C = SystemClock, R = RandomSampler> {
    config: GameConfig,
    high_scores: HighScores<S>,
    clock: C,
    sampler: R,
}

impl<S: HighScoreStore, C: Clock, R: MineSampler> GameEngine<S, C, R> {
    pub fn new(config: GameConfig, store: S, clock: C, sampler: R) -> Self {
        Self {
            config,
            high_scores: HighScores::new(store),
            clock,
            sampler,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn high_scores(&self) -> &HighScores<S> {
        &self.high_scores
    }

    /// Starts a game, reading the high score from storage.
    pub fn new_game(&mut self) -> GameState {
        let high_score = self.high_scores.load();
        log::debug!(
            "New {}x{} game with {} mines, high score {}",
            self.config.rows(),
            self.config.cols(),
            self.config.mines(),
            high_score
        );
        GameState::new(&self.config, high_score)
    }

    /// Discards whatever game was going on and starts over.
    pub fn reset(&mut self) -> GameState {
        log::debug!("Game reset");
        self.new_game()
    }

    pub fn apply(&mut self, state: &GameState, command: Command) -> GameState {
        match command {
            Command::Reveal(coords) => self.reveal(state, coords).state,
            Command::ToggleFlag(coords) => self.toggle_flag(state, coords).state,
            Command::Reset => self.reset(),
        }
    }

    /// Reveals a hidden, unflagged cell, placing mines first if this is the opening move.
    pub fn reveal(&mut self, state: &GameState, coords: Coord2) -> Transition<RevealOutcome> {
        let no_change = || Transition::new(state.clone(), RevealOutcome::NoChange);

        if !state.status.is_playing() {
            return no_change();
        }
        match state.board.get(coords) {
            Some(cell) if cell.is_revealable() => {}
            _ => return no_change(),
        }

        let mut next = state.clone();

        if next.first_click {
            if let Err(err) = place_mines(&mut next.board, next.mine_count, coords, &mut self.sampler)
            {
                log::error!("Could not place mines for {:?}: {}", coords, err);
                return no_change();
            }
            let now = self.clock.now();
            log::debug!("started at {}", now);
            next.started_at = Some(now);
            next.first_click = false;
        }

        let revealed = reveal_cell(&mut next.board, coords);
        log::debug!("Revealed {} cells from {:?}", revealed, coords);

        let outcome = if next.board[coords].is_mine() {
            let now = self.clock.now();
            log::debug!("Hit mine at {:?}, ended at {}", coords, now);
            next.status = GameStatus::Lost;
            next.ended_at = Some(now);
            next.current_score = 0;
            reveal_all_mines(&mut next.board);
            next.flag_count = next.board.flag_count();
            RevealOutcome::HitMine
        } else if check_win_condition(&next.board) {
            let now = self.clock.now();
            let score = calculate_score(next.started_at.unwrap_or(now), now);
            log::debug!("Won at {}, score {}", now, score);
            next.status = GameStatus::Won;
            next.ended_at = Some(now);
            next.current_score = score;
            if score > next.high_score {
                log::info!("New high score {}, previous {}", score, next.high_score);
                next.high_score = score;
                self.high_scores.save(score);
            }
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        };

        Transition::new(next, outcome)
    }

    /// Flags or unflags a hidden cell, never placing more flags than there are mines.
    pub fn toggle_flag(&mut self, state: &GameState, coords: Coord2) -> Transition<FlagOutcome> {
        let no_change = || Transition::new(state.clone(), FlagOutcome::NoChange);

        if !state.status.is_playing() {
            return no_change();
        }
        let cell = match state.board.get(coords) {
            Some(cell) if !cell.is_revealed() => *cell,
            _ => return no_change(),
        };

        let mut next = state.clone();
        let outcome = if cell.is_flagged() {
            next.board[coords].is_flagged = false;
            next.flag_count = next.flag_count.saturating_sub(1);
            FlagOutcome::Unflagged
        } else if next.flag_count < next.mine_count {
            next.board[coords].is_flagged = true;
            next.flag_count += 1;
            FlagOutcome::Flagged
        } else {
            log::debug!("All {} flags placed, ignoring {:?}", next.mine_count, coords);
            return no_change();
        };
        log::trace!("{:?} at {:?}, flags: {}", outcome, coords, next.flag_count);

        Transition::new(next, outcome)
    }
}
