use crate::{
    board::Board,
    common::{BoardError, RevealOutcome},
    config::{max_bombs, BoardConfig, GameConfig},
};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One board plus outcome bookkeeping.
///
/// Status only moves `InProgress -> Won`, `InProgress -> Lost`, or back to
/// `InProgress` through [`GameSession::reset`].
pub struct GameSession {
    board: Board,
    config: GameConfig,
    status: GameStatus,
    flags_placed: usize,
    rng: SmallRng,
}

impl GameSession {
    /// Create a session with a fresh, unseeded board.
    pub fn new(config: GameConfig, rng: SmallRng) -> Self {
        let board = Board::new(config.board);
        let config = GameConfig {
            board: board.config(),
            ..config
        };
        Self {
            board,
            config,
            status: GameStatus::InProgress,
            flags_placed: 0,
            rng,
        }
    }

    /// Create a session whose bomb layouts are reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }

    /// Create a session seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn from_entropy(config: GameConfig) -> Self {
        let mut seed_rng = rand::rng();
        Self::new(config, SmallRng::from_rng(&mut seed_rng))
    }

    /// Wrap an existing board, e.g. one with a deliberate bomb layout.
    pub fn from_board(board: Board, rng: SmallRng) -> Self {
        let config = GameConfig {
            board: board.config(),
            restart_on_click: false,
        };
        let mut session = Self {
            flags_placed: board.count_flags(),
            board,
            config,
            status: GameStatus::InProgress,
            rng,
        };
        if session.board.bombs_placed() {
            session.check_victory();
        }
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn flags_placed(&self) -> usize {
        self.flags_placed
    }

    pub fn bomb_target(&self) -> usize {
        self.board.bomb_target()
    }

    /// Bomb target minus placed flags, for the header counter.
    pub fn remaining_bombs(&self) -> usize {
        self.bomb_target().saturating_sub(self.flags_placed)
    }

    /// Reveal the cell at `(row, col)`.
    ///
    /// The first call on a board places bombs around it, so it is always safe.
    /// After a win or loss the call is ignored, or restarts the board when
    /// `restart_on_click` is configured.
    pub fn handle_primary_action(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        if self.status != GameStatus::InProgress {
            if self.config.restart_on_click {
                self.reset(None, None, None);
            }
            return Ok(());
        }
        if self.board.cell(row, col)?.is_flagged {
            return Ok(());
        }
        if !self.board.bombs_placed() {
            self.board.place_bombs(&mut self.rng, row, col)?;
        }

        match self.board.reveal(row, col)? {
            RevealOutcome::HitBomb => {
                self.board.reveal_all();
                self.flags_placed = 0;
                self.status = GameStatus::Lost;
                info!("bomb hit at ({}, {}), game over", row, col);
                return Ok(());
            }
            RevealOutcome::Safe => {
                if self.board.cell(row, col)?.adjacent_bomb_count == 0 {
                    self.board.flood_reveal(row, col)?;
                }
            }
            RevealOutcome::AlreadyFlaggedOrRevealed => {}
        }
        self.check_victory();
        Ok(())
    }

    /// Toggle the flag at `(row, col)`. Ignored once the game is over.
    pub fn handle_secondary_action(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        if self.status != GameStatus::InProgress {
            return Ok(());
        }
        self.board.toggle_flag(row, col)?;
        self.flags_placed = self.board.count_flags();
        Ok(())
    }

    /// Mark the game won once every non-bomb cell is revealed, regardless of
    /// flags. Winning flags all remaining bombs.
    pub fn check_victory(&mut self) -> bool {
        if self.status == GameStatus::Lost {
            return false;
        }
        if self.board.count_unrevealed() == self.board.bomb_target() {
            if self.status != GameStatus::Won {
                info!("board cleared, {} bombs avoided", self.board.bomb_target());
            }
            self.status = GameStatus::Won;
            self.board.flag_all_bombs();
            self.flags_placed = self.board.count_flags();
            return true;
        }
        false
    }

    /// Discard the board and start over, optionally with new dimensions or
    /// bomb target. Values are clamped.
    pub fn reset(
        &mut self,
        new_width: Option<usize>,
        new_height: Option<usize>,
        new_bomb_target: Option<usize>,
    ) {
        let previous = self.config.board;
        let requested = BoardConfig::new(
            new_width.unwrap_or(previous.width),
            new_height.unwrap_or(previous.height),
            new_bomb_target.unwrap_or(previous.bombs),
        );
        self.board = Board::new(requested);
        self.config.board = self.board.config();
        self.status = GameStatus::InProgress;
        self.flags_placed = 0;
        info!(
            "new board {}x{} with {} bombs",
            self.board.width(),
            self.board.height(),
            self.board.bomb_target()
        );
    }

    /// Change the bomb target by `delta` and restart. Changing difficulty
    /// always discards the current board.
    pub fn adjust_bomb_target(&mut self, delta: i32) {
        let board = self.config.board;
        let upper = max_bombs(board.width, board.height);
        let target = (board.bombs as i64 + delta as i64).clamp(1, upper as i64) as usize;
        debug!("bomb target {} -> {}", board.bombs, target);
        self.reset(None, None, Some(target));
    }
}
