//! Game state and turn sequencing for the Gobang GUI

use crate::config::{GameConfig, GameMode};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{EngineError, GameError};
use crate::rules::{check_outcome, find_five_line, Outcome};
use crate::{format_pos, Board, Pos, Stone};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// None for a draw
    pub winner: Option<Stone>,
    pub winning_line: Option<[Pos; 5]>,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Side to move after `plies` placements; Black always starts
#[inline]
fn side_to_move(plies: usize) -> Stone {
    if plies % 2 == 0 {
        Stone::Black
    } else {
        Stone::White
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub config: GameConfig,
    pub current_turn: Stone,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    rng: SmallRng,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };

        Self {
            board: Board::new(),
            config,
            current_turn: Stone::Black,
            game_over: None,
            last_move: None,
            last_ai_result: None,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            rng,
        }
    }

    /// Start over with the same configuration
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
    }

    /// Start over in a different mode
    pub fn restart(&mut self, mode: GameMode) {
        let config = GameConfig { mode, ..self.config.clone() };
        *self = Self::new(config);
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.config.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.game_over.is_none() && self.config.engine_color() == Some(self.current_turn)
    }

    /// Attempt to place a human stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }

        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }

        self.board.try_place(pos, self.current_turn)?;
        self.after_move(pos);
        Ok(())
    }

    /// Let the engine play its turn. No-op when it is not the engine's turn.
    pub fn play_ai_move(&mut self) -> Result<(), GameError> {
        if !self.is_ai_turn() {
            return Ok(());
        }

        let engine = AIEngine::with_table(self.current_turn, self.config.table);
        let start = Instant::now();
        let result = if self.config.random_opening && self.board.is_board_empty() {
            engine.opening_move(&mut self.rng)
        } else {
            engine.get_move_with_stats(&self.board)
        };
        self.move_timer.set_ai_time(start.elapsed());

        let Some(pos) = result.best_move else {
            self.last_ai_result = Some(result);
            return Err(EngineError::NoLegalMove.into());
        };

        self.board.try_place(pos, self.current_turn)?;
        log::info!("{} engine moves at {}", self.current_turn.name(), format_pos(pos));
        self.last_ai_result = Some(result);
        self.after_move(pos);
        Ok(())
    }

    /// Bookkeeping after a stone landed at `pos`
    fn after_move(&mut self, pos: Pos) {
        let color = self.current_turn;
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        match check_outcome(&self.board, pos) {
            Outcome::Win(winner) => {
                log::info!("{} wins after {} moves", winner.name(), self.board.stone_count());
                self.game_over = Some(GameResult {
                    winner: Some(winner),
                    winning_line: find_five_line(&self.board, pos, winner),
                });
            }
            Outcome::Draw => {
                log::info!("draw: board is full");
                self.game_over = Some(GameResult { winner: None, winning_line: None });
            }
            Outcome::Ongoing => {
                self.current_turn = color.opponent();
                self.move_timer.start();
            }
        }
    }

    /// Ask the engine what the side to move should play
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() {
            return;
        }

        let engine = AIEngine::with_table(self.current_turn, self.config.table);
        let result = engine.get_move_with_stats(&self.board);
        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo the last move.
    ///
    /// Against the engine, plies are taken back until one of the human's
    /// stones has been removed, so the human is to move again.
    pub fn undo(&mut self) {
        let human = match self.config.mode {
            GameMode::PvE { human_color } => Some(human_color),
            GameMode::PvP => None,
        };

        loop {
            let plies = self.board.stone_count();
            if self.board.undo().is_none() {
                break;
            }
            let removed = side_to_move(plies - 1);
            if human.map_or(true, |h| h == removed) {
                break;
            }
        }

        self.current_turn = side_to_move(self.board.stone_count());
        self.last_move = self.board.last_move();
        self.game_over = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}
