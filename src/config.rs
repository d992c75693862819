//! Game configuration

use crate::board::Stone;
use crate::eval::ScoreTable;

/// Who plays whom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human vs engine
    PvE { human_color: Stone },
    /// Two humans at one screen; the engine only gives hints
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Stone::Black }
    }
}

/// Settings for a new game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Engine's first stone is random when it opens the game
    pub random_opening: bool,
    /// Seed for the opening RNG; None draws one from the OS
    pub seed: Option<u64>,
    pub table: ScoreTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            random_opening: false,
            seed: None,
            table: ScoreTable::DEFAULT,
        }
    }
}

impl GameConfig {
    /// Side the engine plays, or None in hotseat mode
    pub fn engine_color(&self) -> Option<Stone> {
        match self.mode {
            GameMode::PvE { human_color } => Some(human_color.opponent()),
            GameMode::PvP => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.mode, GameMode::PvE { human_color: Stone::Black });
        assert_eq!(config.engine_color(), Some(Stone::White));
        assert!(!config.random_opening);
        assert_eq!(config.table, ScoreTable::DEFAULT);
    }

    #[test]
    fn test_engine_color() {
        let config = GameConfig {
            mode: GameMode::PvE { human_color: Stone::White },
            ..GameConfig::default()
        };
        assert_eq!(config.engine_color(), Some(Stone::Black));

        let config = GameConfig { mode: GameMode::PvP, ..GameConfig::default() };
        assert_eq!(config.engine_color(), None);
    }
}
