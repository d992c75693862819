//! Window scores for Gobang evaluation
//!
//! A window is a run of five in-bounds cells. Its value depends only on how
//! many stones of each side it holds, looked up in a [`ScoreTable`].

/// Value for a classification that cannot occur in a five-cell window.
/// Strictly below every positive score.
pub const UNREACHABLE_SCORE: i32 = -1;

/// Occupancy class of a single five-cell window, from the engine's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowClass {
    /// No stones at all
    Open,
    /// Stones of both sides: neither can complete five here
    Dead,
    /// Only the engine's own stones (1..=4)
    Own(u8),
    /// Only the opponent's stones (1..=4)
    Opponent(u8),
    /// Counts that a five-cell scan never yields
    Unreachable,
}

/// Classify a window by stone counts
pub fn classify(own: u8, opponent: u8) -> WindowClass {
    match (own, opponent) {
        (0, 0) => WindowClass::Open,
        (o, p) if o > 0 && p > 0 => WindowClass::Dead,
        (o @ 1..=4, 0) => WindowClass::Own(o),
        (0, p @ 1..=4) => WindowClass::Opponent(p),
        _ => WindowClass::Unreachable,
    }
}

/// Lookup table from window class to score.
///
/// `own[n - 1]` scores a window holding `n` engine stones, `opponent[n - 1]`
/// one holding `n` opponent stones. The opponent column is heavier, so the
/// engine prefers blocking over extending at equal counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTable {
    pub empty: i32,
    pub own: [i32; 4],
    pub opponent: [i32; 4],
}

impl ScoreTable {
    pub const DEFAULT: ScoreTable = ScoreTable {
        empty: 7,
        own: [15, 400, 1_800, 100_000],
        opponent: [35, 800, 15_000, 800_000],
    };

    /// Score for a classified window
    pub fn score(&self, class: WindowClass) -> i32 {
        match class {
            WindowClass::Open => self.empty,
            WindowClass::Dead => 0,
            WindowClass::Own(n) => self.own[n as usize - 1],
            WindowClass::Opponent(n) => self.opponent[n as usize - 1],
            WindowClass::Unreachable => UNREACHABLE_SCORE,
        }
    }

    /// Classify and score in one step
    #[inline]
    pub fn window_value(&self, own: u8, opponent: u8) -> i32 {
        self.score(classify(own, opponent))
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}
