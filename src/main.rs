//! Gobang GUI
//!
//! Play five in a row against the heuristic engine or another player.

use clap::{Parser, ValueEnum};
use gobang::logging::init_logging;
use gobang::ui::GobangApp;
use gobang::{GameConfig, GameMode, Stone};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Color {
    Black,
    White,
}

impl From<Color> for Stone {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Stone::Black,
            Color::White => Stone::White,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Color the human plays against the engine (Black moves first)
    #[arg(long, value_enum, default_value_t = Color::Black)]
    human: Color,
    /// Two humans at one screen; the engine only gives hints
    #[arg(long)]
    pvp: bool,
    /// Engine opens with a random stone when it plays Black
    #[arg(long)]
    random_opening: bool,
    #[arg(long, help = "Fix RNG seed for reproducible openings (e.g., --seed 12345)")]
    seed: Option<u64>,
}

impl Cli {
    fn into_config(self) -> GameConfig {
        let mode = if self.pvp {
            GameMode::PvP
        } else {
            GameMode::PvE { human_color: self.human.into() }
        };

        GameConfig {
            mode,
            random_opening: self.random_opening,
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    init_logging();
    let config = Cli::parse().into_config();
    log::info!("starting {:?}", config.mode);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 700.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title("Gobang"),
        ..Default::default()
    };

    eframe::run_native(
        "Gobang",
        options,
        Box::new(move |cc| Ok(Box::new(GobangApp::new(cc, config)))),
    )
}
