use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Parser;

use crate::game::{DEFAULT_BOARD_SIZE, FOOD_COUNT, INITIAL_SNAKE_LENGTH};
use crate::TermInt;

// Drawn width is two columns per cell plus the frame; keep it inside u16.
const MAX_BOARD_WIDTH: TermInt = (TermInt::MAX - 2) / 2;
const MAX_BOARD_HEIGHT: TermInt = TermInt::MAX - 4;

#[derive(Parser, Debug)]
#[command(name = "term_snake")]
#[command(version, about = "Snake in the terminal")]
pub struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub width: TermInt,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub height: TermInt,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a debug log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: TermInt,
    pub height: TermInt,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config { width: DEFAULT_BOARD_SIZE, height: DEFAULT_BOARD_SIZE, seed: None, log_file: None }
    }
}

impl Config {
    /// Rejects boards the game cannot start on. Food placement retries until it
    /// finds a free cell, so the starting snake plus all food must leave room.
    pub fn validate(self) -> Result<Self> {
        ensure!(
            self.height as usize >= INITIAL_SNAKE_LENGTH,
            "board height must be at least {} to fit the starting snake, got {}",
            INITIAL_SNAKE_LENGTH,
            self.height
        );
        ensure!(self.width >= 1, "board width must be at least 1");

        let cells = self.width as usize * self.height as usize;
        let occupied = INITIAL_SNAKE_LENGTH + FOOD_COUNT;
        ensure!(
            cells > occupied,
            "a {}x{} board has {} cells, need more than {}",
            self.width,
            self.height,
            cells,
            occupied
        );

        ensure!(
            self.width <= MAX_BOARD_WIDTH && self.height <= MAX_BOARD_HEIGHT,
            "board {}x{} is too large to draw",
            self.width,
            self.height
        );
        Ok(self)
    }
}

impl TryFrom<Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        Config { width: cli.width, height: cli.height, seed: cli.seed, log_file: cli.log_file }.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: TermInt, height: TermInt) -> Config {
        Config { width, height, ..Default::default() }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.width, 13);
        assert_eq!(config.height, 13);
        assert!(config.clone().validate().is_ok());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["term_snake"]);
        let config = Config::try_from(cli).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["term_snake", "--width", "20", "--height", "9", "--seed", "7"]);
        let config = Config::try_from(cli).unwrap();
        assert_eq!((config.width, config.height), (20, 9));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_rejects_short_board() {
        assert!(board(10, 3).validate().is_err());
        assert!(board(0, 10).validate().is_err());
    }

    #[test]
    fn test_rejects_saturated_board() {
        // 1x6 holds the snake and both foods with nothing left over.
        assert!(board(1, 6).validate().is_err());
        assert!(board(1, 7).validate().is_ok());
    }

    #[test]
    fn test_rejects_undrawable_board() {
        assert!(board(MAX_BOARD_WIDTH + 1, 10).validate().is_err());
        assert!(board(10, MAX_BOARD_HEIGHT + 1).validate().is_err());
    }
}
