mod config;
mod game;
mod input;
mod runner;
mod snake;
mod term;
mod view;

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{LevelFilter, WriteLogger};

use crate::config::{Cli, Config};
use crate::game::SnakeGame;
use crate::runner::Runner;

pub type TermInt = u16;
pub type Coords = (u16, u16);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::try_from(Cli::parse())?;

    // The terminal belongs to the game, so logs only ever go to a file.
    if let Some(path) = &config.log_file {
        let file = File::create(path)
            .with_context(|| format!("Error creating log file {}", path.display()))?;
        WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file)
            .context("Error initializing logger")?;
    }

    match config.seed {
        Some(seed) => {
            let game = SnakeGame::with_rng(config.width, config.height, StdRng::seed_from_u64(seed));
            Runner::new(game).run().await
        }
        None => Runner::new(SnakeGame::new(config.width, config.height)).run().await,
    }
}
