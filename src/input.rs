use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

use crate::game::SnakeGame;
use crate::snake::Direction::{self, *};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
    Ignore,
}

pub fn command_for(key: &KeyEvent) -> Command {
    if is_ctrl_c(key) {
        return Command::Quit;
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Command::Turn(Up),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Command::Turn(Left),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Command::Turn(Down),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Command::Turn(Right),
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        _ => Command::Ignore,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Direction changes typed between ticks, oldest first.
#[derive(Debug, Default)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
}

impl DirectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, direction: Direction) {
        self.pending.push_back(direction);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Feeds queued directions to the game until one actually changes its
    /// heading. Rejected entries (reversals, repeats) are consumed too, so at
    /// most one real turn happens per tick and quick double taps still land on
    /// consecutive ticks.
    pub fn apply<R: Rng>(&mut self, game: &mut SnakeGame<R>) {
        let before = game.direction();
        while game.direction() == before {
            match self.pending.pop_front() {
                Some(direction) => game.set_direction(direction),
                None => break,
            }
        }
    }
}
