use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::{debug, info};
use rand::Rng;
use tokio::time::{sleep_until, Instant};

use crate::game::{SnakeGame, StepOutcome};
use crate::input::{command_for, Command, DirectionQueue};
use crate::term::TermManager;
use crate::view;

/// Drives a game from the terminal: keys fill the direction queue, the tick
/// timer consumes it and steps the game, and every wakeup redraws.
pub struct Runner<R: Rng> {
    game: SnakeGame<R>,
    term: TermManager,
    queue: DirectionQueue,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

impl<R: Rng> Runner<R> {
    pub fn new(game: SnakeGame<R>) -> Self {
        Runner { game, term: TermManager::new(), queue: DirectionQueue::new() }
    }

    pub async fn run(&mut self) -> Result<()> {
        if let Err(err) = self.term.setup() {
            let _ = self.term.restore();
            return Err(err);
        }

        let result = self.play().await;
        let restored = self.term.restore();
        result.and(restored)
    }

    async fn play(&mut self) -> Result<()> {
        info!("starting {}x{} game", self.game.width(), self.game.height());

        let mut events = EventStream::new();
        let mut deadline = Instant::now() + self.game.tick_duration();

        loop {
            self.render()?;

            tokio::select! {
                _ = sleep_until(deadline) => {
                    self.tick();
                    // Restart the timer so a speed-up applies from the next tick on.
                    deadline = Instant::now() + self.game.tick_duration();
                }
                maybe_event = events.next() => {
                    let event = match maybe_event {
                        Some(event) => event.context("Error reading terminal events")?,
                        None => break,
                    };
                    if self.handle_event(event) == Flow::Quit {
                        break;
                    }
                }
            }
        }

        info!("quit with score {}", self.game.score());
        Ok(())
    }

    fn tick(&mut self) -> StepOutcome {
        self.queue.apply(&mut self.game);
        self.game.step()
    }

    fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match command_for(&key) {
                Command::Turn(direction) => {
                    self.queue.push(direction);
                    Flow::Continue
                }
                Command::Quit => Flow::Quit,
                Command::Ignore => Flow::Continue,
            },
            Event::Resize(w, h) => {
                debug!("resized to {}x{}", w, h);
                self.term.invalidate();
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    fn render(&mut self) -> Result<()> {
        let size = self.term.get_terminal_size()?;
        self.term.draw(view::compose(&self.game, size))
    }
}
