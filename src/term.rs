use crate::view::{Cell, Frame, Paint};
use crate::{Coords, TermInt};
use std::io::{Stdout, Write, stdout};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::{Attribute, Color};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

pub struct TermManager {
    stdout: Stdout,
    // What is currently on screen, so a redraw only touches changed cells.
    screen: Option<Frame>,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), screen: None }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        self.set_raw_mode(true)?;
        self.set_cursor_visibility(false)?;
        self.set_cursor_blink(false)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        queue!(self.stdout, style::ResetColor, style::SetAttribute(Attribute::Reset))
            .context("Error resetting style")?;
        self.set_raw_mode(false)?;
        self.set_cursor_visibility(true)?;
        self.set_cursor_blink(true)?;
        execute!(self.stdout, LeaveAlternateScreen).context("Error leaving alt screen")?;
        Ok(())
    }

    pub fn get_terminal_size(&self) -> Result<Coords> {
        terminal::size().context("Error reading size")
    }

    /// Forget what is on screen; the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.screen = None;
    }

    pub fn draw(&mut self, frame: Frame) -> Result<()> {
        let previous = self.screen.take().filter(|prev| prev.size() == frame.size());

        if previous.is_none() {
            queue!(self.stdout, terminal::Clear(ClearType::All)).context("Error clearing")?;
        }

        let (width, height) = frame.size();
        let mut current_paint = None;
        for y in 0..height {
            for x in 0..width {
                let cell = frame.get(x, y).unwrap_or(Cell::BLANK);
                let unchanged = previous.as_ref().and_then(|prev| prev.get(x, y)) == Some(cell);
                if unchanged || (previous.is_none() && cell == Cell::BLANK) {
                    continue;
                }
                if current_paint != Some(cell.paint) {
                    self.apply_paint(cell.paint)?;
                    current_paint = Some(cell.paint);
                }
                self.print_at((x, y), cell.ch)?;
            }
        }

        queue!(self.stdout, style::ResetColor, style::SetAttribute(Attribute::Reset))
            .context("Error resetting style")?;
        self.flush()?;
        self.screen = Some(frame);
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: (TermInt, TermInt), ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch)).context("Error printing")
    }

    fn apply_paint(&mut self, paint: Paint) -> Result<()> {
        let (fg, bg, bold) = match paint {
            Paint::Plain => (Color::Reset, Color::Reset, false),
            Paint::Bold => (Color::Reset, Color::Reset, true),
            Paint::Snake => (Color::Reset, Color::Green, false),
            Paint::Food => (Color::Reset, Color::DarkCyan, false),
            Paint::Banner => (Color::White, Color::DarkGrey, true),
        };

        queue!(
            self.stdout,
            style::SetAttribute(Attribute::Reset),
            style::SetForegroundColor(fg),
            style::SetBackgroundColor(bg),
        )
        .context("Error setting colors")?;

        if bold {
            queue!(self.stdout, style::SetAttribute(Attribute::Bold)).context("Error setting bold")?;
        }
        Ok(())
    }

    fn set_raw_mode(&self, option: bool) -> Result<()> {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.context("Error setting raw mode")
    }

    fn set_cursor_blink(&mut self, option: bool) -> Result<()> {
        let res = if option {
            execute!(self.stdout, cursor::EnableBlinking)
        } else {
            execute!(self.stdout, cursor::DisableBlinking)
        };

        res.context("Error setting cursor blink")
    }

    fn set_cursor_visibility(&mut self, option: bool) -> Result<()> {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.context("Error setting cursor visibility")
    }
}
