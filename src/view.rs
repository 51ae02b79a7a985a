//! Maps a game into a terminal-sized grid of cells. No I/O, so it is unit tested.

use rand::Rng;

use crate::game::SnakeGame;
use crate::{Coords, TermInt};

const BANNER: [&str; 3] = ["              ", "  GAME  OVER  ", "              "];
const BANNER_WIDTH: i32 = 14;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Paint {
    Plain,
    Bold,
    Snake,
    Food,
    Banner,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub paint: Paint,
}

impl Cell {
    pub const BLANK: Cell = Cell { ch: ' ', paint: Paint::Plain };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: TermInt,
    height: TermInt,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        Frame { width, height, cells: vec![Cell::BLANK; width as usize * height as usize] }
    }

    pub fn size(&self) -> Coords {
        (self.width, self.height)
    }

    pub fn get(&self, x: TermInt, y: TermInt) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[self.width as usize * y as usize + x as usize])
    }

    /// Anything outside the frame is clipped.
    pub fn put(&mut self, x: i32, y: i32, ch: char, paint: Paint) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[self.width as usize * y as usize + x as usize] = Cell { ch, paint };
    }

    pub fn text(&mut self, x: i32, y: i32, text: &str, paint: Paint) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, paint);
        }
    }
}

/// Size of the drawn area for a board: two columns per cell plus the frame,
/// one blank row on top and the score row underneath.
pub fn area_size(board: Coords) -> Coords {
    (board.0.saturating_mul(2).saturating_add(2), board.1.saturating_add(4))
}

/// Top-left corner that centres the drawn area in the terminal.
pub fn origin(term: Coords, board: Coords) -> Coords {
    let (w, h) = area_size(board);
    (term.0.saturating_sub(w) / 2, term.1.saturating_sub(h) / 2)
}

pub fn compose<R: Rng>(game: &SnakeGame<R>, term: Coords) -> Frame {
    let mut frame = Frame::new(term.0, term.1);
    let (ox, oy) = origin(term, (game.width(), game.height()));
    let (ox, oy) = (ox as i32, oy as i32);
    let gw = game.width() as i32;
    let gh = game.height() as i32;

    // frame
    for x in 0..gw * 2 + 1 {
        frame.put(ox + x, oy + 1, '-', Paint::Plain);
        frame.put(ox + x, oy + gh + 2, '-', Paint::Plain);
    }
    for y in 1..gh + 2 {
        frame.put(ox, oy + y, '|', Paint::Plain);
        frame.put(ox + gw * 2 + 1, oy + y, '|', Paint::Plain);
    }
    for (x, y) in [(0, 1), (0, gh + 2), (gw * 2 + 1, 1), (gw * 2 + 1, gh + 2)] {
        frame.put(ox + x, oy + y, '+', Paint::Plain);
    }

    frame.text(ox + 1, oy + gh + 3, "SCORE", Paint::Bold);
    frame.text(ox + gw * 2 - 5, oy + gh + 3, &format!("{:06}", game.score()), Paint::Bold);

    for pos in game.snake() {
        frame.put(ox + pos.x * 2 + 1, oy + pos.y + 2, ' ', Paint::Snake);
        frame.put(ox + pos.x * 2 + 2, oy + pos.y + 2, ' ', Paint::Snake);
    }
    for pos in game.food() {
        frame.put(ox + pos.x * 2 + 1, oy + pos.y + 2, ' ', Paint::Food);
        frame.put(ox + pos.x * 2 + 2, oy + pos.y + 2, ' ', Paint::Food);
    }

    if game.is_over() {
        let left = ox + gw + 1 - BANNER_WIDTH / 2;
        for (i, line) in BANNER.iter().enumerate() {
            frame.text(left, oy + gh / 2 + 1 + i as i32, line, Paint::Banner);
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(w: TermInt, h: TermInt) -> SnakeGame<StdRng> {
        SnakeGame::with_rng(w, h, StdRng::seed_from_u64(42))
    }

    fn row(frame: &Frame, y: TermInt) -> String {
        (0..frame.size().0).map(|x| frame.get(x, y).unwrap().ch).collect()
    }

    #[test]
    fn test_origin_centres_area() {
        assert_eq!(area_size((13, 13)), (28, 17));
        assert_eq!(origin((80, 24), (13, 13)), (26, 3));
        assert_eq!(origin((28, 17), (13, 13)), (0, 0));
    }

    #[test]
    fn test_origin_clamps_small_terminal() {
        assert_eq!(origin((10, 5), (13, 13)), (0, 0));
    }

    #[test]
    fn test_border_and_score() {
        let game = game(13, 13);
        let frame = compose(&game, (28, 17));

        assert_eq!(row(&frame, 0).trim(), "");
        assert_eq!(row(&frame, 1), format!("+{}+", "-".repeat(26)));
        assert_eq!(row(&frame, 15), format!("+{}+", "-".repeat(26)));
        assert!(row(&frame, 2).ends_with('|'));
        assert_eq!(row(&frame, 16), format!(" SCORE{}000000 ", " ".repeat(15)));
        assert_eq!(frame.get(1, 16).unwrap().paint, Paint::Bold);
    }

    #[test]
    fn test_snake_and_food_cells_are_two_wide() {
        let game = game(13, 13);
        let frame = compose(&game, (28, 17));

        for pos in game.snake() {
            let (x, y) = (pos.x as TermInt * 2 + 1, pos.y as TermInt + 2);
            assert_eq!(frame.get(x, y).unwrap().paint, Paint::Snake);
            assert_eq!(frame.get(x + 1, y).unwrap().paint, Paint::Snake);
        }
        for pos in game.food() {
            let (x, y) = (pos.x as TermInt * 2 + 1, pos.y as TermInt + 2);
            assert_eq!(frame.get(x, y).unwrap().paint, Paint::Food);
            assert_eq!(frame.get(x + 1, y).unwrap().paint, Paint::Food);
        }
    }

    #[test]
    fn test_game_over_banner() {
        let mut game = game(13, 13);
        game.set_direction(Direction::Left);
        game.step();
        assert!(game.is_over());

        let frame = compose(&game, (28, 17));
        assert_eq!(&row(&frame, 8)[7..21], "  GAME  OVER  ");
        assert_eq!(frame.get(7, 7).unwrap().paint, Paint::Banner);
        assert_eq!(frame.get(20, 9).unwrap().paint, Paint::Banner);
        assert_ne!(frame.get(21, 8).unwrap().paint, Paint::Banner);
    }

    #[test]
    fn test_offset_by_origin() {
        let game = game(13, 13);
        let frame = compose(&game, (80, 24));
        assert_eq!(frame.get(26, 4).unwrap().ch, '+');
        assert_eq!(frame.get(53, 4).unwrap().ch, '+');
        assert_eq!(frame.get(25, 4).unwrap(), Cell::BLANK);
    }

    #[test]
    fn test_tiny_terminal_is_clipped() {
        let game = game(13, 13);
        let frame = compose(&game, (5, 3));
        assert_eq!(frame.size(), (5, 3));
        assert_eq!(frame.get(0, 1).unwrap().ch, '+');
    }
}
