use Direction::*;

/// A cell on the board. Signed so a head stepping off the edge is still representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Position { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Body cells ordered tail to head; the head is the last element.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// A vertical snake with its tail at `tail`, extending `length` cells downward.
    pub fn new(tail: Position, length: usize) -> Self {
        let body = (0..length as i32)
            .map(|i| Position::new(tail.x, tail.y + i))
            .collect();
        Snake { body }
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Moves the head to `new_head` and drops the tail cell.
    pub fn slide(&mut self, new_head: Position) {
        self.body.rotate_left(1);
        let last = self.body.len() - 1;
        self.body[last] = new_head;
    }

    /// Moves the head to `new_head` keeping the tail where it is.
    pub fn grow(&mut self, new_head: Position) {
        self.body.push(new_head);
    }
}
