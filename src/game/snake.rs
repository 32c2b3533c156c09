use std::collections::VecDeque;

use super::grid::{Direction, Position};

/// Body the snake restarts with, head first.
pub const INITIAL_BODY: [Position; 3] = [
    Position { x: 7, y: 9 },
    Position { x: 6, y: 9 },
    Position { x: 5, y: 9 },
];

pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// The snake: an ordered body with the head at the front of the deque.
///
/// Length never drops below the initial three segments; every operation that
/// removes a tail segment pushes a head in the same call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    pub body: VecDeque<Position>,
    pub direction: Direction,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            body: VecDeque::from(INITIAL_BODY),
            direction: INITIAL_DIRECTION,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Move one cell in the current direction: drop the tail, push a new
    /// head. Length is preserved.
    pub fn advance(&mut self) {
        self.body.pop_back();
        self.grow();
    }

    /// Push an extra head one cell ahead without dropping the tail. Used on
    /// the tick the snake eats, so the net effect of advance + grow is one
    /// added segment.
    pub fn grow(&mut self) {
        let new_head = self.head().moved(self.direction);
        self.body.push_front(new_head);
    }

    /// Restore the fixed starting body and direction.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend(INITIAL_BODY);
        self.direction = INITIAL_DIRECTION;
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// True if the head sits on any non-head segment.
    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&segment| segment == head)
    }

    /// True if any segment, head included, occupies `pos`.
    pub fn covers(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
