use std::collections::VecDeque;

use crate::config::Board;
use crate::input::Direction;

/// Board position in pixels, aligned to the grid.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The top-left cell.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Returns true when the position lies inside the board.
    #[must_use]
    pub fn is_within_bounds(self, board: Board) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(board.width)
            && self.y < i32::from(board.height)
    }

    /// Returns the position one grid cell further in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction, unit_size: u16) -> Self {
        let (dx, dy) = direction.offset(i32::from(unit_size));
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Ordered snake body, head first, with a fixed upper bound on its length.
///
/// After every move the cell the tail just left is kept as the trailing
/// slot. Growing turns that slot back into the tail.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    trailing: Option<Position>,
    capacity: usize,
}

impl Snake {
    /// Creates a snake of `len` segments all stacked on `start`.
    #[must_use]
    pub fn new(start: Position, len: usize, capacity: usize) -> Self {
        debug_assert!(len > 0 && len <= capacity);

        let mut body = VecDeque::with_capacity(capacity);
        body.extend(std::iter::repeat_n(start, len));

        Self {
            body,
            trailing: Some(start),
            capacity,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, capacity: usize) -> Self {
        debug_assert!(!segments.is_empty() && segments.len() <= capacity);

        Self {
            body: VecDeque::from(segments),
            trailing: None,
            capacity,
        }
    }

    /// Shifts every segment toward the tail and steps the head once.
    pub fn move_toward(&mut self, direction: Direction, unit_size: u16) {
        let next_head = self.head().stepped(direction, unit_size);

        self.trailing = self.body.pop_back();
        self.body.push_front(next_head);
    }

    /// Reclaims the trailing slot as the new tail.
    pub fn grow(&mut self) {
        debug_assert!(
            self.body.len() < self.capacity,
            "snake cannot outgrow the board"
        );

        if let Some(tail) = self.trailing.take() {
            self.body.push_back(tail);
        }
    }

    /// Returns the current head position.
    ///
    /// # Panics
    ///
    /// Panics if the body is empty, which no constructor allows.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if the head shares a cell with any later segment or
    /// with the trailing slot.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head) || self.trailing == Some(head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the segment at `index`, counting from the head.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<Position> {
        self.body.get(index).copied()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
