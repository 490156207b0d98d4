use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::driver::{EventSource, GameEvent};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true when `other` points the exact other way.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        self.opposite() == other
    }

    /// Pixel offset of one step of `unit` in this direction.
    #[must_use]
    pub fn offset(self, unit: i32) -> (i32, i32) {
        match self {
            Self::Up => (0, -unit),
            Self::Down => (0, unit),
            Self::Left => (-unit, 0),
            Self::Right => (unit, 0),
        }
    }
}

/// High-level input signals consumed by the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Confirm,
    Quit,
}

impl GameInput {
    /// Translates a terminal key press into a game signal.
    #[must_use]
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c')).then_some(Self::Quit);
        }

        let input = match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W') => Self::Direction(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S') => Self::Direction(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A') => Self::Direction(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D') => Self::Direction(Direction::Right),
            KeyCode::Enter => Self::Confirm,
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Self::Quit,
            _ => return None,
        };
        Some(input)
    }
}

/// Event source backed by the crossterm event queue.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<GameEvent>> {
        if let Some(timeout) = timeout {
            if !event::poll(timeout)? {
                return Ok(None);
            }
        }

        let mapped = match event::read()? {
            Event::Key(key) => GameInput::from_key_event(key).map(GameEvent::Input),
            Event::Resize(..) => Some(GameEvent::Resize),
            _ => None,
        };
        Ok(mapped)
    }
}
