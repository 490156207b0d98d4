//! Tick scheduling and event routing between the terminal and [`GameState`].
//!
//! Every change to the game arrives as a [`GameEvent`]. Events are handled one
//! at a time, so a key press can never land in the middle of a tick; it only
//! changes the direction used by the next one.

use std::io;
use std::time::{Duration, Instant};

use log::info;

use crate::game::{GameState, Reaction, Step};
use crate::input::GameInput;

/// One unit of work for the driver.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameEvent {
    Tick,
    Input(GameInput),
    Resize,
}

/// What the caller should do after an event was handled.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Control {
    Redraw,
    Idle,
    Quit,
}

/// Produces input events, waiting at most `timeout` (forever when `None`).
pub trait EventSource {
    fn poll_event(&mut self, timeout: Option<Duration>) -> io::Result<Option<GameEvent>>;
}

/// Fixed-rate tick source that can be armed and stopped.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// Schedules the first tick one period after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns true and schedules the following tick when one is due.
    ///
    /// A late tick fires once; missed periods are dropped rather than
    /// replayed in a burst.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(due) = self.next else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.period;
        if next <= now {
            next = now + self.period;
        }
        self.next = Some(next);
        true
    }
}

/// Owns the game state and its tick source.
#[derive(Debug)]
pub struct Driver {
    state: GameState,
    ticker: Ticker,
}

impl Driver {
    #[must_use]
    pub fn new(state: GameState, period: Duration) -> Self {
        Self {
            state,
            ticker: Ticker::new(period),
        }
    }

    /// Starts the first round and arms the ticker.
    pub fn start(&mut self, now: Instant) {
        self.state.start();
        self.ticker.arm(now);
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Applies one event to the game.
    pub fn handle(&mut self, event: GameEvent, now: Instant) -> Control {
        match event {
            GameEvent::Tick => {
                if let Step::Collided(_) = self.state.advance() {
                    self.ticker.stop();
                }
                Control::Redraw
            }
            GameEvent::Input(GameInput::Quit) => {
                info!("quit requested, score {}", self.state.apples_eaten);
                Control::Quit
            }
            GameEvent::Input(input) => match self.state.apply_input(input) {
                Reaction::Started => {
                    self.ticker.arm(now);
                    Control::Redraw
                }
                Reaction::Turned | Reaction::Ignored => Control::Idle,
            },
            GameEvent::Resize => Control::Redraw,
        }
    }

    /// Blocks until the next tick is due or `source` yields an event.
    pub fn next_event<S: EventSource + ?Sized>(&mut self, source: &mut S) -> io::Result<GameEvent> {
        loop {
            let now = Instant::now();
            if self.ticker.fire(now) {
                return Ok(GameEvent::Tick);
            }

            let timeout = self
                .ticker
                .deadline()
                .map(|due| due.saturating_duration_since(now));
            if let Some(event) = source.poll_event(timeout)? {
                return Ok(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;
    use std::time::{Duration, Instant};

    use crate::config::{Board, TICK_INTERVAL};
    use crate::food::Food;
    use crate::game::{GameState, GameStatus};
    use crate::input::{Direction, GameInput};
    use crate::snake::Position;

    use super::{Control, Driver, EventSource, GameEvent, Ticker};

    const PERIOD: Duration = Duration::from_millis(100);

    struct Scripted(VecDeque<GameEvent>);

    impl EventSource for Scripted {
        fn poll_event(&mut self, _timeout: Option<Duration>) -> io::Result<Option<GameEvent>> {
            Ok(self.0.pop_front())
        }
    }

    fn started_driver(now: Instant) -> Driver {
        let mut driver = Driver::new(GameState::new_with_seed(Board::STANDARD, 21), PERIOD);
        driver.start(now);
        driver.state.food = Food::new(Position { x: 575, y: 575 });
        driver
    }

    #[test]
    fn ticker_fires_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.arm(start);

        assert!(!ticker.fire(start + Duration::from_millis(99)));
        assert!(ticker.fire(start + PERIOD));
        assert!(!ticker.fire(start + Duration::from_millis(150)));
        assert!(ticker.fire(start + PERIOD * 2));
    }

    #[test]
    fn late_ticker_does_not_burst() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD);
        ticker.arm(start);

        let late = start + PERIOD * 5;
        assert!(ticker.fire(late));
        assert!(!ticker.fire(late));
        assert_eq!(ticker.deadline(), Some(late + PERIOD));
    }

    #[test]
    fn stopped_ticker_never_fires() {
        let start = Instant::now();
        let mut ticker = Ticker::new(PERIOD);

        assert!(!ticker.fire(start + PERIOD));
        ticker.arm(start);
        ticker.stop();
        assert!(!ticker.fire(start + PERIOD * 10));
        assert!(!ticker.is_armed());
    }

    #[test]
    fn tick_advances_and_requests_redraw() {
        let now = Instant::now();
        let mut driver = started_driver(now);

        assert_eq!(driver.handle(GameEvent::Tick, now), Control::Redraw);
        assert_eq!(driver.state().snake.head(), Position { x: 25, y: 0 });
    }

    #[test]
    fn input_between_ticks_applies_to_the_next_move() {
        let now = Instant::now();
        let mut driver = started_driver(now);

        driver.handle(GameEvent::Tick, now);
        assert_eq!(
            driver.handle(GameEvent::Input(GameInput::Direction(Direction::Down)), now),
            Control::Idle
        );
        assert_eq!(driver.state().snake.head(), Position { x: 25, y: 0 });

        driver.handle(GameEvent::Tick, now);
        assert_eq!(driver.state().snake.head(), Position { x: 25, y: 25 });
    }

    #[test]
    fn collision_stops_the_ticker_and_confirm_rearms_it() {
        let now = Instant::now();
        let mut driver = started_driver(now);
        driver.handle(GameEvent::Input(GameInput::Direction(Direction::Up)), now);
        driver.handle(GameEvent::Tick, now);

        assert_eq!(driver.state().status, GameStatus::GameOver);
        assert!(!driver.ticker().is_armed());

        // A stray tick after game over only redraws.
        assert_eq!(driver.handle(GameEvent::Tick, now), Control::Redraw);
        assert_eq!(driver.state().status, GameStatus::GameOver);

        assert_eq!(
            driver.handle(GameEvent::Input(GameInput::Confirm), now),
            Control::Redraw
        );
        assert_eq!(driver.state().status, GameStatus::Running);
        assert_eq!(driver.ticker().deadline(), Some(now + PERIOD));
    }

    #[test]
    fn quit_is_honored_in_any_state() {
        let now = Instant::now();
        let mut driver = Driver::new(GameState::new_with_seed(Board::STANDARD, 22), TICK_INTERVAL);

        assert_eq!(
            driver.handle(GameEvent::Input(GameInput::Quit), now),
            Control::Quit
        );
        driver.start(now);
        assert_eq!(
            driver.handle(GameEvent::Input(GameInput::Quit), now),
            Control::Quit
        );
    }

    #[test]
    fn next_event_prefers_a_due_tick() {
        let mut driver = started_driver(Instant::now() - PERIOD * 2);
        let mut source = Scripted(VecDeque::from([GameEvent::Input(GameInput::Confirm)]));

        let event = driver.next_event(&mut source).expect("scripted source never fails");
        assert_eq!(event, GameEvent::Tick);

        let event = driver.next_event(&mut source).expect("scripted source never fails");
        assert_eq!(event, GameEvent::Input(GameInput::Confirm));
    }
}
