use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use crate::config::{Board, Theme};
use crate::game::Snapshot;
use crate::renderer;

static PANIC_HOOK: Once = Once::new();

/// Where game frames are painted.
///
/// A screen made by [`GameScreen::enter`] owns the real terminal: raw mode on
/// the alternate screen, restored when the screen is dropped or the program
/// panics.
pub struct GameScreen<B: Backend> {
    terminal: Terminal<B>,
    _raw_mode: Option<RawMode>,
}

impl GameScreen<CrosstermBackend<Stdout>> {
    /// Takes over the terminal and arms the restoring panic hook.
    pub fn enter() -> io::Result<Self> {
        PANIC_HOOK.call_once(|| {
            let default_hook = panic::take_hook();
            panic::set_hook(Box::new(move |panic_info| {
                restore();
                default_hook(panic_info);
            }));
        });

        let raw_mode = RawMode::enable()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            _raw_mode: Some(raw_mode),
        })
    }
}

impl<B: Backend> GameScreen<B> {
    /// Paints onto `backend` without touching terminal modes.
    pub fn with_backend(backend: B) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            _raw_mode: None,
        })
    }

    /// Paints one frame of `snapshot`.
    pub fn draw(&mut self, snapshot: &Snapshot, board: Board, theme: &Theme) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, snapshot, board, theme))
            .map(|_| ())
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

/// Raw mode plus alternate screen, left again on drop.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(error) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            restore();
            return Err(error);
        }
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        restore();
    }
}

fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
}
