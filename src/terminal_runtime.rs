use std::io;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::config::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use crate::error::{Result, SnakeError};
use crate::grid::GridSize;
use crate::renderer::board_bounds;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode + alternate screen) for one game session.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort();
                Err(error)
            }
        }
    }

    /// Returns mutable access to the inner ratatui terminal.
    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }

    /// Current drawable area.
    pub fn area(&self) -> io::Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::new(0, 0, size.width, size.height))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort();
    }
}

/// Restores cooked mode and the main screen, ignoring failures.
pub fn cleanup_terminal_best_effort() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// Fails when the terminal is smaller than the minimum playable size.
///
/// A terminal whose size cannot be read is allowed through.
pub fn ensure_terminal_fits() -> Result<()> {
    match terminal::size() {
        Ok((width, height)) => check_terminal_size(width, height),
        Err(error) => {
            tracing::warn!(%error, "cannot read terminal size, skipping check");
            Ok(())
        }
    }
}

/// Checks a `width` x `height` character area against the minimum.
pub fn check_terminal_size(width: u16, height: u16) -> Result<()> {
    if width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT {
        return Err(SnakeError::TerminalTooSmall { width, height });
    }

    Ok(())
}

/// Board bounds for `area`, refusing areas below the minimum size.
pub fn playable_bounds(area: Rect) -> Result<GridSize> {
    check_terminal_size(area.width, area.height)?;
    Ok(board_bounds(area))
}
