use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};

/// Errors surfaced to the binary before or while the game runs.
#[derive(Debug, Error)]
pub enum SnakeError {
    #[error(
        "Terminal too small ({width}x{height})! Please resize to at least \
         {min_width}x{min_height} characters.",
        min_width = MIN_TERMINAL_WIDTH,
        min_height = MIN_TERMINAL_HEIGHT
    )]
    TerminalTooSmall { width: u16, height: u16 },

    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = SnakeError> = std::result::Result<T, E>;
