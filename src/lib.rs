// Core modules
pub mod core;
pub mod cli;
pub mod common;

// Re-export commonly used types
pub use common::{Config, FrameRate, PlayerError, Result};
pub use crate::core::{decode_line, load_animation, DecodeBuffer, Pacer, PlaybackState, PlaybackSummary, Player, Screen, ThreadPacer, MAX_OUTPUT};
pub use cli::TerminalScreen;
