pub mod config;
pub mod error;
pub mod frame_rate;

pub use config::{Config, PlaybackConfig};
pub use error::{PlayerError, Result};
pub use frame_rate::{parse_fps_arg, FrameRate, DEFAULT_FPS};
