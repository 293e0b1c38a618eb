pub mod decoder;
pub mod player;
pub mod source;

pub use decoder::{decode_line, DecodeBuffer, MAX_COUNT_DIGITS, MAX_OUTPUT};
pub use player::{frame_lines, Pacer, PlaybackState, PlaybackSummary, Player, Screen, ThreadPacer};
pub use source::load_animation;
