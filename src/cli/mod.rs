pub mod terminal;

pub use terminal::{print_banner, wait_for_enter, CursorGuard, TerminalScreen};
