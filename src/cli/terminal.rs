use std::io::{self, BufRead, Write};
use std::path::Path;
use crossterm::{
    cursor,
    queue,
    terminal::{self, ClearType},
};
use crate::core::Screen;

/// [`Screen`] backed by an ANSI terminal (or anything else that takes bytes).
pub struct TerminalScreen<W: Write> {
    out: W,
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalScreen<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    fn write_row(&mut self, row: &[u8]) -> io::Result<()> {
        self.out.write_all(row)?;
        self.out.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Hides the cursor while alive and shows it again on drop, including on
/// early returns through `?`.
pub struct CursorGuard<W: Write> {
    out: W,
    hidden: bool,
}

impl<W: Write> CursorGuard<W> {
    pub fn new(mut out: W, hide: bool) -> io::Result<Self> {
        if hide {
            crossterm::execute!(out, cursor::Hide)?;
        }
        Ok(Self { out, hidden: hide })
    }
}

impl<W: Write> Drop for CursorGuard<W> {
    fn drop(&mut self) {
        if self.hidden {
            if let Err(e) = crossterm::execute!(self.out, cursor::Show) {
                tracing::warn!("Failed to restore cursor: {}", e);
            }
        }
    }
}

pub fn print_banner<W: Write>(out: &mut W, file: &Path, fps: u32) -> io::Result<()> {
    writeln!(out, "ASCII Terminal Player")?;
    writeln!(out, "File: {} | FPS: {}", file.display(), fps)?;
    out.flush()
}

/// Block until a line (or end of input) is read.
pub fn wait_for_enter<R: BufRead>(mut input: R) -> io::Result<()> {
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_clear_emits_erase_and_home() {
        let mut screen = TerminalScreen::new(Vec::new());
        screen.clear().unwrap();
        let out = screen.into_inner();
        assert!(out.starts_with(b"\x1b[2J"));
        assert!(out.ends_with(b"\x1b[1;1H"));
    }

    #[test]
    fn test_rows_written_raw_with_newline() {
        let mut screen = TerminalScreen::new(Vec::new());
        screen.write_row(b"aaa").unwrap();
        screen.write_row(&[0xE2, 0x96, 0x88]).unwrap();
        assert_eq!(screen.into_inner(), b"aaa\n\xE2\x96\x88\n".to_vec());
    }

    #[test]
    fn test_cursor_guard_hides_and_restores() {
        let mut out = Vec::new();
        {
            let _guard = CursorGuard::new(&mut out, true).unwrap();
        }
        assert_eq!(out, b"\x1b[?25l\x1b[?25h".to_vec());
    }

    #[test]
    fn test_cursor_guard_disabled() {
        let mut out = Vec::new();
        {
            let _guard = CursorGuard::new(&mut out, false).unwrap();
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_banner() {
        let mut out = Vec::new();
        print_banner(&mut out, &PathBuf::from("data.txt"), 30).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "ASCII Terminal Player\nFile: data.txt | FPS: 30\n");
    }

    #[test]
    fn test_wait_for_enter_consumes_one_line() {
        let mut input: &[u8] = b"\nrest";
        wait_for_enter(&mut input).unwrap();
        assert_eq!(input, b"rest");

        let mut empty: &[u8] = b"";
        wait_for_enter(&mut empty).unwrap();
    }
}
