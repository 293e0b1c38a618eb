use std::time::Duration;

pub const DEFAULT_FPS: u32 = 30;

/// Parse a frame rate argument the way C's `atoi` would.
///
/// Leading whitespace and a single sign are accepted, digits are consumed until
/// the first non-digit, and anything unparseable yields 0. Never fails.
pub fn parse_fps_arg(arg: &str) -> i64 {
    let trimmed = arg.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if negative {
        -value
    } else {
        value
    }
}

/// Target playback rate. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRate(u32);

impl FrameRate {
    pub fn new(fps: u32) -> Self {
        Self::from_raw(i64::from(fps))
    }

    /// Build a frame rate from an arbitrary integer.
    ///
    /// Zero and negative values (including unparseable arguments, which parse
    /// to 0) fall back to [`DEFAULT_FPS`] instead of dividing by zero.
    pub fn from_raw(fps: i64) -> Self {
        if fps <= 0 {
            tracing::warn!(fps, fallback = DEFAULT_FPS, "non-positive fps, using default");
            return Self(DEFAULT_FPS);
        }
        Self(u32::try_from(fps).unwrap_or(u32::MAX))
    }

    pub fn parse(arg: &str) -> Self {
        Self::from_raw(parse_fps_arg(arg))
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.0
    }

    /// Pacing delay per frame, `1000 / fps` milliseconds with integer division.
    #[inline]
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(u64::from(1000 / self.0))
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self(DEFAULT_FPS)
    }
}
