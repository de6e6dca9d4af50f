//! Mock output line for testing without hardware.
//!
//! [`MockLine`] is the test double for the [`OutputLine`] capability,
//! enabling development and testing of the display core on desktop. Use
//! the public fields to inspect state after test operations.
//!
//! # Example
//!
//! ```rust
//! use rs_sevseg::DigitDisplay;
//! use rs_sevseg::hal::MockLine;
//!
//! let mut display = DigitDisplay::new([
//!     MockLine::new(), MockLine::new(), MockLine::new(), MockLine::new(),
//!     MockLine::new(), MockLine::new(), MockLine::new(),
//! ]);
//!
//! display.render_decimal_digit(8).unwrap();
//!
//! // All seven lines were driven low: every segment lit
//! for line in display.release() {
//!     assert!(line.is_lit());
//!     assert_eq!(line.write_count, 1);
//! }
//! ```
//!
//! [`OutputLine`]: crate::traits::OutputLine

use crate::traits::OutputLine;

extern crate alloc;
use alloc::vec::Vec;

/// Mock output line for testing.
///
/// Records every electrical level written so tests can verify both the
/// final line state and the write traffic. A fresh line sits at the low
/// level, like an unconfigured GPIO.
///
/// # Example
///
/// ```rust
/// use rs_sevseg::hal::MockLine;
/// use rs_sevseg::traits::OutputLine;
///
/// let mut line = MockLine::new();
/// line.write(true).unwrap();
/// line.write(false).unwrap();
///
/// assert!(!line.level);
/// assert_eq!(line.write_count, 2);
/// assert_eq!(line.writes, vec![true, false]);
/// assert!(line.is_lit()); // active-low: low level = lit
/// ```
#[derive(Debug, Default)]
pub struct MockLine {
    /// Current electrical level of the line.
    pub level: bool,
    /// Number of times `write` was called.
    pub write_count: usize,
    /// Every level passed to `write`, in order. Toggles are not recorded.
    pub writes: Vec<bool>,
}

impl MockLine {
    /// Creates a new mock line at the low level with no recorded writes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock line already driven to the given level.
    pub fn with_level(mut self, level: bool) -> Self {
        self.level = level;
        self
    }

    /// Whether the attached segment would be lit.
    ///
    /// The display is wired active-low, so the segment is lit when the
    /// line sits at the low level.
    #[inline]
    pub fn is_lit(&self) -> bool {
        !self.level
    }
}

impl OutputLine for MockLine {
    type Error = core::convert::Infallible;

    fn write(&mut self, level: bool) -> Result<(), Self::Error> {
        self.level = level;
        self.write_count += 1;
        self.writes.push(level);
        Ok(())
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.level = !self.level;
        Ok(())
    }
}
