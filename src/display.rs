//! The digit display controller.
//!
//! This module provides [`DigitDisplay`], the component that converts digit
//! values into segment patterns and drives the seven output lines to match.
//!
//! # Overview
//!
//! The display controller:
//! - Owns the seven line handles, one per segment in canonical order
//! - Looks up glyphs in the decimal and hexadecimal tables
//! - Applies the active-low polarity when writing to the lines
//! - Tracks the last pattern applied for inspection
//!
//! # Example
//!
//! ```rust
//! use rs_sevseg::{DigitDisplay, Segment, DECIMAL_DIGIT_PATTERNS};
//! use rs_sevseg::hal::MockLine;
//!
//! let mut display = DigitDisplay::new([
//!     MockLine::new(), MockLine::new(), MockLine::new(), MockLine::new(),
//!     MockLine::new(), MockLine::new(), MockLine::new(),
//! ]);
//!
//! display.render_decimal_digit(4).unwrap();
//! assert_eq!(display.current_pattern(), DECIMAL_DIGIT_PATTERNS[4]);
//! assert!(display.is_lit(Segment::B));
//! assert!(!display.is_lit(Segment::A));
//! ```

use crate::pattern::{Pattern, DECIMAL_DIGIT_PATTERNS, HEX_DIGIT_PATTERNS};
use crate::segment::{Segment, SEGMENT_COUNT};
use crate::traits::OutputLine;

/// Drives one seven-segment digit through seven output lines.
///
/// # Type Parameter
///
/// - `L`: The output line implementation ([`OutputLine`] trait)
///
/// # Polarity
///
/// The lines are wired active-low: the electrical high level extinguishes
/// a segment. Patterns stay in the logical 1-means-lit convention and
/// [`apply_pattern`](Self::apply_pattern) performs the inversion, so the
/// glyph tables are valid regardless of wiring. A port to active-high
/// hardware inverts that one write site and nothing else.
///
/// # Thread Safety
///
/// The controller is not thread-safe, and the seven writes inside
/// [`apply_pattern`](Self::apply_pattern) are not atomic as a group — a
/// concurrent observer of the physical display could see a torn glyph.
/// Callers with genuine concurrency should wrap the controller in
/// `Arc<Mutex<DigitDisplay<L>>>` or equivalent.
pub struct DigitDisplay<L: OutputLine> {
    /// One line per segment, slot `i` bound to `Segment::ALL[i]`.
    lines: [L; SEGMENT_COUNT],
    /// Last pattern applied, blank at construction.
    current_pattern: Pattern,
}

impl<L: OutputLine> DigitDisplay<L> {
    /// Creates a display from seven line handles in canonical segment
    /// order: slot 0 drives `A`, slot 6 drives `G`.
    ///
    /// The binding is fixed for the life of the display. No line is
    /// written during construction; the current pattern starts blank.
    pub fn new(lines: [L; SEGMENT_COUNT]) -> Self {
        Self {
            lines,
            current_pattern: Pattern::BLANK,
        }
    }

    /// Drives all seven segments to match the given pattern.
    ///
    /// Each segment whose bit is 1 is lit (line driven low, active-low
    /// wiring) and each segment whose bit is 0 is extinguished (line driven
    /// high). Bit 7 never reaches the lines — every [`Pattern`] constructor
    /// masks it. After the seven writes the pattern is recorded as current —
    /// a durable record of the last pattern requested, not a hardware
    /// read-back.
    ///
    /// # Errors
    ///
    /// Propagates the first line write failure; the pattern is not recorded
    /// as current in that case.
    pub fn apply_pattern(&mut self, pattern: Pattern) -> Result<(), L::Error> {
        for seg in Segment::ALL {
            // Active-low drive: a lit segment needs the low level
            let lit = pattern.contains(seg);
            self.lines[seg.index()].write(!lit)?;
        }
        self.current_pattern = pattern;
        Ok(())
    }

    /// Shows the last decimal digit of `number`.
    ///
    /// The index is `number.rem_euclid(10)`, so negative inputs normalize
    /// into 0–9 as well: `-1` shows 9.
    ///
    /// # Errors
    ///
    /// Propagates line write failures from [`apply_pattern`](Self::apply_pattern).
    pub fn render_decimal_digit(&mut self, number: i32) -> Result<(), L::Error> {
        let digit = number.rem_euclid(10) as usize;
        self.apply_pattern(DECIMAL_DIGIT_PATTERNS[digit])
    }

    /// Shows the last hexadecimal digit of `value`.
    ///
    /// The index is `value.rem_euclid(16)`; digits 10–15 render as
    /// `A b C d E F`.
    ///
    /// # Errors
    ///
    /// Propagates line write failures from [`apply_pattern`](Self::apply_pattern).
    pub fn render_hex_digit(&mut self, value: i32) -> Result<(), L::Error> {
        let digit = value.rem_euclid(16) as usize;
        self.apply_pattern(HEX_DIGIT_PATTERNS[digit])
    }

    /// Extinguishes all seven segments.
    ///
    /// # Errors
    ///
    /// Propagates line write failures from [`apply_pattern`](Self::apply_pattern).
    pub fn blank(&mut self) -> Result<(), L::Error> {
        self.apply_pattern(Pattern::BLANK)
    }

    /// Writes a raw electrical level to one segment's line.
    ///
    /// Pass-through: no polarity inversion is applied and the current
    /// pattern is not updated. Under active-low wiring, `true` extinguishes
    /// the segment.
    ///
    /// # Errors
    ///
    /// Propagates the line write failure.
    pub fn write_line(&mut self, segment: Segment, level: bool) -> Result<(), L::Error> {
        self.lines[segment.index()].write(level)
    }

    /// Flips the electrical level of one segment's line.
    ///
    /// Pass-through for animation use; the current pattern is not updated
    /// and the digit-rendering path never calls this.
    ///
    /// # Errors
    ///
    /// Propagates the line toggle failure.
    pub fn toggle_line(&mut self, segment: Segment) -> Result<(), L::Error> {
        self.lines[segment.index()].toggle()
    }

    /// Returns the line bound to the given segment.
    #[inline]
    pub fn line(&self, segment: Segment) -> &L {
        &self.lines[segment.index()]
    }

    /// Returns the line bound to the given segment, mutably.
    #[inline]
    pub fn line_mut(&mut self, segment: Segment) -> &mut L {
        &mut self.lines[segment.index()]
    }

    /// The last pattern applied via [`apply_pattern`](Self::apply_pattern).
    ///
    /// Blank until the first apply. Raw line writes through
    /// [`write_line`](Self::write_line) and [`toggle_line`](Self::toggle_line)
    /// are not reflected here.
    #[inline]
    pub fn current_pattern(&self) -> Pattern {
        self.current_pattern
    }

    /// Whether the current pattern lights the given segment.
    #[inline]
    pub fn is_lit(&self, segment: Segment) -> bool {
        self.current_pattern.contains(segment)
    }

    /// Releases the display and hands the seven line handles back, in
    /// canonical segment order.
    pub fn release(self) -> [L; SEGMENT_COUNT] {
        self.lines
    }
}
