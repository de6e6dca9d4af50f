//! # rs-sevseg
//!
//! A single-digit seven-segment LED display driver with pluggable output
//! lines.
//!
//! ## Features
//!
//! - **Hardware abstraction**: the [`OutputLine`] trait is the only seam to
//!   the outside world; the seven line handles are injected at construction
//! - **Two numbering systems**: decimal (0–9) and hexadecimal (0–F) glyph
//!   tables, the hex table extending the decimal one
//! - **Logical patterns**: a [`Pattern`] bit means "lit"; the active-low
//!   electrical inversion lives in exactly one place
//! - **Cyclic segment order**: `A→B→…→G→A` for segment-by-segment
//!   animation
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `segment` - Segment identity and cyclic ordering
//! - `pattern` - Activation bitmask and digit lookup tables
//! - `display` - The controller that drives the seven lines
//! - `traits` - The output-line capability
//! - `hal` - Concrete implementations (mock for testing, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use rs_sevseg::{DigitDisplay, Segment, DECIMAL_DIGIT_PATTERNS};
//! use rs_sevseg::hal::MockLine;
//!
//! // Seven lines in canonical order A..G
//! let mut display = DigitDisplay::new([
//!     MockLine::new(), MockLine::new(), MockLine::new(), MockLine::new(),
//!     MockLine::new(), MockLine::new(), MockLine::new(),
//! ]);
//!
//! display.render_decimal_digit(8).unwrap();
//! assert_eq!(display.current_pattern(), DECIMAL_DIGIT_PATTERNS[8]);
//! assert!(display.is_lit(Segment::G));
//!
//! // 42 shows its last digit
//! display.render_decimal_digit(42).unwrap();
//! assert_eq!(display.current_pattern(), DECIMAL_DIGIT_PATTERNS[2]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// The digit display controller that drives the seven lines.
pub mod display;
/// Hardware abstraction layer with a mock implementation for testing.
pub mod hal;
/// Segment activation patterns and the digit lookup tables.
pub mod pattern;
/// Segment identity and cyclic ordering.
pub mod segment;
/// Core trait for the output-line capability.
pub mod traits;

// Re-exports for convenience
pub use display::DigitDisplay;
pub use pattern::{Pattern, DECIMAL_DIGIT_PATTERNS, HEX_DIGIT_PATTERNS};
pub use segment::{Segment, SEGMENT_COUNT};
pub use traits::OutputLine;
