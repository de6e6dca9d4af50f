//! Hardware abstraction trait for the segment output lines.
//!
//! A seven-segment digit needs seven independently settable binary signals.
//! [`OutputLine`] is that capability: the core never creates, discovers, or
//! configures lines — the host constructs seven handles (which physical pin
//! maps to which segment is its business) and injects them into
//! [`DigitDisplay::new`](crate::DigitDisplay::new).
//!
//! # Implementation
//!
//! For testing and desktop development, use [`MockLine`] from
//! [`crate::hal::mock`]. For ESP32 hardware, use `Esp32Line` from
//! `hal::esp32` (requires the `esp32` feature). Any
//! `embedded_hal::digital::StatefulOutputPin` can be adapted with `PinLine`
//! (requires the `embedded-hal` feature).
//!
//! # Example
//!
//! ```rust
//! use rs_sevseg::traits::OutputLine;
//! use rs_sevseg::hal::MockLine;
//!
//! let mut line = MockLine::new();
//! line.write(true).unwrap();
//! assert!(line.level);
//!
//! line.toggle().unwrap();
//! assert!(!line.level);
//! ```
//!
//! [`MockLine`]: crate::hal::mock::MockLine

/// A settable binary output line driving one segment.
///
/// `write` and `toggle` operate on the **electrical** level of the line.
/// The segments of a common-anode display are wired active-low, so driving
/// the line high turns the attached segment off; that inversion is applied
/// by [`DigitDisplay::apply_pattern`](crate::DigitDisplay::apply_pattern),
/// not by implementations of this trait.
///
/// # Implementation Notes
///
/// - Writes are modeled as infallible in this core; the associated `Error`
///   exists so real GPIO backends can surface driver faults.
///   Implementations with nothing to report should use
///   [`core::convert::Infallible`].
/// - `toggle` flips whatever level the line currently holds, which requires
///   the implementation to know its own output state.
pub trait OutputLine {
    /// Error type for line operations.
    type Error;

    /// Drives the line to the given electrical level.
    fn write(&mut self, level: bool) -> Result<(), Self::Error>;

    /// Flips the current electrical level of the line.
    fn toggle(&mut self) -> Result<(), Self::Error>;
}
