//! Trait definitions for hardware abstraction.
//!
//! The only seam between this crate and the outside world is the
//! [`OutputLine`] capability: an individually settable binary signal
//! controlling one segment. Everything else — glyph tables, polarity,
//! digit normalization — is internal and deterministic.
//!
//! # Hardware Abstraction
//!
//! [`OutputLine`] is implemented by:
//!
//! - [`MockLine`](crate::hal::mock::MockLine) for desktop testing
//! - `PinLine` for any `embedded-hal` stateful output pin (`embedded-hal`
//!   feature)
//! - `Esp32Line` for esp-idf GPIO (`esp32` feature)

pub mod hardware;

pub use hardware::*;
