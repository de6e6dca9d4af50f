//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of the [`OutputLine`]
//! trait defined in [`crate::traits`] for various platforms.
//!
//! # Available Implementations
//!
//! - `mock`: Test implementation for desktop development
//! - `pin`: Adapter for any `embedded-hal` stateful output pin (requires
//!   `embedded-hal` feature)
//! - `esp32`: esp-idf GPIO lines (requires `esp32` feature)
//!
//! [`OutputLine`]: crate::traits::OutputLine

pub mod mock;

#[cfg(feature = "embedded-hal")]
pub mod pin;

#[cfg(feature = "esp32")]
pub mod esp32;

pub use mock::*;

#[cfg(feature = "embedded-hal")]
pub use pin::*;

#[cfg(feature = "esp32")]
pub use esp32::*;
