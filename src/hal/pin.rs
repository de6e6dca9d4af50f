//! Adapter from `embedded-hal` output pins to [`OutputLine`].
//!
//! Any pin implementing `embedded_hal::digital::StatefulOutputPin` can
//! drive a segment through [`PinLine`]. The stateful bound is what makes
//! `toggle` possible: the pin has to know its own output level.
//!
//! [`OutputLine`]: crate::traits::OutputLine

use crate::traits::OutputLine;
use embedded_hal::digital::StatefulOutputPin;

/// Wraps an `embedded-hal` stateful output pin as an [`OutputLine`].
///
/// A newtype rather than a blanket impl, so platform crates remain free to
/// implement [`OutputLine`] directly for their own pin types.
///
/// # Example
///
/// ```ignore
/// use rs_sevseg::{DigitDisplay, hal::PinLine};
///
/// let display = DigitDisplay::new([
///     PinLine::new(pin_a), PinLine::new(pin_b), PinLine::new(pin_c),
///     PinLine::new(pin_d), PinLine::new(pin_e), PinLine::new(pin_f),
///     PinLine::new(pin_g),
/// ]);
/// ```
///
/// [`OutputLine`]: crate::traits::OutputLine
pub struct PinLine<P> {
    pin: P,
}

impl<P: StatefulOutputPin> PinLine<P> {
    /// Wraps the given pin. The pin's current level is left untouched.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Releases the wrapper and returns the pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> OutputLine for PinLine<P> {
    type Error = P::Error;

    fn write(&mut self, level: bool) -> Result<(), Self::Error> {
        if level {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.pin.toggle()
    }
}
