//! esp-idf GPIO implementation of the segment output line.
//!
//! Each segment cathode hangs off one push-pull output pin. Sinking the
//! pin (low) lights the segment; the constructor parks the line high so a
//! freshly wired display starts dark.

use crate::traits::OutputLine;
use embedded_hal::digital::StatefulOutputPin;
use esp_idf_hal::gpio::{Output, OutputPin, PinDriver};
use esp_idf_hal::peripheral::Peripheral;

/// One segment line on an esp-idf GPIO pin.
///
/// # Example
///
/// ```ignore
/// use rs_sevseg::DigitDisplay;
/// use rs_sevseg::hal::esp32::Esp32Line;
///
/// let peripherals = Peripherals::take()?;
/// let mut display = DigitDisplay::new([
///     Esp32Line::new(peripherals.pins.gpio2)?,  // A
///     Esp32Line::new(peripherals.pins.gpio3)?,  // B
///     Esp32Line::new(peripherals.pins.gpio4)?,  // C
///     Esp32Line::new(peripherals.pins.gpio5)?,  // D
///     Esp32Line::new(peripherals.pins.gpio6)?,  // E
///     Esp32Line::new(peripherals.pins.gpio7)?,  // F
///     Esp32Line::new(peripherals.pins.gpio10)?, // G
/// ]);
///
/// display.render_decimal_digit(8)?;
/// ```
pub struct Esp32Line<'d, P: OutputPin> {
    pin: PinDriver<'d, P, Output>,
}

impl<'d, P: OutputPin> Esp32Line<'d, P> {
    /// Configures the given GPIO as a push-pull output line.
    ///
    /// The line is driven high (segment off) before this returns, so a
    /// display built from fresh lines starts blank.
    ///
    /// # Errors
    ///
    /// Returns an error if GPIO initialization or the initial write fails.
    pub fn new(pin: impl Peripheral<P = P> + 'd) -> Result<Self, esp_idf_hal::sys::EspError> {
        let mut pin = PinDriver::output(pin)?;
        pin.set_high()?;
        Ok(Self { pin })
    }
}

impl<P: OutputPin> OutputLine for Esp32Line<'_, P> {
    type Error = esp_idf_hal::sys::EspError;

    fn write(&mut self, level: bool) -> Result<(), Self::Error> {
        if level {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        StatefulOutputPin::toggle(&mut self.pin)
    }
}
