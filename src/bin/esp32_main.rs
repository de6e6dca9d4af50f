//! ESP32-C3 SuperMini seven-segment counter demo.
//!
//! Drives a single common-anode digit wired to GPIO2-7 and GPIO10 (see
//! `hal::esp32::pins`): counts 0-F once per second, then runs one lap of a
//! segment chase before starting over.
//!
//! # Build
//!
//! ```bash
//! cargo build --bin esp32_main --features esp32 --target riscv32imc-esp-espidf
//! ```

use esp_idf_hal::peripherals::Peripherals;
use rs_sevseg::hal::esp32::Esp32Line;
use rs_sevseg::{DigitDisplay, Segment};
use std::thread;
use std::time::Duration;

/// How long each digit stays on the display.
const DIGIT_HOLD_MS: u64 = 1000;

/// Step interval of the segment chase.
const CHASE_STEP_MS: u64 = 80;

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();

    println!();
    println!("==============================");
    println!("  rs-sevseg SuperMini counter");
    println!("==============================");
    println!();

    let peripherals = Peripherals::take()?;

    // Seven cathode lines in canonical segment order A..G
    let lines = [
        Esp32Line::new(peripherals.pins.gpio2)?,
        Esp32Line::new(peripherals.pins.gpio3)?,
        Esp32Line::new(peripherals.pins.gpio4)?,
        Esp32Line::new(peripherals.pins.gpio5)?,
        Esp32Line::new(peripherals.pins.gpio6)?,
        Esp32Line::new(peripherals.pins.gpio7)?,
        Esp32Line::new(peripherals.pins.gpio10)?,
    ];
    let mut display = DigitDisplay::new(lines);
    println!("[OK] Display initialized (GPIO2-7/10)");
    println!();
    println!("Counting 0-F...");

    loop {
        // ---------------------------------------------------------------------
        // Count through both numbering systems
        // ---------------------------------------------------------------------
        for value in 0..16 {
            display.render_hex_digit(value)?;
            println!("Digit: {:X} ({})", value, display.current_pattern());
            thread::sleep(Duration::from_millis(DIGIT_HOLD_MS));
        }

        // ---------------------------------------------------------------------
        // One lap of segment chase around the cycle A..G
        // ---------------------------------------------------------------------
        display.blank()?;
        let mut seg = Segment::A;
        for _ in 0..Segment::ALL.len() {
            display.write_line(seg, false)?; // sink: segment on
            thread::sleep(Duration::from_millis(CHASE_STEP_MS));
            display.write_line(seg, true)?; // release: segment off
            seg = seg.next();
        }
    }
}
