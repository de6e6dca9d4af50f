//! Edge case and boundary condition tests for the digit display

use rs_sevseg::{
    hal::MockLine, DigitDisplay, Pattern, Segment, DECIMAL_DIGIT_PATTERNS, HEX_DIGIT_PATTERNS,
};

fn mock_display() -> DigitDisplay<MockLine> {
    DigitDisplay::new(std::array::from_fn(|_| MockLine::new()))
}

// ============================================================================
// Digit Normalization
// ============================================================================

#[test]
fn decimal_zero_boundary() {
    let mut display = mock_display();
    display.render_decimal_digit(0).unwrap();
    assert_eq!(display.current_pattern(), DECIMAL_DIGIT_PATTERNS[0]);
}

#[test]
fn decimal_nine_boundary() {
    let mut display = mock_display();
    display.render_decimal_digit(9).unwrap();
    assert_eq!(display.current_pattern(), DECIMAL_DIGIT_PATTERNS[9]);
}

#[test]
fn decimal_ten_wraps_to_zero() {
    let mut display = mock_display();
    display.render_decimal_digit(10).unwrap();
    assert_eq!(display.current_pattern(), DECIMAL_DIGIT_PATTERNS[0]);
}

#[test]
fn negative_decimal_normalizes() {
    // rem_euclid lands in [0, 10): -1 is digit 9, -10 is digit 0
    let mut display = mock_display();

    display.render_decimal_digit(-1).unwrap();
    assert_eq!(display.current_pattern(), DECIMAL_DIGIT_PATTERNS[9]);

    display.render_decimal_digit(-10).unwrap();
    assert_eq!(display.current_pattern(), DECIMAL_DIGIT_PATTERNS[0]);

    display.render_decimal_digit(-13).unwrap();
    assert_eq!(display.current_pattern(), DECIMAL_DIGIT_PATTERNS[7]);
}

#[test]
fn negative_hex_normalizes() {
    let mut display = mock_display();

    display.render_hex_digit(-1).unwrap();
    assert_eq!(display.current_pattern(), HEX_DIGIT_PATTERNS[15]);

    display.render_hex_digit(-16).unwrap();
    assert_eq!(display.current_pattern(), HEX_DIGIT_PATTERNS[0]);
}

#[test]
fn extreme_inputs_stay_in_range() {
    let mut display = mock_display();

    display.render_decimal_digit(i32::MAX).unwrap();
    assert_eq!(
        display.current_pattern(),
        DECIMAL_DIGIT_PATTERNS[(i32::MAX % 10) as usize]
    );

    display.render_decimal_digit(i32::MIN).unwrap();
    assert_eq!(
        display.current_pattern(),
        DECIMAL_DIGIT_PATTERNS[i32::MIN.rem_euclid(10) as usize]
    );

    display.render_hex_digit(i32::MIN).unwrap();
    assert_eq!(
        display.current_pattern(),
        HEX_DIGIT_PATTERNS[i32::MIN.rem_euclid(16) as usize]
    );
}

// ============================================================================
// Pattern Masking
// ============================================================================

#[test]
fn bit_seven_is_masked_on_apply() {
    let mut display = mock_display();

    display.apply_pattern(Pattern::new(0b1111_1111)).unwrap();

    assert_eq!(display.current_pattern().bits(), 0b0111_1111);
    for seg in Segment::ALL {
        assert!(display.line(seg).is_lit());
    }
}

#[test]
fn patterns_differing_only_in_bit_seven_apply_identically() {
    let mut a = mock_display();
    let mut b = mock_display();

    a.apply_pattern(Pattern::new(0b1000_0110)).unwrap();
    b.apply_pattern(Pattern::new(0b0000_0110)).unwrap();

    assert_eq!(a.current_pattern(), b.current_pattern());
    for seg in Segment::ALL {
        assert_eq!(a.line(seg).level, b.line(seg).level);
    }
}

// ============================================================================
// Pass-Through Isolation
// ============================================================================

#[test]
fn raw_writes_do_not_disturb_the_pattern_record() {
    let mut display = mock_display();
    display.render_decimal_digit(5).unwrap();
    let recorded = display.current_pattern();

    display.write_line(Segment::A, true).unwrap();
    display.toggle_line(Segment::G).unwrap();

    assert_eq!(display.current_pattern(), recorded);
}

#[test]
fn reapply_restores_lines_after_raw_writes() {
    let mut display = mock_display();
    display.render_decimal_digit(5).unwrap();

    // Disturb two lines behind the controller's back
    display.write_line(Segment::A, true).unwrap();
    display.toggle_line(Segment::B).unwrap();

    // Re-applying the recorded pattern resynchronizes the hardware
    display.apply_pattern(display.current_pattern()).unwrap();
    let pattern = DECIMAL_DIGIT_PATTERNS[5];
    for seg in Segment::ALL {
        assert_eq!(display.line(seg).is_lit(), pattern.contains(seg));
    }
}

#[test]
fn double_toggle_is_identity() {
    let mut display = mock_display();
    display.render_decimal_digit(3).unwrap();
    let before = display.line(Segment::D).level;

    display.toggle_line(Segment::D).unwrap();
    display.toggle_line(Segment::D).unwrap();

    assert_eq!(display.line(Segment::D).level, before);
}

// ============================================================================
// Fresh Display State
// ============================================================================

#[test]
fn new_display_has_no_write_traffic() {
    let display = mock_display();
    assert_eq!(display.current_pattern(), Pattern::BLANK);
    for seg in Segment::ALL {
        assert_eq!(display.line(seg).write_count, 0);
    }
}

#[test]
fn blank_on_fresh_display_writes_all_lines() {
    let mut display = mock_display();
    display.blank().unwrap();
    for seg in Segment::ALL {
        assert_eq!(display.line(seg).write_count, 1);
        assert!(!display.line(seg).is_lit());
    }
}
