mod common;

use common::default_rig;
use sevseg::{char_to_segments, segment_code, symbol_index, SEGMENT_CODES, BLANK, DEGREE};

fn seg(c: char) -> u8 {
    char_to_segments(c).unwrap()
}

#[test]
fn segment_table_is_stable() {
    assert_eq!(SEGMENT_CODES.len(), 41);
    for index in 0..41u8 {
        assert_eq!(segment_code(index), SEGMENT_CODES[index as usize]);
        assert_eq!(segment_code(index), segment_code(index));
    }
    assert_eq!(segment_code(41), BLANK);

    // aliases
    assert_eq!(seg('U'), seg('V'));
    assert_eq!(seg('H'), seg('K'));
    assert_eq!(seg('H'), seg('X'));
    assert_eq!(seg('Z'), seg('2'));
    assert_eq!(seg('O'), seg('0'));
}

#[test]
fn characters_classify_to_table_index() {
    for (i, c) in ('0'..='9').enumerate() {
        assert_eq!(symbol_index(c), Some(i as u8));
    }
    for (i, c) in ('A'..='Z').enumerate() {
        assert_eq!(symbol_index(c), Some(i as u8 + 10));
        assert_eq!(symbol_index(c.to_ascii_lowercase()), Some(i as u8 + 10));
    }
    assert_eq!(symbol_index(' '), Some(36));
    assert_eq!(symbol_index('-'), Some(37));
    assert_eq!(symbol_index('.'), Some(38));
    assert_eq!(symbol_index('*'), Some(39));
    assert_eq!(symbol_index('°'), Some(39));
    assert_eq!(symbol_index('_'), Some(40));
}

#[test]
fn supported_characters() {
    let display = default_rig::<4>().display;

    for c in ['a', 'Z', '7', ' ', '-', '.', '_', '*', '°'] {
        assert!(display.is_character_supported(c), "{c:?}");
    }
    for c in ['!', '~', '/', 'é', '\n'] {
        assert!(!display.is_character_supported(c), "{c:?}");
    }
}

#[test]
fn short_text_starts_at_highest_digit() {
    let mut display = default_rig::<2>().display;

    display.set_text("Hi").unwrap();
    assert_eq!(display.segments(), &[seg('I'), seg('H')]);

    let mut wide = default_rig::<4>().display;
    wide.set_text("A").unwrap();
    assert_eq!(wide.segments(), &[BLANK, BLANK, BLANK, seg('A')]);

    wide.set_text("").unwrap();
    assert_eq!(wide.segments(), &[BLANK; 4]);

    wide.set_text("2*").unwrap();
    assert_eq!(wide.segments(), &[BLANK, BLANK, DEGREE, seg('2')]);
}

#[test]
fn long_text_scrolls_left_through_gap() {
    let mut display = default_rig::<2>().display;
    display.set_text("Hello").unwrap();
    let start = *display.segments();
    assert_eq!(start, [seg('E'), seg('H')]);

    display.scroll_text_left();
    assert_eq!(display.segments(), &[seg('L'), seg('E')]);

    // "HELLO" plus two blanks of gap
    let pattern_length = 7;
    let mut windows = vec![start];
    for _ in 1..pattern_length {
        display.scroll_text_left();
        windows.push(*display.segments());
    }
    assert_eq!(windows[4], [BLANK, seg('O')]);
    assert_eq!(windows[5], [BLANK, BLANK]);
    assert_eq!(windows[6], [seg('H'), BLANK]);

    display.scroll_text_left();
    assert_eq!(display.segments(), &start);
}

#[test]
fn scroll_right_undoes_scroll_left() {
    let mut display = default_rig::<2>().display;
    display.set_text("Hello").unwrap();

    display.scroll_text_right();
    assert_eq!(display.segments(), &[seg('H'), BLANK]);

    display.scroll_text_left();
    assert_eq!(display.segments(), &[seg('E'), seg('H')]);
}

#[test]
fn fitting_text_does_not_scroll() {
    let mut display = default_rig::<4>().display;
    display.set_text("Hey").unwrap();
    let before = *display.segments();

    display.scroll_text_left();
    assert_eq!(display.segments(), &before);
    display.scroll_text_right();
    assert_eq!(display.segments(), &before);
}

#[test]
fn rejected_text_leaves_display_untouched() {
    let mut display = default_rig::<4>().display;
    display.set_number(42).unwrap();
    let before = *display.segments();

    assert!(display.set_text("h!").is_err());
    assert_eq!(display.segments(), &before);

    let too_long = "8".repeat(sevseg::MAX_TEXT_PATTERN);
    assert!(display.set_text(&too_long).is_err());
    assert_eq!(display.segments(), &before);
}

#[test]
fn number_replaces_scrolling_text() {
    let mut display = default_rig::<2>().display;
    display.set_text("Hello").unwrap();
    display.set_number(7).unwrap();
    let before = *display.segments();

    display.scroll_text_left();
    assert_eq!(display.segments(), &before);
}

#[test]
fn set_segment_keeps_high_positions() {
    let mut display = default_rig::<2>().display;
    display.set_text("Hi").unwrap();

    display.set_segment(&[0b0000_0001]).unwrap();
    assert_eq!(display.segments(), &[0b0000_0001, seg('H')]);

    display.set_segment(&[]).unwrap();
    assert_eq!(display.segments(), &[0b0000_0001, seg('H')]);

    assert!(display.set_segment(&[1, 2, 3]).is_err());
    assert_eq!(display.segments(), &[0b0000_0001, seg('H')]);

    display.set_segment(&[0x0F, 0xB9]).unwrap();
    assert_eq!(display.segments(), &[0x0F, 0xB9]);
}

#[test]
fn clear_is_idempotent() {
    let mut display = default_rig::<4>().display;
    display.set_number(1234).unwrap();

    display.clear();
    let once = *display.segments();
    display.clear();
    assert_eq!(display.segments(), &once);
    assert_eq!(once, [BLANK; 4]);
}
