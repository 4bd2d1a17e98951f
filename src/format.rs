use num_traits::float::FloatCore;

use crate::classify::digit_to_segments;
use crate::constants::{segment_code, symbol, BLANK, DP_MASK, MINUS};
use crate::SevSegError;

/// How an integer is laid out across the digits. Position 0 is the
/// rightmost (least significant) digit.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Layout {
    pub base: u64,
    pub leading_zeros: bool,
    /// Low positions kept free for trailing glyphs (degree, unit).
    pub offset: usize,
    /// The magnitude is zero-padded to at least this many digits.
    pub min_digits: usize,
}

impl Layout {
    pub const fn decimal(leading_zeros: bool) -> Self {
        Self {
            base: 10,
            leading_zeros,
            offset: 0,
            min_digits: 1,
        }
    }

    pub const fn hex(leading_zeros: bool) -> Self {
        Self {
            base: 16,
            ..Self::decimal(leading_zeros)
        }
    }
}

/// Number of positions `value` occupies, including sign and reserved slots.
pub(crate) fn digits_needed(value: i64, layout: &Layout) -> usize {
    let mut magnitude = value.unsigned_abs();
    let mut count = 0;
    while magnitude > 0 {
        count += 1;
        magnitude /= layout.base;
    }
    count.max(layout.min_digits).max(1) + usize::from(value < 0) + layout.offset
}

/// Renders `value` into `segments`, replacing every position. Leaves
/// `segments` untouched if the value doesn't fit.
pub(crate) fn write_integer<E>(
    segments: &mut [u8],
    value: i64,
    layout: &Layout,
) -> Result<(), SevSegError<E>> {
    if digits_needed(value, layout) > segments.len() {
        return Err(SevSegError::InvalidValue);
    }

    let fill = if layout.leading_zeros {
        segment_code(symbol::ZERO)
    } else {
        BLANK
    };
    segments.fill(fill);

    let mut magnitude = value.unsigned_abs();
    let mut position = layout.offset;
    loop {
        segments[position] = digit_to_segments((magnitude % layout.base) as u8);
        magnitude /= layout.base;
        position += 1;
        if magnitude == 0 && position - layout.offset >= layout.min_digits {
            break;
        }
    }

    if value < 0 {
        segments[position] = MINUS;
    }

    Ok(())
}

/// ORs the decimal point into each listed position. All positions are
/// checked before any is applied.
pub(crate) fn set_decimal_points<E>(
    segments: &mut [u8],
    positions: &[u8],
) -> Result<(), SevSegError<E>> {
    if positions.is_empty() || positions.iter().any(|&p| p as usize >= segments.len()) {
        return Err(SevSegError::InvalidValue);
    }
    for &position in positions {
        segments[position as usize] |= DP_MASK;
    }
    Ok(())
}

/// `value * 10^decimal_places` in single precision, truncated toward zero.
/// The product is rounded to `f32` before truncation so readings like
/// `0.7f32` scale to 7 rather than 6.
pub(crate) fn scale_float(value: f32, decimal_places: u8) -> Option<i64> {
    if !FloatCore::is_finite(value) {
        return None;
    }
    let scaled = FloatCore::trunc(value * FloatCore::powi(10.0f32, i32::from(decimal_places)));
    if scaled < i32::MIN as f32 || scaled > i32::MAX as f32 {
        return None;
    }
    Some(scaled as i64)
}
