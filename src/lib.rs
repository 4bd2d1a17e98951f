#![no_std]

mod classify;
mod constants;
mod format;
pub mod pwm;
mod text;

pub use classify::{char_to_segments, symbol_index};
pub use constants::*;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use format::Layout;
use heapless::Vec;
use num_traits::ToPrimitive;
use pwm::SoftwarePwm;
use text::TextWindow;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Digits are energized high, segments lit low.
    CommonAnode,
    /// Digits are energized low, segments lit high: the digit line sinks
    /// the common cathode current.
    #[default]
    CommonCathode,
}

impl Polarity {
    fn digit_state(self, on: bool) -> PinState {
        match self {
            Polarity::CommonAnode => PinState::from(on),
            Polarity::CommonCathode => PinState::from(!on),
        }
    }

    fn segment_state(self, on: bool) -> PinState {
        match self {
            Polarity::CommonAnode => PinState::from(!on),
            Polarity::CommonCathode => PinState::from(on),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub polarity: Polarity,
    /// Pad unused digits of numbers with '0' instead of blank.
    pub leading_zeros: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    fn segments(self) -> u8 {
        match self {
            TemperatureUnit::Celsius => segment_code(symbol::LETTER_C),
            TemperatureUnit::Fahrenheit => segment_code(symbol::LETTER_F),
        }
    }
}

/// Driver for a 7-segment display multiplexed directly from GPIO pins.
///
/// Segment lines A..G (and optionally DP) are shared by all digits; only one
/// digit line is energized at a time. Nothing is shown unless [`refresh`]
/// is called periodically, ideally at 100 Hz per digit or faster.
///
/// Position 0 of the display buffer is the first digit pin, which for
/// numbers holds the least significant digit.
///
/// [`refresh`]: SevSeg::refresh
pub struct SevSeg<D, S, const NUM_DIGITS: usize> {
    digit_pins: [D; NUM_DIGITS],
    segment_pins: Vec<S, MAX_SEGMENTS>,
    polarity: Polarity,
    leading_zeros: bool,
    enabled: bool,
    pwm: SoftwarePwm,
    text: TextWindow,
    buffer: [u8; NUM_DIGITS],
    cursor: usize,
}

impl<D, S, E, const NUM_DIGITS: usize> SevSeg<D, S, NUM_DIGITS>
where
    D: OutputPin<Error = E>,
    S: OutputPin<Error = E>,
{
    /// Takes ownership of the pins and drives all of them off.
    ///
    /// Fails with [`SevSegError::InvalidValue`] when there are no digits or
    /// the segment pin count isn't 7 (A..G) or 8 (A..G, DP).
    pub fn new<I>(
        config: Config,
        digit_pins: [D; NUM_DIGITS],
        segment_pins: I,
    ) -> Result<Self, SevSegError<E>>
    where
        I: IntoIterator<Item = S>,
    {
        if NUM_DIGITS == 0 {
            return Err(SevSegError::InvalidValue);
        }

        let mut pins = Vec::new();
        for pin in segment_pins {
            pins.push(pin).map_err(|_| SevSegError::InvalidValue)?;
        }
        if pins.len() < MIN_SEGMENTS {
            return Err(SevSegError::InvalidValue);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "sevseg: {} digits, {} segment pins, {}",
            NUM_DIGITS,
            pins.len(),
            config
        );

        let mut display = Self {
            digit_pins,
            segment_pins: pins,
            polarity: config.polarity,
            leading_zeros: config.leading_zeros,
            enabled: true,
            pwm: SoftwarePwm::new(),
            text: TextWindow::new(),
            buffer: [BLANK; NUM_DIGITS],
            cursor: 0,
        };
        display.clear_digit_pins()?;
        display.clear_segment_pins()?;

        Ok(display)
    }

    pub fn destroy(self) -> ([D; NUM_DIGITS], Vec<S, MAX_SEGMENTS>) {
        (self.digit_pins, self.segment_pins)
    }

    /// Current display buffer, position 0 first.
    pub fn segments(&self) -> &[u8; NUM_DIGITS] {
        &self.buffer
    }

    pub fn display_width(&self) -> usize {
        NUM_DIGITS
    }

    pub fn has_decimal_point(&self) -> bool {
        self.segment_pins.len() == MAX_SEGMENTS
    }

    pub fn is_character_supported(&self, c: char) -> bool {
        symbol_index(c).is_some()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn brightness(&self) -> u8 {
        self.pwm.brightness()
    }

    pub fn clear(&mut self) {
        self.commit([BLANK; NUM_DIGITS]);
    }

    /// Blanks the display right away without waiting for a refresh.
    pub fn turn_off(&mut self) -> Result<(), SevSegError<E>> {
        self.enabled = false;
        self.clear_digit_pins()?;
        self.clear_segment_pins()?;
        Ok(())
    }

    /// Re-enables the display, restoring full brightness if it was 0.
    pub fn turn_on(&mut self) {
        self.enabled = true;
        if self.pwm.brightness() == 0 {
            self.pwm.set_brightness(MAX_BRIGHTNESS);
        }
    }

    /// Blink support: the caller flips `enabled` at its own pace.
    pub fn toggle(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Brightness in percent, clamped to 100. Zero also disables the display.
    pub fn set_brightness(&mut self, percent: u8) {
        self.enabled = percent > 0;
        self.pwm.set_brightness(percent);
    }

    pub fn set_number<T>(&mut self, number: T) -> Result<(), SevSegError<E>>
    where
        T: ToPrimitive,
    {
        let number = number.to_i64().ok_or(SevSegError::InvalidValue)?;
        let next = self.render(number, Layout::decimal(self.leading_zeros))?;
        self.commit(next);
        Ok(())
    }

    /// Shows `number` with `decimal_places` digits after the decimal point.
    /// Extra places are truncated, not rounded.
    pub fn set_number_float<T>(
        &mut self,
        number: T,
        decimal_places: u8,
    ) -> Result<(), SevSegError<E>>
    where
        T: ToPrimitive,
    {
        if decimal_places == 0 || !self.has_decimal_point() {
            return self.reject();
        }
        let number = number.to_f32().ok_or(SevSegError::InvalidValue)?;
        let scaled =
            format::scale_float(number, decimal_places).ok_or(SevSegError::InvalidValue)?;

        let layout = Layout {
            min_digits: usize::from(decimal_places) + 1,
            ..Layout::decimal(self.leading_zeros)
        };
        let mut next = self.render(scaled, layout)?;
        format::set_decimal_points::<E>(&mut next, &[decimal_places])?;
        self.commit(next);
        Ok(())
    }

    /// Shows `number` with a decimal point after the digit at `position`,
    /// counted from the right. On 4 digits, position 1 renders `000.0`.
    pub fn set_number_with_decimal<T>(
        &mut self,
        number: T,
        position: u8,
    ) -> Result<(), SevSegError<E>>
    where
        T: ToPrimitive,
    {
        self.set_number_with_multiple_decimals(number, &[position])
    }

    pub fn set_number_with_multiple_decimals<T>(
        &mut self,
        number: T,
        positions: &[u8],
    ) -> Result<(), SevSegError<E>>
    where
        T: ToPrimitive,
    {
        if !self.has_decimal_point() {
            return self.reject();
        }
        let number = number.to_i64().ok_or(SevSegError::InvalidValue)?;
        let mut next = self.render(number, Layout::decimal(self.leading_zeros))?;
        format::set_decimal_points::<E>(&mut next, positions)?;
        self.commit(next);
        Ok(())
    }

    pub fn set_hex<T>(&mut self, number: T) -> Result<(), SevSegError<E>>
    where
        T: ToPrimitive,
    {
        let number = number.to_u32().ok_or(SevSegError::InvalidValue)?;
        let next = self.render(i64::from(number), Layout::hex(self.leading_zeros))?;
        self.commit(next);
        Ok(())
    }

    /// Shows a temperature followed by a degree sign, e.g. `23.4°`.
    /// Needs at least 2 digits.
    pub fn set_temperature<T>(
        &mut self,
        temperature: T,
        decimal_places: u8,
    ) -> Result<(), SevSegError<E>>
    where
        T: ToPrimitive,
    {
        if NUM_DIGITS < 2 {
            return self.reject();
        }
        let mut next = self.render_temperature(temperature, decimal_places, 1)?;
        next[0] = DEGREE;
        self.commit(next);
        Ok(())
    }

    /// Like [`set_temperature`](Self::set_temperature) with a trailing unit,
    /// e.g. `23°C`. Needs at least 3 digits.
    pub fn set_temperature_with_unit<T>(
        &mut self,
        temperature: T,
        decimal_places: u8,
        unit: TemperatureUnit,
    ) -> Result<(), SevSegError<E>>
    where
        T: ToPrimitive,
    {
        if NUM_DIGITS < 3 {
            return self.reject();
        }
        let mut next = self.render_temperature(temperature, decimal_places, 2)?;
        next[1] = DEGREE;
        next[0] = unit.segments();
        self.commit(next);
        Ok(())
    }

    /// Copies raw segment masks (bit 0 = A .. bit 7 = DP) into the lowest
    /// positions. Positions past the end of `pattern` keep their contents.
    pub fn set_segment(&mut self, pattern: &[u8]) -> Result<(), SevSegError<E>> {
        if pattern.len() > NUM_DIGITS {
            return self.reject();
        }
        let mut next = self.buffer;
        next[..pattern.len()].copy_from_slice(pattern);
        self.commit(next);
        Ok(())
    }

    /// Shows `text` starting at the leftmost digit. Text wider than the
    /// display can be moved with [`scroll_text_left`](Self::scroll_text_left)
    /// and [`scroll_text_right`](Self::scroll_text_right).
    pub fn set_text(&mut self, text: &str) -> Result<(), SevSegError<E>> {
        let Some(window) = TextWindow::load(text, NUM_DIGITS) else {
            return self.reject();
        };
        let mut next = [BLANK; NUM_DIGITS];
        window.project(&mut next);
        self.buffer = next;
        self.text = window;
        Ok(())
    }

    pub fn scroll_text_left(&mut self) {
        if self.text.scroll_left(NUM_DIGITS) {
            self.text.project(&mut self.buffer);
        }
    }

    pub fn scroll_text_right(&mut self) {
        if self.text.scroll_right(NUM_DIGITS) {
            self.text.project(&mut self.buffer);
        }
    }

    /// Shows the next digit. Must be called periodically; the driver keeps no
    /// time of its own.
    pub fn refresh(&mut self) -> Result<(), SevSegError<E>> {
        self.clear_digit_pins()?;

        let lit = self.pwm.tick() && self.enabled;
        if !lit {
            self.clear_segment_pins()?;
            return Ok(());
        }

        self.set_segment_pins(self.buffer[self.cursor])?;
        let state = self.polarity.digit_state(true);
        self.digit_pins[self.cursor].set_state(state)?;

        self.cursor = (self.cursor + 1) % NUM_DIGITS;
        Ok(())
    }

    /// Lights every segment of every digit in turn (A -> B -> .. -> DP),
    /// refreshing internally for `delay_ms` milliseconds per segment. The
    /// buffer is restored afterwards.
    pub fn display_test<DL>(&mut self, delay: &mut DL, delay_ms: u16) -> Result<(), SevSegError<E>>
    where
        DL: DelayNs,
    {
        let saved = self.buffer;
        self.buffer = [BLANK; NUM_DIGITS];
        let result = self.sweep_segments(delay, delay_ms);
        self.buffer = saved;
        result
    }

    fn sweep_segments<DL>(&mut self, delay: &mut DL, delay_ms: u16) -> Result<(), SevSegError<E>>
    where
        DL: DelayNs,
    {
        let segment_count = self.segment_pins.len();
        for digit in 0..NUM_DIGITS {
            #[cfg(feature = "defmt")]
            defmt::trace!("sevseg: testing digit {}", digit);

            for &mask in SEGMENT_SWEEP.iter().take(segment_count) {
                self.buffer[digit] = mask;
                for _ in 0..delay_ms {
                    self.refresh()?;
                    delay.delay_ms(1);
                }
                self.buffer[digit] = BLANK;
            }
        }
        Ok(())
    }

    fn render(&self, number: i64, layout: Layout) -> Result<[u8; NUM_DIGITS], SevSegError<E>> {
        let mut next = [BLANK; NUM_DIGITS];
        if let Err(error) = format::write_integer(&mut next, number, &layout) {
            #[cfg(feature = "defmt")]
            defmt::debug!("sevseg: {} does not fit {} digits", number, NUM_DIGITS);
            return Err(error);
        }
        Ok(next)
    }

    /// Renders the value above `reserved` low positions left free for glyphs.
    fn render_temperature<T>(
        &self,
        temperature: T,
        decimal_places: u8,
        reserved: usize,
    ) -> Result<[u8; NUM_DIGITS], SevSegError<E>>
    where
        T: ToPrimitive,
    {
        if decimal_places > 0 && !self.has_decimal_point() {
            return Err(SevSegError::InvalidValue);
        }
        let temperature = temperature.to_f32().ok_or(SevSegError::InvalidValue)?;
        let scaled =
            format::scale_float(temperature, decimal_places).ok_or(SevSegError::InvalidValue)?;

        let layout = Layout {
            offset: reserved,
            min_digits: usize::from(decimal_places) + 1,
            ..Layout::decimal(self.leading_zeros)
        };
        let mut next = self.render(scaled, layout)?;
        if decimal_places > 0 {
            // min_digits guarantees the units digit was placed
            next[reserved + usize::from(decimal_places)] |= DP_MASK;
        }
        Ok(next)
    }

    /// Replaces the buffer from a non-text source; scrolling stops applying.
    fn commit(&mut self, next: [u8; NUM_DIGITS]) {
        self.buffer = next;
        self.text = TextWindow::new();
    }

    fn reject(&self) -> Result<(), SevSegError<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("sevseg: request rejected");
        Err(SevSegError::InvalidValue)
    }

    fn set_segment_pins(&mut self, pattern: u8) -> Result<(), SevSegError<E>> {
        let polarity = self.polarity;
        for (i, pin) in self.segment_pins.iter_mut().enumerate() {
            pin.set_state(polarity.segment_state(pattern & (1 << i) != 0))?;
        }
        Ok(())
    }

    fn clear_digit_pins(&mut self) -> Result<(), SevSegError<E>> {
        let off = self.polarity.digit_state(false);
        for pin in self.digit_pins.iter_mut() {
            pin.set_state(off)?;
        }
        Ok(())
    }

    fn clear_segment_pins(&mut self) -> Result<(), SevSegError<E>> {
        let off = self.polarity.segment_state(false);
        for pin in self.segment_pins.iter_mut() {
            pin.set_state(off)?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SevSegError<E> {
    PinError(E),
    /// Value doesn't fit, unsupported character, missing DP pin or too few
    /// digits for the request, or an invalid pin configuration.
    InvalidValue,
}

impl<E> From<E> for SevSegError<E> {
    fn from(error: E) -> Self {
        SevSegError::PinError(error)
    }
}
