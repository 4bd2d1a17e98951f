//! Software duty cycle for brightness control.
//!
//! Every refresh tick advances a counter over [`PWM_PERIOD`] ticks; the
//! display is lit on `ceil(brightness / 10)` of them. 0% is always dark and
//! 100% always lit.

use crate::constants::{MAX_BRIGHTNESS, PWM_PERIOD};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SoftwarePwm {
    brightness: u8,
    counter: u8,
}

impl SoftwarePwm {
    pub const fn new() -> Self {
        Self {
            brightness: MAX_BRIGHTNESS,
            counter: 0,
        }
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Values above 100 clamp to 100.
    pub fn set_brightness(&mut self, percent: u8) {
        self.brightness = percent.min(MAX_BRIGHTNESS);
    }

    /// Lit ticks per period, 0..=10.
    pub fn level(&self) -> u8 {
        self.brightness.div_ceil(MAX_BRIGHTNESS / PWM_PERIOD)
    }

    /// Advances one tick and reports whether it is lit.
    pub fn tick(&mut self) -> bool {
        self.counter = (self.counter + 1) % PWM_PERIOD;
        let level = self.level();
        level > 0 && (level >= PWM_PERIOD || self.counter < level)
    }
}

impl Default for SoftwarePwm {
    fn default() -> Self {
        Self::new()
    }
}
