#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use sevseg::{Config, Polarity, SevSeg};

/// Output pin that remembers its last level. Clones share state so the test
/// keeps a probe after the driver takes ownership.
#[derive(Clone, Default)]
pub struct MockPin {
    level: Rc<Cell<Option<bool>>>,
    highs: Rc<Cell<usize>>,
    fail: Rc<Cell<bool>>,
}

impl MockPin {
    pub fn level(&self) -> Option<bool> {
        self.level.get()
    }

    pub fn highs(&self) -> usize {
        self.highs.get()
    }

    pub fn reset_highs(&self) {
        self.highs.set(0);
    }

    pub fn fail(&self, fail: bool) {
        self.fail.set(fail);
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail.get() {
            return Err(ErrorKind::Other);
        }
        self.level.set(Some(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail.get() {
            return Err(ErrorKind::Other);
        }
        self.level.set(Some(true));
        self.highs.set(self.highs.get() + 1);
        Ok(())
    }
}

pub struct Rig<const N: usize> {
    pub display: SevSeg<MockPin, MockPin, N>,
    pub polarity: Polarity,
    pub digits: [MockPin; N],
    pub segments: Vec<MockPin>,
}

pub fn rig<const N: usize>(config: Config, segment_count: usize) -> Rig<N> {
    let digits: [MockPin; N] = core::array::from_fn(|_| MockPin::default());
    let segments: Vec<MockPin> = (0..segment_count).map(|_| MockPin::default()).collect();
    let display = SevSeg::new(config, digits.clone(), segments.clone())
        .unwrap_or_else(|_| panic!("{N} digits / {segment_count} segments rejected"));
    Rig {
        display,
        polarity: config.polarity,
        digits,
        segments,
    }
}

/// 8 segment pins, common cathode, no leading zeros.
pub fn default_rig<const N: usize>() -> Rig<N> {
    rig(Config::default(), 8)
}

impl<const N: usize> Rig<N> {
    /// Indices of digit lines currently energized.
    pub fn lit_digits(&self) -> Vec<usize> {
        let on = self.polarity == Polarity::CommonAnode;
        self.digits
            .iter()
            .enumerate()
            .filter(|(_, pin)| pin.level() == Some(on))
            .map(|(i, _)| i)
            .collect()
    }

    /// Mask currently driven onto the segment lines.
    pub fn driven_mask(&self) -> u8 {
        let on = self.polarity == Polarity::CommonCathode;
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, pin)| pin.level() == Some(on))
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }
}

/// Reads a plain decimal number back off the display buffer.
pub fn decode_decimal(segments: &[u8]) -> Option<i64> {
    let mut value = 0i64;
    let mut negative = false;
    for &mask in segments.iter().rev() {
        if mask == sevseg::BLANK {
            continue;
        }
        if mask == sevseg::MINUS {
            negative = true;
            continue;
        }
        let digit = sevseg::SEGMENT_CODES[..10].iter().position(|&code| code == mask)?;
        value = value * 10 + digit as i64;
    }
    Some(if negative { -value } else { value })
}
