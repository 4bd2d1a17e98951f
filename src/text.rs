use heapless::Vec;

use crate::classify::char_to_segments;
use crate::constants::{BLANK, MAX_TEXT_PATTERN};

/// Segment masks of a string plus the scroll offset into them.
///
/// Text wider than the display gets `width` blanks appended so repeats are
/// separated by a full empty screen while scrolling.
#[derive(Clone, Debug, Default)]
pub(crate) struct TextWindow {
    pattern: Vec<u8, MAX_TEXT_PATTERN>,
    position: usize,
}

impl TextWindow {
    pub const fn new() -> Self {
        Self {
            pattern: Vec::new(),
            position: 0,
        }
    }

    /// `None` if a character is unsupported or the pattern won't fit.
    pub fn load(text: &str, width: usize) -> Option<Self> {
        let mut pattern = Vec::new();
        for c in text.chars() {
            pattern.push(char_to_segments(c)?).ok()?;
        }
        if pattern.len() > width {
            for _ in 0..width {
                pattern.push(BLANK).ok()?;
            }
        }
        Some(Self {
            pattern,
            position: 0,
        })
    }

    fn scrollable(&self, width: usize) -> bool {
        self.pattern.len() > width
    }

    /// Returns false when the text fits and nothing moved.
    pub fn scroll_left(&mut self, width: usize) -> bool {
        if !self.scrollable(width) {
            return false;
        }
        self.position = (self.position + 1) % self.pattern.len();
        true
    }

    pub fn scroll_right(&mut self, width: usize) -> bool {
        if !self.scrollable(width) {
            return false;
        }
        let len = self.pattern.len();
        self.position = (self.position + len - 1) % len;
        true
    }

    /// Writes the visible window so that reading order runs from the highest
    /// digit index down to 0.
    pub fn project(&self, segments: &mut [u8]) {
        let width = segments.len();
        let len = self.pattern.len();
        for (i, segment) in segments.iter_mut().rev().enumerate() {
            *segment = if self.scrollable(width) {
                self.pattern[(self.position + i) % len]
            } else {
                self.pattern.get(i).copied().unwrap_or(BLANK)
            };
        }
    }
}
