/// Offset (px) below which the navbar stays visible even while scrolling down.
pub const NAVBAR_HIDE_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// +1 for down, -1 for up.
    pub fn sign(self) -> f64 {
        match self {
            ScrollDirection::Down => 1.0,
            ScrollDirection::Up => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub direction: ScrollDirection,
}

impl ScrollSample {
    pub fn navbar_visible(&self) -> bool {
        !(self.direction == ScrollDirection::Down && self.offset > NAVBAR_HIDE_THRESHOLD)
    }
}

/// Remembers the previous vertical offset so each scroll event can be classified in O(1).
///
/// An event that does not move past the last offset counts as [`ScrollDirection::Up`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn observe(&mut self, offset: f64) -> ScrollSample {
        let direction = if offset > self.last_offset {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        self.last_offset = offset;
        ScrollSample { offset, direction }
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}
