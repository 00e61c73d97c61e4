use std::time::Duration;

use crate::scroll::ScrollDirection;

/// Time each role title stays on screen.
pub const TITLE_INTERVAL: Duration = Duration::from_millis(1700);

/// One full turn of the icon ring, in milliseconds.
pub const RING_PERIOD_MS: f64 = 12_000.0;

/// Index into the fixed title list. Always within `[0, len)` when `len > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleRotation {
    index: usize,
    len: usize,
}

impl TitleRotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn current<'a>(&self, titles: &[&'a str]) -> Option<&'a str> {
        titles.get(self.index).copied()
    }
}

/// Holds at most one pending handle (timer, listener). Arming returns the previous one so the
/// caller can cancel it.
#[derive(Debug)]
pub struct PendingSlot<H> {
    pending: Option<H>,
}

impl<H> Default for PendingSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> PendingSlot<H> {
    #[must_use]
    pub fn replace(&mut self, handle: H) -> Option<H> {
        self.pending.replace(handle)
    }

    pub fn take(&mut self) -> Option<H> {
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`.
pub fn ease_in_out(progress: f64) -> f64 {
    cubic_bezier(0.42, 0.0, 0.58, 1.0, progress)
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    let curve = |t: f64, a: f64, b: f64| {
        let u = 1.0 - t;
        3.0 * u * u * t * a + 3.0 * u * t * t * b + t * t * t
    };
    let slope = |t: f64, a: f64, b: f64| {
        let u = 1.0 - t;
        3.0 * u * u * a + 6.0 * u * t * (b - a) + 3.0 * t * t * (1.0 - b)
    };

    // newton first, bisection if the slope flattens out
    let mut t = x;
    for _ in 0..8 {
        let err = curve(t, x1, x2) - x;
        if err.abs() < 1e-7 {
            return curve(t, y1, y2);
        }
        let d = slope(t, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        t -= err / d;
    }
    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..40 {
        let v = curve(t, x1, x2);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    curve(t, y1, y2)
}

/// Rotation state of the icon ring. Each loop eases through a full turn in the current
/// direction; changing direction restarts the loop from the current angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpin {
    direction: ScrollDirection,
    origin: f64,
    elapsed: f64,
}

impl Default for RingSpin {
    fn default() -> Self {
        Self::new(ScrollDirection::Down)
    }
}

impl RingSpin {
    pub fn new(direction: ScrollDirection) -> Self {
        Self {
            direction,
            origin: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    /// Current angle in degrees.
    pub fn angle(&self) -> f64 {
        let progress = (self.elapsed / RING_PERIOD_MS).fract();
        self.origin + self.direction.sign() * 360.0 * ease_in_out(progress)
    }

    /// Moves the animation clock forward by one frame.
    pub fn advance(&mut self, delta_ms: f64) -> f64 {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed += delta_ms;
        }
        self.angle()
    }

    /// Returns true when the direction actually flipped.
    pub fn set_direction(&mut self, direction: ScrollDirection) -> bool {
        if direction == self.direction {
            return false;
        }
        self.origin = self.angle().rem_euclid(360.0);
        self.elapsed = 0.0;
        self.direction = direction;
        true
    }
}

/// Latches a viewport-entry reveal. With `replay` off, the element stays revealed once seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    replay: bool,
    shown: bool,
}

impl RevealLatch {
    pub fn once() -> Self {
        Self {
            replay: false,
            shown: false,
        }
    }

    pub fn replaying() -> Self {
        Self {
            replay: true,
            shown: false,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    pub fn observe(&mut self, in_view: bool) -> bool {
        self.shown = if self.replay {
            in_view
        } else {
            self.shown || in_view
        };
        self.shown
    }
}
