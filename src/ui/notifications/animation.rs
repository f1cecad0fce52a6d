// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation and deadline primitives for the toast timeline.
//!
//! Everything here is driven by explicit `Instant`s so the toast can be
//! advanced by the application tick and by tests alike.

use std::time::{Duration, Instant};

/// Control points of the standard "ease" curve, `cubic-bezier(0.42, 0, 1, 1)`.
const EASE_X1: f32 = 0.42;
const EASE_Y1: f32 = 0.0;
const EASE_X2: f32 = 1.0;
const EASE_Y2: f32 = 1.0;

/// Timing curves used by the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Slow start, used when sliding out.
    EaseIn,
    /// Slow finish, used when sliding in.
    EaseOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => ease(t),
            Easing::EaseOut => 1.0 - ease(1.0 - t),
        }
    }
}

fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Evaluates the base ease curve at `x`.
///
/// Solves `bezier_x(s) = x` for the curve parameter with a few Newton steps,
/// falling back to bisection where the slope flattens out.
fn ease(x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut s = x;
    for _ in 0..8 {
        let error = bezier(EASE_X1, EASE_X2, s) - x;
        if error.abs() < 1e-6 {
            return bezier(EASE_Y1, EASE_Y2, s);
        }
        let slope = bezier_slope(EASE_X1, EASE_X2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - error / slope).clamp(0.0, 1.0);
    }

    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier(EASE_X1, EASE_X2, s);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) / 2.0;
    }
    bezier(EASE_Y1, EASE_Y2, s)
}

/// A single animated transition of one `f32` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    /// Starts animating from `from` to `to` at `start`.
    #[must_use]
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// A tween that sits at `value` forever.
    #[must_use]
    pub fn still(value: f32, at: Instant) -> Self {
        Self::new(value, value, at, Duration::ZERO, Easing::Linear)
    }

    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    /// Whether the target has been reached at `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// A scheduled callback, modeled as a deadline.
///
/// Firing and cancelling both consume the timer, so holding it as an
/// `Option<Timer>` makes "fires at most once" structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    /// `None` when the deadline lies beyond what `Instant` can represent.
    deadline: Option<Instant>,
}

impl Timer {
    /// Schedules a timer `delay` after `now`.
    #[must_use]
    pub fn start(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: now.checked_add(delay),
        }
    }

    /// Returns whether the deadline has passed at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}
