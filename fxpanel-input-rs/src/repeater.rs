//! Per-key debounce, auto-repeat and acceleration.
//!
//! A [`Repeater`] is driven by the frame time passed to each
//! [`update`](Repeater::update) call, never by sampling a clock, so a
//! recorded sequence of `(is_down, dt)` pairs always replays to the same
//! events.
//!
//! ```text
//!          press               held >= first_delay
//!   Idle ─────────► fire(1) ──► Held ──────────────► fire(step) every repeat_s
//!    ▲                           │
//!    └──────── release ──────────┘
//! ```

/// Shortest repeat interval accepted by [`Repeater::new`].
pub const MIN_REPEAT_S: f32 = 0.001;

/// Acceleration staircase: `(held below, step)`. Past the last row the
/// step is [`MAX_ACCEL_STEP`].
const ACCEL_STAIRS: [(f32, i32); 3] = [(0.6, 1), (1.2, 2), (2.0, 5)];

/// Step once the key has been held past the last staircase threshold.
pub const MAX_ACCEL_STEP: i32 = 10;

/// Repeat state machine for one logical key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Repeater {
    first_delay_s: f32,
    repeat_s: f32,
    accel: bool,
    was_down: bool,
    held_s: f32,
    since_fire_s: f32,
}

impl Repeater {
    /// Create an idle repeater.
    ///
    /// `first_delay_s` is clamped to `>= 0` and `repeat_s` to
    /// `>= MIN_REPEAT_S`. An infinite `repeat_s` never repeats.
    pub fn new(first_delay_s: f32, repeat_s: f32, accel: bool) -> Self {
        let first_delay_s = first_delay_s.max(0.0);
        let repeat_s = repeat_s.max(MIN_REPEAT_S);
        Self {
            first_delay_s,
            repeat_s,
            accel,
            was_down: false,
            held_s: 0.0,
            since_fire_s: 0.0,
        }
    }

    pub fn first_delay_s(&self) -> f32 {
        self.first_delay_s
    }

    pub fn repeat_s(&self) -> f32 {
        self.repeat_s
    }

    pub fn accel(&self) -> bool {
        self.accel
    }

    /// Seconds the key has been held since its press edge.
    pub fn held_s(&self) -> f32 {
        self.held_s
    }

    /// Returns `true` while the key is down.
    pub fn is_held(&self) -> bool {
        self.was_down
    }

    /// Step size for a repeat fire after `held_s` seconds.
    ///
    /// Always `1` without acceleration; otherwise `1`, `2`, `5`, then `10`
    /// at the 0.6 s, 1.2 s and 2.0 s marks.
    pub fn step_for_hold(&self, held_s: f32) -> i32 {
        if !self.accel {
            return 1;
        }
        ACCEL_STAIRS
            .iter()
            .find(|&&(below, _)| held_s < below)
            .map_or(MAX_ACCEL_STEP, |&(_, step)| step)
    }

    /// Return to idle with all timers cleared.
    pub fn reset(&mut self) {
        self.was_down = false;
        self.held_s = 0.0;
        self.since_fire_s = 0.0;
    }

    /// Advance by one frame.
    ///
    /// Returns the step to apply when the key fires this frame. Fires at
    /// most once per call, however large `dt_s` is. Negative or NaN
    /// `dt_s` counts as zero.
    pub fn update(&mut self, is_down: bool, dt_s: f32) -> Option<i32> {
        let dt_s = dt_s.max(0.0);

        if !is_down {
            self.reset();
            return None;
        }

        if !self.was_down {
            self.was_down = true;
            self.held_s = 0.0;
            self.since_fire_s = 0.0;
            return Some(1);
        }

        self.held_s += dt_s;
        self.since_fire_s += dt_s;

        if self.held_s >= self.first_delay_s && self.since_fire_s >= self.repeat_s {
            self.since_fire_s = 0.0;
            return Some(self.step_for_hold(self.held_s));
        }
        None
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
