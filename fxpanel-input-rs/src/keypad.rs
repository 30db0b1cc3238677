//! Key-state input source.
//!
//! [`KeypadInput`] polls a [`KeyScanner`] for the raw down/up state of
//! eight logical keys and turns it into [`UiEvent`]s through one
//! [`Repeater`] per key.
//!
//! Per tick, a pending quit short-circuits everything else. Otherwise
//! events are produced in this fixed order:
//!
//! 1. `ToggleBypass` on the press edge of [`Key::Bypass`] only.
//! 2. `NavLeft`, `NavRight` (nav timing, no acceleration).
//! 3. `PagePrev`, `PageNext` (page timing, no acceleration).
//! 4. `ValueDelta(+step)` for [`Key::Up`], then `ValueDelta(-step)` for
//!    [`Key::Down`] (up/down timing, accelerated).

use fxpanel::UiEvent;

use crate::error::InputError;
use crate::repeater::Repeater;
use crate::source::{EventBatch, InputSource};
use crate::timing::InputConfig;

/// Logical keys of the front panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Left,
    Right,
    PagePrev,
    PageNext,
    Up,
    Down,
    Bypass,
    Quit,
}

impl Key {
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Down/up state of every [`Key`] at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyState(u8);

impl KeyState {
    /// No key down.
    pub const RELEASED: Self = Self(0);

    /// State with exactly `keys` down.
    pub fn with(keys: &[Key]) -> Self {
        keys.iter().fold(Self::RELEASED, |state, &key| state.pressed(key))
    }

    /// Copy of `self` with `key` down.
    pub const fn pressed(self, key: Key) -> Self {
        Self(self.0 | key.bit())
    }

    pub const fn is_down(self, key: Key) -> bool {
        self.0 & key.bit() != 0
    }

    pub const fn any_down(self) -> bool {
        self.0 != 0
    }
}

/// Backend that reports which keys are currently down.
pub trait KeyScanner {
    type Error;

    fn scan(&mut self) -> Result<KeyState, Self::Error>;
}

/// [`InputSource`] over a [`KeyScanner`].
pub struct KeypadInput<S> {
    scanner: S,
    keys: KeyState,
    quit: bool,
    bypass_latched: bool,
    left: Repeater,
    right: Repeater,
    page_prev: Repeater,
    page_next: Repeater,
    up: Repeater,
    down: Repeater,
}

impl<S: KeyScanner> KeypadInput<S> {
    pub fn new(scanner: S, config: &InputConfig) -> Self {
        Self {
            scanner,
            keys: KeyState::RELEASED,
            quit: false,
            bypass_latched: false,
            left: config.nav_repeater(),
            right: config.nav_repeater(),
            page_prev: config.page_repeater(),
            page_next: config.page_repeater(),
            up: config.updown_repeater(),
            down: config.updown_repeater(),
        }
    }

    /// Key state from the last successful [`pump`](InputSource::pump).
    pub fn keys(&self) -> KeyState {
        self.keys
    }

    /// Returns `true` once a quit has been requested. Sticky.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Request a quit from outside the key matrix (window close, signal).
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    pub fn into_scanner(self) -> S {
        self.scanner
    }
}

impl<S: KeyScanner> InputSource for KeypadInput<S> {
    type Error = InputError<S::Error>;

    fn pump(&mut self) -> Result<(), Self::Error> {
        self.keys = self.scanner.scan()?;
        if self.keys.is_down(Key::Quit) {
            self.quit = true;
        }
        Ok(())
    }

    fn get_events(&mut self, dt_ms: u32) -> EventBatch {
        let mut events = EventBatch::new();
        if self.quit {
            push(&mut events, UiEvent::Quit);
            return events;
        }

        let dt_s = dt_ms as f32 / 1000.0;
        let keys = self.keys;

        if keys.is_down(Key::Bypass) {
            if !self.bypass_latched {
                self.bypass_latched = true;
                push(&mut events, UiEvent::ToggleBypass);
            }
        } else {
            self.bypass_latched = false;
        }

        if self.left.update(keys.is_down(Key::Left), dt_s).is_some() {
            push(&mut events, UiEvent::NavLeft);
        }
        if self.right.update(keys.is_down(Key::Right), dt_s).is_some() {
            push(&mut events, UiEvent::NavRight);
        }
        if self.page_prev.update(keys.is_down(Key::PagePrev), dt_s).is_some() {
            push(&mut events, UiEvent::PagePrev);
        }
        if self.page_next.update(keys.is_down(Key::PageNext), dt_s).is_some() {
            push(&mut events, UiEvent::PageNext);
        }
        if let Some(step) = self.up.update(keys.is_down(Key::Up), dt_s) {
            push(&mut events, UiEvent::ValueDelta(step));
        }
        if let Some(step) = self.down.update(keys.is_down(Key::Down), dt_s) {
            push(&mut events, UiEvent::ValueDelta(-step));
        }

        events
    }
}

fn push(events: &mut EventBatch, event: UiEvent) {
    if events.push(event).is_err() {
        #[cfg(feature = "defmt")]
        defmt::warn!("event batch full, dropped {}", event);
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
