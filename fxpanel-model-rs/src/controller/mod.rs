//! Event controller: folds [`UiEvent`]s into an [`Effect`].
//!
//! Each event yields the minimal [`DirtyMask`] needed to repaint
//! correctly:
//!
//! | Event            | State change                         | Dirty                   |
//! |------------------|--------------------------------------|-------------------------|
//! | `Quit`           | none, loop must stop                 | `NONE`                  |
//! | `ToggleBypass`   | `enabled` flipped                    | `HEADER`                |
//! | `NavLeft/Right`  | control cursor ∓1 (wraps)            | old tile \| new tile    |
//! | `PagePrev/Next`  | page cursor ∓1 (wraps), renormalise  | `PAGE \| TILES`         |
//! | `ValueDelta(n)`  | focused control adjusted             | focused tile if changed |
//! | `Other(_)`       | none                                 | `NONE`                  |
//!
//! The returned mask is also accumulated into the effect's pending mask,
//! so a render loop may either use the return value or drain
//! [`Effect::take_dirty()`].

mod events;

pub use events::UiEvent;

use crate::model::{DirtyMask, Effect};

/// Result of applying one event or a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Applied {
    /// `false` once a [`UiEvent::Quit`] has been seen.
    pub keep_running: bool,
    pub dirty: DirtyMask,
}

impl Applied {
    const fn running(dirty: DirtyMask) -> Self {
        Self {
            keep_running: true,
            dirty,
        }
    }
}

/// Apply `event` to `fx`.
pub fn apply_event(fx: &mut Effect, event: UiEvent) -> Applied {
    let applied = match event {
        UiEvent::Quit => Applied {
            keep_running: false,
            dirty: DirtyMask::NONE,
        },
        UiEvent::ToggleBypass => {
            fx.enabled = !fx.enabled;
            Applied::running(DirtyMask::HEADER)
        }
        UiEvent::NavLeft => Applied::running(move_focus(fx, -1)),
        UiEvent::NavRight => Applied::running(move_focus(fx, 1)),
        UiEvent::PagePrev => {
            fx.step_page(-1);
            Applied::running(DirtyMask::PAGE | DirtyMask::TILES)
        }
        UiEvent::PageNext => {
            fx.step_page(1);
            Applied::running(DirtyMask::PAGE | DirtyMask::TILES)
        }
        UiEvent::ValueDelta(delta) => Applied::running(adjust_focused(fx, delta)),
        UiEvent::Other(_code) => {
            #[cfg(feature = "defmt")]
            defmt::debug!("ignoring unknown event code {}", _code);
            Applied::running(DirtyMask::NONE)
        }
    };
    fx.mark_dirty(applied.dirty);
    applied
}

/// Apply `events` in order, accumulating the dirty mask.
///
/// Stops at the first [`UiEvent::Quit`]; events after it are not applied.
pub fn apply_batch<I>(fx: &mut Effect, events: I) -> Applied
where
    I: IntoIterator<Item = UiEvent>,
{
    let mut total = Applied::running(DirtyMask::NONE);
    for event in events {
        let step = apply_event(fx, event);
        total.dirty |= step.dirty;
        if !step.keep_running {
            total.keep_running = false;
            break;
        }
    }
    total
}

fn move_focus(fx: &mut Effect, step: isize) -> DirtyMask {
    let before = fx.control_index();
    fx.step_control(step);
    let after = fx.control_index();
    if before == after {
        DirtyMask::NONE
    } else {
        DirtyMask::tile(before) | DirtyMask::tile(after)
    }
}

fn adjust_focused(fx: &mut Effect, delta: i32) -> DirtyMask {
    let index = fx.control_index();
    let ctrl = *fx.current_control();
    let before = fx.params.get(ctrl.key);
    ctrl.adjust(delta, &mut fx.params);
    if fx.params.get(ctrl.key) == before {
        DirtyMask::NONE
    } else {
        DirtyMask::tile(index)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
