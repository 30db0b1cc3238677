use core::fmt::Write;

use crate::model::{ParamStore, ParamValue};

use super::ValueText;

/// Integer range with a step size.
///
/// `vmin` may exceed `vmax`; the range is then treated as inverted and
/// both bounds are swapped before clamping or wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dial {
    pub vmin: i32,
    pub vmax: i32,
    pub step: i32,
}

impl Dial {
    /// Ascending `(lo, hi)` bounds.
    pub fn bounds(&self) -> (i32, i32) {
        if self.vmin <= self.vmax {
            (self.vmin, self.vmax)
        } else {
            (self.vmax, self.vmin)
        }
    }

    /// Value reached from `current` after `delta` steps.
    ///
    /// Clamp saturates at the bounds; wrap rolls over inside the span
    /// `hi - lo + 1` starting at `lo`.
    pub fn resolve(&self, current: i32, delta: i32, clamp: bool) -> i32 {
        let (lo, hi) = self.bounds();
        let (lo, hi) = (i64::from(lo), i64::from(hi));
        let v = i64::from(current) + i64::from(delta) * i64::from(self.step);

        let v = if clamp {
            v.clamp(lo, hi)
        } else {
            let span = hi - lo + 1;
            lo + (v - lo).rem_euclid(span)
        };
        // Both branches land inside [lo, hi], which came from i32.
        v as i32
    }

    pub(crate) fn adjust(&self, key: &'static str, clamp: bool, delta: i32, store: &mut ParamStore) {
        if delta == 0 {
            return;
        }
        let before = store.int_or_zero(key);
        let after = self.resolve(before, delta, clamp);
        if after != before {
            store.write(key, ParamValue::Int(after));
        }
    }
}

/// Three-digit value text with a leading minus for negatives (`-012`, `035`).
pub fn format_dial_value(v: i32) -> ValueText {
    let mut text = ValueText::new();
    // Longest output is "-2147483648", well inside the buffer.
    if v < 0 {
        let _ = write!(text, "-{:03}", v.unsigned_abs());
    } else {
        let _ = write!(text, "{:03}", v);
    }
    text
}
