use crate::model::{ParamStore, ParamValue};

/// Ordered option list shared by the switch and the two selectors.
///
/// The stored value is an index into `options`. Clamp saturates at
/// `[0, n - 1]`; wrap takes the index modulo `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Options {
    pub options: &'static [&'static str],
}

impl Options {
    pub const fn new(options: &'static [&'static str]) -> Self {
        Self { options }
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Bring a raw index into range under the clamp/wrap policy.
    ///
    /// Returns `None` when there are no options.
    pub fn normalize(&self, raw: i64, clamp: bool) -> Option<usize> {
        let n = self.options.len() as i64;
        if n == 0 {
            return None;
        }
        let idx = if clamp {
            raw.clamp(0, n - 1)
        } else {
            raw.rem_euclid(n)
        };
        Some(idx as usize)
    }

    /// Index currently selected in `store` under `key`.
    pub fn selected(&self, key: &str, clamp: bool, store: &ParamStore) -> Option<usize> {
        self.normalize(i64::from(store.int_or_zero(key)), clamp)
    }

    /// Name of the selected option, or `empty_text` when there are none.
    pub fn selected_text(
        &self,
        key: &str,
        clamp: bool,
        store: &ParamStore,
        empty_text: &'static str,
    ) -> &'static str {
        self.selected(key, clamp, store)
            .map_or(empty_text, |idx| self.options[idx])
    }

    /// Move the selection by `sign * delta`.
    pub(crate) fn adjust(
        &self,
        key: &'static str,
        clamp: bool,
        sign: i32,
        delta: i32,
        store: &mut ParamStore,
    ) {
        if delta == 0 {
            return;
        }
        let Some(before) = self.selected(key, clamp, store) else {
            return;
        };
        let raw = before as i64 + i64::from(sign) * i64::from(delta);
        let Some(after) = self.normalize(raw, clamp) else {
            return;
        };
        if after != before {
            store.write(key, ParamValue::Index(after as i32));
        }
    }
}
