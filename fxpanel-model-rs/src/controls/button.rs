use crate::model::{ParamStore, ParamValue};

/// On/off parameter with independent labels for each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pub true_text: &'static str,
    pub false_text: &'static str,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            true_text: "ON",
            false_text: "OFF",
        }
    }
}

impl Button {
    /// State reached from `current` after `delta`.
    ///
    /// Clamp: positive turns on, negative turns off. Wrap: any non-zero
    /// delta toggles. Zero never changes anything.
    pub fn resolve(current: bool, delta: i32, clamp: bool) -> bool {
        match (delta, clamp) {
            (0, _) => current,
            (d, true) => d > 0,
            (_, false) => !current,
        }
    }

    pub fn text(&self, on: bool) -> &'static str {
        if on {
            self.true_text
        } else {
            self.false_text
        }
    }

    pub(crate) fn adjust(key: &'static str, clamp: bool, delta: i32, store: &mut ParamStore) {
        let before = store.flag_or_false(key);
        let after = Self::resolve(before, delta, clamp);
        if after != before {
            store.write(key, ParamValue::Bool(after));
        }
    }
}
