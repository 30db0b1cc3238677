//! Stateless controls bound to parameter keys.
//!
//! A [`Control`] describes *how* one parameter is edited and displayed;
//! the value itself lives in the [`ParamStore`]. The same control can
//! therefore appear on several pages, and adjusting it is a pure function
//! of `(control, delta, store)`.
//!
//! | Variant        | Stored as          | Delta sign | Empty text |
//! |----------------|--------------------|------------|------------|
//! | `Dial`         | `ParamValue::Int`  | +1         | n/a        |
//! | `Button`       | `ParamValue::Bool` | n/a        | n/a        |
//! | `Switch`       | `ParamValue::Index`| -1         | `-`        |
//! | `EnumSelect`   | `ParamValue::Index`| +1         | `-`        |
//! | `TextSelect`   | `ParamValue::Index`| +1         | `---`      |
//!
//! The switch is inverted so that "up" moves toward the first (top)
//! position.

mod button;
mod dial;
mod indexed;

use heapless::String;

use crate::model::{ModelError, ParamStore};

pub use button::Button;
pub use dial::{format_dial_value, Dial};
pub use indexed::Options;

/// Capacity of a rendered value string.
pub const VALUE_TEXT_LEN: usize = 16;

/// Fixed-capacity display text for a control value.
pub type ValueText = String<VALUE_TEXT_LEN>;

/// Maximum positions on a [`ControlKind::Switch`].
pub const MAX_SWITCH_POSITIONS: usize = 3;

/// Variant-specific data of a [`Control`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlKind {
    Dial(Dial),
    Button(Button),
    Switch(Options),
    EnumSelect(Options),
    TextSelect(Options),
}

/// One editable parameter tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Control {
    /// Parameter key in the [`ParamStore`].
    pub key: &'static str,
    /// Short label drawn at the top of the tile.
    pub label: &'static str,
    /// `true` saturates at the range ends, `false` rolls over.
    pub clamp: bool,
    pub kind: ControlKind,
}

impl Control {
    /// Clamped dial over `vmin..=vmax` with step 1.
    pub const fn dial(key: &'static str, label: &'static str, vmin: i32, vmax: i32) -> Self {
        Self {
            key,
            label,
            clamp: true,
            kind: ControlKind::Dial(Dial { vmin, vmax, step: 1 }),
        }
    }

    /// Clamped on/off button labelled `ON` / `OFF`.
    pub const fn button(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            clamp: true,
            kind: ControlKind::Button(Button {
                true_text: "ON",
                false_text: "OFF",
            }),
        }
    }

    /// Two or three position switch.
    pub const fn switch(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            clamp: true,
            kind: ControlKind::Switch(Options::new(options)),
        }
    }

    /// Option selector drawn with an icon/fallback glyph.
    pub const fn enum_select(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            clamp: true,
            kind: ControlKind::EnumSelect(Options::new(options)),
        }
    }

    /// Option selector drawn as large centred text.
    pub const fn text_select(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            clamp: true,
            kind: ControlKind::TextSelect(Options::new(options)),
        }
    }

    /// Switch to wrap/rollover behaviour.
    pub const fn wrapping(mut self) -> Self {
        self.clamp = false;
        self
    }

    /// Set the dial step. Ignored by other variants.
    pub fn with_step(mut self, step: i32) -> Self {
        if let ControlKind::Dial(ref mut dial) = self.kind {
            dial.step = step;
        }
        self
    }

    /// Set the button labels. Ignored by other variants.
    pub fn with_texts(mut self, true_text: &'static str, false_text: &'static str) -> Self {
        if let ControlKind::Button(ref mut button) = self.kind {
            button.true_text = true_text;
            button.false_text = false_text;
        }
        self
    }

    /// Check static layout constraints of this control.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self.kind {
            ControlKind::Switch(opts) if opts.len() > MAX_SWITCH_POSITIONS => {
                Err(ModelError::TooManySwitchOptions)
            }
            _ => Ok(()),
        }
    }

    /// Apply a signed delta to this control's parameter.
    ///
    /// A missing key reads as its default and is created on the first
    /// write. Nothing is written when the resolved value equals the
    /// current one.
    pub fn adjust(&self, delta: i32, store: &mut ParamStore) {
        match &self.kind {
            ControlKind::Dial(dial) => dial.adjust(self.key, self.clamp, delta, store),
            ControlKind::Button(_) => Button::adjust(self.key, self.clamp, delta, store),
            ControlKind::Switch(opts) => opts.adjust(self.key, self.clamp, -1, delta, store),
            ControlKind::EnumSelect(opts) | ControlKind::TextSelect(opts) => {
                opts.adjust(self.key, self.clamp, 1, delta, store)
            }
        }
    }

    /// Text shown in the tile's value line.
    pub fn display_text(&self, store: &ParamStore) -> ValueText {
        match &self.kind {
            ControlKind::Dial(_) => format_dial_value(store.int_or_zero(self.key)),
            ControlKind::Button(button) => {
                text_from(button.text(store.flag_or_false(self.key)))
            }
            ControlKind::Switch(opts) | ControlKind::EnumSelect(opts) => {
                text_from(opts.selected_text(self.key, self.clamp, store, "-"))
            }
            ControlKind::TextSelect(opts) => {
                text_from(opts.selected_text(self.key, self.clamp, store, "---"))
            }
        }
    }

    /// Selected option index for the indexed variants.
    ///
    /// `None` for dials, buttons, and empty option lists.
    pub fn selected_index(&self, store: &ParamStore) -> Option<usize> {
        match &self.kind {
            ControlKind::Switch(opts)
            | ControlKind::EnumSelect(opts)
            | ControlKind::TextSelect(opts) => opts.selected(self.key, self.clamp, store),
            ControlKind::Dial(_) | ControlKind::Button(_) => None,
        }
    }
}

/// Copy `s` into a [`ValueText`], truncating at a char boundary.
fn text_from(s: &str) -> ValueText {
    let mut text = ValueText::new();
    for ch in s.chars() {
        if text.push(ch).is_err() {
            break;
        }
    }
    text
}
