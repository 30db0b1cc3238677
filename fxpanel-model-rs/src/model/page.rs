use super::error::ModelError;
use super::TILES_PER_PAGE;
use crate::controls::Control;

/// One of the [`TILES_PER_PAGE`] tile positions on a page.
///
/// Active slots always form a prefix: a page with two controls has
/// slots `[Active, Active, Empty]`. Empty slots render a placeholder and
/// can never take focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TileSlot {
    Active(Control),
    #[default]
    Empty,
}

impl TileSlot {
    /// Returns `true` if this slot holds a control.
    pub fn is_active(&self) -> bool {
        matches!(self, TileSlot::Active(_))
    }

    /// Returns the control in this slot, or `None` if it is empty.
    pub fn control(&self) -> Option<&Control> {
        match self {
            TileSlot::Active(ctrl) => Some(ctrl),
            TileSlot::Empty => None,
        }
    }
}

/// A titled row of one to three controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Page {
    pub title: &'static str,
    slots: [TileSlot; TILES_PER_PAGE],
    len: usize,
}

impl Page {
    /// Build a page from `controls` in tile order.
    ///
    /// # Errors
    ///
    /// * [`ModelError::EmptyPage`] if `controls` is empty.
    /// * [`ModelError::TooManyControls`] if there are more than
    ///   [`TILES_PER_PAGE`] controls.
    /// * Any error from [`Control::validate`].
    pub fn new(title: &'static str, controls: &[Control]) -> Result<Self, ModelError> {
        if controls.is_empty() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Page {} rejected: no controls", title);
            return Err(ModelError::EmptyPage);
        }
        if controls.len() > TILES_PER_PAGE {
            #[cfg(feature = "defmt")]
            defmt::warn!("Page {} rejected: {} controls", title, controls.len());
            return Err(ModelError::TooManyControls);
        }

        let mut slots = [TileSlot::Empty; TILES_PER_PAGE];
        for (slot, ctrl) in slots.iter_mut().zip(controls) {
            ctrl.validate()?;
            *slot = TileSlot::Active(*ctrl);
        }

        Ok(Self {
            title,
            slots,
            len: controls.len(),
        })
    }

    /// Number of controls (1..=3).
    pub fn control_count(&self) -> usize {
        self.len
    }

    /// All tile slots, including trailing empty ones.
    pub fn slots(&self) -> &[TileSlot; TILES_PER_PAGE] {
        &self.slots
    }

    /// Control at tile `index`, or `None` for an empty or out-of-range slot.
    pub fn control(&self, index: usize) -> Option<&Control> {
        self.slots.get(index).and_then(TileSlot::control)
    }

    /// Iterate the active controls in tile order.
    pub fn controls(&self) -> impl Iterator<Item = &Control> + '_ {
        self.slots.iter().filter_map(TileSlot::control)
    }
}
