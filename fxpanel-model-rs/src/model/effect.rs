use heapless::{FnvIndexMap, Vec};

use super::dirty::DirtyMask;
use super::error::ModelError;
use super::page::Page;
use super::store::ParamStore;
use super::{MAX_PAGES, MAX_UI_SCRATCH};
use crate::controls::Control;

/// Editor session: pages, parameter values, cursor, and pending repaint.
///
/// # Cursor invariant
///
/// `page_index < page_count()` and `control_index <
/// current_page().control_count()` hold after every mutation. The cursor
/// is only changed through the methods below, each of which renormalises
/// it, so reads never need to.
///
/// # Initialization
///
/// [`Effect::new()`] starts with [`DirtyMask::ALL`] pending so the first
/// frame paints the whole screen.
#[derive(Debug, Clone)]
pub struct Effect {
    pub name: &'static str,
    pages: Vec<Page, MAX_PAGES>,
    pub params: ParamStore,
    /// `false` when the effect is bypassed.
    pub enabled: bool,
    page_index: usize,
    control_index: usize,
    dirty: DirtyMask,
    /// Per-control selection state for compound controls.
    pub ui: FnvIndexMap<&'static str, i32, MAX_UI_SCRATCH>,
}

impl Effect {
    /// Build a session from a static page layout and initial values.
    ///
    /// # Errors
    ///
    /// * [`ModelError::NoPages`] if `pages` is empty.
    /// * [`ModelError::TooManyPages`] if there are more than [`MAX_PAGES`].
    pub fn new(name: &'static str, pages: &[Page], params: ParamStore) -> Result<Self, ModelError> {
        if pages.is_empty() {
            return Err(ModelError::NoPages);
        }
        let pages = Vec::from_slice(pages).map_err(|_| ModelError::TooManyPages)?;

        Ok(Self {
            name,
            pages,
            params,
            enabled: true,
            page_index: 0,
            control_index: 0,
            dirty: DirtyMask::ALL,
            ui: FnvIndexMap::new(),
        })
    }

    // ── Cursor ───────────────────────────────────────────────────────

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn control_index(&self) -> usize {
        self.control_index
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Page under the cursor.
    pub fn current_page(&self) -> &Page {
        &self.pages[self.page_index]
    }

    /// Control under the cursor.
    pub fn current_control(&self) -> &Control {
        // Page construction guarantees at least one control and the
        // cursor invariant keeps control_index inside the active prefix.
        match self.current_page().control(self.control_index) {
            Some(ctrl) => ctrl,
            None => unreachable!("cursor outside the active controls"),
        }
    }

    /// Number of controls on the current page.
    pub fn n_controls(&self) -> usize {
        self.current_page().control_count()
    }

    /// Jump to `page`, renormalising the control cursor.
    ///
    /// Returns [`ModelError::InvalidPageIndex`] if `page >= page_count()`.
    /// Does not mark anything dirty; the caller decides what to repaint.
    pub fn set_page(&mut self, page: usize) -> Result<(), ModelError> {
        if page >= self.pages.len() {
            return Err(ModelError::InvalidPageIndex);
        }
        self.page_index = page;
        self.control_index %= self.n_controls();
        Ok(())
    }

    /// Move the page cursor by `step` with wrap-around and renormalise the
    /// control cursor against the new page.
    pub(crate) fn step_page(&mut self, step: isize) {
        let n = self.pages.len() as isize;
        self.page_index = (self.page_index as isize + step).rem_euclid(n) as usize;
        self.control_index %= self.n_controls();
    }

    /// Move the control cursor by `step` with wrap-around on the current page.
    pub(crate) fn step_control(&mut self, step: isize) {
        let n = self.n_controls() as isize;
        self.control_index = (self.control_index as isize + step).rem_euclid(n) as usize;
    }

    // ── Dirty tracking ───────────────────────────────────────────────

    /// Repaint regions pending since the last [`take_dirty`](Self::take_dirty).
    pub fn dirty(&self) -> DirtyMask {
        self.dirty
    }

    pub fn mark_dirty(&mut self, mask: DirtyMask) {
        self.dirty |= mask;
    }

    /// Return the pending mask and clear it.
    pub fn take_dirty(&mut self) -> DirtyMask {
        core::mem::take(&mut self.dirty)
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyMask::NONE;
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
