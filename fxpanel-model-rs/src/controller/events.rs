/// Discrete UI event produced by an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiEvent {
    /// Stop the editor loop.
    Quit,
    /// Flip the effect between active and bypassed.
    ToggleBypass,
    NavLeft,
    NavRight,
    PagePrev,
    PageNext,
    /// Adjust the focused control by a signed step count.
    ValueDelta(i32),
    /// Event code this controller does not know. Applied as a no-op.
    Other(u16),
}

impl UiEvent {
    /// Short name for logs and traces.
    pub fn name(&self) -> &'static str {
        match self {
            UiEvent::Quit => "quit",
            UiEvent::ToggleBypass => "toggle_bypass",
            UiEvent::NavLeft => "nav_left",
            UiEvent::NavRight => "nav_right",
            UiEvent::PagePrev => "page_prev",
            UiEvent::PageNext => "page_next",
            UiEvent::ValueDelta(_) => "value_delta",
            UiEvent::Other(_) => "other",
        }
    }
}
