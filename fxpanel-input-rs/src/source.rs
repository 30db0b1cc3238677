use fxpanel::UiEvent;
use heapless::Vec;

/// Upper bound on events produced in one tick.
pub const MAX_EVENTS_PER_TICK: usize = 8;

/// Ordered events for one tick.
pub type EventBatch = Vec<UiEvent, MAX_EVENTS_PER_TICK>;

/// A source of UI events polled once per frame.
///
/// The loop calls [`pump`](Self::pump) to drain the backend, then
/// [`get_events`](Self::get_events) with the elapsed frame time. Events
/// are returned in the order the controller must apply them.
pub trait InputSource {
    type Error;

    /// Drain backend input state. Side effects only.
    fn pump(&mut self) -> Result<(), Self::Error>;

    /// Convert the current input state into events for a frame of
    /// `dt_ms` milliseconds.
    fn get_events(&mut self, dt_ms: u32) -> EventBatch;
}
