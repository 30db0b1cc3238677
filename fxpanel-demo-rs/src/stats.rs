//! Per-window loop statistics.

use std::fmt;
use std::time::Duration;

/// Counters accumulated over one reporting window of `window` loops.
#[derive(Debug)]
pub struct LoopStats {
    window: u32,
    loops: u32,
    renders: u32,
    events: usize,
    render_time: Duration,
}

/// One finished window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub loops: u32,
    pub renders: u32,
    pub events: usize,
    pub avg_render_ms: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "loops={:4}  renders={:4}  events={:4}  avg_render_ms={:6.2}",
            self.loops, self.renders, self.events, self.avg_render_ms
        )
    }
}

impl LoopStats {
    /// Report every `window` loops (at least one).
    pub fn new(window: u32) -> Self {
        Self {
            window: window.max(1),
            loops: 0,
            renders: 0,
            events: 0,
            render_time: Duration::ZERO,
        }
    }

    pub fn add_events(&mut self, n: usize) {
        self.events += n;
    }

    pub fn add_render(&mut self, elapsed: Duration) {
        self.renders += 1;
        self.render_time += elapsed;
    }

    /// Count a loop. Returns the window's report and starts a new one
    /// when the window is full.
    pub fn tick_loop(&mut self) -> Option<Report> {
        self.loops += 1;
        (self.loops >= self.window).then(|| self.flush())
    }

    /// Report whatever has accumulated and reset.
    pub fn flush(&mut self) -> Report {
        let avg = self.render_time.as_secs_f64() * 1000.0 / f64::from(self.renders.max(1));
        let report = Report {
            loops: self.loops,
            renders: self.renders,
            events: self.events,
            avg_render_ms: avg,
        };
        *self = Self::new(self.window);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_once_per_window() {
        let mut stats = LoopStats::new(3);
        stats.add_events(2);
        stats.add_render(Duration::from_millis(4));
        assert_eq!(stats.tick_loop(), None);
        stats.add_render(Duration::from_millis(2));
        assert_eq!(stats.tick_loop(), None);
        let report = stats.tick_loop().unwrap();
        assert_eq!(report.loops, 3);
        assert_eq!(report.renders, 2);
        assert_eq!(report.events, 2);
        assert!((report.avg_render_ms - 3.0).abs() < 1e-9);
        assert_eq!(stats.tick_loop(), None);
    }

    #[test]
    fn no_renders_averages_to_zero() {
        let mut stats = LoopStats::new(1);
        let report = stats.tick_loop().unwrap();
        assert_eq!(report.renders, 0);
        assert_eq!(report.avg_render_ms, 0.0);
    }

    #[test]
    fn zero_window_reports_every_loop() {
        let mut stats = LoopStats::new(0);
        assert!(stats.tick_loop().is_some());
    }
}
