//! Scripted keypad: a fixed timeline of key states, one per tick.

use std::convert::Infallible;

use fxpanel_input::{Key, KeyScanner, KeyState};

/// One timeline segment: `keys` held for `ticks` scans.
#[derive(Debug, Clone, Copy)]
pub struct Hold {
    pub ticks: u32,
    pub keys: &'static [Key],
}

const fn hold(ticks: u32, keys: &'static [Key]) -> Hold {
    Hold { ticks, keys }
}

const fn rest(ticks: u32) -> Hold {
    Hold { ticks, keys: &[] }
}

/// Walks every page, scrolls a dial long enough to reach the top of the
/// acceleration staircase, flips bypass twice, then quits.
pub const CHORUS_TOUR: &[Hold] = &[
    rest(5),
    // MAIN: rate up with acceleration, mode down to B, sync on
    hold(45, &[Key::Up]),
    rest(3),
    hold(1, &[Key::Right]),
    rest(2),
    hold(1, &[Key::Down]),
    rest(2),
    hold(1, &[Key::Right]),
    rest(2),
    hold(1, &[Key::Up]),
    rest(4),
    // MOD: step the filter through its options
    hold(1, &[Key::PageNext]),
    rest(2),
    hold(1, &[Key::Left]),
    rest(2),
    hold(20, &[Key::Up]),
    rest(4),
    // LEVEL: pull the post level down
    hold(1, &[Key::PageNext]),
    rest(2),
    hold(30, &[Key::Down]),
    rest(3),
    // bypass on and off
    hold(2, &[Key::Bypass]),
    rest(5),
    hold(2, &[Key::Bypass]),
    rest(3),
    // five repeated page steps wrap LEVEL round to TUNE, then raise bpm
    hold(14, &[Key::PageNext]),
    rest(3),
    hold(10, &[Key::Up]),
    rest(10),
    hold(1, &[Key::Quit]),
];

/// [`KeyScanner`] replaying a [`Hold`] timeline. Reports all keys up once
/// the timeline is exhausted.
pub struct ScriptedKeys {
    script: &'static [Hold],
    segment: usize,
    elapsed: u32,
    scans: u32,
}

impl ScriptedKeys {
    pub fn new(script: &'static [Hold]) -> Self {
        Self {
            script,
            segment: 0,
            elapsed: 0,
            scans: 0,
        }
    }

    /// Total scans performed.
    pub fn scans(&self) -> u32 {
        self.scans
    }

    pub fn finished(&self) -> bool {
        self.segment >= self.script.len()
    }

    /// Ticks the full timeline spans.
    pub fn length(&self) -> u32 {
        self.script.iter().map(|h| h.ticks).sum()
    }
}

impl KeyScanner for ScriptedKeys {
    type Error = Infallible;

    fn scan(&mut self) -> Result<KeyState, Self::Error> {
        self.scans += 1;
        // Skip zero-length segments so they never swallow a scan.
        while let Some(h) = self.script.get(self.segment) {
            if self.elapsed < h.ticks {
                break;
            }
            self.segment += 1;
            self.elapsed = 0;
        }

        let Some(h) = self.script.get(self.segment) else {
            return Ok(KeyState::RELEASED);
        };
        self.elapsed += 1;
        Ok(KeyState::with(h.keys))
    }
}
