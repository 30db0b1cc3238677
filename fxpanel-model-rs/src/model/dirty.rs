use core::ops::{BitOr, BitOrAssign};

use super::TILES_PER_PAGE;

/// Set of screen regions that must be repainted.
///
/// Bits compose with `|`. [`DirtyMask::ALL`] is its own bit: it means
/// "clear the background and repaint everything" and supersedes every
/// other bit, so it is never the same as `HEADER | PAGE | TILES`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirtyMask(u8);

impl DirtyMask {
    pub const NONE: Self = Self(0);
    pub const HEADER: Self = Self(1 << 0);
    pub const PAGE: Self = Self(1 << 1);
    pub const TILE0: Self = Self(1 << 2);
    pub const TILE1: Self = Self(1 << 3);
    pub const TILE2: Self = Self(1 << 4);
    /// All three tile bits.
    pub const TILES: Self = Self(Self::TILE0.0 | Self::TILE1.0 | Self::TILE2.0);
    pub const ALL: Self = Self(1 << 7);

    /// Bit for tile `index`. Out-of-range indices map to [`TILES`](Self::TILES).
    pub const fn tile(index: usize) -> Self {
        match index {
            0 => Self::TILE0,
            1 => Self::TILE1,
            2 => Self::TILE2,
            _ => Self::TILES,
        }
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if any bit of `other` is set in `self`.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_all(self) -> bool {
        self.contains(Self::ALL)
    }

    /// Whether tile `index` must be repainted (ignores [`ALL`](Self::ALL)).
    pub const fn has_tile(self, index: usize) -> bool {
        index < TILES_PER_PAGE && self.intersects(Self::tile(index))
    }
}

impl BitOr for DirtyMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DirtyMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
