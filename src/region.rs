//! Click origins and popup-owner regions.
//!
//! Outside-click dismissal only needs to know whether a click landed inside
//! any popup owner (the wrapper drawn around a trigger and its popup). The
//! render layer either resolves that itself and reports
//! [`ClickOrigin::InsideOwner`] / [`ClickOrigin::Outside`], or reports a raw
//! [`ClickOrigin::Point`] and keeps each menu's [`OwnerRegion`] current so the
//! controller can hit-test it.

use crate::model::MenuId;
use ratatui::layout::Rect;

/// A rectangular area in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OwnerRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl OwnerRegion {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the cell at (`column`, `row`) lies within this region.
    #[must_use]
    pub const fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && (column as u32) < self.x as u32 + self.width as u32
            && (row as u32) < self.y as u32 + self.height as u32
    }

    /// Smallest region covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.width == 0 || self.height == 0 {
            return *other;
        }
        if other.width == 0 || other.height == 0 {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x as u32 + self.width as u32).max(other.x as u32 + other.width as u32);
        let bottom =
            (self.y as u32 + self.height as u32).max(other.y as u32 + other.height as u32);
        Self::new(
            x,
            y,
            (right - x as u32).min(u16::MAX as u32) as u16,
            (bottom - y as u32).min(u16::MAX as u32) as u16,
        )
    }
}

impl From<Rect> for OwnerRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

impl From<OwnerRegion> for Rect {
    fn from(region: OwnerRegion) -> Self {
        Self::new(region.x, region.y, region.width, region.height)
    }
}

/// Where a document-wide click happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOrigin {
    /// Raw cell coordinates, hit-tested against registered owner regions
    Point { column: u16, row: u16 },
    /// The caller already resolved the click to the owner of this menu
    InsideOwner(MenuId),
    /// The caller already resolved the click to lie outside every owner
    Outside,
}

impl ClickOrigin {
    pub const fn point(column: u16, row: u16) -> Self {
        Self::Point { column, row }
    }
}
