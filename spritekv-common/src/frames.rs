//! Spritesheet frame tiling
//!
//! Splits a picture's bounds into an even `width × height` grid of tiles.
//! Coordinates are y-up: row 0 is the top row (highest y), tiles within a
//! row run left to right. Tile `[row, column]` is item
//! `row * width + column` of the sequence.

use crate::math::Rect;

/// Restartable iterator over the tiles of a spritesheet grid.
///
/// Clone it to walk the grid again; it holds no state beyond a cursor.
#[derive(Debug, Clone)]
pub struct FrameGrid {
    bounds: Rect,
    width: u32,
    height: u32,
    tile_w: f64,
    tile_h: f64,
    next: usize,
}

impl FrameGrid {
    /// Grid of `width` tiles per row and `height` rows over `bounds`.
    ///
    /// A zero `width` or `height` gives an empty grid.
    pub fn new(bounds: Rect, width: u32, height: u32) -> Self {
        let (tile_w, tile_h) = if width == 0 || height == 0 {
            (0.0, 0.0)
        } else {
            (bounds.w() / f64::from(width), bounds.h() / f64::from(height))
        };

        Self {
            bounds,
            width,
            height,
            tile_w,
            tile_h,
            next: 0,
        }
    }

    /// Total number of tiles
    pub fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Tile at `row` (from the top) and `column` (from the left)
    pub fn tile(&self, row: u32, column: u32) -> Option<Rect> {
        if row >= self.height || column >= self.width {
            return None;
        }

        // Computed from indices so accumulated rounding never shifts a tile
        let top = self.bounds.max.y - f64::from(row) * self.tile_h;
        let left = self.bounds.min.x + f64::from(column) * self.tile_w;
        Some(Rect::new(left, top - self.tile_h, left + self.tile_w, top))
    }
}

impl Iterator for FrameGrid {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        if self.next >= self.tile_count() {
            return None;
        }
        let width = self.width as usize;
        let row = (self.next / width) as u32;
        let column = (self.next % width) as u32;
        self.next += 1;
        self.tile(row, column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tile_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameGrid {}

impl std::iter::FusedIterator for FrameGrid {}

/// All tiles of a `width × height` grid over `bounds`, top row first.
pub fn spritesheet_frames(bounds: Rect, width: u32, height: u32) -> Vec<Rect> {
    FrameGrid::new(bounds, width, height).collect()
}
