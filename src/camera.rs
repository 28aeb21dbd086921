/// Viewport that follows the player, and its projection onto the terminal.

use crate::entities::Rect;
use crate::tuning::{SCREEN_HEIGHT, SCREEN_WIDTH, VIEW_BOT, VIEW_LEFT};

/// The visible world rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Viewport {
    /// Screen-sized viewport centred on `(x, y)`.
    pub fn centered_on(x: f32, y: f32) -> Self {
        let left = VIEW_LEFT + x;
        let bottom = VIEW_BOT + y;
        Viewport {
            left,
            right: left + SCREEN_WIDTH,
            bottom,
            top: bottom + SCREEN_HEIGHT,
        }
    }
}

/// Maps world coordinates inside a viewport to terminal cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub viewport: Viewport,
    pub cols: u16,
    pub rows: u16,
}

impl Projection {
    pub fn new(viewport: Viewport, cols: u16, rows: u16) -> Self {
        Projection {
            viewport,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    /// World units covered by one cell, horizontally and vertically.
    pub fn cell_size(&self) -> (f32, f32) {
        (
            (self.viewport.right - self.viewport.left) / self.cols as f32,
            (self.viewport.top - self.viewport.bottom) / self.rows as f32,
        )
    }

    /// Cell containing `(x, y)`; `None` when outside the viewport.
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let (cw, ch) = self.cell_size();
        let col = ((x - self.viewport.left) / cw).floor();
        let row = ((self.viewport.top - y) / ch).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// World coordinates of the centre of a cell.
    pub fn cell_center(&self, col: u16, row: u16) -> (f32, f32) {
        let (cw, ch) = self.cell_size();
        (
            self.viewport.left + (col as f32 + 0.5) * cw,
            self.viewport.top - (row as f32 + 0.5) * ch,
        )
    }

    /// Every cell whose centre lies inside `rect`, or the single cell
    /// containing the rect's centre when the rect is smaller than a cell.
    pub fn cells_covering(&self, rect: &Rect) -> Vec<(u16, u16)> {
        let (cw, ch) = self.cell_size();
        let first_col = ((rect.left - self.viewport.left) / cw - 0.5).ceil().max(0.0);
        let last_col = ((rect.right - self.viewport.left) / cw - 0.5)
            .floor()
            .min(self.cols as f32 - 1.0);
        let first_row = ((self.viewport.top - rect.top) / ch - 0.5).ceil().max(0.0);
        let last_row = ((self.viewport.top - rect.bottom) / ch - 0.5)
            .floor()
            .min(self.rows as f32 - 1.0);

        let mut cells = Vec::new();
        if first_col <= last_col && first_row <= last_row {
            for row in first_row as u16..=last_row as u16 {
                for col in first_col as u16..=last_col as u16 {
                    cells.push((col, row));
                }
            }
        }
        if cells.is_empty() {
            let cx = (rect.left + rect.right) / 2.0;
            let cy = (rect.bottom + rect.top) / 2.0;
            cells.extend(self.to_cell(cx, cy));
        }
        cells
    }
}
