//! Row-major grid traversal.

use log::trace;

use crate::{
    escape::escape_time,
    pixel::{Complex, Pixel},
    screen,
    window::PlaneWindow,
};

/// A grid of samples over a plane window, evaluated with a fixed iteration bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub size: screen::Size,
    pub window: PlaneWindow,
    pub max_iter: u32,
}

impl Grid {
    pub const fn new(size: screen::Size, window: PlaneWindow, max_iter: u32) -> Self {
        Self {
            size,
            window,
            max_iter,
        }
    }

    pub fn point(&self, col: u32, row: u32) -> Complex {
        self.window.point(self.size, col, row)
    }

    /// Evaluate every cell, rows outermost, handing each result to `per_cell`.
    ///
    /// Cells are visited in strict row-major order: all of row 0 left to right,
    /// then row 1, and so on.
    pub fn traverse(&self, mut per_cell: impl FnMut(Pixel)) {
        trace!("begin traverse {:?}", self.size);

        debug_assert!(
            [self.window.xmin, self.window.xmax, self.window.ymin, self.window.ymax]
                .iter()
                .all(|bound| bound.is_finite()),
            "plane window has non-finite bounds: {:?}",
            self.window
        );

        for row in 0..self.size.height {
            for col in 0..self.size.width {
                let iteration_count = escape_time(self.point(col, row), self.max_iter);
                per_cell(Pixel {
                    col,
                    row,
                    iteration_count,
                });
            }
        }

        trace!("end traverse");
    }
}
