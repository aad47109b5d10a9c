use crate::{pixel::Complex, screen};

/// Rectangular region of the complex plane sampled by a grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneWindow {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl PlaneWindow {
    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Square window spanning `center ± half_size` on both axes.
    pub fn centered(center: Complex, half_size: f64) -> Self {
        Self {
            xmin: center.real - half_size,
            xmax: center.real + half_size,
            ymin: center.imaginary - half_size,
            ymax: center.imaginary + half_size,
        }
    }

    /// The `[-2, 1] x [-1, 1]` overview scaled towards the origin by `zoom_factor`.
    ///
    /// Bounds are chosen so that `xmax - xmin` rounds to exactly `3.0 * zoom_factor`
    /// and `ymax - ymin` to exactly `2.0 * zoom_factor`.
    pub fn zoomed(zoom_factor: f64) -> Self {
        Self {
            xmin: -2.0 * zoom_factor,
            xmax: zoom_factor,
            ymin: -zoom_factor,
            ymax: zoom_factor,
        }
    }

    /// Linear map from cell `(col, row)` of a `size` grid to the plane.
    ///
    /// Cell `(0, 0)` lands on `(xmin, ymin)`; `xmax`/`ymax` are never reached.
    #[inline]
    pub fn point(&self, size: screen::Size, col: u32, row: u32) -> Complex {
        Complex {
            real: self.xmin + (self.xmax - self.xmin) * col as f64 / size.width as f64,
            imaginary: self.ymin + (self.ymax - self.ymin) * row as f64 / size.height as f64,
        }
    }
}
