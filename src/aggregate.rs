//! Iteration totals over grids and zooming frame series.

use log::{debug, trace};

use crate::{grid::Grid, screen, window::PlaneWindow};

/// Running pixel and iteration counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub pixels: u64,
    pub iterations: u64,
}

impl Totals {
    pub fn of(grid: &Grid) -> Self {
        let mut totals = Self::default();
        totals.add_grid(grid);
        totals
    }

    pub fn add_grid(&mut self, grid: &Grid) {
        grid.traverse(|pixel| {
            self.pixels += 1;
            self.iterations += pixel.iteration_count as u64;
        });
        debug!(
            "{}x{} @ {}: {} pixels, {} iterations so far",
            grid.size.width, grid.size.height, grid.max_iter, self.pixels, self.iterations
        );
    }

    /// Mean iterations per pixel, rounded down. Zero when nothing was counted.
    pub fn average(&self) -> u64 {
        self.iterations.checked_div(self.pixels).unwrap_or(0)
    }
}

/// A sequence of frames over progressively smaller windows.
///
/// Frame `f` samples [`PlaneWindow::zoomed`] with `zoom_factor = 1.0 - f * step`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSeries {
    pub frames: u32,
    pub size: screen::Size,
    pub max_iter: u32,
    pub step: f64,
}

impl FrameSeries {
    pub fn frame(&self, frame: u32) -> Grid {
        let zoom_factor = 1.0 - frame as f64 * self.step;
        Grid::new(self.size, PlaneWindow::zoomed(zoom_factor), self.max_iter)
    }

    pub fn totals(&self) -> Totals {
        trace!("begin frame series {:?}", self);

        let mut totals = Totals::default();
        for frame in 0..self.frames {
            totals.add_grid(&self.frame(frame));
        }

        trace!("end frame series");
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> Grid {
        Grid::new(
            screen::Size::new(20, 10),
            PlaneWindow::new(-2.5, 1.0, -1.25, 1.25),
            200,
        )
    }

    #[test]
    fn average_rounds_down() {
        let totals = Totals {
            pixels: 3,
            iterations: 11,
        };
        assert_eq!(totals.average(), 3);
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(Totals::default().average(), 0);
    }

    #[test]
    fn grid_totals_match_manual_sum() {
        let grid = small_grid();
        let mut expected = 0;
        grid.traverse(|pixel| expected += pixel.iteration_count as u64);

        let totals = Totals::of(&grid);
        assert_eq!(totals.pixels, 200);
        assert_eq!(totals.iterations, expected);
    }

    #[test]
    fn grid_totals_are_reproducible() {
        assert_eq!(Totals::of(&small_grid()), Totals::of(&small_grid()));
    }

    #[test]
    fn first_frame_is_the_unzoomed_overview() {
        let series = FrameSeries {
            frames: 3,
            size: screen::Size::new(10, 10),
            max_iter: 50,
            step: 0.05,
        };
        assert_eq!(series.frame(0).window, PlaneWindow::new(-2.0, 1.0, -1.0, 1.0));
    }

    #[test]
    fn constant_zoom_series_repeats_one_grid() {
        let series = FrameSeries {
            frames: 4,
            size: screen::Size::new(16, 8),
            max_iter: 60,
            step: 0.0,
        };
        let single = Totals::of(&series.frame(0));
        let totals = series.totals();
        assert_eq!(totals.pixels, 4 * single.pixels);
        assert_eq!(totals.iterations, 4 * single.iterations);
    }

    #[test]
    fn zooming_in_keeps_more_points_bounded() {
        // Shrinking the window towards the origin concentrates samples inside the set.
        let wide = FrameSeries {
            frames: 1,
            size: screen::Size::new(40, 20),
            max_iter: 100,
            step: 0.0,
        };
        let narrow = Grid::new(wide.size, PlaneWindow::zoomed(0.25), 100);
        assert!(Totals::of(&narrow).average() > wide.totals().average());
    }
}
