//! Aggregate benchmark scenarios.
//!
//! Each scenario is a fixed set of grids whose iteration totals are written as
//! plain-text sections. All sizes, windows and bounds are constants.

use std::io::{self, Write};

use log::info;

use crate::{
    aggregate::{FrameSeries, Totals},
    escape::escape_time,
    grid::Grid,
    pixel::Complex,
    report, screen,
    window::PlaneWindow,
};

/// Full view of the set used by the single-grid tests.
pub const OVERVIEW_WINDOW: PlaneWindow = PlaneWindow::new(-2.5, 1.0, -1.25, 1.25);

pub const DEEP_ZOOM_CENTER: Complex = Complex {
    real: -0.5,
    imaginary: 0.0,
};
pub const DEEP_ZOOM_HALF_SIZE: f64 = 0.5;

pub fn deep_zoom_window() -> PlaneWindow {
    PlaneWindow::centered(DEEP_ZOOM_CENTER, DEEP_ZOOM_HALF_SIZE)
}

pub mod heavy {
    use super::*;

    pub const OVERVIEW: Grid = Grid::new(screen::Size::new(200, 200), OVERVIEW_WINDOW, 1000);

    pub const DEEP_ZOOM_SIZE: screen::Size = screen::Size::new(150, 150);
    pub const DEEP_ZOOM_MAX_ITER: u32 = 2000;

    pub const FRAMES: FrameSeries = FrameSeries {
        frames: 30,
        size: screen::Size::new(100, 100),
        max_iter: 500,
        step: 0.02,
    };

    pub fn deep_zoom() -> Grid {
        Grid::new(DEEP_ZOOM_SIZE, deep_zoom_window(), DEEP_ZOOM_MAX_ITER)
    }
}

pub mod standard {
    use super::*;

    pub const OVERVIEW: Grid = Grid::new(screen::Size::new(100, 50), OVERVIEW_WINDOW, 500);

    pub const DEEP_ZOOM_SIZE: screen::Size = screen::Size::new(60, 30);
    pub const DEEP_ZOOM_MAX_ITER: u32 = 1000;

    pub const FRAMES: FrameSeries = FrameSeries {
        frames: 10,
        size: screen::Size::new(40, 20),
        max_iter: 100,
        step: 0.05,
    };

    pub const STRESS_POINT: Complex = Complex {
        real: -0.7,
        imaginary: 0.0,
    };
    pub const STRESS_MAX_ITER: u32 = 10_000;

    pub fn deep_zoom() -> Grid {
        Grid::new(DEEP_ZOOM_SIZE, deep_zoom_window(), DEEP_ZOOM_MAX_ITER)
    }
}

/// Long-running scenario: large grids and high bounds so startup time is negligible.
pub fn write_heavy_report(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Heavy Mandelbrot Benchmark ===")?;
    writeln!(out, "This benchmark is designed to minimize startup time effects")?;
    writeln!(out)?;

    let overview = heavy::OVERVIEW;
    writeln!(
        out,
        "Test 1: {}x{} @ {} iterations",
        overview.size.width, overview.size.height, overview.max_iter
    )?;
    report::write_grid_section(out, &Totals::of(&overview))?;
    writeln!(out)?;

    let deep_zoom = heavy::deep_zoom();
    writeln!(
        out,
        "Test 2: {}x{} @ {} iterations (deep zoom)",
        deep_zoom.size.width, deep_zoom.size.height, deep_zoom.max_iter
    )?;
    report::write_grid_section(out, &Totals::of(&deep_zoom))?;
    writeln!(out)?;

    let frames = heavy::FRAMES;
    writeln!(
        out,
        "Test 3: {} frames of {}x{} @ {} iterations",
        frames.frames, frames.size.width, frames.size.height, frames.max_iter
    )?;
    report::write_frames_section(out, frames.frames, &frames.totals())?;
    writeln!(out)?;

    writeln!(out, "=== Benchmark Complete ===")?;
    info!("heavy benchmark complete");
    Ok(())
}

/// Short scenario: moderate grids, a pixel-count-only frame series and one stress point.
pub fn write_standard_report(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Mandelbrot Performance Benchmark ===")?;
    writeln!(out)?;

    let overview = standard::OVERVIEW;
    writeln!(
        out,
        "Test 1: {}x{} @ {} iterations",
        overview.size.width, overview.size.height, overview.max_iter
    )?;
    report::write_grid_section(out, &Totals::of(&overview))?;
    writeln!(out)?;

    let deep_zoom = standard::deep_zoom();
    writeln!(out, "Test 2: Deep zoom @ {} iterations", deep_zoom.max_iter)?;
    report::write_grid_section(out, &Totals::of(&deep_zoom))?;
    writeln!(out)?;

    let frames = standard::FRAMES;
    writeln!(out, "Test 3: Multi-frame calculation ({} frames)", frames.frames)?;
    report::write_frame_count_section(
        out,
        frames.frames,
        &frames.totals(),
        frames.size.pixel_count(),
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "Test 4: Stress test (single point @ {} iterations)",
        standard::STRESS_MAX_ITER
    )?;
    let iterations = escape_time(standard::STRESS_POINT, standard::STRESS_MAX_ITER);
    report::write_stress_section(out, standard::STRESS_POINT, iterations)?;
    writeln!(out)?;

    writeln!(out, "=== Benchmark Complete ===")?;
    info!("standard benchmark complete");
    Ok(())
}
