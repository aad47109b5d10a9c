//! Sample points must match the closed-form mappings bit for bit, or the
//! iteration totals drift.

use mandelbrot_bench::{
    benchmarks::{heavy, standard},
    render::render_grid,
};

#[test]
fn render_grid_points() {
    let grid = render_grid();
    for row in 0..40 {
        for col in 0..80 {
            let c = grid.point(col, row);
            assert_eq!(c.real, -2.5 + (1.0 - -2.5) * col as f64 / 80.0);
            assert_eq!(c.imaginary, -1.0 + (1.0 - -1.0) * row as f64 / 40.0);
        }
    }
}

#[test]
fn overview_points() {
    let grid = heavy::OVERVIEW;
    for row in 0..200 {
        for col in 0..200 {
            let c = grid.point(col, row);
            assert_eq!(c.real, -2.5 + 3.5 * col as f64 / 200.0);
            assert_eq!(c.imaginary, -1.25 + 2.5 * row as f64 / 200.0);
        }
    }
}

#[test]
fn deep_zoom_points() {
    let (zoom_x, zoom_y, zoom_size) = (-0.5, 0.0, 0.5);
    let grid = standard::deep_zoom();
    for row in 0..30 {
        for col in 0..60 {
            let c = grid.point(col, row);
            assert_eq!(c.real, zoom_x - zoom_size + 2.0 * zoom_size * col as f64 / 60.0);
            assert_eq!(c.imaginary, zoom_y - zoom_size + 2.0 * zoom_size * row as f64 / 30.0);
        }
    }
}

#[test]
fn frame_points() {
    let series = heavy::FRAMES;
    for frame in 0..series.frames {
        let zoom_factor = 1.0 - frame as f64 * 0.02;
        let grid = series.frame(frame);
        for row in 0..100 {
            for col in 0..100 {
                let c = grid.point(col, row);
                assert_eq!(c.real, -2.0 * zoom_factor + 3.0 * zoom_factor * col as f64 / 100.0);
                assert_eq!(c.imaginary, -1.0 * zoom_factor + 2.0 * zoom_factor * row as f64 / 100.0);
            }
        }
    }
}
