//! ASCII rendering of a grid, one line of text per row.

use std::io::{self, Write};

use log::debug;

use crate::{grid::Grid, screen, symbol::symbol, window::PlaneWindow};

pub const RENDER_SIZE: screen::Size = screen::Size::new(80, 40);
pub const RENDER_MAX_ITER: u32 = 100;
pub const RENDER_WINDOW: PlaneWindow = PlaneWindow::new(-2.5, 1.0, -1.0, 1.0);

pub fn render_grid() -> Grid {
    Grid::new(RENDER_SIZE, RENDER_WINDOW, RENDER_MAX_ITER)
}

/// Render `grid` row by row, handing each completed line to `per_row`.
///
/// Stops at the first error returned by `per_row`.
pub fn render_rows(grid: &Grid, mut per_row: impl FnMut(&str) -> io::Result<()>) -> io::Result<()> {
    let width = grid.size.width;
    if width == 0 {
        // No cells are visited, but every row still produces a (blank) line.
        for _ in 0..grid.size.height {
            per_row("")?;
        }
        return Ok(());
    }

    let mut line = String::with_capacity(width as usize);
    let mut result = Ok(());

    grid.traverse(|pixel| {
        if result.is_err() {
            return;
        }
        line.push(symbol(pixel.iteration_count, grid.max_iter));
        if pixel.col + 1 == width {
            result = per_row(&line);
            line.clear();
        }
    });

    result
}

/// Write the full ASCII rendering report: banner, the picture, completion message.
pub fn write_render_report(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    debug!("rendering {:?}", grid);

    writeln!(out, "Rendering Mandelbrot Set...")?;
    writeln!(out, "Size: {} x {}", grid.size.width, grid.size.height)?;
    writeln!(out, "Max iterations: {}", grid.max_iter)?;
    writeln!(out)?;

    render_rows(grid, |line| writeln!(out, "{}", line))?;

    writeln!(out)?;
    writeln!(out, "Rendering complete!")?;
    Ok(())
}
