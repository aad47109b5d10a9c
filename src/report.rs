//! Plain-text report sections for the aggregate benchmarks.

use std::io::{self, Write};

use crate::{aggregate::Totals, pixel::Complex};

/// Totals for a single grid.
pub fn write_grid_section(out: &mut impl Write, totals: &Totals) -> io::Result<()> {
    writeln!(out, "Pixels calculated: {}", totals.pixels)?;
    writeln!(out, "Total iterations: {}", totals.iterations)?;
    writeln!(out, "Average iterations per pixel: {}", totals.average())
}

/// Totals accumulated over a frame series.
pub fn write_frames_section(out: &mut impl Write, frames: u32, totals: &Totals) -> io::Result<()> {
    writeln!(out, "Frames calculated: {}", frames)?;
    writeln!(out, "Total pixels: {}", totals.pixels)?;
    writeln!(out, "Total iterations: {}", totals.iterations)?;
    writeln!(out, "Average iterations per pixel: {}", totals.average())
}

/// Frame section that reports pixel throughput only.
pub fn write_frame_count_section(
    out: &mut impl Write,
    frames: u32,
    totals: &Totals,
    pixels_per_frame: u64,
) -> io::Result<()> {
    writeln!(out, "Frames calculated: {}", frames)?;
    writeln!(out, "Total pixels: {}", totals.pixels)?;
    writeln!(out, "Pixels per frame: {}", pixels_per_frame)
}

/// Escape result for a single point.
pub fn write_stress_section(out: &mut impl Write, point: Complex, iterations: u32) -> io::Result<()> {
    writeln!(out, "Point: {:.1} + {:.1}i", point.real, point.imaginary)?;
    writeln!(out, "Escaped at iteration: {}", iterations)
}
