//! Mandelbrot escape-time benchmarks: an ASCII renderer and iteration-count stress tests.

pub mod aggregate;
pub mod benchmarks;
pub mod escape;
pub mod grid;
pub mod pixel;
pub mod render;
pub mod report;
pub mod screen;
pub mod symbol;
pub mod window;
