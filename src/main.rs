use std::io::{self, Write};

use log::debug;
use mandelbrot_bench::render::{render_grid, write_render_report};

fn main() -> io::Result<()> {
    env_logger::init();

    let grid = render_grid();
    debug!("render grid {:?}", grid);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_render_report(&mut out, &grid)?;
    out.flush()
}
