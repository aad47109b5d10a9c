use std::io::{self, Write};

use mandelbrot_bench::benchmarks::write_heavy_report;

fn main() -> io::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_heavy_report(&mut out)?;
    out.flush()
}
