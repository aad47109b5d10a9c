use std::io::{self, Write};

use mandelbrot_bench::benchmarks::write_standard_report;

fn main() -> io::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_standard_report(&mut out)?;
    out.flush()
}
