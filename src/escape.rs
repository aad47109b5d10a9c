//! Escape-time evaluation of `z := z^2 + c`.

use crate::pixel::Complex;

/// Squared magnitude past which an orbit is considered escaped (`|z| > 2`).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/**
Count iterations of `z := z^2 + c`, starting from `z = 0`, until `|z|^2 > 4`.

Returns the smallest `n` at which the orbit's squared magnitude exceeds 4, or
`max_iter` if the orbit stays bounded for `max_iter` steps.

The magnitude test uses `x^2` and `y^2` from *before* the update, and the new
imaginary part is computed from the old real part. Changing that order changes
the counts.
*/
#[inline]
pub fn escape_time(c: Complex, max_iter: u32) -> u32 {
    let Complex {
        real: mut x,
        imaginary: mut y,
    } = Complex::ZERO;
    let mut iteration = 0;

    while iteration < max_iter {
        let x2 = x * x;
        let y2 = y * y;

        if x2 + y2 > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }

        let x_next = x2 - y2 + c.real;
        y = 2.0 * x * y + c.imaginary;
        x = x_next;

        iteration += 1;
    }

    max_iter
}
