/// A point in the complex plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };

    pub fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }
}

/// One evaluated grid cell, as handed to a traversal callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub col: u32,
    pub row: u32,
    pub iteration_count: u32,
}
