//! Iteration count to display symbol.

/// Every symbol [`symbol`] can produce, from bounded to fastest escaping.
pub const SYMBOLS: [char; 8] = [' ', '.', ':', '-', '=', '+', '*', '#'];

/// Thresholds paired with their symbol, checked top to bottom. A count strictly
/// greater than the threshold selects the symbol.
const THRESHOLDS: [(u32, char); 6] = [
    (80, '.'),
    (60, ':'),
    (40, '-'),
    (20, '='),
    (10, '+'),
    (5, '*'),
];

/// Map an iteration count to its ASCII shade.
///
/// Bounded points (`iterations == max_iter`) are blank; anything at or below
/// the lowest threshold is `'#'`.
pub fn symbol(iterations: u32, max_iter: u32) -> char {
    if iterations == max_iter {
        return ' ';
    }

    THRESHOLDS
        .iter()
        .find(|(threshold, _)| iterations > *threshold)
        .map_or('#', |(_, symbol)| *symbol)
}
