//! Two-pass column-aligned rendering of complex sample grids.
//!
//! Pass one measures the widest rendered value per column for the two value
//! streams of a pair (real/magnitude and imaginary/angle) at fixed 12-digit
//! fractional precision. Pass two renders every row with each field
//! right-justified to its column's measured width, one space between the two
//! fields of a pair, two spaces between columns.

use num_complex::Complex64;

use crate::grid::Grid;

/// Fractional digits used for every aligned table cell.
pub const FRACTION_DIGITS: usize = 12;

/// How a complex value is split into the two printed fields of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Real part, then imaginary part.
    Cartesian,
    /// Magnitude, then angle in degrees.
    Polar,
}

impl Projection {
    fn first(self, z: Complex64) -> f64 {
        match self {
            Self::Cartesian => z.re,
            Self::Polar => z.norm(),
        }
    }

    fn second(self, z: Complex64) -> f64 {
        match self {
            Self::Cartesian => z.im,
            Self::Polar => angle_degrees(z),
        }
    }
}

/// Signed angle from the positive real axis, in degrees, range (-180, 180].
pub fn angle_degrees(z: Complex64) -> f64 {
    z.im.atan2(z.re).to_degrees()
}

struct ColumnWidths {
    first: Vec<usize>,
    second: Vec<usize>,
}

fn measure(grid: &Grid, projection: Projection) -> ColumnWidths {
    let mut widths = ColumnWidths {
        first: vec![0; grid.cols()],
        second: vec![0; grid.cols()],
    };
    for row in grid.rows() {
        for (col, &z) in row.iter().enumerate() {
            let first = format!("{:.p$}", projection.first(z), p = FRACTION_DIGITS);
            widths.first[col] = widths.first[col].max(first.len());
            let second = format!("{:.p$}", projection.second(z), p = FRACTION_DIGITS);
            widths.second[col] = widths.second[col].max(second.len());
        }
    }
    widths
}

/// Render the grid as aligned text lines, one per row.
///
/// Field widths are a pure function of the grid contents, so the same grid
/// and projection always produce byte-identical lines. Non-finite values
/// render as their usual tokens (`NaN`, `inf`) and are measured like any
/// other cell.
pub fn render_grid(grid: &Grid, projection: Projection) -> Vec<String> {
    let widths = measure(grid, projection);
    grid.rows()
        .map(|row| {
            let mut line = String::new();
            for (col, &z) in row.iter().enumerate() {
                if col > 0 {
                    line.push_str("  ");
                }
                line.push_str(&format!(
                    "{:fw$.p$} {:sw$.p$}",
                    projection.first(z),
                    projection.second(z),
                    fw = widths.first[col],
                    sw = widths.second[col],
                    p = FRACTION_DIGITS,
                ));
            }
            line
        })
        .collect()
}
