//! The six fixed test routines: spiral sampling over the complex plane,
//! function evaluation, and per-table rendering.

use std::f64::consts::{FRAC_PI_2, PI};

use num_complex::Complex64;

use crate::align::{render_grid, Projection};
use crate::error::CxtabResult;
use crate::grid::Grid;

/// Every generated table has exactly this many rows.
pub const ROWS: usize = 100;

/// Row-to-row step around the unit circle and up the imaginary axis.
const OMEGA: f64 = 2.0 * PI / ROWS as f64;

/// The six reference tables, in the order the program emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    InverseTrig,
    Trig,
    Log,
    Sqrt,
    Exp,
    Angle,
}

impl Table {
    pub const ALL: [Table; 6] = [
        Table::InverseTrig,
        Table::Trig,
        Table::Log,
        Table::Sqrt,
        Table::Exp,
        Table::Angle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::InverseTrig => "inverse-trig",
            Self::Trig => "trig",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Exp => "exp",
            Self::Angle => "angle",
        }
    }
}

/// Render one table as its output lines.
///
/// `projection` selects real/imaginary or magnitude/angle pairs for the five
/// aligned tables. The angle table is real-valued and ignores it.
pub fn render(table: Table, projection: Projection) -> CxtabResult<Vec<String>> {
    let grid = match table {
        Table::Angle => return Ok(angle_lines()),
        Table::InverseTrig => grid_of(4, |z| {
            vec![
                reflect_into(z.asin(), -FRAC_PI_2),
                z.acos(),
                reflect_into(z.atan(), -FRAC_PI_2),
            ]
        })?,
        Table::Trig => grid_of(4, |z| vec![z.sin(), z.cos(), z.tan()])?,
        Table::Log => grid_of(3, |z| vec![z.ln(), z.log10()])?,
        Table::Sqrt => grid_of(2, |z| vec![z.sqrt()])?,
        Table::Exp => grid_of(2, |z| vec![z.exp()])?,
    };
    Ok(render_grid(&grid, projection))
}

/// Build a grid by applying `outputs` to each of the 100 spiral samples
/// `z_k = (-5.0 + k * 0.1) + i * (k * 2π/100)`.
fn grid_of(cols: usize, outputs: impl Fn(Complex64) -> Vec<Complex64>) -> CxtabResult<Grid> {
    let mut grid = Grid::new(cols);
    // The real offset is accumulated step by step; -5.0 + 0.1 * k rounds
    // differently in the last bits and shifts the printed digits.
    let mut re = -5.0;
    for k in 0..ROWS {
        let z = Complex64::new(re, k as f64 * OMEGA);
        let mut row = Vec::with_capacity(cols);
        row.push(z);
        row.extend(outputs(z));
        grid.push_row(row)?;
        re += 0.1;
    }
    Ok(grid)
}

/// Fold the real part of `z` into [low, low + π] by reflecting it off the
/// interval ends. Principal-value inverse trig results can land just outside
/// their branch range near a cut; this brings them back. Each reflection
/// strictly shrinks the distance to the interval, so the loop terminates for
/// any finite input. The imaginary part is untouched.
///
/// The upper bound itself is kept as-is: it is its own mirror image, and
/// values like asin(1) = π/2 sit there legitimately.
pub fn reflect_into(z: Complex64, low: f64) -> Complex64 {
    if !z.re.is_finite() {
        return z;
    }
    let high = low + PI;
    let mut re = z.re;
    while re < low || re > high {
        re = if re < low { 2.0 * low - re } else { 2.0 * high - re };
    }
    Complex64::new(re, z.im)
}

/// The unit-circle angle table: `cos θ, sin θ, θ` at 16 fractional digits,
/// single-space separated, no column alignment.
fn angle_lines() -> Vec<String> {
    (0..ROWS)
        .map(|k| {
            let theta = k as f64 * OMEGA;
            format!("{:.16} {:.16} {:.16}", theta.cos(), theta.sin(), theta)
        })
        .collect()
}
