pub mod align;
pub mod error;
pub mod grid;
pub mod tables;

pub use align::{angle_degrees, render_grid, Projection, FRACTION_DIGITS};
pub use error::{CxtabError, CxtabResult};
pub use grid::Grid;
pub use num_complex::Complex64;
pub use tables::{reflect_into, render, Table, ROWS};
