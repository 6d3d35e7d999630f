use num_complex::Complex64;

use crate::error::{CxtabError, CxtabResult};

/// Rectangular grid of complex samples. Column 0 holds the input sample,
/// the remaining columns hold function outputs evaluated at that input.
#[derive(Debug, Clone)]
pub struct Grid {
    cols: usize,
    rows: Vec<Vec<Complex64>>,
}

impl Grid {
    pub fn new(cols: usize) -> Self {
        Self {
            cols,
            rows: Vec::new(),
        }
    }

    /// Append a row. A row whose width differs from the grid's is a
    /// programming error and is rejected.
    pub fn push_row(&mut self, row: Vec<Complex64>) -> CxtabResult<()> {
        if row.len() != self.cols {
            return Err(CxtabError::RaggedRow {
                row: self.rows.len(),
                expected: self.cols,
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Build a grid from pre-assembled rows. The first row fixes the width.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> CxtabResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut grid = Self::new(cols);
        for row in rows {
            grid.push_row(row)?;
        }
        Ok(grid)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Complex64]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_push_row_rejects_ragged() {
        let mut grid = Grid::new(2);
        grid.push_row(vec![z(1.0, 0.0), z(2.0, 0.0)]).unwrap();
        let err = grid.push_row(vec![z(3.0, 0.0)]).unwrap_err();
        let CxtabError::RaggedRow {
            row,
            expected,
            found,
        } = err;
        assert_eq!(row, 1);
        assert_eq!(expected, 2);
        assert_eq!(found, 1);
    }

    #[test]
    fn test_from_rows_takes_width_from_first_row() {
        let grid = Grid::from_rows(vec![
            vec![z(1.0, 2.0), z(3.0, 4.0)],
            vec![z(5.0, 6.0), z(7.0, 8.0)],
        ])
        .unwrap();
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.row_count(), 2);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![z(1.0, 0.0)], vec![z(1.0, 0.0), z(2.0, 0.0)]];
        assert!(Grid::from_rows(rows).is_err());
    }
}
