//! Read-only square cost matrix over flat storage.
//!
//! Every solver in this crate borrows a [`DistanceMatrix`] immutably; the
//! matrix is constructed once from externally supplied data and never
//! mutated afterwards. The dimension is carried as a runtime field derived
//! from the storage length, validated a single time at construction.

/// Immutable N×N matrix of non-negative integer edge costs.
///
/// Cells are stored row-major in a flat vector; the lookup [`cost`] reads
/// `cells[x + y * n]`, i.e. `x` selects the column and `y` the row. Diagonal
/// entries are conceptually zero (a node has no cost to itself) and unused
/// by the solvers.
///
/// The matrix is assumed symmetric (`cost(x, y) == cost(y, x)`). Nothing
/// enforces this; the 2-approximation bound only holds when callers supply
/// symmetric data satisfying the triangle inequality.
///
/// [`cost`]: DistanceMatrix::cost
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    cells: Vec<u64>,
    n: usize,
}

impl DistanceMatrix {
    /// Builds a matrix from flat row-major storage.
    ///
    /// The dimension is the integer square root of the storage length;
    /// construction is rejected when the length is not a perfect square or
    /// the storage is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_solvers::matrix::DistanceMatrix;
    ///
    /// let m = DistanceMatrix::from_cells(vec![
    ///     0, 10, 15,
    ///     10, 0, 20,
    ///     15, 20, 0,
    /// ]).unwrap();
    /// assert_eq!(m.n(), 3);
    /// assert_eq!(m.cost(2, 1), 20);
    /// ```
    pub fn from_cells(cells: Vec<u64>) -> Result<Self, String> {
        if cells.is_empty() {
            return Err("matrix storage is empty (a graph needs at least one node)".into());
        }
        let n = int_sqrt(cells.len());
        if n * n != cells.len() {
            return Err(format!(
                "matrix storage length {} is not a perfect square",
                cells.len()
            ));
        }
        Ok(Self { cells, n })
    }

    /// Builds a matrix from nested rows, validating that every row has the
    /// same length as the row count.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, String> {
        let n = rows.len();
        if n == 0 {
            return Err("matrix has no rows (a graph needs at least one node)".into());
        }
        let mut cells = Vec::with_capacity(n * n);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(format!("row {y} has {} cells, expected {n}", row.len()));
            }
            cells.extend(row);
        }
        Ok(Self { cells, n })
    }

    /// Number of nodes (the matrix dimension).
    pub fn n(&self) -> usize {
        self.n
    }

    /// Cost of the edge between nodes `x` and `y`.
    ///
    /// # Panics
    /// Panics if either index is outside `0..n`.
    pub fn cost(&self, x: usize, y: usize) -> u64 {
        assert!(x < self.n && y < self.n, "node pair ({x}, {y}) out of range 0..{}", self.n);
        self.cells[x + y * self.n]
    }
}

/// Largest `r` with `r * r <= x`.
fn int_sqrt(x: usize) -> usize {
    let mut r = (x as f64).sqrt() as usize;
    while r * r > x {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= x {
        r += 1;
    }
    r
}
