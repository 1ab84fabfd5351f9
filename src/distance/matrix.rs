//! Dense distance matrix.

use crate::models::Point;

/// A dense n×n distance matrix in kilometers, stored in row-major order.
///
/// Built once from a fixed list of points and read-only afterwards, so a
/// single matrix can be shared by concurrent solver calls.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new("A", 0.0, 0.0),
///     Point::new("B", 0.0, 1.0),
///     Point::new("C", 1.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 1), 0.0);
/// assert!((dm.get(0, 1) - 111.195).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes great-circle distances between all pairs of points.
    ///
    /// Each ordered pair is evaluated on its own, so `(i, j)` and `(j, i)`
    /// may differ in the last bits. The diagonal is exactly zero.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    dm.set(i, j, points[i].distance_to(&points[j]));
                }
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no locations.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` as seen from `from`.
    ///
    /// Ties go to the candidate that appears first, which is the lowest
    /// index when `candidates` is sorted ascending. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}
