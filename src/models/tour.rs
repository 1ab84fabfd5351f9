//! Tour representation.

use crate::distance::DistanceMatrix;

/// An open path visiting every point exactly once.
///
/// The order is a permutation of `0..n` whose first element is the start
/// index. The length is the sum of consecutive distances and does not
/// include a return edge.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::models::Tour;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 4.0,
///     1.0, 0.0, 2.0,
///     4.0, 2.0, 0.0,
/// ]).unwrap();
/// let tour = Tour::from_order(vec![0, 1, 2]).unwrap();
/// assert_eq!(tour.start(), Some(0));
/// assert!((tour.length(&dm) - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Wraps an order that the caller guarantees is a permutation.
    pub(crate) fn new_unchecked(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// Creates a tour from an explicit visiting order.
    ///
    /// Returns `None` unless `order` is a permutation of `0..order.len()`.
    pub fn from_order(order: Vec<usize>) -> Option<Self> {
        let mut seen = vec![false; order.len()];
        for &idx in &order {
            if idx >= seen.len() || seen[idx] {
                return None;
            }
            seen[idx] = true;
        }
        Some(Self { order })
    }

    /// Visiting order as point indices.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour, returning its visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// First index of the tour, `None` if empty.
    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Number of visited points.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no points.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total open-path length under `distances`.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        path_length(&self.order, distances)
    }

    /// Returns a copy with positions `[i, j)` reversed.
    ///
    /// Positions outside the segment are kept in place, so a segment with
    /// `i >= 1` never moves the start.
    ///
    /// # Panics
    ///
    /// Panics if `i > j` or `j > self.len()`.
    pub fn reversed_segment(&self, i: usize, j: usize) -> Self {
        let mut order = self.order.clone();
        order[i..j].reverse();
        Self { order }
    }
}

/// Sum of consecutive distances along `order`, without a return edge.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::models::path_length;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).unwrap();
/// assert_eq!(path_length(&[0, 1], &dm), 5.0);
/// assert_eq!(path_length(&[0, 1, 0], &dm), 10.0);
/// assert_eq!(path_length(&[1], &dm), 0.0);
/// ```
pub fn path_length(order: &[usize], distances: &DistanceMatrix) -> f64 {
    order
        .windows(2)
        .map(|w| distances.get(w[0], w[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_matrix() -> DistanceMatrix {
        // Points on a line at 0, 1, 2, 3
        let n = 4;
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push((i as f64 - j as f64).abs());
            }
        }
        DistanceMatrix::from_data(n, data).expect("valid")
    }

    #[test]
    fn test_from_order_rejects_repeats() {
        assert!(Tour::from_order(vec![0, 1, 1]).is_none());
    }

    #[test]
    fn test_from_order_rejects_out_of_range() {
        assert!(Tour::from_order(vec![0, 3, 1]).is_none());
    }

    #[test]
    fn test_from_order_empty() {
        let tour = Tour::from_order(vec![]).expect("empty permutation");
        assert!(tour.is_empty());
        assert_eq!(tour.start(), None);
    }

    #[test]
    fn test_length_open_path() {
        let dm = line_matrix();
        let tour = Tour::from_order(vec![0, 1, 2, 3]).expect("valid");
        assert!((tour.length(&dm) - 3.0).abs() < 1e-10);
        let tour = Tour::from_order(vec![0, 2, 1, 3]).expect("valid");
        assert!((tour.length(&dm) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_reversed_segment_keeps_outside() {
        let tour = Tour::from_order(vec![0, 1, 2, 3, 4]).expect("valid");
        let rev = tour.reversed_segment(1, 4);
        assert_eq!(rev.order(), &[0, 3, 2, 1, 4]);
        assert_eq!(tour.order(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_reversed_segment_to_end() {
        let tour = Tour::from_order(vec![0, 1, 2, 3]).expect("valid");
        assert_eq!(tour.reversed_segment(2, 4).order(), &[0, 1, 3, 2]);
    }

    #[test]
    fn test_single_point_length() {
        let dm = DistanceMatrix::new(1);
        let tour = Tour::from_order(vec![0]).expect("valid");
        assert_eq!(tour.length(&dm), 0.0);
    }
}
