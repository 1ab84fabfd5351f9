//! Final route returned to callers.

use super::{path_length, Tour};
use crate::distance::DistanceMatrix;

/// A solved route and its total distance in kilometers.
///
/// An open solution is exactly the solver's [`Tour`]. A closed solution
/// has the start index appended once more and includes the return edge in
/// its distance.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::models::{Solution, Tour};
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 1.0,
///     2.0, 1.0, 0.0,
/// ]).unwrap();
/// let mut sol = Solution::from_tour(Tour::from_order(vec![0, 1, 2]).unwrap(), &dm);
/// assert!((sol.total_distance() - 2.0).abs() < 1e-10);
///
/// sol.close_loop(&dm);
/// assert_eq!(sol.order(), &[0, 1, 2, 0]);
/// assert!((sol.total_distance() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    order: Vec<usize>,
    total_distance: f64,
    closed: bool,
}

impl Solution {
    /// Builds an open solution from a tour, measuring its length.
    pub fn from_tour(tour: Tour, distances: &DistanceMatrix) -> Self {
        let order = tour.into_order();
        let total_distance = path_length(&order, distances);
        Self {
            order,
            total_distance,
            closed: false,
        }
    }

    /// Appends the start index and adds the return edge.
    ///
    /// Does nothing if the solution is already closed or empty.
    pub fn close_loop(&mut self, distances: &DistanceMatrix) {
        if self.closed {
            return;
        }
        let (Some(&first), Some(&last)) = (self.order.first(), self.order.last()) else {
            return;
        };
        self.total_distance += distances.get(last, first);
        self.order.push(first);
        self.closed = true;
    }

    /// Visiting order, ending with the start index when closed.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total distance in kilometers.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Returns `true` if the route returns to its start.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of distinct points visited.
    pub fn num_points(&self) -> usize {
        if self.closed {
            self.order.len() - 1
        } else {
            self.order.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_data(3, vec![0.0, 3.0, 4.0, 3.0, 0.0, 5.0, 4.0, 5.0, 0.0])
            .expect("valid")
    }

    #[test]
    fn test_open_solution() {
        let dm = triangle();
        let sol = Solution::from_tour(Tour::from_order(vec![0, 1, 2]).expect("valid"), &dm);
        assert!(!sol.is_closed());
        assert_eq!(sol.num_points(), 3);
        assert!((sol.total_distance() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_close_loop_once() {
        let dm = triangle();
        let mut sol = Solution::from_tour(Tour::from_order(vec![0, 1, 2]).expect("valid"), &dm);
        sol.close_loop(&dm);
        sol.close_loop(&dm);
        assert_eq!(sol.order(), &[0, 1, 2, 0]);
        assert_eq!(sol.num_points(), 3);
        assert!((sol.total_distance() - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_close_loop_single_point() {
        let dm = DistanceMatrix::new(1);
        let mut sol = Solution::from_tour(Tour::from_order(vec![0]).expect("valid"), &dm);
        sol.close_loop(&dm);
        assert_eq!(sol.order(), &[0, 0]);
        assert_eq!(sol.total_distance(), 0.0);
    }

    #[test]
    fn test_close_loop_empty() {
        let dm = DistanceMatrix::new(0);
        let mut sol = Solution::from_tour(Tour::from_order(vec![]).expect("valid"), &dm);
        sol.close_loop(&dm);
        assert!(sol.order().is_empty());
        assert!(!sol.is_closed());
    }
}
