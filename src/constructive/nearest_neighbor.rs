//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from the given point, always step to the
//! nearest unvisited point.
//!
//! # Tie-breaking
//!
//! Unvisited points are scanned in ascending index order and only a strictly
//! shorter distance replaces the current choice, so among equally near
//! points the lowest index wins. The result is fully determined by the
//! matrix and the start index.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::models::Tour;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// # Errors
///
/// [`TourError::InvalidStart`] if the matrix is empty or `start` is out of
/// range.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::nearest_neighbor_tour;
///
/// // Points on a line at 0, 10, 1
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 10.0, 1.0,
///     10.0, 0.0, 9.0,
///     1.0, 9.0, 0.0,
/// ]).unwrap();
///
/// let tour = nearest_neighbor_tour(&dm, 0).unwrap();
/// assert_eq!(tour.order(), &[0, 2, 1]);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: usize) -> Result<Tour> {
    let n = distances.size();
    if start >= n {
        return Err(TourError::InvalidStart { start, size: n });
    }

    // Ascending, so the matrix's first-wins tie-break picks the lowest index
    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    let mut order = Vec::with_capacity(n);
    order.push(start);
    let mut current = start;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&i| i != next);
        order.push(next);
        current = next;
    }

    let tour = Tour::new_unchecked(order);
    debug!(
        "nearest neighbor: {} points from start {}, length {:.3}",
        n,
        start,
        tour.length(distances)
    );
    Ok(tour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new("A", 0.0, 0.0),
            Point::new("B", 0.0, 1.0),
            Point::new("C", 1.0, 1.0),
            Point::new("D", 1.0, 0.0),
        ])
    }

    #[test]
    fn test_nn_unit_square() {
        let dm = unit_square();
        let tour = nearest_neighbor_tour(&dm, 0).expect("valid start");
        // B and D are equally near A; the lower index wins
        assert_eq!(tour.order(), &[0, 1, 2, 3]);
        let expected = dm.get(0, 1) + dm.get(1, 2) + dm.get(2, 3);
        assert!((tour.length(&dm) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_nn_other_start() {
        let dm = unit_square();
        let tour = nearest_neighbor_tour(&dm, 2).expect("valid start");
        assert_eq!(tour.start(), Some(2));
        assert_eq!(tour.len(), 4);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 10.0, 1.0, 10.0, 0.0, 9.0, 1.0, 9.0, 0.0])
            .expect("valid");
        let tour = nearest_neighbor_tour(&dm, 0).expect("valid start");
        assert_eq!(tour.order(), &[0, 2, 1]);
    }

    #[test]
    fn test_nn_tie_break_lowest_index() {
        let dm = DistanceMatrix::from_data(3, vec![0.0, 5.0, 5.0, 5.0, 0.0, 5.0, 5.0, 5.0, 0.0])
            .expect("valid");
        let tour = nearest_neighbor_tour(&dm, 2).expect("valid start");
        assert_eq!(tour.order(), &[2, 0, 1]);
    }

    #[test]
    fn test_nn_deterministic() {
        let dm = unit_square();
        let a = nearest_neighbor_tour(&dm, 1).expect("valid start");
        let b = nearest_neighbor_tour(&dm, 1).expect("valid start");
        assert_eq!(a, b);
    }

    #[test]
    fn test_nn_single_point() {
        let dm = DistanceMatrix::new(1);
        let tour = nearest_neighbor_tour(&dm, 0).expect("valid start");
        assert_eq!(tour.order(), &[0]);
        assert_eq!(tour.length(&dm), 0.0);
    }

    #[test]
    fn test_nn_empty() {
        let dm = DistanceMatrix::new(0);
        assert_eq!(
            nearest_neighbor_tour(&dm, 0),
            Err(TourError::InvalidStart { start: 0, size: 0 })
        );
    }

    #[test]
    fn test_nn_start_out_of_range() {
        let dm = unit_square();
        assert_eq!(
            nearest_neighbor_tour(&dm, 4),
            Err(TourError::InvalidStart { start: 4, size: 4 })
        );
    }
}
