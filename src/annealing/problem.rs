//! SA problem definition for open tours.
//!
//! Implements the [`SaProblem`](u_metaheur::sa::SaProblem) trait so the
//! generic runner can anneal a tour with segment reversals.

use rand::Rng;
use u_metaheur::sa::SaProblem;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TourError};
use crate::models::{path_length, Tour};

/// Tour annealing problem seeded with a fixed starting tour.
///
/// Neighbors reverse a segment `[i, j)` with `1 <= i < j < n` drawn
/// uniformly among distinct position pairs, so the start point at position
/// 0 never moves.
pub struct TourAnnealingProblem<'a> {
    distances: &'a DistanceMatrix,
    seed: Vec<usize>,
}

impl<'a> TourAnnealingProblem<'a> {
    /// Creates a problem that starts from `seed`.
    ///
    /// # Errors
    ///
    /// [`TourError::DegenerateInput`] if the tour has fewer than three
    /// points, leaving no two distinct movable positions.
    pub fn new(distances: &'a DistanceMatrix, seed: &Tour) -> Result<Self> {
        if seed.len() < 3 {
            return Err(TourError::DegenerateInput { size: seed.len() });
        }
        Ok(Self {
            distances,
            seed: seed.order().to_vec(),
        })
    }
}

impl SaProblem for TourAnnealingProblem<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Vec<usize> {
        self.seed.clone()
    }

    fn cost(&self, order: &Vec<usize>) -> f64 {
        path_length(order, self.distances)
    }

    fn neighbor<R: Rng>(&self, order: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let (i, j) = random_segment(order.len(), rng);
        let mut next = order.clone();
        next[i..j].reverse();
        next
    }
}

/// Draws two distinct positions from `[1, n)` and returns them ordered.
///
/// Requires `n >= 3`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(1..n);
    let mut b = rng.random_range(1..n - 1);
    if b >= a {
        b += 1;
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_matrix() -> DistanceMatrix {
        DistanceMatrix::from_data(
            4,
            vec![
                0.0, 1.0, 1.4, 1.0, //
                1.0, 0.0, 1.0, 1.4, //
                1.4, 1.0, 0.0, 1.0, //
                1.0, 1.4, 1.0, 0.0,
            ],
        )
        .expect("valid")
    }

    #[test]
    fn test_new_rejects_small_tours() {
        let dm = DistanceMatrix::new(2);
        let tour = Tour::from_order(vec![0, 1]).expect("valid");
        assert!(matches!(
            TourAnnealingProblem::new(&dm, &tour),
            Err(TourError::DegenerateInput { size: 2 })
        ));
    }

    #[test]
    fn test_initial_solution_is_seed() {
        let dm = square_matrix();
        let tour = Tour::from_order(vec![2, 0, 3, 1]).expect("valid");
        let problem = TourAnnealingProblem::new(&dm, &tour).expect("enough points");
        let mut rng = u_numflow::random::create_rng(42);
        assert_eq!(problem.initial_solution(&mut rng), vec![2, 0, 3, 1]);
    }

    #[test]
    fn test_cost_is_open_path_length() {
        let dm = square_matrix();
        let tour = Tour::from_order(vec![0, 1, 2, 3]).expect("valid");
        let problem = TourAnnealingProblem::new(&dm, &tour).expect("enough points");
        assert!((problem.cost(&vec![0, 1, 2, 3]) - 3.0).abs() < 1e-10);
        assert!((problem.cost(&vec![0, 2, 1, 3]) - 3.8).abs() < 1e-10);
    }

    #[test]
    fn test_neighbor_keeps_start_and_permutation() {
        let dm = square_matrix();
        let tour = Tour::from_order(vec![0, 1, 2, 3]).expect("valid");
        let problem = TourAnnealingProblem::new(&dm, &tour).expect("enough points");
        let mut rng = u_numflow::random::create_rng(42);
        for _ in 0..200 {
            let next = problem.neighbor(&vec![0, 1, 2, 3], &mut rng);
            assert_eq!(next[0], 0);
            let mut sorted = next.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = u_numflow::random::create_rng(7);
        for n in 3..12 {
            for _ in 0..100 {
                let (i, j) = random_segment(n, &mut rng);
                assert!(1 <= i && i < j && j < n, "bad pair ({i}, {j}) for n={n}");
            }
        }
    }

    #[test]
    fn test_random_segment_covers_all_pairs() {
        let mut rng = u_numflow::random::create_rng(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(random_segment(4, &mut rng));
        }
        // Distinct pairs from {1, 2, 3}
        assert_eq!(seen.len(), 3);
    }
}
