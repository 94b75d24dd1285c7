//! Euclidean travelling salesman problem.
//!
//! Solutions are permutations of city indices describing a closed tour.
//! The score is the negated tour length so solvers can keep maximizing.

use super::Problem;
use crate::error::SolverError;
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use std::fmt;

/// A dense symmetric n×n distance matrix stored in row-major order.
///
/// The diagonal is zero and `get(i, j) == get(j, i)` by construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes Euclidean distances between every pair of points.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let size = points.len();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                let d = dx.hypot(dy);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self { data, size }
    }

    /// Distance between locations `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// A Euclidean TSP instance.
///
/// # Examples
///
/// ```
/// use u_metabench::problem::{Problem, TspProblem};
///
/// let square = TspProblem::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
/// assert!((square.tour_length(&[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
/// assert!((square.evaluate(&vec![0, 1, 2, 3]) + 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspProblem {
    cities: Vec<(f64, f64)>,
    distances: DistanceMatrix,
}

impl TspProblem {
    /// Creates an instance from city coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInstance`] if any coordinate is not
    /// finite.
    pub fn new(cities: Vec<(f64, f64)>) -> Result<Self, SolverError> {
        if let Some(i) = cities
            .iter()
            .position(|&(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(SolverError::InvalidInstance(format!(
                "city {i} has a non-finite coordinate"
            )));
        }
        let distances = DistanceMatrix::from_points(&cities);
        Ok(Self { cities, distances })
    }

    /// Generates `n` cities uniformly in `[0, 100] × [0, 100]`.
    pub fn generate_random(n: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let cities: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random_range(0.0..=100.0), rng.random_range(0.0..=100.0)))
            .collect();
        let distances = DistanceMatrix::from_points(&cities);
        Self { cities, distances }
    }

    /// Number of cities.
    pub fn n(&self) -> usize {
        self.cities.len()
    }

    /// City coordinates.
    pub fn cities(&self) -> &[(f64, f64)] {
        &self.cities
    }

    /// Pairwise distances.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Length of the closed tour visiting `tour` in order.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n)
            .map(|i| self.distances.get(tour[i], tour[(i + 1) % n]))
            .sum()
    }
}

impl Problem for TspProblem {
    type Solution = Vec<usize>;

    fn evaluate(&self, tour: &Vec<usize>) -> f64 {
        if !self.is_feasible(tour) {
            return f64::NEG_INFINITY;
        }
        -self.tour_length(tour)
    }

    fn is_feasible(&self, tour: &Vec<usize>) -> bool {
        if tour.len() != self.n() {
            return false;
        }
        let mut seen = vec![false; self.n()];
        for &city in tour {
            if city >= self.n() || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }

    fn random_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut tour: Vec<usize> = (0..self.n()).collect();
        tour.shuffle(rng);
        tour
    }

    /// 2-opt move: reverse the segment between two distinct positions.
    fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let mut neighbor = tour.clone();
        if neighbor.len() < 2 {
            return neighbor;
        }
        let picked = index::sample(rng, neighbor.len(), 2);
        let (a, b) = (picked.index(0), picked.index(1));
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        neighbor[i..=j].reverse();
        neighbor
    }
}

impl fmt::Display for TspProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TSP(n={} cities)", self.n())
    }
}
