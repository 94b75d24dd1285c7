//! GA evolutionary loop execution.
//!
//! [`GeneticAlgorithm`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover →
//! repair → mutation → repeat.

use super::config::GaConfig;
use super::operators::Genome;
use super::selection::tournament;
use crate::algorithm::{Algorithm, SolutionOf};
use crate::error::SolverError;
use crate::problem::Problem;
use rand::Rng;

/// Statistics from the most recent run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaStats {
    /// Generations executed.
    pub generations: usize,

    /// Smallest population observed at the start of a generation.
    pub min_population: usize,

    /// Largest population observed at the start of a generation.
    pub max_population: usize,

    /// Children replaced by a fresh random solution after an infeasible crossover.
    pub repairs: usize,
}

/// Generational Genetic Algorithm bound to a problem.
///
/// The convergence history records the best score of each generation's
/// population. With `elitism >= 1` that score never decreases.
///
/// # Usage
///
/// ```
/// use u_metabench::algorithm::Algorithm;
/// use u_metabench::ga::{GaConfig, GeneticAlgorithm};
/// use u_metabench::problem::KnapsackProblem;
///
/// let problem = KnapsackProblem::generate_random(20, 42);
/// let mut ga = GeneticAlgorithm::new(&problem, GaConfig::default().with_seed(42)).unwrap();
/// let result = ga.run();
/// assert_eq!(result.convergence_history.len(), 100);
/// ```
#[derive(Debug)]
pub struct GeneticAlgorithm<'a, P> {
    problem: &'a P,
    config: GaConfig,
    stats: GaStats,
}

impl<'a, P> GeneticAlgorithm<'a, P>
where
    P: Problem,
    P::Solution: Genome,
{
    /// Binds the GA to `problem`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidConfig`] if the configuration is invalid.
    pub fn new(problem: &'a P, config: GaConfig) -> Result<Self, SolverError> {
        config.validate().map_err(SolverError::InvalidConfig)?;
        Ok(Self {
            problem,
            config,
            stats: GaStats::default(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Statistics from the most recent run.
    pub fn stats(&self) -> GaStats {
        self.stats
    }
}

impl<P> Algorithm for GeneticAlgorithm<'_, P>
where
    P: Problem,
    P::Solution: Genome,
{
    type Problem = P;

    fn name(&self) -> &'static str {
        "Genetic Algorithm"
    }

    fn problem(&self) -> &P {
        self.problem
    }

    fn seed(&self) -> Option<u64> {
        self.config.seed
    }

    fn solve<R: Rng>(&mut self, rng: &mut R, history: &mut Vec<f64>) -> (SolutionOf<Self>, f64) {
        let problem = self.problem;
        let config = &self.config;
        let mut stats = GaStats {
            min_population: usize::MAX,
            ..GaStats::default()
        };

        // 1. Initialize population
        let mut population: Vec<P::Solution> = (0..config.population_size)
            .map(|_| problem.random_solution(rng))
            .collect();

        let mut best = population[0].clone();
        let mut best_value = f64::NEG_INFINITY;

        // 2. Evolutionary loop
        for generation in 0..config.generations {
            stats.min_population = stats.min_population.min(population.len());
            stats.max_population = stats.max_population.max(population.len());

            let fitness = evaluate_population(problem, &population);
            let gen_best = find_best(&fitness);
            history.push(fitness[gen_best]);

            if fitness[gen_best] > best_value {
                best = population[gen_best].clone();
                best_value = fitness[gen_best];
            }

            tracing::trace!(generation, best = fitness[gen_best], "generation evaluated");

            population = next_generation(problem, &population, &fitness, config, rng, &mut stats);
            stats.generations = generation + 1;
        }

        // 3. Final population
        let fitness = evaluate_population(problem, &population);
        let final_best = find_best(&fitness);
        if fitness[final_best] > best_value {
            best = population[final_best].clone();
            best_value = fitness[final_best];
        }

        if stats.min_population == usize::MAX {
            stats.min_population = population.len();
        }
        tracing::debug!(
            generations = stats.generations,
            repairs = stats.repairs,
            best_value,
            "evolution finished"
        );
        self.stats = stats;

        (best, best_value)
    }
}

/// Breeds the next population from an evaluated one.
///
/// The top `elitism` individuals (stable descending sort, so ties keep
/// population order) are copied first, then pairs of children are added
/// until the population is full. The result has exactly
/// `config.population_size` individuals.
pub(crate) fn next_generation<P, R>(
    problem: &P,
    population: &[P::Solution],
    fitness: &[f64],
    config: &GaConfig,
    rng: &mut R,
    stats: &mut GaStats,
) -> Vec<P::Solution>
where
    P: Problem,
    P::Solution: Genome,
    R: Rng,
{
    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by(|&a, &b| fitness[b].total_cmp(&fitness[a]));

    // Elite preservation
    let mut next: Vec<P::Solution> = ranked
        .iter()
        .take(config.elitism)
        .map(|&i| population[i].clone())
        .collect();

    // Generate offspring
    while next.len() < config.population_size {
        let p1 = tournament(fitness, config.tournament_size, rng);
        let p2 = tournament(fitness, config.tournament_size, rng);

        let (child1, child2) = if rng.random::<f64>() < config.crossover_rate {
            let (c1, c2) = population[p1].uniform_crossover(&population[p2], rng);
            (
                repair(problem, c1, rng, stats),
                repair(problem, c2, rng, stats),
            )
        } else {
            (population[p1].clone(), population[p2].clone())
        };

        next.push(mutate(problem, child1, config.mutation_rate, rng));
        next.push(mutate(problem, child2, config.mutation_rate, rng));
    }

    next.truncate(config.population_size);
    next
}

/// Replaces an infeasible child with a fresh random solution.
fn repair<P: Problem, R: Rng>(
    problem: &P,
    child: P::Solution,
    rng: &mut R,
    stats: &mut GaStats,
) -> P::Solution {
    if problem.is_feasible(&child) {
        child
    } else {
        stats.repairs += 1;
        problem.random_solution(rng)
    }
}

/// With probability `rate`, replaces the individual by one neighbor sample.
fn mutate<P: Problem, R: Rng>(
    problem: &P,
    individual: P::Solution,
    rate: f64,
    rng: &mut R,
) -> P::Solution {
    if rng.random::<f64>() < rate {
        problem.neighbor(&individual, rng)
    } else {
        individual
    }
}

fn evaluate_population<P: Problem>(problem: &P, population: &[P::Solution]) -> Vec<f64> {
    population.iter().map(|ind| problem.evaluate(ind)).collect()
}

/// Index of the highest score; the first one wins ties.
fn find_best(fitness: &[f64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f > fitness[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{KnapsackProblem, TspProblem};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ga_small_knapsack_optimum() {
        let problem = KnapsackProblem::new(vec![2, 3, 4], vec![3, 4, 5], 5).unwrap();
        let mut ga = GeneticAlgorithm::new(&problem, GaConfig::default().with_seed(42)).unwrap();

        let result = ga.run();

        assert_eq!(result.best_value, 7.0);
        assert_eq!(result.solution, vec![true, true, false]);
    }

    #[test]
    fn test_ga_history_one_entry_per_generation() {
        let problem = KnapsackProblem::generate_random(20, 2);
        let config = GaConfig::default().with_generations(30).with_seed(42);
        let mut ga = GeneticAlgorithm::new(&problem, config).unwrap();

        let result = ga.run();

        assert_eq!(result.convergence_history.len(), 30);
        assert_eq!(ga.stats().generations, 30);
    }

    #[test]
    fn test_ga_elitism_keeps_history_non_decreasing() {
        let problem = TspProblem::generate_random(15, 6);
        let mut ga = GeneticAlgorithm::new(&problem, GaConfig::default().with_seed(42)).unwrap();

        let result = ga.run();

        for window in result.convergence_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "generation best should not decrease with elitism: {} < {}",
                window[1],
                window[0]
            );
        }
        assert!(result.best_value >= *result.convergence_history.last().unwrap());
    }

    #[test]
    fn test_ga_population_size_constant() {
        let problem = KnapsackProblem::generate_random(12, 3);
        for (size, elitism) in [(1, 0), (2, 2), (7, 3), (50, 2)] {
            let config = GaConfig::default()
                .with_population_size(size)
                .with_elitism(elitism)
                .with_generations(20)
                .with_seed(5);
            let mut ga = GeneticAlgorithm::new(&problem, config).unwrap();
            ga.run();
            assert_eq!(ga.stats().min_population, size);
            assert_eq!(ga.stats().max_population, size);
        }
    }

    #[test]
    fn test_elites_carried_unchanged() {
        let problem = KnapsackProblem::generate_random(10, 8);
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elitism(2)
            .with_mutation_rate(1.0);
        let mut rng = StdRng::seed_from_u64(42);
        let population: Vec<Vec<bool>> =
            (0..10).map(|_| problem.random_solution(&mut rng)).collect();
        let fitness = evaluate_population(&problem, &population);

        let mut ranked: Vec<usize> = (0..10).collect();
        ranked.sort_by(|&a, &b| fitness[b].total_cmp(&fitness[a]));

        let mut stats = GaStats::default();
        let next = next_generation(&problem, &population, &fitness, &config, &mut rng, &mut stats);

        assert_eq!(next.len(), 10);
        assert_eq!(next[0], population[ranked[0]]);
        assert_eq!(next[1], population[ranked[1]]);
    }

    #[test]
    fn test_elite_ties_keep_population_order() {
        let problem = KnapsackProblem::new(vec![1, 1, 1], vec![1, 1, 1], 3).unwrap();
        let population = vec![
            vec![true, false, false],
            vec![false, true, false],
            vec![false, false, true],
            vec![false, false, false],
        ];
        let fitness = evaluate_population(&problem, &population);
        let config = GaConfig::default()
            .with_population_size(4)
            .with_elitism(2);
        let mut rng = StdRng::seed_from_u64(0);

        let next = next_generation(
            &problem,
            &population,
            &fitness,
            &config,
            &mut rng,
            &mut GaStats::default(),
        );

        assert_eq!(next[0], population[0]);
        assert_eq!(next[1], population[1]);
    }

    #[test]
    fn test_tsp_crossover_children_repaired() {
        let problem = TspProblem::generate_random(10, 1);
        let config = GaConfig::default()
            .with_crossover_rate(1.0)
            .with_generations(10)
            .with_seed(3);
        let mut ga = GeneticAlgorithm::new(&problem, config).unwrap();

        let result = ga.run();

        // Uniform crossover almost never yields a permutation
        assert!(ga.stats().repairs > 0);
        assert!(problem.is_feasible(&result.solution));
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let problem = KnapsackProblem::generate_random(8, 4);
        let config = GaConfig::default().with_generations(0).with_seed(1);
        let mut ga = GeneticAlgorithm::new(&problem, config).unwrap();

        let result = ga.run();

        assert!(result.convergence_history.is_empty());
        assert!(problem.is_feasible(&result.solution));
        assert_eq!(problem.evaluate(&result.solution), result.best_value);
    }

    #[test]
    fn test_find_best_first_on_ties() {
        assert_eq!(find_best(&[1.0, 4.0, 4.0, 2.0]), 1);
        assert_eq!(find_best(&[f64::NEG_INFINITY, f64::NEG_INFINITY]), 0);
    }
}
