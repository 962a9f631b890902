use crate::config::EvolutionConfig;
use crate::engines::generation::gene_space::GeneSpace;
use crate::types::{GeneRange, Individual, Population};
use rand::Rng;

/// Per-gene mutation probabilities used while breeding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationPolicy {
    pub major_mutation_chance: f64,
    pub minor_mutation_chance: f64,
    pub variance: f64,
}

impl MutationPolicy {
    /// Pure crossover, no new values ever enter the pool
    pub fn none() -> Self {
        Self {
            major_mutation_chance: 0.0,
            minor_mutation_chance: 0.0,
            variance: 0.0,
        }
    }
}

impl From<&EvolutionConfig> for MutationPolicy {
    fn from(config: &EvolutionConfig) -> Self {
        Self {
            major_mutation_chance: config.major_mutation_chance,
            minor_mutation_chance: config.minor_mutation_chance,
            variance: config.variance,
        }
    }
}

/// Breed one child for every ordered pair of distinct parents.
///
/// Both (i, j) and (j, i) are visited, so `k` parents give `k * (k - 1)`
/// children in row-major pair order. Fewer than two parents give none.
pub fn breed<R: Rng>(
    parents: &[Individual],
    space: &GeneSpace,
    policy: &MutationPolicy,
    rng: &mut R,
) -> Population {
    let count = parents.len();
    let mut children = Vec::with_capacity(count * count.saturating_sub(1));

    for (i, mother) in parents.iter().enumerate() {
        for (j, father) in parents.iter().enumerate() {
            if i == j {
                continue;
            }
            children.push(make_child(mother, father, space, policy, rng));
        }
    }

    children
}

/// Uniform crossover of two parents with major/minor mutation per gene.
///
/// Draw order per gene: major roll, parent coin (`> 0.5` takes the mother),
/// minor roll, perturbation factor.
pub fn make_child<R: Rng>(
    mother: &[f64],
    father: &[f64],
    space: &GeneSpace,
    policy: &MutationPolicy,
    rng: &mut R,
) -> Individual {
    (0..space.len())
        .map(|gene| {
            let mut value = if rng.gen::<f64>() < policy.major_mutation_chance {
                space.sample(gene, rng)
            } else if rng.gen::<f64>() > 0.5 {
                mother[gene]
            } else {
                father[gene]
            };

            if rng.gen::<f64>() < policy.minor_mutation_chance {
                value = minor_mutation(value, space.range(gene), policy.variance, rng);
            }
            value
        })
        .collect()
}

/// Scale `value` by a factor in `[1 - variance, 1 + variance]`, clamped to `range`.
pub fn minor_mutation<R: Rng>(value: f64, range: &GeneRange, variance: f64, rng: &mut R) -> f64 {
    let factor = rng.gen_range((1.0 - variance)..=(1.0 + variance));
    range.clamp(value * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn space(genes: usize) -> GeneSpace {
        GeneSpace::new(vec![GeneRange::new(0.0, 100.0); genes]).unwrap()
    }

    fn parents(k: usize, genes: usize) -> Population {
        (0..k)
            .map(|p| (0..genes).map(|g| (p * 10 + g) as f64).collect())
            .collect()
    }

    #[test]
    fn test_children_count_is_ordered_pairs() {
        let space = space(3);
        let policy = MutationPolicy::none();
        let mut rng = StdRng::seed_from_u64(11);
        for k in 0..7 {
            let children = breed(&parents(k, 3), &space, &policy, &mut rng);
            assert_eq!(children.len(), k * k.saturating_sub(1), "k = {}", k);
        }
    }

    #[test]
    fn test_children_follow_pair_order() {
        let space = space(4);
        let policy = MutationPolicy::none();
        let mut rng = StdRng::seed_from_u64(5);
        let parents = parents(3, 4);
        let children = breed(&parents, &space, &policy, &mut rng);

        let pairs = [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)];
        for (child, (i, j)) in children.iter().zip(pairs) {
            for gene in 0..4 {
                let value = child[gene];
                assert!(
                    value == parents[i][gene] || value == parents[j][gene],
                    "gene {} of child ({}, {}) came from outside its parents",
                    gene,
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_parents_are_not_mutated() {
        let space = space(5);
        let policy = MutationPolicy {
            major_mutation_chance: 0.5,
            minor_mutation_chance: 1.0,
            variance: 0.5,
        };
        let mut rng = StdRng::seed_from_u64(99);
        let parents = parents(4, 5);
        let snapshot = parents.clone();
        let _ = breed(&parents, &space, &policy, &mut rng);
        assert_eq!(parents, snapshot);
    }

    #[test]
    fn test_heavy_mutation_stays_in_range() {
        let space = GeneSpace::new(vec![GeneRange::new(-1.0, 1.0), GeneRange::new(10.0, 12.0)])
            .unwrap();
        let policy = MutationPolicy {
            major_mutation_chance: 0.3,
            minor_mutation_chance: 1.0,
            variance: 3.0,
        };
        let mut rng = StdRng::seed_from_u64(2024);
        let mut population = space.initialize(5, &mut rng);
        for _ in 0..20 {
            population = breed(&population, &space, &policy, &mut rng);
            assert!(population.iter().all(|child| space.contains(child)));
            population.truncate(5);
        }
    }

    #[test]
    fn test_certain_major_mutation_ignores_parents() {
        let space = GeneSpace::new(vec![GeneRange::new(0.0, 1.0)]).unwrap();
        let policy = MutationPolicy {
            major_mutation_chance: 1.0,
            minor_mutation_chance: 0.0,
            variance: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(8);
        let parents = vec![vec![5.0], vec![6.0]];
        let child = make_child(&parents[0], &parents[1], &space, &policy, &mut rng);
        assert!(space.range(0).contains(child[0]));
    }

    #[test]
    fn test_minor_mutation_bounds() {
        let range = GeneRange::new(0.0, 10.0);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..500 {
            let value = minor_mutation(5.0, &range, 0.2, &mut rng);
            assert!((4.0..=6.0).contains(&value));
        }
        assert_eq!(minor_mutation(9.0, &range, 0.0, &mut rng), 9.0);
        for _ in 0..500 {
            assert!(range.contains(minor_mutation(9.5, &range, 0.9, &mut rng)));
        }
    }
}
