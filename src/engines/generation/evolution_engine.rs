use crate::config::{ConfigSection, EvolutionConfig};
use crate::engines::generation::{
    best_fit::BestFit,
    gene_space::GeneSpace,
    objective::Objective,
    operators::{breed, MutationPolicy},
    progress::{NoProgress, ProgressCallback},
};
use crate::error::{GenpolyError, Result};
use crate::types::{GeneRange, Individual, Population, Scored};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generational genetic optimizer over real-valued genes.
///
/// Each generation breeds every ordered pair of parents, scores the children
/// once each, keeps the top `ancestors` as the next parents and records the
/// best child ever seen. Training can be resumed any number of times.
pub struct GeneticOptimizer<O: Objective, R = StdRng> {
    config: EvolutionConfig,
    policy: MutationPolicy,
    space: GeneSpace,
    objective: O,
    parents: Population,
    best_fit: BestFit<O::Score>,
    generation: usize,
    rng: R,
}

impl<O: Objective> GeneticOptimizer<O, StdRng> {
    /// Seeds a `StdRng` from `config.seed`, or from entropy when unset.
    pub fn from_config(objective: O, ranges: Vec<GeneRange>, config: EvolutionConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(objective, ranges, config, rng)
    }
}

impl<O: Objective, R: Rng> GeneticOptimizer<O, R> {
    /// Validates the configuration and seeds generation 0 from `rng`.
    pub fn new(objective: O, ranges: Vec<GeneRange>, config: EvolutionConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let space = GeneSpace::new(ranges)?;
        let parents = space.initialize(config.ancestors, &mut rng);

        log::debug!(
            "Initialized {} ancestors over {} genes ({} children per generation)",
            config.ancestors,
            space.len(),
            config.children_per_generation()
        );

        Ok(Self {
            policy: MutationPolicy::from(&config),
            config,
            space,
            objective,
            parents,
            best_fit: BestFit::new(),
            generation: 0,
            rng,
        })
    }

    /// Run `generations` generations (the configured count when `None`) and
    /// return the best individual found so far.
    pub fn train(&mut self, generations: Option<usize>) -> Result<Individual> {
        self.train_with_progress(generations, &mut NoProgress)
    }

    pub fn train_with_progress<C>(&mut self, generations: Option<usize>, callback: &mut C) -> Result<Individual>
    where
        C: ProgressCallback<O::Score>,
    {
        let generations = generations.unwrap_or(self.config.generations);
        for _ in 0..generations {
            self.advance(callback)?;
        }

        let best = self.best_fit.get().ok_or(GenpolyError::Untrained)?;
        log::info!(
            "Trained {} generations ({} total), best score {:?}",
            generations,
            self.generation,
            best.score
        );
        Ok(best.genes.clone())
    }

    /// One generation: breed, rank, update the best fit, truncate.
    /// Returns the top child of this generation.
    pub fn step(&mut self) -> Result<Scored<O::Score>> {
        self.advance(&mut NoProgress)
    }

    fn advance<C>(&mut self, callback: &mut C) -> Result<Scored<O::Score>>
    where
        C: ProgressCallback<O::Score>,
    {
        callback.on_generation_start(self.generation);

        let children = breed(&self.parents, &self.space, &self.policy, &mut self.rng);
        check_brood(children.len(), self.config.ancestors)?;

        let ranked = self.rank(children, callback)?;
        let generation_best = ranked
            .first()
            .cloned()
            .ok_or(GenpolyError::DegeneratePopulation {
                expected: self.config.ancestors,
                actual: 0,
            })?;

        log::debug!(
            "Generation {}: top child scored {:?}",
            self.generation + 1,
            generation_best.score
        );
        if self.best_fit.consider(&generation_best) {
            log::info!(
                "Generation {}: new best fit {:?} scoring {:?}",
                self.generation + 1,
                generation_best.genes,
                generation_best.score
            );
        }

        self.parents = ranked
            .into_iter()
            .take(self.config.ancestors)
            .map(|scored| scored.genes)
            .collect();

        if let Some(best_ever) = self.best_fit.get() {
            callback.on_generation_complete(self.generation, &generation_best, best_ever);
        }
        self.generation += 1;

        Ok(generation_best)
    }

    /// Score each child exactly once and sort best first. The sort is stable,
    /// so equal scores keep breeding order.
    pub fn rank<C>(&mut self, children: Population, callback: &mut C) -> Result<Vec<Scored<O::Score>>>
    where
        C: ProgressCallback<O::Score>,
    {
        let total = children.len();
        let mut scored = Vec::with_capacity(total);
        for (i, genes) in children.into_iter().enumerate() {
            let score = self
                .objective
                .score(&genes)
                .map_err(GenpolyError::Scoring)?;
            callback.on_individual_scored(i + 1, total);
            scored.push(Scored::new(genes, score));
        }

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(scored)
    }

    /// Replace the gene ranges between training stages. Current parents are
    /// clamped into the new ranges; the best fit is kept as recorded.
    pub fn set_ranges(&mut self, ranges: Vec<GeneRange>) -> Result<()> {
        self.space.set_ranges(ranges)?;
        for parent in &mut self.parents {
            self.space.clamp(parent);
        }
        Ok(())
    }

    /// Forget the best fit, e.g. when a sweep stage should report its own winner.
    pub fn reset_best_fit(&mut self) {
        self.best_fit = BestFit::new();
    }

    pub fn best_fit(&self) -> Option<&Individual> {
        self.best_fit.genes()
    }

    pub fn best_score(&self) -> Option<&O::Score> {
        self.best_fit.score()
    }

    pub fn parents(&self) -> &[Individual] {
        &self.parents
    }

    /// Generations completed across every `train`/`step` call
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn gene_space(&self) -> &GeneSpace {
        &self.space
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }
}

/// A generation must breed at least as many children as it keeps as parents.
pub(crate) fn check_brood(children: usize, ancestors: usize) -> Result<()> {
    if children < ancestors {
        return Err(GenpolyError::DegeneratePopulation {
            expected: ancestors,
            actual: children,
        });
    }
    Ok(())
}
