use crate::types::{Individual, Scored};

/// Highest-scoring individual seen across every generation trained so far
#[derive(Debug, Clone)]
pub struct BestFit<S> {
    champion: Option<Scored<S>>,
}

impl<S> Default for BestFit<S> {
    fn default() -> Self {
        Self { champion: None }
    }
}

impl<S: Ord + Clone> BestFit<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `candidate` if nothing is held yet or it scores strictly higher.
    /// Ties keep the incumbent.
    pub fn consider(&mut self, candidate: &Scored<S>) -> bool {
        let improved = match &self.champion {
            None => true,
            Some(current) => candidate.score > current.score,
        };
        if improved {
            self.champion = Some(candidate.clone());
        }
        improved
    }

    pub fn get(&self) -> Option<&Scored<S>> {
        self.champion.as_ref()
    }

    pub fn genes(&self) -> Option<&Individual> {
        self.champion.as_ref().map(|c| &c.genes)
    }

    pub fn score(&self) -> Option<&S> {
        self.champion.as_ref().map(|c| &c.score)
    }

    pub fn is_empty(&self) -> bool {
        self.champion.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let best: BestFit<i32> = BestFit::new();
        assert!(best.is_empty());
        assert!(best.genes().is_none());
    }

    #[test]
    fn test_only_strict_improvements_replace() {
        let mut best = BestFit::new();
        assert!(best.consider(&Scored::new(vec![1.0], 10)));
        assert!(!best.consider(&Scored::new(vec![2.0], 10)));
        assert!(!best.consider(&Scored::new(vec![3.0], 4)));
        assert_eq!(best.genes(), Some(&vec![1.0]));
        assert!(best.consider(&Scored::new(vec![4.0], 11)));
        assert_eq!(best.score(), Some(&11));
    }
}
