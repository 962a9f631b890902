use std::fmt::Debug;

/// Scoring contract between the optimizer and its consumer.
///
/// Higher scores are better. The optimizer only ever compares scores, so any
/// totally ordered type works; wrap plain floats in [`float_ord::FloatOrd`].
pub trait Objective {
    type Score: Ord + Clone + Debug;

    fn score(&mut self, genes: &[f64]) -> anyhow::Result<Self::Score>;
}

impl<F, S> Objective for F
where
    F: FnMut(&[f64]) -> S,
    S: Ord + Clone + Debug,
{
    type Score = S;

    fn score(&mut self, genes: &[f64]) -> anyhow::Result<S> {
        Ok(self(genes))
    }
}

/// Adapter for scoring closures that can fail.
pub struct Fallible<F>(pub F);

impl<F, S> Objective for Fallible<F>
where
    F: FnMut(&[f64]) -> anyhow::Result<S>,
    S: Ord + Clone + Debug,
{
    type Score = S;

    fn score(&mut self, genes: &[f64]) -> anyhow::Result<S> {
        (self.0)(genes)
    }
}
