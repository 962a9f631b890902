use crate::types::Scored;
use std::fmt::Debug;
use std::sync::mpsc::Sender;

/// Hooks invoked by the trainer as generations run
pub trait ProgressCallback<S> {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, generation_best: &Scored<S>, best_ever: &Scored<S>);
    fn on_individual_scored(&mut self, current: usize, total: usize);
}

/// Used by `train`, ignores every event
pub struct NoProgress;

impl<S> ProgressCallback<S> for NoProgress {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, _generation: usize, _generation_best: &Scored<S>, _best_ever: &Scored<S>) {}

    fn on_individual_scored(&mut self, _current: usize, _total: usize) {}
}

/// Reports progress through the `log` facade every `report_every` generations
pub struct ConsoleProgressCallback {
    report_every: usize,
}

impl ConsoleProgressCallback {
    pub fn new(report_every: usize) -> Self {
        Self {
            report_every: report_every.max(1),
        }
    }
}

impl Default for ConsoleProgressCallback {
    fn default() -> Self {
        Self::new(10)
    }
}

impl<S: Debug> ProgressCallback<S> for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::trace!("Generation {} starting", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, generation_best: &Scored<S>, best_ever: &Scored<S>) {
        if (generation + 1) % self.report_every == 0 {
            log::info!(
                "Generation {} complete. Generation best: {:?}, best so far: {:?}",
                generation + 1,
                generation_best.score,
                best_ever.score
            );
        }
    }

    fn on_individual_scored(&mut self, _current: usize, _total: usize) {}
}

pub enum ProgressMessage<S> {
    GenerationStart(usize),
    GenerationComplete {
        generation: usize,
        generation_best: Scored<S>,
        best_ever: Scored<S>,
    },
    IndividualScored { current: usize, total: usize },
}

/// Forwards progress to another thread, e.g. a UI or a supervising runner
pub struct ChannelProgressCallback<S> {
    sender: Sender<ProgressMessage<S>>,
}

impl<S> ChannelProgressCallback<S> {
    pub fn new(sender: Sender<ProgressMessage<S>>) -> Self {
        Self { sender }
    }
}

impl<S: Clone> ProgressCallback<S> for ChannelProgressCallback<S> {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, generation_best: &Scored<S>, best_ever: &Scored<S>) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            generation_best: generation_best.clone(),
            best_ever: best_ever.clone(),
        });
    }

    fn on_individual_scored(&mut self, current: usize, total: usize) {
        let _ = self
            .sender
            .send(ProgressMessage::IndividualScored { current, total });
    }
}
