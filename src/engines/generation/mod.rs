pub mod best_fit;
pub mod evolution_engine;
pub mod gene_space;
pub mod objective;
pub mod operators;
pub mod progress;

pub use best_fit::BestFit;
pub use evolution_engine::GeneticOptimizer;
pub use gene_space::GeneSpace;
pub use objective::{Fallible, Objective};
pub use operators::{breed, make_child, minor_mutation, MutationPolicy};
pub use progress::{
    ChannelProgressCallback, ConsoleProgressCallback, NoProgress, ProgressCallback, ProgressMessage,
};
