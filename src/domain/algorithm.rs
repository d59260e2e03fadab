//! Selection of the generation evaluation strategy.

use serde::Deserialize;

/// How the candidate cells of a generation are evaluated.
/// Both strategies produce the same births and deaths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Candidate set evaluated on the calling thread
    #[default]
    Sparse,
    /// Candidate set evaluated across the rayon pool
    SparseParallel,
}

impl Algorithm {
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sparse, Algorithm::SparseParallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Sparse",
            Algorithm::SparseParallel => "Sparse+Par",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Live cells and neighbors, serial",
            Algorithm::SparseParallel => "Live cells and neighbors, parallel",
        }
    }
}
