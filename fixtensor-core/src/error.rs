use thiserror::Error;

/// Runtime failures. Structural mismatches (rank, size, contraction order)
/// never get here: they are rejected while building.
#[derive(Debug, Error)]
pub enum Error {
    #[error("expected {expected} components, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("invalid normal distribution: {0}")]
    Normal(#[from] rand_distr::NormalError),
}

pub type Result<T> = std::result::Result<T, Error>;
