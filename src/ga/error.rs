//! Error type for chromosome and population construction.

/// Errors raised while building chromosomes, populations, or configurations.
///
/// None of these are recoverable at run time: once a
/// [`Population`](super::Population) exists, [`evolve`](super::Population::evolve)
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GaError {
    /// The gene length does not match the target length.
    #[error("gene length {actual} does not match target length {expected}")]
    InvalidGene { expected: usize, actual: usize },

    /// The gene contains characters outside ASCII.
    #[error("gene must contain only ASCII characters")]
    NonAsciiGene,

    /// A population parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;
