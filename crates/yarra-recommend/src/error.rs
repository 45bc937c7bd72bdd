//! Error types for the recommender core.

use thiserror::Error;

/// Result type for recommender operations.
pub type Result<T> = std::result::Result<T, RecommendError>;

/// Errors that can occur during training, prediction, or recommendation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    /// Bad training configuration
    #[error("invalid hyperparameter {name}: {reason}")]
    InvalidHyperparameter {
        /// Name of the offending hyperparameter
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The ratings matrix holds no observed ratings
    #[error("cannot train on a ratings matrix with no observed ratings")]
    EmptyRatings,

    /// A user or item index outside the trained dimensions
    #[error("{axis} index {index} out of range for dimension {len}")]
    IndexOutOfRange {
        /// Which axis the index addressed ("user" or "item")
        axis: &'static str,
        /// The offending index
        index: usize,
        /// Length of the addressed dimension
        len: usize,
    },

    /// A user index absent from the trained index space
    #[error("user index {0} is not part of the trained model")]
    UnknownUser(usize),

    /// Training produced NaN or infinite factors (diverged)
    #[error("training diverged: factor matrices contain non-finite values")]
    NonFiniteFactors,
}
