//! FunkSVD training.
//!
//! Unregularized stochastic gradient descent over the observed entries
//! of a sparse ratings matrix. For each observed rating r with user
//! factors u and item factors m:
//!
//! residual = r - u · m
//! u' = u + lr * 2 * residual * m
//! m' = m + lr * 2 * residual * u
//!
//! Both updates read the pre-update values, so the user and item steps
//! for one rating are simultaneous rather than sequential. There is no
//! regularization and no convergence check: training runs exactly the
//! configured number of passes, and an aggressive learning rate can
//! diverge. Pick conservative rates.

use ndarray::Array2;
use rand::Rng;
use rand::distributions::Standard;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RecommendError, Result};
use crate::model::FactorModel;
use crate::ratings::RatingsMatrix;

/// FunkSVD hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FunkSvdConfig {
    /// Number of latent features (default: 12)
    pub latent_features: usize,
    /// Gradient step size (default: 0.0001)
    pub learning_rate: f64,
    /// Number of full passes over the observed ratings (default: 100)
    pub iterations: usize,
}

impl Default for FunkSvdConfig {
    fn default() -> Self {
        Self {
            latent_features: 12,
            learning_rate: 0.0001,
            iterations: 100,
        }
    }
}

impl FunkSvdConfig {
    fn validate(&self) -> Result<()> {
        if self.latent_features < 1 {
            return Err(RecommendError::InvalidHyperparameter {
                name: "latent_features",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(RecommendError::InvalidHyperparameter {
                name: "learning_rate",
                reason: format!("must be positive and finite, got {}", self.learning_rate),
            });
        }
        if self.iterations < 1 {
            return Err(RecommendError::InvalidHyperparameter {
                name: "iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Train a [`FactorModel`] with thread-local randomness.
///
/// See [`train_with_rng`] for the seeded variant and the error
/// contract.
pub fn train(ratings: &RatingsMatrix, config: &FunkSvdConfig) -> Result<FactorModel> {
    train_with_rng(ratings, config, &mut rand::thread_rng())
}

/// Train a [`FactorModel`] using the supplied random source.
///
/// Factor matrices are initialized uniformly in `[0, 1)`, then updated
/// over exactly `config.iterations` passes across the observed entries
/// in ascending (user, item) order. Identical ratings, config, and rng
/// state therefore yield an identical model. Per-pass mean squared
/// error is emitted at debug level.
///
/// # Errors
/// - [`RecommendError::InvalidHyperparameter`] for a bad config.
/// - [`RecommendError::EmptyRatings`] when no rating is observed.
/// - [`RecommendError::NonFiniteFactors`] when training diverged into
///   NaN or infinite factors.
pub fn train_with_rng<R>(
    ratings: &RatingsMatrix,
    config: &FunkSvdConfig,
    rng: &mut R,
) -> Result<FactorModel>
where
    R: Rng + ?Sized,
{
    config.validate()?;

    let observed = ratings.observed();
    if observed.is_empty() {
        return Err(RecommendError::EmptyRatings);
    }

    // Uniform random initialization in [0, 1).
    let n_features = config.latent_features;
    let mut user_factors = Array2::from_shape_fn((ratings.n_users(), n_features), |_| {
        rng.sample::<f64, _>(Standard)
    });
    let mut item_factors = Array2::from_shape_fn((n_features, ratings.n_items()), |_| {
        rng.sample::<f64, _>(Standard)
    });

    let observed_count = observed.len() as f64;
    for iteration in 1..=config.iterations {
        let mut sse = 0.0;

        for &(user, item, rating) in &observed {
            let mut predicted = 0.0;
            for f in 0..n_features {
                predicted += user_factors[[user, f]] * item_factors[[f, item]];
            }
            let residual = rating - predicted;
            sse += residual * residual;

            let step = config.learning_rate * 2.0 * residual;
            for f in 0..n_features {
                let u = user_factors[[user, f]];
                let m = item_factors[[f, item]];
                user_factors[[user, f]] = u + step * m;
                item_factors[[f, item]] = m + step * u;
            }
        }

        debug!(
            iteration,
            mse = sse / observed_count,
            "funk-svd pass complete"
        );
    }

    if user_factors
        .iter()
        .chain(item_factors.iter())
        .any(|v| !v.is_finite())
    {
        return Err(RecommendError::NonFiniteFactors);
    }

    Ok(FactorModel::from_factors(user_factors, item_factors))
}
