//! End-to-end tests: raw rating triples through training to
//! recommendations.

use ndarray::array;
use rand::SeedableRng;
use rand::rngs::StdRng;
use yarra_recommend::{
    FunkSvdConfig, RatingsMatrix, RecommendError, similar_items, train_with_rng,
};

fn movie_ratings() -> RatingsMatrix {
    RatingsMatrix::from_triples([
        (8, 2844, 4.0),
        (8, 1365, 5.0),
        (22, 2844, 2.0),
        (22, 4100, 5.0),
        (31, 1365, 3.0),
        (31, 4100, 4.0),
        (31, 2844, 1.0),
    ])
}

#[test]
fn test_train_predict_recommend_round() {
    let ratings = movie_ratings();
    let config = FunkSvdConfig {
        latent_features: 2,
        learning_rate: 0.005,
        iterations: 50,
    };
    let model = train_with_rng(&ratings, &config, &mut StdRng::seed_from_u64(42)).unwrap();

    assert_eq!(model.n_users(), 3);
    assert_eq!(model.n_items(), 3);

    // Raw ids translate to model indices through the ratings matrix.
    let user = ratings.user_index(8).unwrap();
    let item = ratings.item_index(2844).unwrap();
    let predicted = model.predict(user, item).unwrap();
    assert!(predicted.is_finite());

    // Exactly min(top_n, n_items) recommendations, all valid indices.
    let recs = model.recommend(user, 2).unwrap();
    assert_eq!(recs.len(), 2);
    assert!(recs.iter().all(|&i| i < model.n_items()));

    let all = model.recommend(user, 10).unwrap();
    assert_eq!(all.len(), 3);

    // Descending predicted score along the ranking.
    let scores: Vec<f64> = all.iter().map(|&i| model.predict(user, i).unwrap()).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn test_unknown_user_is_callers_problem() {
    let ratings = movie_ratings();
    let config = FunkSvdConfig {
        latent_features: 2,
        learning_rate: 0.005,
        iterations: 10,
    };
    let model = train_with_rng(&ratings, &config, &mut StdRng::seed_from_u64(42)).unwrap();

    // A user never seen in training gets an error, not a fallback.
    assert_eq!(
        model.recommend(99, 5).unwrap_err(),
        RecommendError::UnknownUser(99)
    );
}

#[test]
fn test_longer_training_fits_the_data_better() {
    let ratings = movie_ratings();
    let short = FunkSvdConfig {
        latent_features: 2,
        learning_rate: 0.005,
        iterations: 1,
    };
    let long = FunkSvdConfig {
        iterations: 200,
        ..short
    };

    let sse = |config: &FunkSvdConfig| {
        let model = train_with_rng(&ratings, config, &mut StdRng::seed_from_u64(11)).unwrap();
        ratings
            .observed()
            .iter()
            .map(|&(user, item, rating)| {
                let residual = rating - model.predict(user, item).unwrap();
                residual * residual
            })
            .sum::<f64>()
    };

    assert!(sse(&long) < sse(&short));
}

#[test]
fn test_content_path_needs_no_training() {
    // Genre rows: items 0 and 2 are the same genre mix.
    let genres = array![
        [1.0, 0.0, 1.0],
        [0.0, 1.0, 0.0],
        [1.0, 0.0, 1.0],
    ];
    assert_eq!(similar_items(&genres, 0, 5).unwrap(), vec![0, 2]);
    assert_eq!(similar_items(&genres, 1, 5).unwrap(), vec![1]);
}
