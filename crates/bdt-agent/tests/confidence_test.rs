//! Confidence metrics at their anchor points and in between.

use bdt_agent::{ConfidenceModel, Posterior};

fn uniform() -> Posterior {
    Posterior::new("a", 0.5, "b", 0.5).unwrap()
}

fn delta() -> Posterior {
    Posterior::new("a", 1.0, "b", 0.0).unwrap()
}

#[test]
fn uniform_posterior_scores_zero() {
    for model in ConfidenceModel::ALL {
        assert_eq!(model.score(&uniform()), 0.0, "{model}");
    }
}

#[test]
fn delta_posterior_scores_one() {
    for model in ConfidenceModel::ALL {
        assert_eq!(model.score(&delta()), 1.0, "{model}");
    }
    let flipped = Posterior::new("a", 0.0, "b", 1.0).unwrap();
    for model in ConfidenceModel::ALL {
        assert_eq!(model.score(&flipped), 1.0, "{model}");
    }
}

#[test]
fn map_and_diff_agree_on_pairs() {
    let post = Posterior::new("a", 0.8, "b", 0.2).unwrap();
    let map = ConfidenceModel::Map.score(&post);
    let diff = ConfidenceModel::Diff.score(&post);
    assert!((map - 0.6).abs() < 1e-12);
    assert!((diff - 0.6).abs() < 1e-12);
}

#[test]
fn entropy_is_below_linear_metrics_off_the_anchors() {
    let post = Posterior::new("a", 0.8, "b", 0.2).unwrap();
    let entropy = ConfidenceModel::Entropy.score(&post);
    // 1 − H(0.8) / ln 2 ≈ 0.278072
    assert!((entropy - 0.278_071_905).abs() < 1e-8);
    assert!(entropy < ConfidenceModel::Map.score(&post));
}

#[test]
fn symmetric_in_pair_order() {
    let ab = Posterior::new("a", 0.35, "b", 0.65).unwrap();
    let ba = Posterior::new("b", 0.65, "a", 0.35).unwrap();
    for model in ConfidenceModel::ALL {
        assert!((model.score(&ab) - model.score(&ba)).abs() < 1e-15);
    }
}

#[test]
fn serde_uses_lowercase_names() {
    let json = serde_json::to_string(&ConfidenceModel::Entropy).unwrap();
    assert_eq!(json, "\"entropy\"");
    let model: ConfidenceModel = serde_json::from_str("\"diff\"").unwrap();
    assert_eq!(model, ConfidenceModel::Diff);
    assert!(serde_json::from_str::<ConfidenceModel>("\"median\"").is_err());
}
