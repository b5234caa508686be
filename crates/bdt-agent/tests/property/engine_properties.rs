//! Property tests for the decision pipeline.

use bdt_agent::confidence::{diff_confidence, entropy_confidence, map_confidence};
use bdt_agent::gaussian::gaussian_cdf;
use bdt_agent::tempering::temper;
use bdt_agent::{ConfidenceModel, DecisionAgent, Posterior};
use bdt_core::config::AgentConfig;
use bdt_core::types::{CategoryId, CategoryRegistry, RewardTable};
use proptest::prelude::*;

fn arb_model() -> impl Strategy<Value = ConfidenceModel> {
    prop_oneof![
        Just(ConfidenceModel::Map),
        Just(ConfidenceModel::Diff),
        Just(ConfidenceModel::Entropy),
    ]
}

proptest! {
    #[test]
    fn cdf_is_monotone_in_threshold(
        mean in -5.0f64..5.0,
        sd in 0.1f64..5.0,
        t in -10.0f64..10.0,
        step in 1e-3f64..5.0,
    ) {
        let lo = gaussian_cdf(t, mean, sd).unwrap();
        let hi = gaussian_cdf(t + step, mean, sd).unwrap();
        prop_assert!(hi >= lo);
        prop_assert!((0.0..=1.0).contains(&lo));
        prop_assert!((0.0..=1.0).contains(&hi));
    }

    #[test]
    fn wider_spread_lowers_success_above_the_mean(
        mean in -5.0f64..5.0,
        gap in 0.0f64..5.0,
        sd in 0.1f64..3.0,
        extra in 1e-2f64..3.0,
    ) {
        let t = mean + gap;
        let narrow = gaussian_cdf(t, mean, sd).unwrap();
        let wide = gaussian_cdf(t, mean, sd + extra).unwrap();
        prop_assert!(wide <= narrow + 1e-15);
    }

    #[test]
    fn cdf_is_half_at_the_mean(mean in -100.0f64..100.0, sd in 1e-3f64..100.0) {
        prop_assert_eq!(gaussian_cdf(mean, mean, sd).unwrap(), 0.5);
    }

    #[test]
    fn temper_identity_and_fixed_points(p in 0.0f64..=1.0, alpha in 1e-3f64..20.0) {
        prop_assert_eq!(temper(p, 1.0), p);
        prop_assert_eq!(temper(0.0, alpha), 0.0);
        prop_assert_eq!(temper(1.0, alpha), 1.0);
        let t = temper(p, alpha);
        prop_assert!((0.0..=1.0).contains(&t));
        // Tempering never crosses 0.5.
        prop_assert!((t - 0.5) * (p - 0.5) >= 0.0);
    }

    #[test]
    fn posterior_sums_to_one(
        mean_a in -3.0f64..3.0,
        mean_b in -3.0f64..3.0,
        sd_a in 0.1f64..3.0,
        sd_b in 0.1f64..3.0,
        threshold in -3.0f64..3.0,
        alpha in 0.1f64..5.0,
        beta in 0.0f64..3.0,
        rs in 0.0f64..10.0,
        rf in 0.0f64..10.0,
    ) {
        let mut registry = CategoryRegistry::new();
        registry.register("a", mean_a, sd_a).unwrap();
        registry.register("b", mean_b, sd_b).unwrap();
        let rewards: RewardTable = [("a", (rs, rf))].into_iter().collect();
        let config = AgentConfig {
            threshold: Some(threshold),
            alpha: Some(alpha),
            beta: Some(beta),
            ..Default::default()
        };
        let agent = DecisionAgent::new(registry, rewards, &config).unwrap();
        let pair: Vec<CategoryId> = vec!["a".into(), "b".into()];
        let post = agent.posterior(&pair).unwrap();
        prop_assert!((post.sum() - 1.0).abs() < 1e-9);
        for p in post.probabilities() {
            prop_assert!(p >= 0.0);
        }
    }

    #[test]
    fn confidence_stays_in_unit_interval(p in 0.0f64..=1.0, model in arb_model()) {
        let post = Posterior::new("a", p, "b", 1.0 - p).unwrap();
        let c = model.score(&post);
        prop_assert!(c >= -1e-12 && c <= 1.0 + 1e-12, "{} gave {}", model, c);
    }

    #[test]
    fn map_equals_diff_for_pairs(p in 0.0f64..=1.0) {
        let probs = [p, 1.0 - p];
        prop_assert!((map_confidence(&probs) - diff_confidence(&probs)).abs() < 1e-12);
        prop_assert!(entropy_confidence(&probs) <= map_confidence(&probs) + 1e-12);
    }
}
