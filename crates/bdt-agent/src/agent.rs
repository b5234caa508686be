//! DecisionAgent: the engine facade.

use bdt_core::config::{AgentConfig, BdtConfig};
use bdt_core::errors::AgentResult;
use bdt_core::types::{CategoryId, CategoryRegistry, RewardTable};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, trace};

use crate::breakdown::{CategoryTerms, Decision, DecisionBreakdown};
use crate::choice::ChoicePolicy;
use crate::confidence::ConfidenceModel;
use crate::gaussian;
use crate::posterior::{self, Posterior};
use crate::utility::{self, UtilityParams, UtilityTerms};

/// Chooses between two Gaussian categories by normalized expected utility.
///
/// Immutable after construction apart from the random source, which is
/// only drawn from by [`choose`](Self::choose) under the soft policy.
/// `choose` takes `&mut self`, so calls sharing one agent are serialized
/// by the borrow checker; independent agents can run in parallel.
pub struct DecisionAgent<R = StdRng> {
    categories: CategoryRegistry,
    rewards: RewardTable,
    params: UtilityParams,
    confidence_model: ConfidenceModel,
    policy: ChoicePolicy,
    rng: R,
}

impl DecisionAgent<StdRng> {
    /// Build an agent. The random source is seeded from `config.seed`
    /// when set, from OS entropy otherwise.
    pub fn new(
        categories: CategoryRegistry,
        rewards: RewardTable,
        config: &AgentConfig,
    ) -> AgentResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(categories, rewards, config, rng)
    }

    /// Validate a full config document and build the agent it describes.
    ///
    /// Categories are checked first so a bad `std_dev` or `mean` is an
    /// `InvalidParameter`, the same as through `CategoryRegistry::register`.
    pub fn from_config(config: &BdtConfig) -> AgentResult<Self> {
        let categories = config.category_registry()?;
        config.validate()?;
        Self::new(categories, config.reward_table(), &config.agent)
    }
}

impl<R: RngCore> DecisionAgent<R> {
    /// Build an agent around an injected random source.
    ///
    /// Fails with `InvalidConfiguration` if the confidence model name
    /// is not one of `map`, `diff`, `entropy`.
    pub fn with_rng(
        categories: CategoryRegistry,
        rewards: RewardTable,
        config: &AgentConfig,
        rng: R,
    ) -> AgentResult<Self> {
        let confidence_model: ConfidenceModel = config.effective_confidence_model().parse()?;
        let params = UtilityParams {
            threshold: config.effective_threshold(),
            alpha: config.effective_alpha(),
            beta: config.effective_beta(),
        };
        let policy = ChoicePolicy::from_soft(config.effective_soft());

        debug!(
            categories = categories.len(),
            rewards = rewards.len(),
            threshold = params.threshold,
            alpha = params.alpha,
            beta = params.beta,
            confidence_model = %confidence_model,
            soft = policy.is_soft(),
            "decision agent ready"
        );

        Ok(Self {
            categories,
            rewards,
            params,
            confidence_model,
            policy,
            rng,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.params.threshold
    }

    pub fn beta(&self) -> f64 {
        self.params.beta
    }

    pub fn alpha(&self) -> f64 {
        self.params.alpha
    }

    pub fn confidence_model(&self) -> ConfidenceModel {
        self.confidence_model
    }

    pub fn policy(&self) -> ChoicePolicy {
        self.policy
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn rewards(&self) -> &RewardTable {
        &self.rewards
    }

    /// Utility terms for one category under this agent's parameters.
    pub fn utility_terms(&self, id: &CategoryId) -> AgentResult<UtilityTerms> {
        let category = self.categories.get(id)?;
        let reward = self.rewards.get_or_default(id);
        let terms = utility::evaluate(category, reward, &self.params)?;
        trace!(
            category_id = %id,
            raw_success = terms.raw_success,
            tempered_success = terms.tempered_success,
            utility = terms.utility,
            "expected utility"
        );
        Ok(terms)
    }

    /// Reward-weighted expected utility of `id`.
    pub fn expected_utility(&self, id: &CategoryId) -> AgentResult<f64> {
        self.utility_terms(id).map(|t| t.utility)
    }

    /// Untempered, reward-free success probability of each id in `pair`.
    pub fn raw_success(&self, pair: &[CategoryId]) -> AgentResult<[(CategoryId, f64); 2]> {
        let (a, b) = posterior::validate_pair(pair)?;
        let raw = |id: &CategoryId| -> AgentResult<f64> {
            gaussian::success_probability(self.categories.get(id)?, self.params.threshold)
        };
        Ok([(a.clone(), raw(a)?), (b.clone(), raw(b)?)])
    }

    /// Normalized utilities over `pair`.
    pub fn posterior(&self, pair: &[CategoryId]) -> AgentResult<Posterior> {
        let (a, b) = posterior::validate_pair(pair)?;
        let u_a = self.expected_utility(a)?;
        let u_b = self.expected_utility(b)?;
        Ok(Posterior::normalize((a.clone(), u_a), (b.clone(), u_b)))
    }

    /// Confidence of `posterior` under the configured model.
    pub fn confidence(&self, posterior: &Posterior) -> f64 {
        self.confidence_model.score(posterior)
    }

    /// Every intermediate value for `pair`, without drawing a choice.
    pub fn breakdown(&self, pair: &[CategoryId]) -> AgentResult<DecisionBreakdown> {
        let (a, b) = posterior::validate_pair(pair)?;
        let t_a = self.utility_terms(a)?;
        let t_b = self.utility_terms(b)?;
        let posterior = Posterior::normalize((a.clone(), t_a.utility), (b.clone(), t_b.utility));
        let confidence = self.confidence(&posterior);
        Ok(DecisionBreakdown {
            categories: [
                CategoryTerms {
                    id: a.clone(),
                    terms: t_a,
                },
                CategoryTerms {
                    id: b.clone(),
                    terms: t_b,
                },
            ],
            posterior,
            confidence,
        })
    }

    /// Decide between the two ids of `pair`.
    ///
    /// Nothing is drawn from the random source unless the pair is valid
    /// and the policy is soft.
    pub fn choose(&mut self, pair: &[CategoryId]) -> AgentResult<Decision> {
        let posterior = self.posterior(pair)?;
        let choice = self.policy.select(&posterior, &mut self.rng);
        let confidence = self.confidence(&posterior);

        debug!(
            choice = %choice,
            confidence,
            posterior = ?posterior.probabilities(),
            soft = self.policy.is_soft(),
            "decision"
        );

        Ok(Decision {
            choice,
            confidence,
            posterior,
        })
    }
}

impl<R> std::fmt::Debug for DecisionAgent<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionAgent")
            .field("categories", &self.categories.len())
            .field("rewards", &self.rewards.len())
            .field("params", &self.params)
            .field("confidence_model", &self.confidence_model)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
