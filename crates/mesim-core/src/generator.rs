//! Exercise generator.
//!
//! Draws an exercise kind from the configured weights and delegates to the
//! matching coefficient factory. The generator holds no mutable state; the
//! random source is passed in on every call.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::factory::{
    CoefficientFactory, NegativeDiscriminant, PositiveDiscriminant, PositiveForm,
    ZeroDiscriminant,
};
use crate::model::{Exercise, ExerciseKind};
use crate::sampler::DiscreteDistribution;

/// Probability of drawing each exercise kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KindWeights {
    pub negative: f64,
    pub zero: f64,
    pub positive: f64,
}

impl Default for KindWeights {
    fn default() -> Self {
        Self {
            negative: 0.2,
            zero: 0.4,
            positive: 0.4,
        }
    }
}

impl KindWeights {
    /// One third each.
    pub fn uniform() -> Self {
        Self {
            negative: 1.0 / 3.0,
            zero: 1.0 / 3.0,
            positive: 1.0 / 3.0,
        }
    }

    /// Weights in [`ExerciseKind::ALL`] order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.negative, self.zero, self.positive]
    }
}

/// Tunable generation policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorPolicy {
    #[serde(default)]
    pub kind_weights: KindWeights,
    #[serde(default)]
    pub positive_form: PositiveForm,
}

impl GeneratorPolicy {
    /// Check that the kind weights form a probability vector.
    pub fn validate(&self) -> Result<(), GenerationError> {
        let weights = self.kind_weights.as_array();
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(GenerationError::InvalidPolicy(format!(
                "kind weight {w} is not a non-negative number"
            )));
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(GenerationError::InvalidPolicy(format!(
                "kind weights sum to {sum}, expected 1"
            )));
        }
        Ok(())
    }
}

/// Draws complete exercises.
#[derive(Debug, Clone)]
pub struct ExerciseGenerator {
    kinds: DiscreteDistribution<ExerciseKind>,
    negative: NegativeDiscriminant,
    zero: ZeroDiscriminant,
    positive: PositiveDiscriminant,
}

impl ExerciseGenerator {
    pub fn new(policy: GeneratorPolicy) -> Result<Self, GenerationError> {
        policy.validate()?;
        Ok(Self {
            kinds: DiscreteDistribution::new(
                ExerciseKind::ALL.to_vec(),
                &policy.kind_weights.as_array(),
            )?,
            negative: NegativeDiscriminant::new()?,
            zero: ZeroDiscriminant::new()?,
            positive: PositiveDiscriminant::new(policy.positive_form)?,
        })
    }

    /// Generator with the default 1/5, 2/5, 2/5 split and monic output.
    pub fn with_default_policy() -> Result<Self, GenerationError> {
        Self::new(GeneratorPolicy::default())
    }

    /// Draw the kind, then build an exercise of that kind.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Exercise {
        let kind = self.kinds.sample(rng);
        let exercise = self.generate_kind(kind, rng);
        tracing::debug!(
            kind = %kind,
            a = exercise.a,
            b = exercise.b,
            c = exercise.c,
            delta = exercise.delta,
            "generated exercise"
        );
        exercise
    }

    /// Build an exercise of a fixed kind.
    pub fn generate_kind<R: Rng + ?Sized>(&self, kind: ExerciseKind, rng: &mut R) -> Exercise {
        match kind {
            ExerciseKind::Negative => self.negative.build(rng),
            ExerciseKind::Zero => self.zero.build(rng),
            ExerciseKind::Positive => self.positive.build(rng),
        }
    }

    /// Draw `n` exercises in sequence.
    pub fn generate_batch<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Exercise> {
        (0..n).map(|_| self.generate(rng)).collect()
    }
}
