//! Coefficient factories, one per discriminant sign.
//!
//! Each factory draws a handful of small integers from fixed distributions and
//! derives `(a, b, c)` so that the sign of `b² - 4ac` is guaranteed by the
//! algebra, not checked after the fact. The draw domains are what keep
//! `a ≠ 0` and every square-root operand positive.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::model::{Exercise, ExerciseKind, Solutions};
use crate::sampler::{nonzero_range, DiscreteDistribution};

/// Weights for the zero-case divisor `ℓ ∈ {1..9}`, by position.
pub const ZERO_CASE_ELL_WEIGHTS: [f64; 9] = [
    1.0 / 2.0,
    1.0 / 36.0,
    1.0 / 36.0,
    1.0 / 6.0,
    1.0 / 36.0,
    1.0 / 36.0,
    1.0 / 36.0,
    1.0 / 36.0,
    1.0 / 6.0,
];

/// Probability of the divisor `1` in the positive case's rational branch;
/// the other 17 nonzero values share the rest evenly.
pub const RATIONAL_DIVISOR_ONE_WEIGHT: f64 = 0.5;

/// A factory's output: the exercise and the roots it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Construction {
    pub exercise: Exercise,
    pub roots: Solutions,
}

/// An algorithm that builds exercises of one discriminant sign.
pub trait CoefficientFactory {
    /// Draw one exercise together with its generating roots.
    fn construct<R: Rng + ?Sized>(&self, rng: &mut R) -> Construction;

    /// Draw one exercise.
    fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Exercise {
        self.construct(rng).exercise
    }
}

/// How the irrational branch of the positive case reports its coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositiveForm {
    /// `a = 1, b = -(x1 + x2), c = x1·x2`.
    #[default]
    Monic,
    /// Cleared denominators: `a = l², b = 2hl, c = h² - p·e²`.
    Integer,
}

// ---------------------------------------------------------------------------
// Δ < 0
// ---------------------------------------------------------------------------

/// Builds equations with no real root.
///
/// `a, b` come from `{-9..9}\{0}` and an offset `e` from `{1, 2, 3}`. With
/// `c = (b² + e) / 4a` the discriminant collapses to `-e`.
#[derive(Debug, Clone)]
pub struct NegativeDiscriminant {
    coefficients: DiscreteDistribution<i32>,
    offsets: DiscreteDistribution<i32>,
}

impl NegativeDiscriminant {
    pub fn new() -> Result<Self, GenerationError> {
        Ok(Self {
            coefficients: DiscreteDistribution::uniform(nonzero_range(-9, 9))?,
            offsets: DiscreteDistribution::uniform(vec![1, 2, 3])?,
        })
    }
}

impl CoefficientFactory for NegativeDiscriminant {
    fn construct<R: Rng + ?Sized>(&self, rng: &mut R) -> Construction {
        let a = f64::from(self.coefficients.sample(rng));
        let b = f64::from(self.coefficients.sample(rng));
        let e = f64::from(self.offsets.sample(rng));

        // c sits on the far side of b²/4a, whatever the sign of a.
        let mut c = (b * b + e) / (4.0 * a.abs());
        if a < 0.0 {
            c = -c;
        }

        Construction {
            exercise: Exercise::new(a, b, c, ExerciseKind::Negative),
            roots: Solutions::None,
        }
    }
}

// ---------------------------------------------------------------------------
// Δ = 0
// ---------------------------------------------------------------------------

/// Builds monic equations with one repeated root `x₀ = e / √ℓ`.
#[derive(Debug, Clone)]
pub struct ZeroDiscriminant {
    numerators: DiscreteDistribution<i32>,
    divisors: DiscreteDistribution<i32>,
}

impl ZeroDiscriminant {
    pub fn new() -> Result<Self, GenerationError> {
        Ok(Self {
            numerators: DiscreteDistribution::uniform(nonzero_range(-9, 9))?,
            divisors: DiscreteDistribution::new((1..=9).collect(), &ZERO_CASE_ELL_WEIGHTS)?,
        })
    }
}

impl CoefficientFactory for ZeroDiscriminant {
    fn construct<R: Rng + ?Sized>(&self, rng: &mut R) -> Construction {
        let e = f64::from(self.numerators.sample(rng));
        let ell = f64::from(self.divisors.sample(rng));
        let x0 = e / ell.sqrt();

        Construction {
            exercise: Exercise::new(1.0, -2.0 * x0, x0 * x0, ExerciseKind::Zero),
            roots: Solutions::One(x0),
        }
    }
}

// ---------------------------------------------------------------------------
// Δ > 0
// ---------------------------------------------------------------------------

/// Builds equations with two distinct real roots.
///
/// A fair coin picks between rational roots `h/ℓ, k/ℓ` and irrational roots
/// `(-h ∓ e√p) / l`.
#[derive(Debug, Clone)]
pub struct PositiveDiscriminant {
    branch: DiscreteDistribution<u8>,
    coefficients: DiscreteDistribution<i32>,
    rational_divisors: DiscreteDistribution<i32>,
    irrational_divisors: DiscreteDistribution<i32>,
    digits: DiscreteDistribution<i32>,
    form: PositiveForm,
}

impl PositiveDiscriminant {
    pub fn new(form: PositiveForm) -> Result<Self, GenerationError> {
        let nonzero = nonzero_range(-9, 9);
        let others = (1.0 - RATIONAL_DIVISOR_ONE_WEIGHT) / (nonzero.len() - 1) as f64;
        let divisor_weights: Vec<f64> = nonzero
            .iter()
            .map(|&v| if v == 1 { RATIONAL_DIVISOR_ONE_WEIGHT } else { others })
            .collect();

        Ok(Self {
            branch: DiscreteDistribution::uniform(vec![1, 2])?,
            coefficients: DiscreteDistribution::uniform(nonzero.clone())?,
            rational_divisors: DiscreteDistribution::new(nonzero, &divisor_weights)?,
            irrational_divisors: DiscreteDistribution::uniform(nonzero_range(-3, 3))?,
            digits: DiscreteDistribution::uniform((1..=9).collect())?,
            form,
        })
    }

    fn rational<R: Rng + ?Sized>(&self, rng: &mut R) -> Construction {
        let h = self.coefficients.sample(rng);
        // Equal numerators would give a double root.
        let k = loop {
            let k = self.coefficients.sample(rng);
            if k != h {
                break k;
            }
        };
        let ell = f64::from(self.rational_divisors.sample(rng));

        let x1 = f64::from(h) / ell;
        let x2 = f64::from(k) / ell;
        Construction {
            exercise: monic(x1, x2),
            roots: Solutions::Two(x1, x2),
        }
    }

    fn irrational<R: Rng + ?Sized>(&self, rng: &mut R) -> Construction {
        let h = f64::from(self.coefficients.sample(rng));
        let l = f64::from(self.irrational_divisors.sample(rng));
        let e = f64::from(self.digits.sample(rng));
        let p = f64::from(self.digits.sample(rng));

        let spread = e * p.sqrt();
        let x1 = (-h - spread) / l;
        let x2 = (-h + spread) / l;

        let exercise = match self.form {
            PositiveForm::Monic => monic(x1, x2),
            PositiveForm::Integer => Exercise::new(
                l * l,
                2.0 * h * l,
                h * h - p * e * e,
                ExerciseKind::Positive,
            ),
        };
        Construction {
            exercise,
            roots: Solutions::Two(x1, x2),
        }
    }
}

impl CoefficientFactory for PositiveDiscriminant {
    fn construct<R: Rng + ?Sized>(&self, rng: &mut R) -> Construction {
        match self.branch.sample(rng) {
            1 => self.rational(rng),
            _ => self.irrational(rng),
        }
    }
}

fn monic(x1: f64, x2: f64) -> Exercise {
    Exercise::new(1.0, -(x1 + x2), x1 * x2, ExerciseKind::Positive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DRAWS: usize = 5_000;

    fn close(x: f64, y: f64) -> bool {
        (x - y).abs() < 1e-9 * (1.0 + x.abs().max(y.abs()))
    }

    fn quadratic_roots(ex: &Exercise) -> (f64, f64) {
        let sq = ex.delta.sqrt();
        let r1 = (-ex.b - sq) / (2.0 * ex.a);
        let r2 = (-ex.b + sq) / (2.0 * ex.a);
        (r1.min(r2), r1.max(r2))
    }

    #[test]
    fn negative_case_always_below_zero() {
        let factory = NegativeDiscriminant::new().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..DRAWS {
            let c = factory.construct(&mut rng);
            let ex = c.exercise;
            assert_eq!(ex.kind, ExerciseKind::Negative);
            assert_ne!(ex.a, 0.0);
            assert!(ex.delta < 0.0, "delta {} for {:?}", ex.delta, ex);
            // delta = -e with e in {1, 2, 3}
            assert!(ex.delta > -3.0 - 1e-9 && ex.delta < -1.0 + 1e-9);
            assert_eq!(c.roots, Solutions::None);
        }
    }

    #[test]
    fn negative_case_keeps_c_sign_with_a() {
        let factory = NegativeDiscriminant::new().unwrap();
        let mut rng = StdRng::seed_from_u64(12);
        for _ in 0..DRAWS {
            let ex = factory.build(&mut rng);
            assert_eq!(ex.a.signum(), ex.c.signum());
        }
    }

    #[test]
    fn zero_case_has_vanishing_delta_and_recovers_x0() {
        let factory = ZeroDiscriminant::new().unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..DRAWS {
            let c = factory.construct(&mut rng);
            let ex = c.exercise;
            assert_eq!(ex.a, 1.0);
            assert!(ex.delta.abs() < 1e-9, "delta {} for {:?}", ex.delta, ex);
            let Solutions::One(x0) = c.roots else {
                panic!("zero case must record one root, got {:?}", c.roots);
            };
            assert!(close(-ex.b / (2.0 * ex.a), x0));
        }
    }

    #[test]
    fn positive_case_roots_match_quadratic_formula() {
        for form in [PositiveForm::Monic, PositiveForm::Integer] {
            let factory = PositiveDiscriminant::new(form).unwrap();
            let mut rng = StdRng::seed_from_u64(31);
            for _ in 0..DRAWS {
                let c = factory.construct(&mut rng);
                let ex = c.exercise;
                assert!(ex.delta > 0.0, "delta {} for {:?}", ex.delta, ex);
                assert_ne!(ex.a, 0.0);

                let Solutions::Two(x1, x2) = c.roots else {
                    panic!("positive case must record two roots");
                };
                let (lo, hi) = quadratic_roots(&ex);
                assert!(close(lo, x1.min(x2)), "{lo} vs {x1}/{x2} for {ex:?}");
                assert!(close(hi, x1.max(x2)), "{hi} vs {x1}/{x2} for {ex:?}");
            }
        }
    }

    #[test]
    fn positive_monic_form_is_always_monic() {
        let factory = PositiveDiscriminant::new(PositiveForm::Monic).unwrap();
        let mut rng = StdRng::seed_from_u64(32);
        assert!((0..DRAWS).all(|_| factory.build(&mut rng).a == 1.0));
    }

    #[test]
    fn positive_integer_form_has_square_leading_coefficient() {
        let factory = PositiveDiscriminant::new(PositiveForm::Integer).unwrap();
        let mut rng = StdRng::seed_from_u64(33);
        let mut saw_non_monic = false;
        for _ in 0..DRAWS {
            let ex = factory.build(&mut rng);
            assert!([1.0, 4.0, 9.0].contains(&ex.a), "unexpected a = {}", ex.a);
            saw_non_monic |= ex.a != 1.0;
        }
        assert!(saw_non_monic);
    }

    #[test]
    fn rational_divisor_favours_one() {
        let factory = PositiveDiscriminant::new(PositiveForm::Monic).unwrap();
        let mut rng = StdRng::seed_from_u64(34);
        let ones = (0..10_000)
            .filter(|_| factory.rational_divisors.sample(&mut rng) == 1)
            .count();
        assert!((4_700..5_300).contains(&ones), "divisor 1 drawn {ones} times");
    }
}
