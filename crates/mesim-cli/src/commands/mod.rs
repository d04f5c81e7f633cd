//! Subcommand implementations.

use rand::rngs::StdRng;
use rand::SeedableRng;

use mesim_core::format::round4;
use mesim_core::Solutions;

pub mod generate;
pub mod init;
pub mod practice;
pub mod stats;

/// Seeded generator when a seed is given, OS entropy otherwise.
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Human-readable root list, rounded for display.
pub(crate) fn describe_solutions(solutions: &Solutions) -> String {
    match *solutions {
        Solutions::None => "no real solution".to_string(),
        Solutions::One(x0) => format!("x₀ = {}", round4(x0)),
        Solutions::Two(x1, x2) => format!("x₁ = {}, x₂ = {}", round4(x1), round4(x2)),
    }
}
