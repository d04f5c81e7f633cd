//! The `mesim init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("mesim.toml").exists() {
        println!("mesim.toml already exists, skipping.");
    } else {
        std::fs::write("mesim.toml", SAMPLE_CONFIG)?;
        println!("Created mesim.toml");
    }

    println!("\nNext steps:");
    println!("  1. Adjust the session length and weights in mesim.toml");
    println!("  2. Run: mesim generate --answers");
    println!("  3. Run: mesim practice");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mesim configuration

# Exercises per practice session
exercises = 5

# Uncomment for a reproducible sequence of exercises
# seed = 42

# Where session statistics are kept (default: ~/.mesim_stats.json)
# stats_path = "/home/me/.mesim_stats.json"

[generator]
# "monic" (a = 1) or "integer" (cleared denominators) for irrational roots
positive_form = "monic"

# Probability of each discriminant sign; must sum to 1
[generator.kind_weights]
negative = 0.2
zero = 0.4
positive = 0.4
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MesimConfig;

    #[test]
    fn sample_config_parses_to_defaults() {
        let config: MesimConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        let defaults = MesimConfig::default();
        assert_eq!(config.exercises, defaults.exercises);
        assert_eq!(config.generator, defaults.generator);
    }
}
