use super::traits::ConfigSection;
use crate::error::CodonsearchError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Convergence tolerance: the run stops once accuracy >= 1 - epsilon
    pub epsilon: f64,
    pub population_size: usize,
    /// Per-codon replacement probability
    pub mutation_rate: f64,
    pub max_generations: usize,
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.0,
            population_size: 200,
            mutation_rate: 0.01,
            max_generations: 10_000,
            seed: None,
        }
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<(), CodonsearchError> {
        if self.population_size < 1 {
            return Err(CodonsearchError::Configuration(
                "Population size must be at least 1".to_string()
            ));
        }
        if self.max_generations < 1 {
            return Err(CodonsearchError::Configuration(
                "Max generations must be at least 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(CodonsearchError::Configuration(
                "Mutation rate must be between 0 and 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(CodonsearchError::Configuration(
                "Epsilon must be between 0 and 1".to_string()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SearchConfig::default();
        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 10_000);
        assert_eq!(config.mutation_rate, 0.01);
        assert_eq!(config.epsilon, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let mut config = SearchConfig::default();
        config.mutation_rate = 1.5;
        assert!(config.validate().is_err());

        let mut config = SearchConfig::default();
        config.epsilon = -0.1;
        assert!(config.validate().is_err());

        let mut config = SearchConfig::default();
        config.population_size = 0;
        assert!(config.validate().is_err());

        let mut config = SearchConfig::default();
        config.max_generations = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: SearchConfig = toml::from_str("population_size = 50\nseed = 7").unwrap();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_generations, 10_000);
    }
}
