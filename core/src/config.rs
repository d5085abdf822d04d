//! Tournament configuration.
//!
//! Loaded from a JSON file by the CLI; every field is optional and falls back
//! to its default. In tests, use TourneyConfig::default_test().

use crate::error::{TourneyError, TourneyResult};
use serde::{Deserialize, Serialize};

/// Prime bucket count for the team registry.
pub const DEFAULT_BUCKET_COUNT: usize = 101;

/// Rating added to every match winner, BYE winners included.
pub const DEFAULT_RATING_BONUS: f64 = 1.5;

pub const DEFAULT_GRAPH_CAPACITY: usize = 10;

pub const DEFAULT_SAVE_PATH: &str = "teams.txt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourneyConfig {
    /// Fixed number of registry buckets. Never grows at runtime.
    pub bucket_count: usize,
    pub rating_bonus: f64,
    /// Vertex slots reserved up front; doubled whenever exceeded.
    pub graph_initial_capacity: usize,
    pub save_path: String,
}

impl Default for TourneyConfig {
    fn default() -> Self {
        Self {
            bucket_count:           DEFAULT_BUCKET_COUNT,
            rating_bonus:           DEFAULT_RATING_BONUS,
            graph_initial_capacity: DEFAULT_GRAPH_CAPACITY,
            save_path:              DEFAULT_SAVE_PATH.to_string(),
        }
    }
}

impl TourneyConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: TourneyConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Small graph capacity so tests exercise vertex growth.
    pub fn default_test() -> Self {
        Self {
            graph_initial_capacity: 2,
            save_path: std::env::temp_dir()
                .join("tourney-test-teams.txt")
                .to_string_lossy()
                .into_owned(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> TourneyResult<()> {
        if self.bucket_count == 0 {
            return Err(TourneyError::InvalidConfig {
                reason: "bucket_count must be at least 1".into(),
            });
        }
        if !self.rating_bonus.is_finite() || self.rating_bonus < 0.0 {
            return Err(TourneyError::InvalidConfig {
                reason: format!(
                    "rating_bonus must be finite and non-negative, got {}",
                    self.rating_bonus
                ),
            });
        }
        if self.graph_initial_capacity == 0 {
            return Err(TourneyError::InvalidConfig {
                reason: "graph_initial_capacity must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config: TourneyConfig = serde_json::from_str(r#"{ "rating_bonus": 2.0 }"#).unwrap();
        assert_eq!(config.rating_bonus, 2.0);
        assert_eq!(config.bucket_count, DEFAULT_BUCKET_COUNT);
        assert_eq!(config.save_path, DEFAULT_SAVE_PATH);
    }

    #[test]
    fn zero_buckets_rejected() {
        let config = TourneyConfig { bucket_count: 0, ..TourneyConfig::default() };
        assert!(matches!(config.validate(), Err(TourneyError::InvalidConfig { .. })));
    }

    #[test]
    fn negative_bonus_rejected() {
        let config = TourneyConfig { rating_bonus: -1.0, ..TourneyConfig::default() };
        assert!(config.validate().is_err());
    }
}
