//! Configuration management for the Libris engine

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

fn default_loan_period_days() -> i64 {
    14
}

fn default_fine_per_day() -> f64 {
    5.0
}

fn default_reservation_capacity() -> usize {
    20
}

/// Circulation tunables
#[derive(Debug, Deserialize, Clone)]
pub struct CirculationConfig {
    /// Loan period applied to every issue, in days
    #[serde(default = "default_loan_period_days")]
    pub loan_period_days: i64,
    /// Flat fine charged per day overdue
    #[serde(default = "default_fine_per_day")]
    pub fine_per_day: f64,
    /// Fixed capacity of each per-book reservation queue
    #[serde(default = "default_reservation_capacity")]
    pub reservation_capacity: usize,
}

impl Default for CirculationConfig {
    fn default() -> Self {
        Self {
            loan_period_days: default_loan_period_days(),
            fine_per_day: default_fine_per_day(),
            reservation_capacity: default_reservation_capacity(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LibraryConfig {
    #[serde(default)]
    pub circulation: CirculationConfig,
}

impl LibraryConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Optional configuration file
            .add_source(File::with_name("config/libris").required(false))
            // Add environment variables (with prefix LIBRIS_)
            .add_source(
                Environment::with_prefix("LIBRIS")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_circulation_policy() {
        let config = LibraryConfig::default();
        assert_eq!(config.circulation.loan_period_days, 14);
        assert_eq!(config.circulation.fine_per_day, 5.0);
        assert_eq!(config.circulation.reservation_capacity, 20);
    }
}
