use thiserror::Error;

use crate::model::entity::Days;

pub const DEFAULT_CURRENCY: &str = "RS";
pub const DEFAULT_DESTINATIONS: [&str; 4] = ["sawat", "kashmir", "naran", "kagan"];
pub const DEFAULT_DURATIONS: [Days; 4] = [5, 10, 20, 30];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("At least one destination is required")]
    NoDestinations,
    #[error("Destination names must not be blank")]
    BlankDestination,
    #[error("At least one package duration is required")]
    NoDurations,
    #[error("Package durations must be at least one day")]
    ZeroDuration,
}

/// Menu contents and display settings for a billing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingConfig {
    pub currency: String,
    pub destinations: Vec<String>,
    pub duration_options: Vec<Days>,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            destinations: DEFAULT_DESTINATIONS.iter().map(|name| name.to_string()).collect(),
            duration_options: DEFAULT_DURATIONS.to_vec(),
        }
    }
}

impl BillingConfig {
    /// Replaces the currency and destinations where given.
    pub fn with_overrides(mut self, currency: Option<String>, destinations: Vec<String>) -> Self {
        if let Some(currency) = currency {
            self.currency = currency;
        }
        if !destinations.is_empty() {
            self.destinations = destinations;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.destinations.is_empty() {
            return Err(ConfigError::NoDestinations);
        }
        if self.destinations.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::BlankDestination);
        }
        if self.duration_options.is_empty() {
            return Err(ConfigError::NoDurations);
        }
        if self.duration_options.contains(&0) {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}
