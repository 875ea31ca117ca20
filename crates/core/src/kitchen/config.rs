//! Kitchen configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the kitchen's cooking simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KitchenConfig {
    /// Number of cooking stations, i.e. how many orders cook at once.
    /// Orders beyond this limit wait for a station to free up.
    #[serde(default = "default_stations")]
    pub stations: usize,

    /// Number of equal steps a cooking run is divided into. One progress
    /// snapshot is emitted per completed step.
    #[serde(default = "default_steps")]
    pub steps: u32,
}

fn default_stations() -> usize {
    3
}

fn default_steps() -> u32 {
    10
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            stations: default_stations(),
            steps: default_steps(),
        }
    }
}

impl KitchenConfig {
    /// Sets the number of cooking stations.
    pub fn with_stations(mut self, stations: usize) -> Self {
        self.stations = stations;
        self
    }

    /// Sets the number of progress steps.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KitchenConfig::default();
        assert_eq!(config.stations, 3);
        assert_eq!(config.steps, 10);
    }

    #[test]
    fn test_deserialize_minimal() {
        let config: KitchenConfig = toml::from_str("").unwrap();
        assert_eq!(config.stations, 3);
        assert_eq!(config.steps, 10);
    }

    #[test]
    fn test_deserialize_full() {
        let toml = r#"
            stations = 5
            steps = 20
        "#;
        let config: KitchenConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.stations, 5);
        assert_eq!(config.steps, 20);
    }

    #[test]
    fn test_config_builder() {
        let config = KitchenConfig::default().with_stations(1).with_steps(4);
        assert_eq!(config.stations, 1);
        assert_eq!(config.steps, 4);
    }
}
