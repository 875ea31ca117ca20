//! Orchestrator configuration.

use serde::{Deserialize, Serialize};

/// Configuration for order creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Menu of dish names new orders draw from.
    #[serde(default = "default_menu")]
    pub menu: Vec<String>,

    /// Minimum cooking time for a new order (milliseconds).
    #[serde(default = "default_min_cooking")]
    pub min_cooking_ms: u64,

    /// Maximum cooking time for a new order (milliseconds).
    #[serde(default = "default_max_cooking")]
    pub max_cooking_ms: u64,
}

fn default_menu() -> Vec<String> {
    [
        "Margherita Pizza",
        "Hamburger",
        "Sushi Roll",
        "Tacos",
        "Pasta Carbonara",
        "Caesar Salad",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}

fn default_min_cooking() -> u64 {
    2000
}

fn default_max_cooking() -> u64 {
    6000
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            menu: default_menu(),
            min_cooking_ms: default_min_cooking(),
            max_cooking_ms: default_max_cooking(),
        }
    }
}

impl OrchestratorConfig {
    /// Sets the menu of dish names.
    pub fn with_menu(mut self, menu: Vec<String>) -> Self {
        self.menu = menu;
        self
    }

    /// Sets the cooking time range in milliseconds.
    pub fn with_cooking_range(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.min_cooking_ms = min_ms;
        self.max_cooking_ms = max_ms;
        self
    }
}
