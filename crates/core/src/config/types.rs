use serde::{Deserialize, Serialize};

use crate::backup::BackupConfig;
use crate::kitchen::KitchenConfig;
use crate::orchestrator::OrchestratorConfig;

/// Root configuration for the engine.
///
/// Every section falls back to its defaults when absent, so an empty file
/// is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Kitchen section (stations, steps).
    #[serde(default)]
    pub kitchen: KitchenConfig,

    /// Orchestrator section (menu, cooking time range).
    #[serde(default)]
    pub orchestrator: OrchestratorConfig,

    /// Backup section (simulated work duration).
    #[serde(default)]
    pub backup: BackupConfig,
}
