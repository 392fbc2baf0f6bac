use crate::DEFAULT_SEED;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Load the demo users and profiles at startup
    pub seed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}
