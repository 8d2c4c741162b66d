//! Engine configuration from TOML (`[engine]` section)

use mindreader_application::EngineConfig;
use mindreader_domain::QuestionStrategy;
use serde::{Deserialize, Serialize};

/// Raw engine configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEngineConfig {
    /// Question strategy (`ternary` or `target_value`)
    pub strategy: QuestionStrategy,
}

impl FileEngineConfig {
    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig::default().with_strategy(self.strategy)
    }
}
