use serde::{Deserialize, Serialize};

use super::defaults;

/// Keyword memory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub enabled: bool,
    /// Weight added per mentioning observation.
    pub increment: f64,
    /// Limit used when a caller asks for top keywords without one.
    pub default_top_limit: usize,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_KEYWORDS_ENABLED,
            increment: defaults::DEFAULT_KEYWORD_INCREMENT,
            default_top_limit: defaults::DEFAULT_KEYWORD_TOP_LIMIT,
        }
    }
}
