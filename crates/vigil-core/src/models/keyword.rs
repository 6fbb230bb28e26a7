use serde::{Deserialize, Serialize};

/// A remembered keyword and its accumulated weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordWeight {
    pub keyword: String,
    pub weight: f64,
}

impl KeywordWeight {
    pub fn new(keyword: impl Into<String>, weight: f64) -> Self {
        Self {
            keyword: keyword.into(),
            weight,
        }
    }
}

/// Sort by weight descending and keep at most `limit` entries.
///
/// Ties keep whatever order the input had.
pub fn rank_top(mut weights: Vec<KeywordWeight>, limit: usize) -> Vec<KeywordWeight> {
    weights.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    weights.truncate(limit);
    weights
}
