use std::collections::HashSet;

use vigil_core::{IStateStore, VigilError};

/// Trim and lowercase keywords, dropping empties and repeats.
/// First-seen order is kept.
pub fn normalize(keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.clone()))
        .collect()
}

/// Add `increment` to each mentioned keyword's weight.
pub fn record(
    store: &dyn IStateStore,
    user_id: &str,
    keywords: &[String],
    increment: f64,
) -> Vec<VigilError> {
    normalize(keywords)
        .into_iter()
        .filter_map(|keyword| {
            store
                .increment_keyword(user_id, &keyword, increment)
                .err()
                .map(|e| VigilError::KeywordWriteFailed {
                    keyword,
                    reason: e.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_dedupes_case_and_whitespace() {
        let raw: Vec<String> = [" Work ", "work", "", "   ", "Family", "WORK"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(normalize(&raw), vec!["work".to_string(), "family".to_string()]);
    }
}
