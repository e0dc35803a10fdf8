use crate::domain::models::{ServiceIndex, ServiceList, Suggestion};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Suggestion lists are truncated to this many entries.
pub const MAX_SUGGESTIONS: usize = 6;

/// Lower-case and strip diacritics: canonical decomposition (NFD), then
/// drop the combining marks. Total and deterministic.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// A service's normalized form equals the normalized query. The sole
    /// result; must be fetched immediately, bypassing suggestions.
    Exact(ServiceIndex),
    /// Services whose normalized form starts with the normalized query,
    /// ordered and capped at [`MAX_SUGGESTIONS`]. Empty for no matches.
    Suggestions(Vec<Suggestion>),
}

#[must_use]
pub fn find_matches(query: &str, services: &ServiceList) -> MatchOutcome {
    let needle = normalize(query);
    if needle.is_empty() {
        return MatchOutcome::Suggestions(Vec::new());
    }

    // First pass: exact match wins outright.
    for (index, name) in services.iter() {
        if normalize(name) == needle {
            return MatchOutcome::Exact(index);
        }
    }

    // Second pass: prefix matches, ordered case- and diacritic-insensitively
    // with the original name as tie-breaker.
    let mut matches: Vec<(String, Suggestion)> = services
        .iter()
        .filter_map(|(index, name)| {
            let key = normalize(name);
            key.starts_with(&needle).then(|| {
                (
                    key,
                    Suggestion {
                        index,
                        name: name.to_string(),
                    },
                )
            })
        })
        .collect();
    matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.name.cmp(&b.1.name)));
    matches.truncate(MAX_SUGGESTIONS);

    MatchOutcome::Suggestions(matches.into_iter().map(|(_, s)| s).collect())
}
