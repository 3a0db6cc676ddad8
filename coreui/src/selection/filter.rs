//! Option filters: case-insensitive substring, fuzzy, or caller-supplied.

use std::fmt;
use std::sync::Arc;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::option::SelectOption;

type Predicate = Arc<dyn Fn(&SelectOption, &str) -> bool + Send + Sync>;

/// How typed text narrows the option list.
#[derive(Clone, Default)]
pub enum Filter {
    /// Label contains the text, ignoring case.
    #[default]
    Substring,
    /// Fuzzy match on the label, best matches first.
    Fuzzy,
    Custom(Predicate),
}

impl Filter {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&SelectOption, &str) -> bool + Send + Sync + 'static,
    {
        Filter::Custom(Arc::new(f))
    }

    /// Narrow `candidates` (indices into `options`) to those matching
    /// `query`. An empty query keeps every candidate in place.
    pub fn apply(&self, options: &[SelectOption], candidates: &[usize], query: &str) -> Vec<usize> {
        if query.is_empty() {
            return candidates.to_vec();
        }

        match self {
            Filter::Substring => {
                let needle = query.to_lowercase();
                candidates
                    .iter()
                    .copied()
                    .filter(|&i| options[i].label.to_lowercase().contains(&needle))
                    .collect()
            }
            Filter::Fuzzy => {
                let labels: Vec<String> = candidates.iter().map(|&i| options[i].label.clone()).collect();
                fuzzy_filter(query, &labels)
                    .into_iter()
                    .map(|m| candidates[m.index])
                    .collect()
            }
            Filter::Custom(predicate) => candidates
                .iter()
                .copied()
                .filter(|&i| predicate(&options[i], query))
                .collect(),
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Substring => f.write_str("Substring"),
            Filter::Fuzzy => f.write_str("Fuzzy"),
            Filter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Result of a fuzzy filter operation.
#[derive(Debug, Clone)]
pub struct FilterMatch {
    /// Index of the matched item in the input list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Fuzzy filter using nucleo-matcher.
///
/// Returns matches sorted by score, highest first. Ties keep input order.
/// Empty query returns all items with score 0.
pub fn fuzzy_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    if query.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, _)| FilterMatch { index, score: 0 })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
