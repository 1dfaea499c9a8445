//! Filtering of dropdown data by a search term.
//!
//! Filtering is a pure function of the collection and the term: it never
//! reorders items and an empty (or too short) term leaves the collection
//! untouched. Results are data indices so callers keep a stable handle on
//! items across filter changes.

use crate::accessor::{data_text, Accessor, Item};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::fmt;
use std::sync::Arc;

/// Custom filter predicate: `(item, term) -> keep`.
pub type FilterFn<I> = Arc<dyn Fn(&I, &str) -> bool + Send + Sync>;

/// Matching strategy applied to each item's text.
pub enum FilterMode<I> {
    /// Filtering disabled; the popup has no filter input.
    Off,
    /// Item text starts with the term.
    StartsWith,
    /// Item text contains the term.
    Contains,
    /// Item text fuzzy-matches the term.
    Fuzzy,
    /// Caller-supplied predicate. Receives the raw term.
    Custom(FilterFn<I>),
}

impl<I> FilterMode<I> {
    /// Builds a custom filter.
    pub fn custom(f: impl Fn(&I, &str) -> bool + Send + Sync + 'static) -> Self {
        FilterMode::Custom(Arc::new(f))
    }

    /// Returns `true` unless the mode is [`FilterMode::Off`].
    pub fn is_active(&self) -> bool {
        !matches!(self, FilterMode::Off)
    }
}

impl<I> Default for FilterMode<I> {
    fn default() -> Self {
        FilterMode::Off
    }
}

impl<I> Clone for FilterMode<I> {
    fn clone(&self) -> Self {
        match self {
            FilterMode::Off => FilterMode::Off,
            FilterMode::StartsWith => FilterMode::StartsWith,
            FilterMode::Contains => FilterMode::Contains,
            FilterMode::Fuzzy => FilterMode::Fuzzy,
            FilterMode::Custom(f) => FilterMode::Custom(Arc::clone(f)),
        }
    }
}

impl<I> fmt::Debug for FilterMode<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Off => f.write_str("Off"),
            FilterMode::StartsWith => f.write_str("StartsWith"),
            FilterMode::Contains => f.write_str("Contains"),
            FilterMode::Fuzzy => f.write_str("Fuzzy"),
            FilterMode::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Filter configuration.
#[derive(Debug, Clone)]
pub struct FilterOptions<I> {
    /// The matching strategy.
    pub mode: FilterMode<I>,
    /// Compare case-sensitively. Defaults to `false`.
    pub case_sensitive: bool,
    /// Terms shorter than this (after trimming) do not filter. Defaults to 1.
    pub min_length: usize,
}

impl<I> Default for FilterOptions<I> {
    fn default() -> Self {
        Self {
            mode: FilterMode::Off,
            case_sensitive: false,
            min_length: 1,
        }
    }
}

/// Returns the subsequence of `view` (indices into `data`) whose text
/// matches `term`.
///
/// # Examples
///
/// ```
/// use bubbletea_dropdown::accessor::Accessor;
/// use bubbletea_dropdown::filter::{filter, FilterMode, FilterOptions};
///
/// let data = vec!["Apple".to_string(), "Banana".to_string(), "Pineapple".to_string()];
/// let opts = FilterOptions { mode: FilterMode::Contains, ..FilterOptions::default() };
/// let all: Vec<usize> = (0..data.len()).collect();
///
/// assert_eq!(filter(&data, &all, "APP", &Accessor::Display, &opts), vec![0, 2]);
/// assert_eq!(filter(&data, &all, "", &Accessor::Display, &opts), all);
/// ```
pub fn filter<I: Item>(
    data: &[I],
    view: &[usize],
    term: &str,
    text: &Accessor<I>,
    options: &FilterOptions<I>,
) -> Vec<usize> {
    if !options.mode.is_active() || term.trim().chars().count() < options.min_length.max(1) {
        return view.to_vec();
    }

    let needle = fold(term, options.case_sensitive);
    let matcher = match options.mode {
        FilterMode::Fuzzy => Some(if options.case_sensitive {
            SkimMatcherV2::default().respect_case()
        } else {
            SkimMatcherV2::default().ignore_case()
        }),
        _ => None,
    };

    view.iter()
        .copied()
        .filter(|&idx| {
            let Some(item) = data.get(idx) else {
                return false;
            };
            match &options.mode {
                FilterMode::Off => true,
                FilterMode::Custom(f) => f(item, term),
                FilterMode::StartsWith => {
                    fold(&data_text(item, text), options.case_sensitive).starts_with(&needle)
                }
                FilterMode::Contains => {
                    fold(&data_text(item, text), options.case_sensitive).contains(&needle)
                }
                FilterMode::Fuzzy => matcher
                    .as_ref()
                    .and_then(|m| m.fuzzy_match(&data_text(item, text), term))
                    .is_some(),
            }
        })
        .collect()
}

fn fold(s: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        s.to_string()
    } else {
        s.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<String> {
        ["Apple", "Banana", "Cherry", "Avocado", "Pineapple"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn all(data: &[String]) -> Vec<usize> {
        (0..data.len()).collect()
    }

    fn opts(mode: FilterMode<String>) -> FilterOptions<String> {
        FilterOptions {
            mode,
            ..FilterOptions::default()
        }
    }

    #[test]
    fn test_contains_is_case_insensitive_and_ordered() {
        let data = fruit();
        let got = filter(&data, &all(&data), "AP", &Accessor::Display, &opts(FilterMode::Contains));
        assert_eq!(got, vec![0, 4]);
        for idx in got {
            assert!(data[idx].to_lowercase().contains("ap"));
        }
    }

    #[test]
    fn test_starts_with() {
        let data = fruit();
        let got = filter(&data, &all(&data), "a", &Accessor::Display, &opts(FilterMode::StartsWith));
        assert_eq!(got, vec![0, 3]);
    }

    #[test]
    fn test_empty_term_returns_input_unchanged() {
        let data = fruit();
        let view = vec![4, 1, 2];
        let got = filter(&data, &view, "", &Accessor::Display, &opts(FilterMode::Contains));
        assert_eq!(got, view);
    }

    #[test]
    fn test_min_length() {
        let data = fruit();
        let mut o = opts(FilterMode::Contains);
        o.min_length = 3;
        assert_eq!(filter(&data, &all(&data), "an", &Accessor::Display, &o), all(&data));
        assert_eq!(filter(&data, &all(&data), "ana", &Accessor::Display, &o), vec![1]);
    }

    #[test]
    fn test_case_sensitive() {
        let data = fruit();
        let mut o = opts(FilterMode::Contains);
        o.case_sensitive = true;
        assert_eq!(filter(&data, &all(&data), "apple", &Accessor::Display, &o), vec![4]);
    }

    #[test]
    fn test_fuzzy_and_custom() {
        let data = fruit();
        let got = filter(&data, &all(&data), "bnn", &Accessor::Display, &opts(FilterMode::Fuzzy));
        assert_eq!(got, vec![1]);

        let short = FilterMode::custom(|s: &String, _term: &str| s.len() <= 5);
        assert_eq!(filter(&data, &all(&data), "x", &Accessor::Display, &opts(short)), vec![0]);
    }

    #[test]
    fn test_off_never_filters() {
        let data = fruit();
        let got = filter(&data, &all(&data), "zzz", &Accessor::Display, &opts(FilterMode::Off));
        assert_eq!(got, all(&data));
    }
}
