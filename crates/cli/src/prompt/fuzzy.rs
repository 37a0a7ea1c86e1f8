//! Fuzzy distance between a search query and an option label.
//!
//! Lower distances are closer matches. Labels containing the query score their
//! edit distance to it. Labels that only match as a scattered subsequence rank
//! after every contained match, ordered by their own edit distance.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use strsim::levenshtein;

use super::style::strip_ansi;

/// Ordering key of a match: contained matches first, then fewer edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Distance {
    scattered: bool,
    edits: usize,
}

impl Distance {
    #[must_use]
    pub fn contained(edits: usize) -> Self {
        Self {
            scattered: false,
            edits,
        }
    }

    #[must_use]
    pub fn scattered(edits: usize) -> Self {
        Self {
            scattered: true,
            edits,
        }
    }
}

pub struct Matcher {
    skim: SkimMatcherV2,
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            skim: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl Matcher {
    /// Distance of `label` to `query`, or `None` when it does not match.
    ///
    /// Styling codes in the label are ignored and comparison is
    /// case-insensitive.
    #[must_use]
    pub fn distance(&self, label: &str, query: &str) -> Option<Distance> {
        let label = strip_ansi(label).to_lowercase();
        let query = query.to_lowercase();

        if label.contains(&query) {
            return Some(Distance::contained(levenshtein(&label, &query)));
        }

        self.skim.fuzzy_match(&label, &query)?;
        Some(Distance::scattered(levenshtein(&label, &query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::style::bold;

    #[test]
    fn test_exact_match_is_zero() {
        let matcher = Matcher::default();
        assert_eq!(matcher.distance("Bar", "bar"), Some(Distance::contained(0)));
    }

    #[test]
    fn test_substring_distance() {
        let matcher = Matcher::default();
        assert_eq!(matcher.distance("bar", "ba"), Some(Distance::contained(1)));
        assert_eq!(matcher.distance("foobar", "bar"), Some(Distance::contained(3)));
        assert_eq!(matcher.distance("foo", "ba"), None);
    }

    #[test]
    fn test_styling_is_ignored() {
        let matcher = Matcher::default();
        assert_eq!(
            matcher.distance(&bold("Beep"), "beep"),
            Some(Distance::contained(0))
        );
    }

    #[test]
    fn test_scattered_match_ranks_after_contiguous() {
        let matcher = Matcher::default();
        let contiguous = matcher.distance("xabx", "ab").unwrap();
        let scattered = matcher.distance("axbx", "ab").unwrap();
        assert!(contiguous < scattered);
    }

    #[test]
    fn test_long_contained_label_beats_short_scattered_one() {
        let matcher = Matcher::default();
        let contained = matcher.distance("xxxxxxab", "ab").unwrap();
        let scattered = matcher.distance("axb", "ab").unwrap();
        assert_eq!(contained, Distance::contained(6));
        assert_eq!(scattered, Distance::scattered(1));
        assert!(contained < scattered);
    }
}
