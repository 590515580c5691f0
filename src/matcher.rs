use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32Str};

pub struct FuzzyMatcher {
    matcher: Matcher,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        }
    }

    /// Indices of `names` matching `query`, best score first.
    /// Ties keep their original order; an empty query keeps everything.
    pub fn rank<S: AsRef<str>>(&mut self, query: &str, names: &[S]) -> Vec<usize> {
        if query.trim().is_empty() {
            return (0..names.len()).collect();
        }

        let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
        let mut buf = Vec::new();

        let mut scored: Vec<(usize, u32)> = names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| {
                let haystack = Utf32Str::new(name.as_ref(), &mut buf);
                pattern.score(haystack, &mut self.matcher).map(|score| (i, score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(i, _)| i).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_keeps_order() {
        let mut matcher = FuzzyMatcher::new();
        assert_eq!(matcher.rank("", &["b", "a", "c"]), vec![0, 1, 2]);
    }

    #[test]
    fn test_filters_non_matches() {
        let mut matcher = FuzzyMatcher::new();
        let names = ["Firefox", "Chess", "GNU Chess Clock"];
        let ranked = matcher.rank("chess", &names);

        assert!(!ranked.contains(&0));
        assert!(ranked.contains(&1));
        assert!(ranked.contains(&2));
    }

    #[test]
    fn test_nothing_matches() {
        let mut matcher = FuzzyMatcher::new();
        assert!(matcher.rank("zzz", &["Firefox", "Chess"]).is_empty());
    }
}
