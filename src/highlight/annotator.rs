//! Line annotation
//!
//! The annotator turns one log line into an ordered list of styled
//! spans: search hits first, then every pattern rule in table order.
//! Later spans are drawn over earlier ones where they overlap.

use super::category::{Category, Palette};
use super::rules::{default_rules, HighlightRule};
use super::search::{find_matches, SearchState};
use super::style::Span;

/// Computes highlight spans for log lines
#[derive(Debug, Clone)]
pub struct LineAnnotator {
    rules: Vec<HighlightRule>,
    palette: Palette,
}

impl LineAnnotator {
    /// Annotator with the built-in rules and default colors
    pub fn new() -> Self {
        Self::with_rules(default_rules(), Palette::default())
    }

    /// Annotator with a custom rule table and palette
    pub fn with_rules(rules: Vec<HighlightRule>, palette: Palette) -> Self {
        Self { rules, palette }
    }

    /// Annotator with the built-in rules and the given colors
    pub fn with_palette(palette: Palette) -> Self {
        Self::with_rules(default_rules(), palette)
    }

    /// Spans for `line`, the line at `line_idx` in the document.
    ///
    /// Every span lies within `line` and starts and ends on char
    /// boundaries. The result depends only on the arguments.
    pub fn annotate(&self, line: &str, line_idx: usize, search: &SearchState) -> Vec<Span> {
        let mut spans = Vec::new();
        if line.is_empty() {
            return spans;
        }

        if search.is_active() {
            // Every hit on the selected line counts as current
            let category = if search.is_selected(line_idx) {
                Category::SearchCurrent
            } else {
                Category::SearchMatch
            };
            let style = self.palette.style(category);
            spans.extend(
                find_matches(line, &search.query)
                    .into_iter()
                    .map(|(start, end)| Span::new(start, end, style)),
            );
        }

        for rule in &self.rules {
            let style = self.palette.style(rule.category);
            spans.extend(rule.find_all(line).map(|(start, end)| Span::new(start, end, style)));
        }

        spans
    }
}

impl Default for LineAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn no_search() -> SearchState {
        SearchState::default()
    }

    fn ranges(spans: &[Span]) -> Vec<(usize, usize)> {
        spans.iter().map(|s| (s.start, s.end)).collect()
    }

    fn style(category: Category) -> crate::highlight::Style {
        Palette::default().style(category)
    }

    #[test]
    fn test_timestamp_and_keyword() {
        let annotator = LineAnnotator::new();
        let line = "[24/01/15 10:30:00] ERROR: connection failed";
        let spans = annotator.annotate(line, 0, &no_search());

        assert_eq!(spans.len(), 2);
        assert_eq!(&line[spans[0].start..spans[0].end], "[24/01/15 10:30:00]");
        assert_eq!(spans[0].style, style(Category::Timestamp));
        assert_eq!(&line[spans[1].start..spans[1].end], "ERROR:");
        assert_eq!(spans[1].style, style(Category::Keyword));
    }

    #[test]
    fn test_separators_without_keyword() {
        let annotator = LineAnnotator::new();
        let spans = annotator.annotate("====== START ======", 0, &no_search());

        assert_eq!(ranges(&spans), vec![(0, 6), (13, 19)]);
        assert!(spans.iter().all(|s| s.style == style(Category::Separator)));
    }

    #[test]
    fn test_search_on_selected_line() {
        let annotator = LineAnnotator::new();
        let search = SearchState::new("step", Some(7));
        let line = "step1 --> step2";
        let spans = annotator.annotate(line, 7, &search);

        // Search hits come first, then the arrow
        assert_eq!(ranges(&spans), vec![(0, 4), (10, 14), (6, 9)]);
        assert_eq!(spans[0].style, style(Category::SearchCurrent));
        assert_eq!(spans[1].style, style(Category::SearchCurrent));
        assert_eq!(spans[2].style, style(Category::Arrow));
        assert_eq!(&line[6..9], "-->");
    }

    #[test]
    fn test_search_on_other_line() {
        let annotator = LineAnnotator::new();
        let search = SearchState::new("step", Some(7));
        let spans = annotator.annotate("step1 --> step2", 3, &search);

        let search_spans: Vec<_> = spans
            .iter()
            .filter(|s| s.style == style(Category::SearchMatch))
            .collect();
        assert_eq!(search_spans.len(), 2);
    }

    #[test]
    fn test_empty_line() {
        let annotator = LineAnnotator::new();
        assert!(annotator.annotate("", 0, &no_search()).is_empty());
        assert!(annotator.annotate("", 0, &SearchState::new("x", Some(0))).is_empty());
    }

    #[test]
    fn test_empty_query_disables_search() {
        let annotator = LineAnnotator::new();
        let spans = annotator.annotate("AAAA:", 0, &SearchState::new("", Some(0)));

        assert_eq!(ranges(&spans), vec![(0, 5)]);
        assert_eq!(spans[0].style, style(Category::Keyword));
    }

    #[test]
    fn test_query_longer_than_line() {
        let annotator = LineAnnotator::new();
        let spans = annotator.annotate("abc", 0, &SearchState::new("abcdef", None));
        assert!(spans.is_empty());
    }

    #[test]
    fn test_overlapping_categories_coexist() {
        let annotator = LineAnnotator::new();
        let spans = annotator.annotate("WARN: disk", 0, &SearchState::new("warn", None));

        assert_eq!(ranges(&spans), vec![(0, 4), (0, 5)]);
        assert_eq!(spans[0].style, style(Category::SearchMatch));
        assert_eq!(spans[1].style, style(Category::Keyword));
    }

    #[test]
    fn test_custom_rules() {
        let rules = vec![HighlightRule::new(Category::Keyword, r"\bfoo\b").unwrap()];
        let annotator = LineAnnotator::with_rules(rules, Palette::default());
        let spans = annotator.annotate("foo ERROR: foo", 0, &no_search());
        assert_eq!(ranges(&spans), vec![(0, 3), (11, 14)]);
    }

    fn line_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 _:=>/\\[\\]\\-é日]{0,48}"
    }

    proptest! {
        #[test]
        fn spans_stay_within_line(
            line in line_strategy(),
            query in "[a-zA-Z=\\-é]{0,3}",
            idx in 0usize..4,
            selected in proptest::option::of(0usize..4),
        ) {
            let annotator = LineAnnotator::new();
            let search = SearchState::new(query, selected);
            for span in annotator.annotate(&line, idx, &search) {
                prop_assert!(span.start < span.end);
                prop_assert!(span.end <= line.len());
                prop_assert!(line.is_char_boundary(span.start));
                prop_assert!(line.is_char_boundary(span.end));
            }
        }

        #[test]
        fn annotate_is_idempotent(
            line in line_strategy(),
            query in "[a-zA-Z=]{0,3}",
            idx in 0usize..4,
        ) {
            let annotator = LineAnnotator::new();
            let search = SearchState::new(query, Some(1));
            prop_assert_eq!(
                annotator.annotate(&line, idx, &search),
                annotator.annotate(&line, idx, &search)
            );
        }

        #[test]
        fn search_spans_do_not_overlap(
            line in line_strategy(),
            query in "[a-c=]{1,3}",
        ) {
            let found = find_matches(&line, &query);
            for pair in found.windows(2) {
                prop_assert!(pair[0].0 <= pair[1].0);
                prop_assert!(pair[0].1 <= pair[1].0);
            }
        }
    }
}
