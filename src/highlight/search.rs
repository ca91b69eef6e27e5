//! Search query state and literal, case-insensitive matching

/// The active search, owned by the viewer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Literal query; empty means no search is active
    pub query: String,
    /// Line holding the current match, if any
    pub selected_line: Option<usize>,
}

impl SearchState {
    /// Create a search for `query` with `selected_line` as the current match line
    pub fn new(query: impl Into<String>, selected_line: Option<usize>) -> Self {
        Self {
            query: query.into(),
            selected_line,
        }
    }

    /// Whether a query is set
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Whether `line_idx` is the current match line
    pub fn is_selected(&self, line_idx: usize) -> bool {
        self.selected_line == Some(line_idx)
    }

    /// Drop the query and the selection
    pub fn clear(&mut self) {
        self.query.clear();
        self.selected_line = None;
    }
}

/// Byte ranges of every non-overlapping, case-insensitive occurrence of
/// `query` in `text`, left to right.
///
/// Characters are compared one to one, so each match covers as many
/// characters as the query. Scanning resumes at the end of each match.
pub fn find_matches(text: &str, query: &str) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    if query.is_empty() {
        return found;
    }

    let query: Vec<char> = query.chars().collect();
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        match match_len(rest, &query) {
            Some(len) => {
                found.push((pos, pos + len));
                pos += len;
            }
            None => {
                // Advance one character
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    found
}

/// Whether `text` contains `query`, ignoring case
pub fn contains_match(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }
    let query: Vec<char> = query.chars().collect();
    text.char_indices()
        .any(|(i, _)| match_len(&text[i..], &query).is_some())
}

/// Byte length of the match of `query` at the start of `text`
fn match_len(text: &str, query: &[char]) -> Option<usize> {
    let mut chars = text.char_indices();
    for &q in query {
        let (_, c) = chars.next()?;
        if !chars_eq_ignore_case(c, q) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len(), |(i, _)| i))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_matches_case_insensitive() {
        assert_eq!(find_matches("Step1 step2 STEP3", "step"), vec![(0, 4), (6, 10), (12, 16)]);
    }

    #[test]
    fn test_find_matches_no_overlap() {
        // "aa" in "aaaaa": matches at 0 and 2, scanning resumes after each
        assert_eq!(find_matches("aaaaa", "aa"), vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn test_find_matches_edge_cases() {
        assert!(find_matches("anything", "").is_empty());
        assert!(find_matches("", "x").is_empty());
        assert!(find_matches("ab", "abc").is_empty());
    }

    #[test]
    fn test_find_matches_multibyte() {
        // "É" is two bytes; the match must end on a char boundary
        let text = "café ÉCOLE école";
        let found = find_matches(text, "école");
        assert_eq!(found.len(), 2);
        for (start, end) in found {
            assert!(text.is_char_boundary(start));
            assert!(text.is_char_boundary(end));
            assert_eq!(text[start..end].to_lowercase(), "école");
        }
    }

    #[test]
    fn test_contains_match() {
        assert!(contains_match("Connection FAILED", "failed"));
        assert!(!contains_match("Connection ok", "failed"));
        assert!(!contains_match("Connection ok", ""));
    }

    #[test]
    fn test_search_state() {
        let mut search = SearchState::new("err", Some(4));
        assert!(search.is_active());
        assert!(search.is_selected(4));
        assert!(!search.is_selected(3));

        search.clear();
        assert!(!search.is_active());
        assert_eq!(search.selected_line, None);
    }
}
