//! Pattern rules for log highlighting
//!
//! A rule pairs a category with a compiled regex. The built-in table
//! recognizes the usual landmarks of a plain-text log.

use regex::Regex;

use super::category::Category;

/// A single-line pattern rule
///
/// Every non-overlapping match of the pattern becomes one span of the
/// rule's category.
#[derive(Debug, Clone)]
pub struct HighlightRule {
    /// What the matches are colored as
    pub category: Category,
    /// Compiled regex pattern
    pub pattern: Regex,
}

impl HighlightRule {
    /// Create a new pattern rule
    pub fn new(category: Category, pattern: &str) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            category,
            pattern: regex,
        })
    }

    /// Byte ranges of all non-overlapping matches, left to right
    pub fn find_all<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.pattern
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| (m.start(), m.end()))
    }
}

/// `[24/01/15 10:30:00]`
const TIMESTAMP: &str =
    r"\[[0-9]{2}/[0-9]{2}/[0-9]{2}[[:space:]]+[0-9]{2}:[0-9]{2}:[0-9]{2}\]";
/// `===`, `==========`
const SEPARATOR: &str = r"={3,}";
/// `-->`, `---->`
const ARROW: &str = r"-{2,}>";
/// `ERROR:`, `LOG_LEVEL :`
const KEYWORD: &str = r"[A-Z_]+[[:space:]]*:";

/// The built-in rule table, in application order
pub fn default_rules() -> Vec<HighlightRule> {
    let mut rules = Vec::with_capacity(4);

    for (category, pattern) in [
        (Category::Timestamp, TIMESTAMP),
        (Category::Separator, SEPARATOR),
        (Category::Arrow, ARROW),
        (Category::Keyword, KEYWORD),
    ] {
        if let Some(rule) = HighlightRule::new(category, pattern) {
            rules.push(rule);
        }
    }

    rules
}
