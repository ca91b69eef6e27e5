//! Highlight categories and the palette that colors them
//!
//! Each category is something the annotator can recognize in a log
//! line. The palette maps categories to styles and can be adjusted
//! from the preferences file.

use super::style::{Color, Style};

/// What a span was produced for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `[yy/mm/dd hh:mm:ss]` timestamps
    Timestamp,
    /// Runs of `===`
    Separator,
    /// `-->` style arrows
    Arrow,
    /// Upper-case labels followed by a colon (`ERROR:`)
    Keyword,
    /// Search hit on an ordinary line
    SearchMatch,
    /// Search hit on the selected line
    SearchCurrent,
}

impl Category {
    /// All categories, pattern categories first
    pub const ALL: [Category; 6] = [
        Category::Timestamp,
        Category::Separator,
        Category::Arrow,
        Category::Keyword,
        Category::SearchMatch,
        Category::SearchCurrent,
    ];

    /// Get the default style for this category
    pub fn default_style(&self) -> Style {
        match self {
            Category::Timestamp => Style::fg(Color::Cyan),
            Category::Separator => Style::fg(Color::BrightBlack),
            Category::Arrow => Style::fg(Color::BrightMagenta),
            Category::Keyword => Style::fg(Color::BrightYellow).with_bold(),
            Category::SearchMatch => Style::bg(Color::Yellow).with_fg(Color::Black),
            Category::SearchCurrent => Style::bg(Color::BrightRed).with_fg(Color::BrightWhite),
        }
    }

    /// Whether spans of this category color the background
    pub fn is_search(&self) -> bool {
        matches!(self, Category::SearchMatch | Category::SearchCurrent)
    }

    /// Configuration name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Category::Timestamp => "timestamp",
            Category::Separator => "separator",
            Category::Arrow => "arrow",
            Category::Keyword => "keyword",
            Category::SearchMatch => "search-match",
            Category::SearchCurrent => "search-current",
        }
    }

    /// Parse a category from its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Styles for every category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    styles: [Style; 6],
}

impl Palette {
    /// Style used for a category
    pub fn style(&self, category: Category) -> Style {
        self.styles[Self::slot(category)]
    }

    /// Replace the color of a category.
    ///
    /// Search categories keep their contrasting text color and take the
    /// new color as background; pattern categories take it as foreground.
    pub fn set_color(&mut self, category: Category, color: Color) {
        let slot = &mut self.styles[Self::slot(category)];
        if category.is_search() {
            slot.bg = color;
        } else {
            slot.fg = color;
        }
    }

    fn slot(category: Category) -> usize {
        match category {
            Category::Timestamp => 0,
            Category::Separator => 1,
            Category::Arrow => 2,
            Category::Keyword => 3,
            Category::SearchMatch => 4,
            Category::SearchCurrent => 5,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            styles: Category::ALL.map(|c| c.default_style()),
        }
    }
}
