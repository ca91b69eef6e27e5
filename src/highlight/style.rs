//! Style types for text rendering
//!
//! Spans produced by the annotator carry one of these styles. The
//! display layer turns an ordered span list into non-overlapping
//! segments with [`layer_spans`] before writing them to the terminal.

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color from its configuration name (e.g. "bright-yellow")
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        let color = match normalized.as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "gray" | "grey" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Create a style with just background color
    pub fn bg(color: Color) -> Self {
        Self {
            bg: color,
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `other` on top of this style.
    ///
    /// Colors set in `other` replace ours; default colors leave ours alone.
    pub fn overlay(mut self, other: &Style) -> Self {
        if other.fg != Color::Default {
            self.fg = other.fg;
        }
        if other.bg != Color::Default {
            self.bg = other.bg;
        }
        self.bold |= other.bold;
        self
    }
}

/// A styled span of text within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
    /// Style to apply to this span
    pub style: Style,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }
}

/// A run of text with a single resolved style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub style: Style,
}

/// Resolve an ordered, possibly overlapping span list into segments.
///
/// The range `[0, text_len)` is cut at every span boundary. Each piece
/// gets the overlay of every span covering it, in list order, so later
/// spans win per attribute. Pieces no span covers get the default style.
pub fn layer_spans(text_len: usize, spans: &[Span]) -> Vec<Segment> {
    if text_len == 0 {
        return Vec::new();
    }

    let mut bounds: Vec<usize> = Vec::with_capacity(spans.len() * 2 + 2);
    bounds.push(0);
    bounds.push(text_len);
    for span in spans {
        bounds.push(span.start.min(text_len));
        bounds.push(span.end.min(text_len));
    }
    bounds.sort_unstable();
    bounds.dedup();

    let mut segments: Vec<Segment> = Vec::with_capacity(bounds.len());
    for pair in bounds.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let style = spans
            .iter()
            .filter(|s| s.start <= start && s.end >= end)
            .fold(Style::default(), |acc, s| acc.overlay(&s.style));

        // Merge neighbours that resolved to the same style
        match segments.last_mut() {
            Some(last) if last.style == style && last.end == start => last.end = end,
            _ => segments.push(Segment { start, end, style }),
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert_eq!(style.bg, Color::Default);
        assert!(!style.bold);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::bg(Color::Blue).with_fg(Color::Red).with_bold();
        assert_eq!(style.fg, Color::Red);
        assert_eq!(style.bg, Color::Blue);
        assert!(style.bold);
        assert!(!style.is_default());
    }

    #[test]
    fn test_color_names() {
        assert_eq!(Color::from_name("bright-yellow"), Some(Color::BrightYellow));
        assert_eq!(Color::from_name(" Bright_Red "), Some(Color::BrightRed));
        assert_eq!(Color::from_name("grey"), Some(Color::BrightBlack));
        assert_eq!(Color::from_name("chartreuse"), None);
        assert_eq!(Color::from_name("cyan"), Some(Color::Cyan));
    }

    #[test]
    fn test_overlay_keeps_other_attribute() {
        let search = Style::bg(Color::Yellow);
        let keyword = Style::fg(Color::BrightYellow);
        let layered = Style::default().overlay(&search).overlay(&keyword);
        assert_eq!(layered.bg, Color::Yellow);
        assert_eq!(layered.fg, Color::BrightYellow);
    }

    #[test]
    fn test_layer_spans_uncovered_line() {
        let segments = layer_spans(5, &[]);
        assert_eq!(
            segments,
            vec![Segment { start: 0, end: 5, style: Style::default() }]
        );
        assert!(layer_spans(0, &[]).is_empty());
    }

    #[test]
    fn test_layer_spans_later_span_wins() {
        let spans = vec![
            Span::new(0, 6, Style::fg(Color::Red)),
            Span::new(2, 4, Style::fg(Color::Green)),
        ];
        let segments = layer_spans(8, &spans);
        let styles: Vec<_> = segments.iter().map(|s| (s.start, s.end, s.style.fg)).collect();
        assert_eq!(
            styles,
            vec![
                (0, 2, Color::Red),
                (2, 4, Color::Green),
                (4, 6, Color::Red),
                (6, 8, Color::Default),
            ]
        );
    }

    #[test]
    fn test_layer_spans_merges_equal_neighbours() {
        let spans = vec![
            Span::new(0, 3, Style::fg(Color::Cyan)),
            Span::new(3, 6, Style::fg(Color::Cyan)),
        ];
        let segments = layer_spans(6, &spans);
        assert_eq!(segments.len(), 1);
        assert_eq!((segments[0].start, segments[0].end), (0, 6));
    }
}
