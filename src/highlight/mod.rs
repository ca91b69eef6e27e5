//! Log line highlighting
//!
//! This module provides the styling infrastructure used for:
//! - Pattern coloring (timestamps, separators, arrows, keyword labels)
//! - Search match highlighting, with the current match line set apart

mod annotator;
mod category;
mod rules;
mod search;
mod style;

pub use annotator::LineAnnotator;
pub use category::{Category, Palette};
pub use search::{contains_match, SearchState};
pub use style::{layer_spans, Color, Segment, Span, Style};
