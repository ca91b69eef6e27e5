//! Display rendering

use unicode_width::UnicodeWidthChar;

use crate::document::LogDocument;
use crate::error::Result;
use crate::highlight::{layer_spans, LineAnnotator, SearchState, Segment, Style};
use crate::terminal::Terminal;
use crate::window::Viewport;

const EMPTY_STATE_HINT: &str = "No log file loaded. Press 'o' to open one, 'q' to quit.";

/// Display toggles owned by the viewer.
///
/// Changing these does not redraw anything; call
/// [`Display::request_redraw`] after a batch of changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayOptions {
    /// Whether to show the line number gutter
    pub show_line_numbers: bool,
    /// Text size preference, shown in the mode line
    pub text_size: f32,
}

/// What the display needs to draw one frame
pub struct Frame<'a> {
    pub document: Option<&'a LogDocument>,
    pub viewport: &'a Viewport,
    pub annotator: &'a LineAnnotator,
    pub search: &'a SearchState,
    /// Open minibuffer prompt: label and current input
    pub prompt: Option<(&'a str, &'a str)>,
}

/// Display state
pub struct Display {
    /// Whether a full redraw is needed
    needs_redraw: bool,
    /// Message to show in minibuffer (bottom line)
    message: Option<String>,
    /// Current display toggles
    pub options: DisplayOptions,
}

impl Display {
    pub fn new(options: DisplayOptions) -> Self {
        Self {
            needs_redraw: true,
            message: None,
            options,
        }
    }

    /// Mark that a full redraw is needed
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Set a message to display
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear the message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Render one frame
    pub fn render(&mut self, terminal: &mut Terminal, frame: &Frame<'_>) -> Result<()> {
        let cols = terminal.cols() as usize;
        let rows = terminal.rows();
        if rows < 2 {
            return Ok(());
        }

        if self.needs_redraw {
            terminal.clear_screen()?;
        }

        match frame.document {
            Some(document) => self.render_lines(terminal, frame, document, cols)?,
            None => self.render_empty_state(terminal, frame.viewport.height(), cols)?,
        }

        let mode_line_row = frame.viewport.height();
        self.render_mode_line(terminal, frame, mode_line_row, cols)?;
        self.render_minibuffer(terminal, frame, rows - 1, cols)?;

        terminal.flush()?;
        self.needs_redraw = false;
        Ok(())
    }

    /// Render the visible lines of the document
    fn render_lines(
        &self,
        terminal: &mut Terminal,
        frame: &Frame<'_>,
        document: &LogDocument,
        cols: usize,
    ) -> Result<()> {
        let lnum_width = line_number_width(self.options.show_line_numbers, document.line_count());
        let text_cols = cols.saturating_sub(lnum_width);
        let top_line = frame.viewport.top_line();

        for row_offset in 0..frame.viewport.height() {
            let line_idx = top_line + row_offset as usize;
            terminal.move_cursor(row_offset, 0)?;

            if let Some(text) = document.line(line_idx) {
                if self.options.show_line_numbers {
                    let lnum_str = format!("{:>width$} ", line_idx + 1, width = lnum_width - 1);
                    terminal.set_dim(true)?;
                    terminal.write_str(&lnum_str)?;
                    terminal.set_dim(false)?;
                }

                let spans = frame.annotator.annotate(text, line_idx, frame.search);
                let segments = layer_spans(text.len(), &spans);
                for (piece, style) in clip_segments(text, &segments, text_cols) {
                    if style.is_default() {
                        terminal.write_str(&piece)?;
                    } else {
                        terminal.apply_style(&style)?;
                        terminal.write_str(&piece)?;
                        terminal.reset_attributes()?;
                    }
                }
            } else {
                // Past the end of the document (like vim's ~)
                terminal.set_dim(true)?;
                terminal.write_str("~")?;
                terminal.set_dim(false)?;
            }

            terminal.clear_to_eol()?;
        }

        Ok(())
    }

    /// Render the hint shown before any file is opened
    fn render_empty_state(&self, terminal: &mut Terminal, height: u16, cols: usize) -> Result<()> {
        for row in 0..height {
            terminal.move_cursor(row, 0)?;
            terminal.clear_to_eol()?;
        }

        let hint = truncate_to_width(EMPTY_STATE_HINT, cols);
        let hint_width = display_width(&hint);
        let col = (cols.saturating_sub(hint_width) / 2) as u16;
        terminal.move_cursor(height / 2, col)?;
        terminal.set_dim(true)?;
        terminal.write_str(&hint)?;
        terminal.set_dim(false)?;
        Ok(())
    }

    /// Render the mode line
    fn render_mode_line(
        &self,
        terminal: &mut Terminal,
        frame: &Frame<'_>,
        row: u16,
        cols: usize,
    ) -> Result<()> {
        terminal.move_cursor(row, 0)?;
        terminal.set_reverse(true)?;

        let mode_line = mode_line_text(frame, &self.options);

        // Pad or truncate to fill width
        let width = display_width(&mode_line);
        let padded = if width < cols {
            format!("{}{}", mode_line, "-".repeat(cols - width))
        } else {
            truncate_to_width(&mode_line, cols)
        };

        terminal.write_str(&padded)?;
        terminal.set_reverse(false)?;
        Ok(())
    }

    /// Render the minibuffer (prompt or message)
    fn render_minibuffer(
        &self,
        terminal: &mut Terminal,
        frame: &Frame<'_>,
        row: u16,
        cols: usize,
    ) -> Result<()> {
        terminal.move_cursor(row, 0)?;

        if let Some((label, input)) = frame.prompt {
            let text = format!("{}: {}", label, input);
            let shown = truncate_to_width(&text, cols.saturating_sub(1));
            terminal.write_str(&shown)?;
            terminal.clear_to_eol()?;
            terminal.set_cursor_visible(true)?;
        } else {
            if let Some(ref msg) = self.message {
                terminal.write_str(&truncate_to_width(msg, cols))?;
            }
            terminal.clear_to_eol()?;
            terminal.set_cursor_visible(false)?;
        }

        Ok(())
    }
}

/// Width of the line number gutter, including the separator space
fn line_number_width(show: bool, line_count: usize) -> usize {
    if !show {
        return 0;
    }
    let digits = line_count.max(1).to_string().len();
    digits.max(3) + 1
}

/// Build the mode line text, without padding
fn mode_line_text(frame: &Frame<'_>, options: &DisplayOptions) -> String {
    let mut text = match frame.document {
        Some(document) => {
            let count = document.line_count();
            let top = frame.viewport.top_line();
            let bottom = top + frame.viewport.height() as usize;
            let position = if count <= frame.viewport.height() as usize {
                "All".to_string()
            } else if top == 0 {
                "Top".to_string()
            } else if bottom >= count {
                "Bot".to_string()
            } else {
                format!("{}%", bottom * 100 / count)
            };
            format!(
                "-- zzlogview: {} L{}/{} {} ",
                document.name(),
                (top + 1).min(count.max(1)),
                count,
                position
            )
        }
        None => "-- zzlogview: (no file) ".to_string(),
    };

    text.push_str(if options.show_line_numbers { "[num] " } else { "[nonum] " });
    text.push_str(&format!("size {} ", options.text_size));

    if frame.search.is_active() {
        match frame.search.selected_line {
            Some(line) => text.push_str(&format!("/{}/ at L{} ", frame.search.query, line + 1)),
            None => text.push_str(&format!("/{}/ ", frame.search.query)),
        }
    }

    text
}

/// Cut styled segments down to `max_cols` display columns.
///
/// Control characters are shown as spaces so tabs cannot push text
/// past the computed width.
fn clip_segments(text: &str, segments: &[Segment], max_cols: usize) -> Vec<(String, Style)> {
    let mut pieces = Vec::with_capacity(segments.len());
    let mut used = 0;

    for segment in segments {
        if used >= max_cols {
            break;
        }
        let Some(slice) = text.get(segment.start..segment.end) else {
            continue;
        };

        let mut piece = String::with_capacity(slice.len());
        for ch in slice.chars() {
            let ch = if ch.is_control() { ' ' } else { ch };
            let ch_width = ch.width().unwrap_or(1);
            if used + ch_width > max_cols {
                used = max_cols;
                break;
            }
            piece.push(ch);
            used += ch_width;
        }
        if !piece.is_empty() {
            pieces.push((piece, segment.style));
        }
    }

    pieces
}

fn display_width(s: &str) -> usize {
    s.chars().map(|ch| ch.width().unwrap_or(1)).sum()
}

/// Truncate a string to fit within a display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}
