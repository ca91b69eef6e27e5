//! Viewer state and main loop

use std::path::{Path, PathBuf};

use crossterm::event::KeyEvent;

use crate::config::Config;
use crate::display::{Display, DisplayOptions, Frame};
use crate::document::LogDocument;
use crate::error::Result;
use crate::highlight::{LineAnnotator, SearchState};
use crate::input::{translate_browse, translate_prompt, Action, PromptKey};
use crate::terminal::{TermEvent, Terminal};
use crate::window::Viewport;

/// Rows reserved below the document: mode line and minibuffer
const RESERVED_ROWS: u16 = 2;

/// What to do when the prompt is submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Search,
    OpenFile,
}

impl PromptKind {
    fn label(&self) -> &'static str {
        match self {
            PromptKind::Search => "Search",
            PromptKind::OpenFile => "Open file",
        }
    }
}

/// Minibuffer prompt state
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

/// Everything the single viewer screen owns
pub struct Viewer {
    /// Loaded document, if any
    pub document: Option<LogDocument>,
    pub viewport: Viewport,
    pub display: Display,
    pub annotator: LineAnnotator,
    pub search: SearchState,
    pub prompt: Option<Prompt>,
    /// Persisted preferences
    pub config: Config,
    /// Where preference changes are written; None disables saving
    prefs_path: Option<PathBuf>,
    /// Whether the viewer is running
    pub running: bool,
}

impl Viewer {
    /// Create a viewer for a screen `rows` tall
    pub fn new(config: Config, options: DisplayOptions, prefs_path: Option<PathBuf>, rows: u16) -> Self {
        let annotator = LineAnnotator::with_palette(config.palette());
        Self {
            document: None,
            viewport: Viewport::new(rows.saturating_sub(RESERVED_ROWS)),
            display: Display::new(options),
            annotator,
            search: SearchState::default(),
            prompt: None,
            config,
            prefs_path,
            running: true,
        }
    }

    /// Load a file, replacing the current document
    pub fn open_file(&mut self, path: &Path) {
        let document = LogDocument::open(path);
        if document.is_error() {
            self.display.set_message(format!("Could not read {}", path.display()));
        } else {
            self.display.set_message(format!(
                "{}: {} lines",
                document.name(),
                document.line_count()
            ));
        }

        self.document = Some(document);
        self.viewport.reset();
        self.search.clear();
        self.display.request_redraw();
    }

    fn line_count(&self) -> usize {
        self.document.as_ref().map_or(0, LogDocument::line_count)
    }

    /// Run the event loop until quit
    pub fn run(&mut self, terminal: &mut Terminal) -> Result<()> {
        self.resize(terminal.rows());

        while self.running {
            self.render(terminal)?;
            match terminal.read_event()? {
                TermEvent::Key(key) => self.handle_key(key),
                TermEvent::Resize => self.resize(terminal.rows()),
            }
        }

        tracing::info!("viewer exiting");
        Ok(())
    }

    fn render(&mut self, terminal: &mut Terminal) -> Result<()> {
        let frame = Frame {
            document: self.document.as_ref(),
            viewport: &self.viewport,
            annotator: &self.annotator,
            search: &self.search,
            prompt: self
                .prompt
                .as_ref()
                .map(|p| (p.kind.label(), p.input.as_str())),
        };
        self.display.render(terminal, &frame)
    }

    /// Adapt to a new terminal height
    pub fn resize(&mut self, rows: u16) {
        let line_count = self.line_count();
        self.viewport
            .set_height(rows.saturating_sub(RESERVED_ROWS), line_count);
        self.display.request_redraw();
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            if let Some(prompt_key) = translate_prompt(key) {
                self.handle_prompt_key(prompt_key);
            }
        } else if let Some(action) = translate_browse(key) {
            self.display.clear_message();
            self.handle_action(action);
        }
    }

    /// Perform a browse-mode action
    pub fn handle_action(&mut self, action: Action) {
        let line_count = self.line_count();
        match action {
            Action::ScrollUp => self.viewport.scroll_up(1),
            Action::ScrollDown => self.viewport.scroll_down(1, line_count),
            Action::PageUp => self.viewport.page_up(),
            Action::PageDown => self.viewport.page_down(line_count),
            Action::Top => self.viewport.reset(),
            Action::Bottom => self.viewport.scroll_to_end(line_count),
            Action::StartSearch => self.start_prompt(PromptKind::Search),
            Action::OpenFile => self.start_prompt(PromptKind::OpenFile),
            Action::NextMatch => self.step_match(true),
            Action::PrevMatch => self.step_match(false),
            Action::ClearSearch => self.search.clear(),
            Action::ToggleLineNumbers => {
                self.display.options.show_line_numbers = !self.display.options.show_line_numbers;
                self.config.show_line_numbers = self.display.options.show_line_numbers;
                self.save_preferences();
                self.display.request_redraw();
            }
            Action::TextSizeUp | Action::TextSizeDown => {
                let changed = if action == Action::TextSizeUp {
                    self.config.increase_text_size()
                } else {
                    self.config.decrease_text_size()
                };
                if changed {
                    self.display.options.text_size = self.config.text_size;
                    self.save_preferences();
                    self.display.request_redraw();
                }
            }
            Action::Redraw => self.display.request_redraw(),
            Action::Quit => self.running = false,
        }
    }

    fn start_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt {
            kind,
            input: String::new(),
        });
    }

    /// Edit or finish the open prompt
    pub fn handle_prompt_key(&mut self, key: PromptKey) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        match key {
            PromptKey::Insert(ch) => prompt.input.push(ch),
            PromptKey::Backspace => {
                prompt.input.pop();
            }
            PromptKey::Cancel => {
                self.prompt = None;
                self.display.set_message("Cancelled");
            }
            PromptKey::Submit => {
                if let Some(prompt) = self.prompt.take() {
                    match prompt.kind {
                        PromptKind::Search => self.submit_search(prompt.input),
                        PromptKind::OpenFile => {
                            let path = prompt.input.trim();
                            if !path.is_empty() {
                                self.open_file(Path::new(path));
                            }
                        }
                    }
                }
            }
        }
    }

    /// Start a search, selecting the first matching line on or below the top line
    pub fn submit_search(&mut self, query: String) {
        if query.is_empty() {
            self.search.clear();
            return;
        }

        let top = self.viewport.top_line();
        let selected = self
            .document
            .as_ref()
            .and_then(|doc| doc.find_next(&query, top));
        tracing::debug!(query = %query, ?selected, "search");

        if selected.is_none() {
            self.display.set_message(format!("Not found: {}", query));
        }
        self.search = SearchState::new(query, selected);
        self.reveal_selection();
    }

    /// Move the current match to the next or previous matching line
    fn step_match(&mut self, forward: bool) {
        if !self.search.is_active() {
            self.display.set_message("No active search");
            return;
        }
        let Some(document) = self.document.as_ref() else {
            return;
        };
        let count = document.line_count();
        if count == 0 {
            return;
        }

        let query = &self.search.query;
        let found = match (forward, self.search.selected_line) {
            (true, Some(line)) => document.find_next(query, line + 1),
            (true, None) => document.find_next(query, self.viewport.top_line()),
            (false, Some(line)) => document.find_prev(query, line.checked_sub(1).unwrap_or(count - 1)),
            (false, None) => document.find_prev(query, self.viewport.top_line()),
        };

        match found {
            Some(line) => {
                self.search.selected_line = Some(line);
                self.reveal_selection();
            }
            None => self.display.set_message(format!("Not found: {}", self.search.query)),
        }
    }

    fn reveal_selection(&mut self) {
        if let Some(line) = self.search.selected_line {
            let line_count = self.line_count();
            self.viewport.ensure_visible(line, line_count);
        }
    }

    fn save_preferences(&mut self) {
        let Some(path) = self.prefs_path.as_ref() else {
            return;
        };
        if let Err(e) = self.config.save_to(path) {
            tracing::warn!(error = %e, "could not save preferences");
            self.display.set_message(format!("Could not save preferences: {}", e));
        }
    }
}
