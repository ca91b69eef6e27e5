//! Viewport - the visible slice of the document

/// The rows of the document currently on screen
#[derive(Debug)]
pub struct Viewport {
    /// First visible line in the window
    top_line: usize,
    /// Number of text rows in window (excluding mode line)
    height: u16,
}

impl Viewport {
    /// Create a new viewport with the given height
    pub fn new(height: u16) -> Self {
        Self { top_line: 0, height }
    }

    /// Get the top visible line
    pub fn top_line(&self) -> usize {
        self.top_line
    }

    /// Get window height in rows
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Set window height (after a terminal resize)
    pub fn set_height(&mut self, height: u16, line_count: usize) {
        self.height = height;
        self.clamp(line_count);
    }

    /// Go back to the first line
    pub fn reset(&mut self) {
        self.top_line = 0;
    }

    /// Check if a line is visible in the window
    pub fn is_line_visible(&self, line: usize) -> bool {
        line >= self.top_line && line < self.top_line + self.height as usize
    }

    /// Scroll down by `n` lines
    pub fn scroll_down(&mut self, n: usize, line_count: usize) {
        self.top_line = self.top_line.saturating_add(n);
        self.clamp(line_count);
    }

    /// Scroll up by `n` lines
    pub fn scroll_up(&mut self, n: usize) {
        self.top_line = self.top_line.saturating_sub(n);
    }

    /// Scroll one page down, keeping two lines of context
    pub fn page_down(&mut self, line_count: usize) {
        self.scroll_down(self.page_step(), line_count);
    }

    /// Scroll one page up, keeping two lines of context
    pub fn page_up(&mut self) {
        self.scroll_up(self.page_step());
    }

    /// Show the last page
    pub fn scroll_to_end(&mut self, line_count: usize) {
        self.top_line = self.max_top(line_count);
    }

    /// Bring `line` on screen, centering it when it was off screen
    pub fn ensure_visible(&mut self, line: usize, line_count: usize) {
        if self.is_line_visible(line) {
            return;
        }
        self.top_line = line.saturating_sub(self.height as usize / 2);
        self.clamp(line_count);
    }

    fn page_step(&self) -> usize {
        (self.height as usize).saturating_sub(2).max(1)
    }

    fn max_top(&self, line_count: usize) -> usize {
        line_count.saturating_sub(self.height as usize)
    }

    fn clamp(&mut self, line_count: usize) {
        self.top_line = self.top_line.min(self.max_top(line_count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_clamps_to_last_page() {
        let mut view = Viewport::new(10);
        view.scroll_down(5, 12);
        assert_eq!(view.top_line(), 2);

        view.scroll_up(100);
        assert_eq!(view.top_line(), 0);
    }

    #[test]
    fn test_short_document_never_scrolls() {
        let mut view = Viewport::new(10);
        view.page_down(4);
        assert_eq!(view.top_line(), 0);
        view.scroll_to_end(4);
        assert_eq!(view.top_line(), 0);
    }

    #[test]
    fn test_paging() {
        let mut view = Viewport::new(10);
        view.page_down(100);
        assert_eq!(view.top_line(), 8);
        view.page_up();
        assert_eq!(view.top_line(), 0);
        view.scroll_to_end(100);
        assert_eq!(view.top_line(), 90);
    }

    #[test]
    fn test_ensure_visible_centers() {
        let mut view = Viewport::new(10);
        view.ensure_visible(5, 100);
        assert_eq!(view.top_line(), 0);

        view.ensure_visible(50, 100);
        assert_eq!(view.top_line(), 45);
        assert!(view.is_line_visible(50));

        view.ensure_visible(99, 100);
        assert_eq!(view.top_line(), 90);
    }

    #[test]
    fn test_resize_reclamps() {
        let mut view = Viewport::new(5);
        view.scroll_to_end(20);
        assert_eq!(view.top_line(), 15);
        view.set_height(10, 20);
        assert_eq!(view.top_line(), 10);
    }
}
