use crossterm::style::{Color, Stylize};

pub(crate) const HEADING: Color = Color::Cyan;
pub(crate) const TITLE: Color = Color::Yellow;
pub(crate) const GREEN: Color = Color::Green;
pub(crate) const RED: Color = Color::Red;
pub(crate) const YELLOW: Color = Color::Yellow;
pub(crate) const CYAN: Color = Color::Cyan;
pub(crate) const TEXT: Color = Color::White;

/// Colors for terminal output. With `color` off every helper returns plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Theme {
    pub(crate) color: bool,
}

impl Theme {
    pub(crate) fn new(color: bool) -> Self {
        Self { color }
    }

    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Self { color: false }
    }

    pub(crate) fn paint(&self, text: impl Into<String>, color: Color) -> String {
        let text = text.into();
        if self.color {
            text.with(color).bold().to_string()
        } else {
            text
        }
    }

    pub(crate) fn heading(&self, text: impl Into<String>) -> String {
        self.paint(text, HEADING)
    }

    pub(crate) fn title(&self, text: impl Into<String>) -> String {
        self.paint(text, TITLE)
    }

    pub(crate) fn text(&self, text: impl Into<String>) -> String {
        self.paint(text, TEXT)
    }

    pub(crate) fn income(&self, text: impl Into<String>) -> String {
        self.paint(text, GREEN)
    }

    pub(crate) fn expense(&self, text: impl Into<String>) -> String {
        self.paint(text, RED)
    }

    pub(crate) fn balance(&self, text: impl Into<String>) -> String {
        self.paint(text, CYAN)
    }

    pub(crate) fn warning(&self, text: impl Into<String>) -> String {
        self.paint(text, YELLOW)
    }

    pub(crate) fn error(&self, text: impl Into<String>) -> String {
        self.paint(text, RED)
    }

    pub(crate) fn success(&self, text: impl Into<String>) -> String {
        self.paint(text, GREEN)
    }
}
