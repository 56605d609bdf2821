//! Chat text: plain content plus an optional named color.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextComponent {
    content: String,
    color: Option<NamedColor>,
}

impl TextComponent {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: None,
        }
    }

    #[must_use]
    pub fn color_named(mut self, color: NamedColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn color(&self) -> Option<NamedColor> {
        self.color
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}
