use trellis_layout::{Color, TextAlignment, TextTrimming, TextWrapping, Thickness};

use crate::visual::{CommonProps, Visual};

/// A run of text with typographic properties.
#[derive(Debug)]
pub struct TextBlock {
    pub common: CommonProps,
    pub text: String,
    pub font_size: f64,
    pub foreground: Option<Color>,
    pub wrapping: TextWrapping,
    pub trimming: TextTrimming,
    pub text_alignment: TextAlignment,
    pub line_height: Option<f64>,
    pub max_lines: Option<usize>,
    pub padding: Thickness,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            common: CommonProps::default(),
            text: text.into(),
            font_size: 14.0,
            foreground: None,
            wrapping: TextWrapping::default(),
            trimming: TextTrimming::default(),
            text_alignment: TextAlignment::default(),
            line_height: None,
            max_lines: None,
            padding: Thickness::default(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn wrapping(mut self, wrapping: TextWrapping) -> Self {
        self.wrapping = wrapping;
        self
    }

    pub fn trimming(mut self, trimming: TextTrimming) -> Self {
        self.trimming = trimming;
        self
    }

    pub fn text_alignment(mut self, alignment: TextAlignment) -> Self {
        self.text_alignment = alignment;
        self
    }

    /// Explicit line height; unset means the font's natural line height.
    pub fn line_height(mut self, height: f64) -> Self {
        self.line_height = Some(height);
        self
    }

    /// Cap on rendered lines; unset means unlimited.
    pub fn max_lines(mut self, lines: usize) -> Self {
        self.max_lines = Some(lines);
        self
    }

    pub fn padding(mut self, padding: impl Into<Thickness>) -> Self {
        self.padding = padding.into();
        self
    }
}

impl Visual for TextBlock {
    fn common(&self) -> &CommonProps {
        &self.common
    }
    fn common_mut(&mut self) -> &mut CommonProps {
        &mut self.common
    }
}
