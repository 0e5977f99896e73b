use crate::dimension::Dimension;
use crate::primitives::{Area, Color, Point};
use crate::surface::{FontId, Surface};

use super::Control;

/// Default font size in pixels.
pub const DEFAULT_FONT_SIZE: Dimension = Dimension::pixel(20.0);

/// A run of text. Its area is whatever the surface measures.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    font_size: Dimension,
    font_color: Color,
    font_id: FontId,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            font_color: Color::WHITE,
            font_id: FontId::DEFAULT,
        }
    }
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn font_size(&self) -> Dimension {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: Dimension) {
        self.font_size = size;
    }

    pub fn font_color(&self) -> Color {
        self.font_color
    }

    pub fn set_font_color(&mut self, color: Color) {
        self.font_color = color;
    }

    pub fn font_id(&self) -> FontId {
        self.font_id
    }

    pub fn set_font_id(&mut self, id: FontId) {
        self.font_id = id;
    }
}

impl Control for Label {
    fn area(&self, surface: &dyn Surface) -> Area {
        surface.measure_text(&self.text, self.font_size, self.font_id)
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        surface.draw_text(
            &self.text,
            position,
            self.font_size,
            self.font_color,
            self.font_id,
        );
    }
}
