use crate::primitives::{Area, Color, Point, Rect};
use crate::surface::Surface;

use super::Control;

/// Solid fill of a configured area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    area: Area,
    color: Color,
}

impl Rectangle {
    pub fn new(area: Area, color: Color) -> Self {
        Self { area, color }
    }

    pub fn configured_area(&self) -> Area {
        self.area
    }

    pub fn set_area(&mut self, area: Area) {
        self.area = area;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Control for Rectangle {
    fn area(&self, _surface: &dyn Surface) -> Area {
        self.area
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        let rect = Rect::from_origin_area(position, self.area, surface.window_area());
        surface.draw_rectangle(rect, self.color);
    }
}
