use crate::dimension::{Dimension, Real};
use crate::primitives::{Area, Color, Point};
use crate::surface::Surface;

use super::{Control, Rectangle};

/// Four bars framing an area.
///
/// A ratio thickness resolves against the shorter window leg, so the frame
/// stays even on both axes whatever the aspect ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Border {
    area: Area,
    thickness: Dimension,
    color: Color,
}

impl Border {
    pub fn new(area: Area, thickness: Dimension, color: Color) -> Self {
        Self {
            area,
            thickness,
            color,
        }
    }

    pub fn configured_area(&self) -> Area {
        self.area
    }

    pub fn set_area(&mut self, area: Area) {
        self.area = area;
    }

    pub fn thickness(&self) -> Dimension {
        self.thickness
    }

    pub fn set_thickness(&mut self, thickness: Dimension) {
        self.thickness = thickness;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Thickness in pixels on `surface`.
    pub fn real_thickness(&self, surface: &dyn Surface) -> Real {
        self.thickness.resolve(surface.window_area().min_leg())
    }
}

impl Control for Border {
    fn area(&self, _surface: &dyn Surface) -> Area {
        self.area
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        let window = surface.window_area();
        let thickness = Dimension::pixel(self.real_thickness(surface));

        let mut vertical = Rectangle::new(Area::new(thickness, self.area.height), self.color);
        let mut horizontal = Rectangle::new(Area::new(self.area.width, thickness), self.color);

        let top_right = Point::new(
            position
                .x
                .add(self.area.width, window.width)
                .subtract(thickness, window.width),
            position.y,
        );
        let bottom_left = Point::new(
            position.x,
            position
                .y
                .add(self.area.height, window.height)
                .subtract(thickness, window.height),
        );

        vertical.draw(position, surface);
        horizontal.draw(position, surface);
        vertical.draw(top_right, surface);
        horizontal.draw(bottom_left, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::WindowArea;
    use crate::surface::{DrawCommand, HeadlessSurface};

    fn rects(surface: &HeadlessSurface) -> Vec<(Real, Real, Real, Real)> {
        surface
            .commands()
            .iter()
            .filter_map(|r| match r.command {
                DrawCommand::Rectangle {
                    x,
                    y,
                    width,
                    height,
                    ..
                } => Some((x, y, width, height)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn draws_four_bars() {
        let mut surface = HeadlessSurface::new(WindowArea::new(400.0, 300.0));
        let mut border = Border::new(Area::pixels(100.0, 50.0), Dimension::pixel(2.0), Color::WHITE);

        surface.start_drawing();
        border.draw(Point::pixels(10.0, 20.0), &mut surface);
        surface.stop_drawing();

        assert_eq!(
            rects(&surface),
            vec![
                (10.0, 20.0, 2.0, 50.0),
                (10.0, 20.0, 100.0, 2.0),
                (108.0, 20.0, 2.0, 50.0),
                (10.0, 68.0, 100.0, 2.0),
            ]
        );
    }

    #[test]
    fn ratio_thickness_uses_shorter_leg() {
        let surface = HeadlessSurface::new(WindowArea::new(400.0, 200.0));
        let border = Border::new(Area::ZERO, Dimension::ratio(0.05), Color::WHITE);
        assert_eq!(border.real_thickness(&surface), 10.0);

        let surface = HeadlessSurface::new(WindowArea::new(100.0, 800.0));
        assert_eq!(border.real_thickness(&surface), 5.0);
    }

    #[test]
    fn pixel_thickness_is_verbatim() {
        let surface = HeadlessSurface::new(WindowArea::new(400.0, 200.0));
        let border = Border::new(Area::ZERO, Dimension::pixel(3.0), Color::WHITE);
        assert_eq!(border.real_thickness(&surface), 3.0);
    }
}
