use crate::primitives::Point;
use crate::surface::Surface;

use super::Control;

/// Frame-rate indicator. Takes no space in layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fps;

impl Control for Fps {
    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        surface.draw_fps(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Area, WindowArea};
    use crate::surface::{DrawCommand, HeadlessSurface};

    #[test]
    fn zero_area_and_draws_indicator() {
        let mut surface = HeadlessSurface::new(WindowArea::new(100.0, 100.0));
        let mut fps = Fps;
        assert_eq!(fps.area(&surface), Area::ZERO);

        surface.start_drawing();
        fps.draw(Point::pixels(1.0, 2.0), &mut surface);
        surface.stop_drawing();

        assert!(matches!(
            surface.commands()[0].command,
            DrawCommand::Fps { x, y, .. } if x == 1.0 && y == 2.0
        ));
    }
}
