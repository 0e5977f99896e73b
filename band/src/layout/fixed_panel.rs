use crate::primitives::{Area, Point};
use crate::surface::Surface;
use crate::control::Control;

/// Places each child at an explicit offset from the panel's position.
///
/// There is no reflow: the panel's area is the bounding box of every child
/// placed at its offset.
#[derive(Debug, Clone)]
pub struct FixedPanel<C> {
    controls: Vec<(C, Point)>,
}

impl<C> Default for FixedPanel<C> {
    fn default() -> Self {
        Self {
            controls: Vec::new(),
        }
    }
}

impl<C> FixedPanel<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controls(&self) -> &[(C, Point)] {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut [(C, Point)] {
        &mut self.controls
    }

    pub fn set_controls(&mut self, controls: impl IntoIterator<Item = (C, Point)>) {
        self.controls = controls.into_iter().collect();
    }

    pub fn push(&mut self, control: C, offset: Point) {
        self.controls.push((control, offset));
    }

    pub fn take_controls(&mut self) -> Vec<(C, Point)> {
        std::mem::take(&mut self.controls)
    }
}

impl<C: Control> Control for FixedPanel<C> {
    fn area(&self, surface: &dyn Surface) -> Area {
        let window = surface.window_area();
        self.controls
            .iter()
            .fold(Area::ZERO, |bounds, (control, offset)| {
                let area = control.area(surface);
                Area::new(
                    bounds
                        .width
                        .max(offset.x.add(area.width, window.width), window.width),
                    bounds
                        .height
                        .max(offset.y.add(area.height, window.height), window.height),
                )
            })
    }

    fn update(&mut self, position: Point, surface: &mut dyn Surface) {
        for (control, offset) in self.controls.iter_mut() {
            let at = position.offset(*offset, surface.window_area());
            control.update(at, surface);
        }
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        for (control, offset) in self.controls.iter_mut() {
            let at = position.offset(*offset, surface.window_area());
            control.draw(at, surface);
        }
    }

    fn clean_up(&mut self, surface: &mut dyn Surface) {
        for (control, _) in self.controls.iter_mut() {
            control.clean_up(surface);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Rectangle;
    use crate::dimension::{Dimension, Real};
    use crate::primitives::{Color, WindowArea};
    use crate::surface::{DrawCommand, HeadlessSurface};

    fn panel() -> FixedPanel<Rectangle> {
        let mut panel = FixedPanel::new();
        panel.push(Rectangle::new(Area::pixels(10.0, 10.0), Color::RED), Point::pixels(0.0, 40.0));
        panel.push(
            Rectangle::new(Area::pixels(20.0, 5.0), Color::GREEN),
            Point::new(Dimension::ratio(0.5), Dimension::pixel(0.0)),
        );
        panel
    }

    #[test]
    fn area_is_bounding_box() {
        let surface = HeadlessSurface::new(WindowArea::new(100.0, 100.0));
        assert_eq!(panel().area(&surface), Area::pixels(70.0, 50.0));
    }

    #[test]
    fn children_draw_at_offsets() {
        let mut surface = HeadlessSurface::new(WindowArea::new(100.0, 100.0));
        let mut panel = panel();

        surface.start_drawing();
        panel.draw(Point::pixels(5.0, 5.0), &mut surface);
        surface.stop_drawing();

        let at: Vec<(Real, Real)> = surface
            .commands()
            .iter()
            .filter_map(|r| match r.command {
                DrawCommand::Rectangle { x, y, .. } => Some((x, y)),
                _ => None,
            })
            .collect();
        assert_eq!(at, vec![(5.0, 45.0), (55.0, 5.0)]);
    }
}
