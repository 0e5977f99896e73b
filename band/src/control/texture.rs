use crate::primitives::{Area, Point};
use crate::surface::{SelectedTexture, Surface, TextureId};

use super::Control;

/// Cached rendering of a control subtree.
///
/// [`Texture::capture_control`] draws a control once into an offscreen
/// texture; every later `draw` blits that texture without running the
/// control's drawing logic. The capture is passive: the caller decides when
/// to capture again.
#[derive(Debug, Default)]
pub struct Texture {
    texture: Option<TextureId>,
    area: Area,
}

impl Texture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `control` at the origin into a fresh texture of its area,
    /// releasing any previous capture first.
    pub fn capture_control<C: Control + ?Sized>(&mut self, surface: &mut dyn Surface, control: &mut C) {
        self.clean_up(surface);

        self.area = control.area(surface);
        let id = surface.create_blank_texture(self.area);
        {
            let mut selected = SelectedTexture::new(surface, id);
            control.draw(Point::ORIGIN, &mut *selected);
        }
        self.texture = Some(id);
        tracing::debug!("captured control into texture {:?} at {:?}", id, self.area);
    }

    /// The captured texture, if any.
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn is_captured(&self) -> bool {
        self.texture.is_some()
    }
}

impl Control for Texture {
    fn area(&self, _surface: &dyn Surface) -> Area {
        if self.texture.is_some() {
            self.area
        } else {
            Area::ZERO
        }
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        if let Some(id) = self.texture {
            surface.draw_texture(id, position);
        }
    }

    fn clean_up(&mut self, surface: &mut dyn Surface) {
        if let Some(id) = self.texture.take() {
            tracing::debug!("releasing captured texture {:?}", id);
            surface.delete_texture(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Rectangle;
    use crate::primitives::{Color, WindowArea};
    use crate::surface::{DrawCommand, HeadlessSurface, Target};

    #[test]
    fn empty_capture_draws_nothing() {
        let mut surface = HeadlessSurface::new(WindowArea::new(100.0, 100.0));
        let mut texture = Texture::new();
        assert_eq!(texture.area(&surface), Area::ZERO);

        surface.start_drawing();
        texture.draw(Point::ORIGIN, &mut surface);
        surface.stop_drawing();
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn capture_draws_into_texture() {
        let mut surface = HeadlessSurface::new(WindowArea::new(100.0, 100.0));
        let mut rectangle = Rectangle::new(Area::pixels(30.0, 20.0), Color::RED);
        let mut texture = Texture::new();

        texture.capture_control(&mut surface, &mut rectangle);
        let id = texture.texture().unwrap();

        assert_eq!(texture.area(&surface), Area::pixels(30.0, 20.0));
        assert_eq!(surface.texture_area(id), Some(Area::pixels(30.0, 20.0)));
        assert_eq!(surface.selected_texture(), None);
        assert_eq!(surface.commands_on(Target::Texture(id)).count(), 1);

        surface.start_drawing();
        texture.draw(Point::pixels(5.0, 6.0), &mut surface);
        surface.stop_drawing();
        assert_eq!(
            surface.commands_on(Target::Window).cloned().collect::<Vec<_>>(),
            vec![DrawCommand::Texture { id, x: 5.0, y: 6.0 }]
        );
    }

    #[test]
    fn recapture_releases_previous_texture() {
        let mut surface = HeadlessSurface::new(WindowArea::new(100.0, 100.0));
        let mut rectangle = Rectangle::new(Area::pixels(10.0, 10.0), Color::RED);
        let mut texture = Texture::new();

        texture.capture_control(&mut surface, &mut rectangle);
        let first = texture.texture().unwrap();
        texture.capture_control(&mut surface, &mut rectangle);
        let second = texture.texture().unwrap();

        assert_ne!(first, second);
        assert!(!surface.has_texture(first));
        assert_eq!(surface.texture_count(), 1);
    }

    #[test]
    fn clean_up_is_idempotent() {
        let mut surface = HeadlessSurface::new(WindowArea::new(100.0, 100.0));
        let mut rectangle = Rectangle::new(Area::pixels(10.0, 10.0), Color::RED);
        let mut texture = Texture::new();
        texture.capture_control(&mut surface, &mut rectangle);

        texture.clean_up(&mut surface);
        texture.clean_up(&mut surface);
        assert_eq!(surface.texture_count(), 0);
        assert!(!texture.is_captured());
        assert_eq!(texture.area(&surface), Area::ZERO);
    }
}
