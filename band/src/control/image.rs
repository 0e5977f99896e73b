use crate::dimension::{Dimension, Real};
use crate::error::{BandError, Result};
use crate::primitives::{Area, Point, WindowArea};
use crate::surface::{ImageId, Surface, TextureId};

use super::Control;

/// A loaded image drawn through a texture of its computed size.
///
/// With both legs set the image is stretched to them. With one leg set the
/// other follows the image's native aspect ratio, clamped so the result
/// never exceeds the window. With neither set the image takes no space.
///
/// The texture is rebuilt lazily: on the first draw, after any setter, and
/// whenever the window area changed since the previous draw.
#[derive(Debug, Default)]
pub struct Image {
    image_id: ImageId,
    width: Option<Dimension>,
    height: Option<Dimension>,

    texture: Option<TextureId>,
    last_window_area: Option<WindowArea>,
    stale: bool,
}

impl Image {
    pub fn new(image_id: ImageId) -> Self {
        Self {
            image_id,
            stale: true,
            ..Self::default()
        }
    }

    pub fn image_id(&self) -> ImageId {
        self.image_id
    }

    pub fn set_image_id(&mut self, id: ImageId) {
        self.image_id = id;
        self.stale = true;
    }

    pub fn width(&self) -> Option<Dimension> {
        self.width
    }

    pub fn set_width(&mut self, width: Option<Dimension>) {
        self.width = width;
        self.stale = true;
    }

    pub fn height(&self) -> Option<Dimension> {
        self.height
    }

    pub fn set_height(&mut self, height: Option<Dimension>) {
        self.height = height;
        self.stale = true;
    }

    /// Texture currently holding the scaled image, if built.
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    /// Compute the area, reporting why it cannot be derived.
    ///
    /// Fails if only one leg is set and the image is unknown to the surface or
    /// has zero native height.
    pub fn try_area(&self, surface: &dyn Surface) -> Result<Area> {
        match (self.width, self.height) {
            (None, None) => Ok(Area::ZERO),
            (Some(width), Some(height)) => Ok(Area::new(width, height)),
            (None, Some(height)) => {
                let window = surface.window_area();
                let aspect_ratio = self.aspect_ratio(surface)?;
                let mut width = height.multiply(aspect_ratio);
                if width.is_ratio() {
                    width = width.to_pixel(window.height);
                }
                if width.scalar > window.width {
                    // The derived leg overflows: clip it and re-derive the
                    // known one.
                    return Ok(Area::pixels(window.width, window.width / aspect_ratio));
                }
                Ok(Area::new(width, height))
            }
            (Some(width), None) => {
                let window = surface.window_area();
                let aspect_ratio = self.aspect_ratio(surface)?;
                let mut height = width.multiply(1.0 / aspect_ratio);
                if height.is_ratio() {
                    height = height.to_pixel(window.width);
                }
                if height.scalar > window.height {
                    return Ok(Area::new(
                        Dimension::pixel(window.height * aspect_ratio),
                        Dimension::pixel(window.height),
                    ));
                }
                Ok(Area::new(width, height))
            }
        }
    }

    fn aspect_ratio(&self, surface: &dyn Surface) -> Result<Real> {
        let native = surface
            .image_area(self.image_id)
            .ok_or(BandError::UnknownImage(self.image_id))?;
        if native.height.scalar == 0.0 {
            return Err(BandError::ZeroImageHeight(self.image_id));
        }
        Ok(native.width.scalar / native.height.scalar)
    }

    fn rebuild(&mut self, surface: &mut dyn Surface) {
        if let Some(old) = self.texture.take() {
            surface.delete_texture(old);
        }
        let window = surface.window_area();
        self.last_window_area = Some(window);
        self.stale = false;

        match self.try_area(surface) {
            Ok(area) => {
                self.texture = surface.create_image_texture(self.image_id, area);
                tracing::debug!(
                    "rebuilt texture {:?} for image {:?} at {:?}",
                    self.texture,
                    self.image_id,
                    area
                );
            }
            Err(e) => tracing::warn!("cannot size image {:?}: {}", self.image_id, e),
        }
    }
}

impl Control for Image {
    fn area(&self, surface: &dyn Surface) -> Area {
        match self.try_area(surface) {
            Ok(area) => area,
            // Containers ask for areas many times a frame; `rebuild` warns.
            Err(e) => {
                tracing::trace!("cannot size image {:?}: {}", self.image_id, e);
                Area::ZERO
            }
        }
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        if self.stale || self.last_window_area != Some(surface.window_area()) {
            self.rebuild(surface);
        }
        if let Some(texture) = self.texture {
            surface.draw_texture(texture, position);
        }
    }

    fn clean_up(&mut self, surface: &mut dyn Surface) {
        if let Some(texture) = self.texture.take() {
            tracing::debug!("releasing image texture {:?}", texture);
            surface.delete_texture(texture);
        }
        self.stale = true;
    }
}
