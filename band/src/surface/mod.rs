//! Surface port.
//!
//! A [`Surface`] is everything the engine needs from a rendering backend:
//! window management, frame bracketing, image/font/texture resources, drawing
//! primitives, text measurement, and input queries.
//!
//! All geometry handed to a surface is in [`Dimension`]s. The surface resolves
//! ratios against its own current [`Surface::window_area`], so controls never
//! assume an absolute size except by asking for it.
//!
//! # Decorators
//!
//! A decorator wraps another surface and forwards every operation except the
//! ones it overrides. [`forward_surface!`](crate::forward_surface) generates
//! the forwarding methods; see [`SectionSurface`] and [`DebugSurface`].

#[macro_use]
mod forward;

mod debug;
mod headless;
mod section;
mod selection;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::Result;
use crate::primitives::{Area, Circle, Color, Leg, Line, Point, Rect, Triangle, WindowArea};

pub use debug::DebugSurface;
pub use headless::{DrawCommand, HeadlessSurface, Recorded, Target};
pub use section::SectionSurface;
pub use selection::SelectedTexture;

/// Opaque handle to an image loaded by a surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ImageId(pub u32);

/// Opaque handle to a font loaded by a surface.
///
/// `FontId::DEFAULT` names the backend's built-in font.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontId(pub u32);

impl FontId {
    pub const DEFAULT: Self = Self(0);
}

/// Opaque handle to a texture created by a surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureId(pub u32);

/// Input actions a surface can report.
///
/// Clicks and close are edge-triggered: they hold for the single frame in
/// which they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    LeftClick,
    RightClick,
    Close,
    Backspace,
}

/// A surface that can be drawn on and receives input.
///
/// `start_drawing` must be called before each frame and `stop_drawing` after
/// it; drawing primitives are only valid in between, or while a texture is
/// selected. At most one texture can be selected at a time: selecting while
/// another is selected is a no-op.
///
/// Unknown resource ids are ignored rather than treated as errors.
pub trait Surface {
    fn set_target_fps(&mut self, fps: u32);
    fn set_window_area(&mut self, area: WindowArea);
    fn set_icon(&mut self, id: ImageId);
    fn set_title(&mut self, title: &str);
    fn toggle_fullscreen(&mut self);

    fn start_drawing(&mut self);
    fn stop_drawing(&mut self);

    /// Decode an image from an in-memory file.
    fn load_image(&mut self, bytes: &[u8]) -> Result<ImageId>;
    fn delete_image(&mut self, id: ImageId);
    fn delete_all_images(&mut self);
    /// Native size of a loaded image, in pixels.
    fn image_area(&self, id: ImageId) -> Option<Area>;

    /// Load a font from an in-memory file.
    fn load_font(&mut self, bytes: &[u8]) -> Result<FontId>;
    fn delete_font(&mut self, id: FontId);
    fn delete_all_fonts(&mut self);

    fn create_blank_texture(&mut self, area: Area) -> TextureId;
    /// Create a texture holding the image scaled into `area`.
    ///
    /// Returns `None` if the image is not loaded.
    fn create_image_texture(&mut self, id: ImageId, area: Area) -> Option<TextureId>;
    fn delete_texture(&mut self, id: TextureId);
    fn delete_all_textures(&mut self);
    /// Redirect subsequent drawing into the texture.
    ///
    /// Returns false when the select was ignored, because another texture
    /// is already selected or the id is unknown.
    fn select_texture(&mut self, id: TextureId) -> bool;
    fn unselect_texture(&mut self);
    fn draw_texture(&mut self, id: TextureId, position: Point);
    /// Size of a texture, in pixels.
    fn texture_area(&self, id: TextureId) -> Option<Area>;

    fn clear(&mut self, color: Color);
    /// Draw a line whose ratio thickness resolves against `leg`.
    fn draw_line(&mut self, line: Line, thickness: Dimension, leg: Leg, color: Color);
    /// Draw a circle whose ratio radius resolves against `leg`.
    fn draw_circle(&mut self, circle: Circle, leg: Leg, color: Color);
    fn draw_rectangle(&mut self, rect: Rect, color: Color);
    /// Draw a triangle with points in counter-clockwise order.
    fn draw_triangle(&mut self, triangle: Triangle, color: Color);
    /// Draw text; a ratio `size` is relative to the window height.
    fn draw_text(&mut self, text: &str, position: Point, size: Dimension, color: Color, font: FontId);
    fn draw_fps(&mut self, position: Point);

    /// Measure text; a ratio `size` is relative to the window height.
    fn measure_text(&self, text: &str, size: Dimension, font: FontId) -> Area;
    fn has_action(&self, action: Action) -> bool;
    fn character_pressed(&self) -> Option<char>;
    fn mouse_position(&self) -> Point;
    /// Absolute size of the surface.
    fn window_area(&self) -> WindowArea;
}
