//! Debug decorator.
//!
//! Draws the FPS indicator on top of every frame, whatever the tree does.

use crate::primitives::Point;

use super::Surface;

/// Surface decorator that draws the FPS indicator right before each frame
/// ends.
///
/// Explicit `draw_fps` calls from the wrapped tree are swallowed so the
/// indicator appears exactly once per frame, above everything else.
pub struct DebugSurface<'a> {
    inner: &'a mut dyn Surface,
}

impl<'a> DebugSurface<'a> {
    pub fn new(inner: &'a mut dyn Surface) -> Self {
        Self { inner }
    }
}

impl Surface for DebugSurface<'_> {
    forward_surface!(
        inner;
        set_target_fps,
        set_window_area,
        set_icon,
        set_title,
        toggle_fullscreen,
        start_drawing,
        load_image,
        delete_image,
        delete_all_images,
        image_area,
        load_font,
        delete_font,
        delete_all_fonts,
        create_blank_texture,
        create_image_texture,
        delete_texture,
        delete_all_textures,
        select_texture,
        unselect_texture,
        draw_texture,
        texture_area,
        clear,
        draw_line,
        draw_circle,
        draw_rectangle,
        draw_triangle,
        draw_text,
        measure_text,
        has_action,
        character_pressed,
        mouse_position,
        window_area,
    );

    fn stop_drawing(&mut self) {
        self.inner.draw_fps(Point::ORIGIN);
        self.inner.stop_drawing();
    }

    fn draw_fps(&mut self, _position: Point) {}
}
