//! Section decorator.
//!
//! Makes a wrapped subtree believe the window is only as large as a section
//! of the real surface. Only [`Surface::window_area`] changes: drawing and
//! resources still go to the wrapped surface unchanged.

use crate::primitives::{Area, WindowArea};

use super::Surface;

/// Surface decorator that reports `section` as the window area.
///
/// Ratio legs of `section` scale against the wrapped surface's window area;
/// pixel legs pass through verbatim.
pub struct SectionSurface<'a> {
    inner: &'a mut dyn Surface,
    section: Area,
}

impl<'a> SectionSurface<'a> {
    pub fn new(inner: &'a mut dyn Surface, section: Area) -> Self {
        Self { inner, section }
    }

    /// The configured section, before resolution.
    pub fn section(&self) -> Area {
        self.section
    }
}

impl Surface for SectionSurface<'_> {
    forward_surface!(
        inner;
        set_target_fps,
        set_window_area,
        set_icon,
        set_title,
        toggle_fullscreen,
        start_drawing,
        stop_drawing,
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
        draw_fps,
        measure_text,
        has_action,
        character_pressed,
        mouse_position,
    );

    fn window_area(&self) -> WindowArea {
        self.section.resolve(self.inner.window_area())
    }
}
