//! Forwarding helper for surface decorators.

/// Generate [`Surface`](crate::surface::Surface) methods that forward to a
/// wrapped surface stored in `self.$field`.
///
/// List every method the decorator does not override:
///
/// ```ignore
/// impl Surface for Tinted<'_> {
///     forward_surface!(inner; set_target_fps, set_window_area, /* ... */);
///
///     fn clear(&mut self, _color: Color) {
///         self.inner.clear(self.tint);
///     }
/// }
/// ```
#[macro_export]
macro_rules! forward_surface {
    (@one $field:ident set_target_fps) => {
        fn set_target_fps(&mut self, fps: u32) {
            self.$field.set_target_fps(fps)
        }
    };
    (@one $field:ident set_window_area) => {
        fn set_window_area(&mut self, area: $crate::primitives::WindowArea) {
            self.$field.set_window_area(area)
        }
    };
    (@one $field:ident set_icon) => {
        fn set_icon(&mut self, id: $crate::surface::ImageId) {
            self.$field.set_icon(id)
        }
    };
    (@one $field:ident set_title) => {
        fn set_title(&mut self, title: &str) {
            self.$field.set_title(title)
        }
    };
    (@one $field:ident toggle_fullscreen) => {
        fn toggle_fullscreen(&mut self) {
            self.$field.toggle_fullscreen()
        }
    };
    (@one $field:ident start_drawing) => {
        fn start_drawing(&mut self) {
            self.$field.start_drawing()
        }
    };
    (@one $field:ident stop_drawing) => {
        fn stop_drawing(&mut self) {
            self.$field.stop_drawing()
        }
    };
    (@one $field:ident load_image) => {
        fn load_image(&mut self, bytes: &[u8]) -> $crate::error::Result<$crate::surface::ImageId> {
            self.$field.load_image(bytes)
        }
    };
    (@one $field:ident delete_image) => {
        fn delete_image(&mut self, id: $crate::surface::ImageId) {
            self.$field.delete_image(id)
        }
    };
    (@one $field:ident delete_all_images) => {
        fn delete_all_images(&mut self) {
            self.$field.delete_all_images()
        }
    };
    (@one $field:ident image_area) => {
        fn image_area(&self, id: $crate::surface::ImageId) -> Option<$crate::primitives::Area> {
            self.$field.image_area(id)
        }
    };
    (@one $field:ident load_font) => {
        fn load_font(&mut self, bytes: &[u8]) -> $crate::error::Result<$crate::surface::FontId> {
            self.$field.load_font(bytes)
        }
    };
    (@one $field:ident delete_font) => {
        fn delete_font(&mut self, id: $crate::surface::FontId) {
            self.$field.delete_font(id)
        }
    };
    (@one $field:ident delete_all_fonts) => {
        fn delete_all_fonts(&mut self) {
            self.$field.delete_all_fonts()
        }
    };
    (@one $field:ident create_blank_texture) => {
        fn create_blank_texture(&mut self, area: $crate::primitives::Area) -> $crate::surface::TextureId {
            self.$field.create_blank_texture(area)
        }
    };
    (@one $field:ident create_image_texture) => {
        fn create_image_texture(
            &mut self,
            id: $crate::surface::ImageId,
            area: $crate::primitives::Area,
        ) -> Option<$crate::surface::TextureId> {
            self.$field.create_image_texture(id, area)
        }
    };
    (@one $field:ident delete_texture) => {
        fn delete_texture(&mut self, id: $crate::surface::TextureId) {
            self.$field.delete_texture(id)
        }
    };
    (@one $field:ident delete_all_textures) => {
        fn delete_all_textures(&mut self) {
            self.$field.delete_all_textures()
        }
    };
    (@one $field:ident select_texture) => {
        fn select_texture(&mut self, id: $crate::surface::TextureId) -> bool {
            self.$field.select_texture(id)
        }
    };
    (@one $field:ident unselect_texture) => {
        fn unselect_texture(&mut self) {
            self.$field.unselect_texture()
        }
    };
    (@one $field:ident draw_texture) => {
        fn draw_texture(&mut self, id: $crate::surface::TextureId, position: $crate::primitives::Point) {
            self.$field.draw_texture(id, position)
        }
    };
    (@one $field:ident texture_area) => {
        fn texture_area(&self, id: $crate::surface::TextureId) -> Option<$crate::primitives::Area> {
            self.$field.texture_area(id)
        }
    };
    (@one $field:ident clear) => {
        fn clear(&mut self, color: $crate::primitives::Color) {
            self.$field.clear(color)
        }
    };
    (@one $field:ident draw_line) => {
        fn draw_line(
            &mut self,
            line: $crate::primitives::Line,
            thickness: $crate::dimension::Dimension,
            leg: $crate::primitives::Leg,
            color: $crate::primitives::Color,
        ) {
            self.$field.draw_line(line, thickness, leg, color)
        }
    };
    (@one $field:ident draw_circle) => {
        fn draw_circle(
            &mut self,
            circle: $crate::primitives::Circle,
            leg: $crate::primitives::Leg,
            color: $crate::primitives::Color,
        ) {
            self.$field.draw_circle(circle, leg, color)
        }
    };
    (@one $field:ident draw_rectangle) => {
        fn draw_rectangle(&mut self, rect: $crate::primitives::Rect, color: $crate::primitives::Color) {
            self.$field.draw_rectangle(rect, color)
        }
    };
    (@one $field:ident draw_triangle) => {
        fn draw_triangle(&mut self, triangle: $crate::primitives::Triangle, color: $crate::primitives::Color) {
            self.$field.draw_triangle(triangle, color)
        }
    };
    (@one $field:ident draw_text) => {
        fn draw_text(
            &mut self,
            text: &str,
            position: $crate::primitives::Point,
            size: $crate::dimension::Dimension,
            color: $crate::primitives::Color,
            font: $crate::surface::FontId,
        ) {
            self.$field.draw_text(text, position, size, color, font)
        }
    };
    (@one $field:ident draw_fps) => {
        fn draw_fps(&mut self, position: $crate::primitives::Point) {
            self.$field.draw_fps(position)
        }
    };
    (@one $field:ident measure_text) => {
        fn measure_text(
            &self,
            text: &str,
            size: $crate::dimension::Dimension,
            font: $crate::surface::FontId,
        ) -> $crate::primitives::Area {
            self.$field.measure_text(text, size, font)
        }
    };
    (@one $field:ident has_action) => {
        fn has_action(&self, action: $crate::surface::Action) -> bool {
            self.$field.has_action(action)
        }
    };
    (@one $field:ident character_pressed) => {
        fn character_pressed(&self) -> Option<char> {
            self.$field.character_pressed()
        }
    };
    (@one $field:ident mouse_position) => {
        fn mouse_position(&self) -> $crate::primitives::Point {
            self.$field.mouse_position()
        }
    };
    (@one $field:ident window_area) => {
        fn window_area(&self) -> $crate::primitives::WindowArea {
            self.$field.window_area()
        }
    };
    ($field:ident; $($method:ident),+ $(,)?) => {
        $( $crate::forward_surface!(@one $field $method); )+
    };
}
