//! Headless surface.
//!
//! An in-memory [`Surface`] that resolves every draw call to pixels and
//! records it instead of rasterizing. It backs the test suite and any tool
//! that needs layout without a window.
//!
//! Recorded commands are kept until drained with
//! [`HeadlessSurface::take_commands`]. A long-running driver should drain
//! them every frame, or memory grows with each frame drawn.
//!
//! Text is measured with a fixed-advance model: each display cell is half the
//! resolved font size wide and each line is one font size tall.

use std::collections::{HashMap, HashSet};

use unicode_width::UnicodeWidthStr;

use crate::dimension::{Dimension, Real};
use crate::error::{BandError, Result};
use crate::frame_timing::FrameClock;
use crate::primitives::{Area, Circle, Color, Leg, Line, Point, Rect, Triangle, WindowArea};

use super::{Action, FontId, ImageId, Surface, TextureId};

/// Width of one display cell relative to the font size.
const ADVANCE_RATIO: Real = 0.5;

/// Where a draw call landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Window,
    Texture(TextureId),
}

/// A draw call with its geometry resolved to pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line {
        from: (Real, Real),
        to: (Real, Real),
        thickness: Real,
        color: Color,
    },
    Circle {
        x: Real,
        y: Real,
        radius: Real,
        color: Color,
    },
    Rectangle {
        x: Real,
        y: Real,
        width: Real,
        height: Real,
        color: Color,
    },
    Triangle {
        points: [(Real, Real); 3],
        color: Color,
    },
    Text {
        text: String,
        x: Real,
        y: Real,
        size: Real,
        color: Color,
        font: FontId,
    },
    Texture {
        id: TextureId,
        x: Real,
        y: Real,
    },
    Fps {
        x: Real,
        y: Real,
        fps: Real,
    },
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    /// Frame number (starting at 1) during which the call was made, or 0
    /// before the first frame.
    pub frame: u64,
    pub target: Target,
    pub command: DrawCommand,
}

#[derive(Debug, Clone, Copy)]
struct ImageEntry {
    width: u32,
    height: u32,
}

#[derive(Debug, Clone, Copy)]
struct TextureEntry {
    area: WindowArea,
    image: Option<ImageId>,
}

/// Recording surface with scripted input.
#[derive(Debug)]
pub struct HeadlessSurface {
    window: WindowArea,
    title: String,
    target_fps: u32,
    fullscreen: bool,
    icon: Option<ImageId>,

    drawing: bool,
    clock: FrameClock,

    images: HashMap<ImageId, ImageEntry>,
    fonts: HashMap<FontId, usize>,
    textures: HashMap<TextureId, TextureEntry>,
    next_id: u32,
    selected: Option<TextureId>,

    commands: Vec<Recorded>,

    actions: HashSet<Action>,
    character: Option<char>,
    mouse: Point,
    close_requested: bool,
}

impl HeadlessSurface {
    /// Create a surface of the given size.
    pub fn new(window: WindowArea) -> Self {
        Self {
            window,
            title: String::new(),
            target_fps: 60,
            fullscreen: false,
            icon: None,
            drawing: false,
            clock: FrameClock::new(),
            images: HashMap::new(),
            fonts: HashMap::new(),
            textures: HashMap::new(),
            next_id: 1,
            selected: None,
            commands: Vec::new(),
            actions: HashSet::new(),
            character: None,
            mouse: Point::ORIGIN,
            close_requested: false,
        }
    }

    // =====================================================================
    // Scripted input
    // =====================================================================

    /// Report `action` until the end of the current frame.
    pub fn press(&mut self, action: Action) {
        self.actions.insert(action);
    }

    /// Report `c` as typed until the end of the current frame.
    pub fn type_character(&mut self, c: char) {
        self.character = Some(c);
    }

    pub fn set_mouse_position(&mut self, position: Point) {
        self.mouse = position;
    }

    /// Report the close action from now on.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    // =====================================================================
    // Inspection
    // =====================================================================

    /// Every draw call recorded so far.
    pub fn commands(&self) -> &[Recorded] {
        &self.commands
    }

    /// Drain the recorded draw calls.
    ///
    /// The buffer is unbounded; call this once per frame when driving the
    /// surface for long.
    pub fn take_commands(&mut self) -> Vec<Recorded> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded draw calls that landed on `target`.
    pub fn commands_on(&self, target: Target) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |r| r.target == target)
            .map(|r| &r.command)
    }

    /// Register a synthetic image of the given native size.
    pub fn insert_image(&mut self, width: u32, height: u32) -> ImageId {
        let id = ImageId(self.mint());
        self.images.insert(id, ImageEntry { width, height });
        id
    }

    /// Number of frames started.
    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn icon(&self) -> Option<ImageId> {
        self.icon
    }

    pub fn selected_texture(&self) -> Option<TextureId> {
        self.selected
    }

    pub fn has_texture(&self, id: TextureId) -> bool {
        self.textures.contains_key(&id)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Image a texture was created from, if any.
    pub fn texture_source(&self, id: TextureId) -> Option<ImageId> {
        self.textures.get(&id).and_then(|t| t.image)
    }

    // =====================================================================
    // Internals
    // =====================================================================

    fn mint(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn resolve(&self, point: Point) -> (Real, Real) {
        point.resolve(self.window)
    }

    fn resolve_leg(&self, dimension: Dimension, leg: Leg) -> Real {
        dimension.resolve(self.window.leg(leg))
    }

    fn record(&mut self, command: DrawCommand) {
        let target = match (self.selected, self.drawing) {
            (Some(id), _) => Target::Texture(id),
            (None, true) => Target::Window,
            (None, false) => {
                tracing::warn!("draw call outside of a frame ignored: {:?}", command);
                return;
            }
        };
        self.commands.push(Recorded {
            frame: self.clock.frames(),
            target,
            command,
        });
    }

    fn knows_font(&self, id: FontId) -> bool {
        id == FontId::DEFAULT || self.fonts.contains_key(&id)
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(WindowArea::new(1024.0, 1024.0))
    }
}

impl Surface for HeadlessSurface {
    fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps;
    }

    fn set_window_area(&mut self, area: WindowArea) {
        self.window = area;
    }

    fn set_icon(&mut self, id: ImageId) {
        if self.images.contains_key(&id) {
            self.icon = Some(id);
        } else {
            tracing::debug!("ignoring unknown icon image {:?}", id);
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    fn start_drawing(&mut self) {
        self.drawing = true;
        self.clock.tick();
    }

    fn stop_drawing(&mut self) {
        if self.selected.is_some() {
            tracing::warn!("frame ended with texture {:?} still selected", self.selected);
            self.selected = None;
        }
        self.drawing = false;
        self.actions.clear();
        self.character = None;
    }

    fn load_image(&mut self, bytes: &[u8]) -> Result<ImageId> {
        let decoded = image::load_from_memory(bytes)?;
        let id = ImageId(self.mint());
        self.images.insert(
            id,
            ImageEntry {
                width: decoded.width(),
                height: decoded.height(),
            },
        );
        tracing::debug!(
            "loaded image {:?} ({}x{})",
            id,
            decoded.width(),
            decoded.height()
        );
        Ok(id)
    }

    fn delete_image(&mut self, id: ImageId) {
        if self.images.remove(&id).is_none() {
            tracing::debug!("ignoring delete of unknown image {:?}", id);
        }
    }

    fn delete_all_images(&mut self) {
        self.images.clear();
    }

    fn image_area(&self, id: ImageId) -> Option<Area> {
        self.images
            .get(&id)
            .map(|image| Area::pixels(image.width as Real, image.height as Real))
    }

    fn load_font(&mut self, bytes: &[u8]) -> Result<FontId> {
        if bytes.is_empty() {
            return Err(BandError::EmptyFont);
        }
        let id = FontId(self.mint());
        self.fonts.insert(id, bytes.len());
        Ok(id)
    }

    fn delete_font(&mut self, id: FontId) {
        if self.fonts.remove(&id).is_none() {
            tracing::debug!("ignoring delete of unknown font {:?}", id);
        }
    }

    fn delete_all_fonts(&mut self) {
        self.fonts.clear();
    }

    fn create_blank_texture(&mut self, area: Area) -> TextureId {
        let id = TextureId(self.mint());
        self.textures.insert(
            id,
            TextureEntry {
                area: area.resolve(self.window),
                image: None,
            },
        );
        id
    }

    fn create_image_texture(&mut self, id: ImageId, area: Area) -> Option<TextureId> {
        if !self.images.contains_key(&id) {
            tracing::debug!("cannot create texture from unknown image {:?}", id);
            return None;
        }
        let texture = TextureId(self.mint());
        self.textures.insert(
            texture,
            TextureEntry {
                area: area.resolve(self.window),
                image: Some(id),
            },
        );
        Some(texture)
    }

    fn delete_texture(&mut self, id: TextureId) {
        if self.textures.remove(&id).is_none() {
            tracing::debug!("ignoring delete of unknown texture {:?}", id);
            return;
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    fn delete_all_textures(&mut self) {
        self.textures.clear();
        self.selected = None;
    }

    fn select_texture(&mut self, id: TextureId) -> bool {
        if let Some(current) = self.selected {
            tracing::warn!(
                "texture {:?} already selected, ignoring nested select of {:?}",
                current,
                id
            );
            return false;
        }
        if !self.textures.contains_key(&id) {
            tracing::debug!("ignoring select of unknown texture {:?}", id);
            return false;
        }
        self.selected = Some(id);
        true
    }

    fn unselect_texture(&mut self) {
        if self.selected.take().is_none() {
            tracing::warn!("unselect without a selected texture");
        }
    }

    fn draw_texture(&mut self, id: TextureId, position: Point) {
        if !self.textures.contains_key(&id) {
            tracing::debug!("ignoring draw of unknown texture {:?}", id);
            return;
        }
        let (x, y) = self.resolve(position);
        self.record(DrawCommand::Texture { id, x, y });
    }

    fn texture_area(&self, id: TextureId) -> Option<Area> {
        self.textures
            .get(&id)
            .map(|t| Area::pixels(t.area.width, t.area.height))
    }

    fn clear(&mut self, color: Color) {
        self.record(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, line: Line, thickness: Dimension, leg: Leg, color: Color) {
        let command = DrawCommand::Line {
            from: self.resolve(line.a),
            to: self.resolve(line.b),
            thickness: self.resolve_leg(thickness, leg),
            color,
        };
        self.record(command);
    }

    fn draw_circle(&mut self, circle: Circle, leg: Leg, color: Color) {
        let (x, y) = self.resolve(circle.center);
        let radius = self.resolve_leg(circle.radius, leg);
        self.record(DrawCommand::Circle { x, y, radius, color });
    }

    fn draw_rectangle(&mut self, rect: Rect, color: Color) {
        let (ax, ay) = self.resolve(rect.top_left);
        let (bx, by) = self.resolve(rect.bottom_right);
        self.record(DrawCommand::Rectangle {
            x: ax,
            y: ay,
            width: bx - ax,
            height: by - ay,
            color,
        });
    }

    fn draw_triangle(&mut self, triangle: Triangle, color: Color) {
        let points = [
            self.resolve(triangle.a),
            self.resolve(triangle.b),
            self.resolve(triangle.c),
        ];
        self.record(DrawCommand::Triangle { points, color });
    }

    fn draw_text(&mut self, text: &str, position: Point, size: Dimension, color: Color, font: FontId) {
        if !self.knows_font(font) {
            tracing::debug!("ignoring text drawn with unknown font {:?}", font);
            return;
        }
        let (x, y) = self.resolve(position);
        let size = size.resolve(self.window.height);
        self.record(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
            font,
        });
    }

    fn draw_fps(&mut self, position: Point) {
        let (x, y) = self.resolve(position);
        let fps = self.clock.fps();
        self.record(DrawCommand::Fps { x, y, fps });
    }

    fn measure_text(&self, text: &str, size: Dimension, font: FontId) -> Area {
        if !self.knows_font(font) {
            return Area::ZERO;
        }
        let size = size.resolve(self.window.height);
        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.split('\n') {
            lines += 1;
            widest = widest.max(UnicodeWidthStr::width(line));
        }
        Area::pixels(widest as Real * size * ADVANCE_RATIO, lines as Real * size)
    }

    fn has_action(&self, action: Action) -> bool {
        if action == Action::Close && self.close_requested {
            return true;
        }
        self.actions.contains(&action)
    }

    fn character_pressed(&self) -> Option<char> {
        self.character
    }

    fn mouse_position(&self) -> Point {
        self.mouse
    }

    fn window_area(&self) -> WindowArea {
        self.window
    }
}
