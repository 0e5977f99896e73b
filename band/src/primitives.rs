//! Core primitive types for Band.
//!
//! Geometry here is expressed in [`Dimension`]s so that it can stay
//! proportional until a surface resolves it. [`WindowArea`] is the one
//! exception: it is always the absolute size of the drawing surface.

use serde::{Deserialize, Serialize};

use crate::dimension::{Dimension, Real};

/// A point in 2D space.
///
/// The positive x axis goes left to right, the positive y axis top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: Dimension,
    pub y: Dimension,
}

impl Point {
    pub const ORIGIN: Self = Self {
        x: Dimension::ZERO,
        y: Dimension::ZERO,
    };

    #[inline]
    pub const fn new(x: Dimension, y: Dimension) -> Self {
        Self { x, y }
    }

    /// Point with both coordinates in pixels.
    #[inline]
    pub const fn pixels(x: Real, y: Real) -> Self {
        Self::new(Dimension::pixel(x), Dimension::pixel(y))
    }

    /// Translate by `offset`, resolving each axis against its window leg.
    pub fn offset(self, offset: Point, window: WindowArea) -> Self {
        Self {
            x: self.x.add(offset.x, window.width),
            y: self.y.add(offset.y, window.height),
        }
    }

    /// Resolve both coordinates to pixels against the window.
    pub fn resolve(self, window: WindowArea) -> (Real, Real) {
        (self.x.resolve(window.width), self.y.resolve(window.height))
    }
}

impl From<(Dimension, Dimension)> for Point {
    fn from((x, y): (Dimension, Dimension)) -> Self {
        Self { x, y }
    }
}

/// A 2D extent in dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Area {
    pub width: Dimension,
    pub height: Dimension,
}

impl Area {
    pub const ZERO: Self = Self {
        width: Dimension::ZERO,
        height: Dimension::ZERO,
    };

    #[inline]
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    /// Area with both legs in pixels.
    #[inline]
    pub const fn pixels(width: Real, height: Real) -> Self {
        Self::new(Dimension::pixel(width), Dimension::pixel(height))
    }

    /// Area with both legs as ratios of the window.
    #[inline]
    pub const fn ratios(width: Real, height: Real) -> Self {
        Self::new(Dimension::ratio(width), Dimension::ratio(height))
    }

    /// Get the leg along `direction`.
    #[inline]
    pub fn along(&self, direction: Direction) -> Dimension {
        match direction {
            Direction::Horizontal => self.width,
            Direction::Vertical => self.height,
        }
    }

    /// Resolve both legs to pixels against the window.
    pub fn resolve(self, window: WindowArea) -> WindowArea {
        WindowArea {
            width: self.width.resolve(window.width),
            height: self.height.resolve(window.height),
        }
    }
}

impl From<(Dimension, Dimension)> for Area {
    fn from((width, height): (Dimension, Dimension)) -> Self {
        Self { width, height }
    }
}

/// Absolute size of a drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowArea {
    pub width: Real,
    pub height: Real,
}

impl WindowArea {
    #[inline]
    pub const fn new(width: Real, height: Real) -> Self {
        Self { width, height }
    }

    /// Length of the requested leg.
    #[inline]
    pub fn leg(&self, leg: Leg) -> Real {
        match leg {
            Leg::Width => self.width,
            Leg::Height => self.height,
        }
    }

    /// Length of the shorter leg.
    #[inline]
    pub fn min_leg(&self) -> Real {
        self.width.min(self.height)
    }
}

impl From<(Real, Real)> for WindowArea {
    fn from((width, height): (Real, Real)) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle spanned by two corners.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    #[inline]
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Rectangle covering `area` with its top-left corner at `origin`.
    pub fn from_origin_area(origin: Point, area: Area, window: WindowArea) -> Self {
        Self {
            top_left: origin,
            bottom_right: Point {
                x: origin.x.add(area.width, window.width),
                y: origin.y.add(area.height, window.height),
            },
        }
    }
}

/// Line segment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

/// Circle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: Dimension,
}

/// Triangle with points in counter-clockwise order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

/// Leg of a rectangle, used to pick the reference length of a ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leg {
    #[default]
    Width,
    Height,
}

/// Alignment within an area.
///
/// For horizontal placement `Top` means flush left and `Bottom` flush right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl Alignment {
    /// Fraction of the free space placed before the aligned content.
    #[inline]
    pub fn factor(self) -> Real {
        match self {
            Alignment::Top => 0.0,
            Alignment::Middle => 0.5,
            Alignment::Bottom => 1.0,
        }
    }
}

/// Direction of flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const RED: Self = Self::rgb(0xff, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 0xff, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 0xff);
    pub const GRAY: Self = Self::rgb(0x80, 0x80, 0x80);

    /// Opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack this color into a u32 (RGBA8 format: R in lowest byte).
    #[inline]
    pub fn pack(&self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    /// Unpack a u32 (RGBA8 format) into a color.
    #[inline]
    pub fn unpack(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_le_bytes();
        Self { r, g, b, a }
    }

    /// Return this color with a different alpha value.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}
