//! Band: a retained-composition layout engine.
//!
//! Client code builds a tree of controls (panels, buttons, labels, images,
//! anchors) and Band measures, updates and draws that tree onto an abstract
//! [`Surface`] once per frame. There is no layout pass separate from
//! drawing: containers ask children for their area while placing them.
//!
//! # Architecture
//!
//! ```text
//! dimension  ->  primitives  ->  surface (port, decorators, headless)
//!                                    |
//!                control (protocol, leaves)  ->  layout (containers)
//!                                    |
//!                              frame (driver)
//! ```
//!
//! Geometry is expressed in [`Dimension`]s, each either pixels or a ratio of
//! the surface's window area. Ratios stay unresolved until the surface draws
//! them, so a tree written in ratios scales with the window.
//!
//! # Usage
//!
//! ```
//! use band::{AppConfig, Alignment, Anchor, Area, Label, HeadlessSurface, WindowArea};
//!
//! let mut surface = HeadlessSurface::new(WindowArea::new(640.0, 480.0));
//! surface.request_close();
//!
//! let mut root = Anchor::new(Label::new("hello"));
//! root.set_horizontal_alignment(Alignment::Middle);
//! root.set_vertical_alignment(Alignment::Middle);
//! root.set_reference_area(Area::ratios(1.0, 1.0));
//!
//! band::frame::run(&AppConfig::default(), &mut surface, &mut root, |_, _| {});
//! ```

// Core primitives
pub mod dimension;
pub mod primitives;
pub mod error;

// Backend port
#[macro_use]
pub mod surface;

// Control tree
pub mod control;
pub mod layout;
pub mod style;

// Driving frames
pub mod config;
pub mod frame;
pub mod frame_timing;

pub use config::AppConfig;
pub use control::{Border, Control, Empty, Fps, Image, Label, Rectangle, Separator, Texture};
pub use dimension::{Dimension, Real, Unit};
pub use error::{BandError, Result};
pub use layout::{Anchor, Button, ButtonAction, FixedPanel, PaddedPanel, StackPanel};
pub use primitives::{
    Alignment, Area, Circle, Color, Direction, Leg, Line, Point, Rect, Triangle, WindowArea,
};
pub use style::{ControlFactory, Style, StyleField, Styleable, Styler};
pub use surface::{
    Action, DebugSurface, DrawCommand, FontId, HeadlessSurface, ImageId, Recorded,
    SectionSurface, SelectedTexture, Surface, Target, TextureId,
};
