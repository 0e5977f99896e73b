//! Control protocol.
//!
//! Every visual node implements [`Control`]. A frame runs in two passes over
//! the tree, both driven from the root:
//!
//! 1. **Update** (`update`): recompute transient state such as hit-test
//!    results. Nothing is drawn.
//! 2. **Draw** (`draw`): emit drawing calls, assuming `update` already ran
//!    this frame.
//!
//! `area` is a pure query and may be called any number of times, including
//! from inside a parent's `update` or `draw`, to learn a child's footprint
//! before placing it. There is no separate layout pass.
//!
//! Controls that allocate surface resources release them in `clean_up`,
//! which must be safe to call more than once.

mod border;
mod fps;
mod image;
mod label;
mod rectangle;
mod texture;

use crate::primitives::{Area, Point};
use crate::surface::Surface;

pub use border::Border;
pub use fps::Fps;
pub use image::Image;
pub use label::Label;
pub use rectangle::Rectangle;
pub use texture::Texture;

/// A separator is a plain filled rectangle.
pub type Separator = Rectangle;

/// A node in the control tree.
///
/// All methods have no-op defaults, so a control only implements the passes
/// it takes part in.
pub trait Control {
    /// Footprint of the control on `surface`.
    fn area(&self, _surface: &dyn Surface) -> Area {
        Area::ZERO
    }

    fn update(&mut self, _position: Point, _surface: &mut dyn Surface) {}

    fn draw(&mut self, _position: Point, _surface: &mut dyn Surface) {}

    /// Release every surface resource the control owns.
    fn clean_up(&mut self, _surface: &mut dyn Surface) {}
}

impl<C: Control + ?Sized> Control for Box<C> {
    fn area(&self, surface: &dyn Surface) -> Area {
        (**self).area(surface)
    }

    fn update(&mut self, position: Point, surface: &mut dyn Surface) {
        (**self).update(position, surface)
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        (**self).draw(position, surface)
    }

    fn clean_up(&mut self, surface: &mut dyn Surface) {
        (**self).clean_up(surface)
    }
}

impl<C: Control + ?Sized> Control for &mut C {
    fn area(&self, surface: &dyn Surface) -> Area {
        (**self).area(surface)
    }

    fn update(&mut self, position: Point, surface: &mut dyn Surface) {
        (**self).update(position, surface)
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        (**self).draw(position, surface)
    }

    fn clean_up(&mut self, surface: &mut dyn Surface) {
        (**self).clean_up(surface)
    }
}

/// A control that does nothing and takes no space.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl Control for Empty {}
