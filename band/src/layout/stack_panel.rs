use crate::dimension::Dimension;
use crate::primitives::{Alignment, Area, Direction, Point, WindowArea};
use crate::surface::Surface;
use crate::control::Control;

use super::Anchor;

/// Lays children out one after another along a direction.
///
/// Along the stacking axis the panel is as long as its children combined;
/// across it, as wide as its widest child. Each child is aligned across the
/// panel with the configured alignment and flush along the stacking axis.
#[derive(Debug, Clone)]
pub struct StackPanel<C> {
    alignment: Alignment,
    direction: Direction,
    controls: Vec<C>,
}

impl<C> Default for StackPanel<C> {
    fn default() -> Self {
        Self {
            alignment: Alignment::Top,
            direction: Direction::Horizontal,
            controls: Vec::new(),
        }
    }
}

impl<C> StackPanel<C> {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.alignment = alignment;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn controls(&self) -> &[C] {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut [C] {
        &mut self.controls
    }

    pub fn set_controls(&mut self, controls: impl IntoIterator<Item = C>) {
        self.controls = controls.into_iter().collect();
    }

    pub fn push(&mut self, control: C) {
        self.controls.push(control);
    }

    /// Remove and return every child.
    pub fn take_controls(&mut self) -> Vec<C> {
        std::mem::take(&mut self.controls)
    }
}

impl<C: Control> StackPanel<C> {
    /// Visit each child with the transient anchor that places it and the
    /// position of its slot.
    fn for_each_slot(
        &mut self,
        position: Point,
        surface: &mut dyn Surface,
        mut visit: impl FnMut(&mut Anchor<&mut C>, Point, &mut dyn Surface),
    ) {
        let total = self.area(surface);
        let window = surface.window_area();
        let (horizontal, vertical) = match self.direction {
            Direction::Vertical => (self.alignment, Alignment::Top),
            Direction::Horizontal => (Alignment::Top, self.alignment),
        };
        let direction = self.direction;

        let mut cursor = position;
        for control in self.controls.iter_mut() {
            let extent = control.area(surface);
            let reference = match direction {
                Direction::Vertical => Area::new(total.width, extent.height),
                Direction::Horizontal => Area::new(extent.width, total.height),
            };

            let mut anchor = Anchor::new(control);
            anchor.set_horizontal_alignment(horizontal);
            anchor.set_vertical_alignment(vertical);
            anchor.set_reference_area(reference);
            visit(&mut anchor, cursor, surface);

            cursor = advance(cursor, extent, direction, window);
        }
    }
}

fn advance(cursor: Point, extent: Area, direction: Direction, window: WindowArea) -> Point {
    match direction {
        Direction::Vertical => Point::new(cursor.x, cursor.y.add(extent.height, window.height)),
        Direction::Horizontal => Point::new(cursor.x.add(extent.width, window.width), cursor.y),
    }
}

impl<C: Control> Control for StackPanel<C> {
    fn area(&self, surface: &dyn Surface) -> Area {
        let window = surface.window_area();
        self.controls.iter().fold(Area::ZERO, |total, control| {
            let extent = control.area(surface);
            match self.direction {
                Direction::Vertical => Area::new(
                    total.width.max(extent.width, window.width),
                    total.height.add(extent.height, window.height),
                ),
                Direction::Horizontal => Area::new(
                    total.width.add(extent.width, window.width),
                    total.height.max(extent.height, window.height),
                ),
            }
        })
    }

    fn update(&mut self, position: Point, surface: &mut dyn Surface) {
        self.for_each_slot(position, surface, |anchor, at, surface| anchor.update(at, surface));
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        self.for_each_slot(position, surface, |anchor, at, surface| anchor.draw(at, surface));
    }

    fn clean_up(&mut self, surface: &mut dyn Surface) {
        for control in self.controls.iter_mut() {
            control.clean_up(surface);
        }
    }
}

impl<C: Control> StackPanel<C> {
    /// Extent of the panel along its stacking axis.
    pub fn length(&self, surface: &dyn Surface) -> Dimension {
        self.area(surface).along(self.direction)
    }
}
