use crate::dimension::{Dimension, Real};
use crate::primitives::{Alignment, Area, Point, WindowArea};
use crate::surface::Surface;
use crate::control::Control;

/// Positions one child inside a reference area.
///
/// Each axis aligns independently. Horizontally, `Top` is flush left and
/// `Bottom` flush right. The anchor's own area is the reference area, not the
/// child's.
#[derive(Debug, Clone)]
pub struct Anchor<C> {
    horizontal_alignment: Alignment,
    vertical_alignment: Alignment,
    reference_area: Area,
    control: Option<C>,
}

impl<C> Default for Anchor<C> {
    fn default() -> Self {
        Self {
            horizontal_alignment: Alignment::Top,
            vertical_alignment: Alignment::Top,
            reference_area: Area::ZERO,
            control: None,
        }
    }
}

impl<C> Anchor<C> {
    pub fn new(control: C) -> Self {
        Self {
            control: Some(control),
            ..Self::default()
        }
    }

    pub fn horizontal_alignment(&self) -> Alignment {
        self.horizontal_alignment
    }

    pub fn set_horizontal_alignment(&mut self, alignment: Alignment) {
        self.horizontal_alignment = alignment;
    }

    pub fn vertical_alignment(&self) -> Alignment {
        self.vertical_alignment
    }

    pub fn set_vertical_alignment(&mut self, alignment: Alignment) {
        self.vertical_alignment = alignment;
    }

    pub fn reference_area(&self) -> Area {
        self.reference_area
    }

    pub fn set_reference_area(&mut self, area: Area) {
        self.reference_area = area;
    }

    pub fn control(&self) -> Option<&C> {
        self.control.as_ref()
    }

    pub fn control_mut(&mut self) -> Option<&mut C> {
        self.control.as_mut()
    }

    pub fn set_control(&mut self, control: C) {
        self.control = Some(control);
    }

    pub fn take_control(&mut self) -> Option<C> {
        self.control.take()
    }
}

/// Offset of a `child` extent aligned inside a `reference` extent.
fn axis_offset(alignment: Alignment, reference: Dimension, child: Dimension, length: Real) -> Dimension {
    match alignment {
        Alignment::Top => Dimension::ZERO,
        Alignment::Middle | Alignment::Bottom => {
            reference.subtract(child, length).multiply(alignment.factor())
        }
    }
}

/// Where a child of area `child` lands when aligned inside `reference`
/// placed at `position`.
pub(crate) fn aligned_position(
    horizontal: Alignment,
    vertical: Alignment,
    reference: Area,
    child: Area,
    position: Point,
    window: WindowArea,
) -> Point {
    let offset = Point::new(
        axis_offset(horizontal, reference.width, child.width, window.width),
        axis_offset(vertical, reference.height, child.height, window.height),
    );
    position.offset(offset, window)
}

impl<C: Control> Anchor<C> {
    /// The child with the position it is placed at, if there is a child.
    fn placed(&mut self, position: Point, surface: &dyn Surface) -> Option<(&mut C, Point)> {
        let (horizontal, vertical, reference) = (
            self.horizontal_alignment,
            self.vertical_alignment,
            self.reference_area,
        );
        let control = self.control.as_mut()?;
        let position = aligned_position(
            horizontal,
            vertical,
            reference,
            control.area(surface),
            position,
            surface.window_area(),
        );
        Some((control, position))
    }
}

impl<C: Control> Control for Anchor<C> {
    fn area(&self, _surface: &dyn Surface) -> Area {
        self.reference_area
    }

    fn update(&mut self, position: Point, surface: &mut dyn Surface) {
        if let Some((control, position)) = self.placed(position, surface) {
            control.update(position, surface);
        }
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        if let Some((control, position)) = self.placed(position, surface) {
            control.draw(position, surface);
        }
    }

    fn clean_up(&mut self, surface: &mut dyn Surface) {
        if let Some(control) = self.control.as_mut() {
            control.clean_up(surface);
        }
    }
}
