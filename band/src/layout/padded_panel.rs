use crate::dimension::Dimension;
use crate::primitives::{Area, Point};
use crate::surface::{SectionSurface, Surface};
use crate::control::Control;

/// Wraps one child in padding.
///
/// The child sees a surface whose window area is the padded interior, so it
/// lays out as if the interior were the whole window.
#[derive(Debug, Clone)]
pub struct PaddedPanel<C> {
    horizontal_padding: Dimension,
    vertical_padding: Dimension,
    reference_area: Area,
    control: Option<C>,
}

impl<C> Default for PaddedPanel<C> {
    fn default() -> Self {
        Self {
            horizontal_padding: Dimension::ZERO,
            vertical_padding: Dimension::ZERO,
            reference_area: Area::ZERO,
            control: None,
        }
    }
}

impl<C> PaddedPanel<C> {
    pub fn new(control: C) -> Self {
        Self {
            control: Some(control),
            ..Self::default()
        }
    }

    pub fn horizontal_padding(&self) -> Dimension {
        self.horizontal_padding
    }

    pub fn set_horizontal_padding(&mut self, padding: Dimension) {
        self.horizontal_padding = padding;
    }

    pub fn vertical_padding(&self) -> Dimension {
        self.vertical_padding
    }

    pub fn set_vertical_padding(&mut self, padding: Dimension) {
        self.vertical_padding = padding;
    }

    /// Outer area, padding included.
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

    /// Interior area and child position for a panel placed at `position`.
    fn interior(&self, position: Point, surface: &dyn Surface) -> (Area, Point) {
        let window = surface.window_area();
        let interior = Area::new(
            self.reference_area
                .width
                .subtract(self.horizontal_padding.multiply(2.0), window.width),
            self.reference_area
                .height
                .subtract(self.vertical_padding.multiply(2.0), window.height),
        );
        let offset = Point::new(self.horizontal_padding, self.vertical_padding);
        (interior, position.offset(offset, window))
    }
}

impl<C: Control> Control for PaddedPanel<C> {
    fn area(&self, _surface: &dyn Surface) -> Area {
        self.reference_area
    }

    fn update(&mut self, position: Point, surface: &mut dyn Surface) {
        let (interior, at) = self.interior(position, surface);
        if let Some(control) = self.control.as_mut() {
            let mut section = SectionSurface::new(surface, interior);
            control.update(at, &mut section);
        }
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        let (interior, at) = self.interior(position, surface);
        if let Some(control) = self.control.as_mut() {
            let mut section = SectionSurface::new(surface, interior);
            control.draw(at, &mut section);
        }
    }

    fn clean_up(&mut self, surface: &mut dyn Surface) {
        if let Some(control) = self.control.as_mut() {
            control.clean_up(surface);
        }
    }
}
