use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::primitives::{Alignment, Area, Color, Point};
use crate::surface::{Action, Surface};
use crate::control::{Border, Control, Rectangle};

use super::anchor::aligned_position;

/// What happened to a button during the last update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    #[default]
    None,
    Hover,
    Press,
}

/// A pressable button wrapping an optional child.
///
/// The button is drawn as a filled rectangle, a border, then the child
/// aligned inside. Its area is either set explicitly or follows the child.
///
/// `update` hit-tests the mouse against the button and records the result
/// in [`Button::last_action`]. A disabled button still records hits; callers
/// check [`Button::is_enabled`] before acting on a press.
#[derive(Debug, Clone)]
pub struct Button<C> {
    fill_color: Color,
    hover_color: Color,
    disabled_color: Color,
    border_color: Color,
    horizontal_alignment: Alignment,
    vertical_alignment: Alignment,
    border_thickness: Dimension,
    enabled: bool,
    area: Option<Area>,
    control: Option<C>,
    last_action: ButtonAction,
}

impl<C> Default for Button<C> {
    fn default() -> Self {
        Self {
            fill_color: Color::default(),
            hover_color: Color::default(),
            disabled_color: Color::default(),
            border_color: Color::default(),
            horizontal_alignment: Alignment::Top,
            vertical_alignment: Alignment::Top,
            border_thickness: Dimension::ZERO,
            enabled: true,
            area: None,
            control: None,
            last_action: ButtonAction::None,
        }
    }
}

impl<C> Button<C> {
    pub fn new(control: C) -> Self {
        Self {
            control: Some(control),
            ..Self::default()
        }
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn hover_color(&self) -> Color {
        self.hover_color
    }

    pub fn set_hover_color(&mut self, color: Color) {
        self.hover_color = color;
    }

    pub fn disabled_color(&self) -> Color {
        self.disabled_color
    }

    pub fn set_disabled_color(&mut self, color: Color) {
        self.disabled_color = color;
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
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

    pub fn border_thickness(&self) -> Dimension {
        self.border_thickness
    }

    pub fn set_border_thickness(&mut self, thickness: Dimension) {
        self.border_thickness = thickness;
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Explicit area, or `None` to follow the child.
    pub fn configured_area(&self) -> Option<Area> {
        self.area
    }

    pub fn set_area(&mut self, area: Option<Area>) {
        self.area = area;
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

    pub fn last_action(&self) -> ButtonAction {
        self.last_action
    }

    pub fn is_hovered(&self) -> bool {
        self.last_action != ButtonAction::None
    }

    /// Pressed this frame while enabled.
    pub fn is_pressed(&self) -> bool {
        self.enabled && self.last_action == ButtonAction::Press
    }

    fn fill(&self) -> Color {
        if !self.enabled {
            return self.disabled_color;
        }
        match self.last_action {
            ButtonAction::None => self.fill_color,
            ButtonAction::Hover | ButtonAction::Press => self.hover_color,
        }
    }
}

impl<C: Control> Button<C> {
    fn hit_test(&self, position: Point, surface: &dyn Surface) -> ButtonAction {
        let area = self.area(surface);
        let window = surface.window_area();
        let mouse = surface.mouse_position();

        let right_of_left_edge = mouse.x.greater_or_equal(position.x, window.width);
        let below_top_edge = mouse.y.greater_or_equal(position.y, window.height);
        let left_of_right_edge = position
            .x
            .add(area.width, window.width)
            .greater_or_equal(mouse.x, window.width);
        let above_bottom_edge = position
            .y
            .add(area.height, window.height)
            .greater_or_equal(mouse.y, window.height);

        if !(right_of_left_edge && below_top_edge && left_of_right_edge && above_bottom_edge) {
            ButtonAction::None
        } else if surface.has_action(Action::LeftClick) {
            ButtonAction::Press
        } else {
            ButtonAction::Hover
        }
    }

    /// The child with the position it is placed at, if there is a child.
    fn placed(&mut self, position: Point, surface: &dyn Surface) -> Option<(&mut C, Point)> {
        let area = self.area(surface);
        let (horizontal, vertical) = (self.horizontal_alignment, self.vertical_alignment);
        let control = self.control.as_mut()?;
        let position = aligned_position(
            horizontal,
            vertical,
            area,
            control.area(surface),
            position,
            surface.window_area(),
        );
        Some((control, position))
    }
}

impl<C: Control> Control for Button<C> {
    fn area(&self, surface: &dyn Surface) -> Area {
        match (self.area, self.control.as_ref()) {
            (Some(area), _) => area,
            (None, Some(control)) => control.area(surface),
            (None, None) => Area::ZERO,
        }
    }

    fn update(&mut self, position: Point, surface: &mut dyn Surface) {
        self.last_action = self.hit_test(position, surface);
        if let Some((control, position)) = self.placed(position, surface) {
            control.update(position, surface);
        }
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        let area = self.area(surface);
        Rectangle::new(area, self.fill()).draw(position, surface);
        Border::new(area, self.border_thickness, self.border_color).draw(position, surface);
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
