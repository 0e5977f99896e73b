//! Styles.
//!
//! A [`Style`] is a flat record of optional overrides. Applying it to a
//! control calls the control's matching setters in a fixed order and skips
//! unset fields, so the control keeps its own defaults for those.
//!
//! Styles can be read from JSON:
//!
//! ```
//! use band::style::Style;
//!
//! let style = Style::from_json_str(r#"{
//!     "background_color": { "r": 32, "g": 32, "b": 32, "a": 255 },
//!     "horizontal_padding": { "scalar": 0.05, "unit": "ratio" }
//! }"#).unwrap();
//! assert!(style.background_color.is_some());
//! assert!(style.font_size.is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::control::{Border, Empty, Fps, Image, Label, Rectangle, Texture};
use crate::dimension::Dimension;
use crate::error::Result;
use crate::layout::{Anchor, Button, FixedPanel, PaddedPanel, StackPanel};
use crate::primitives::{Area, Color};
use crate::surface::FontId;

/// Optional overrides for freshly built controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_border_thickness: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_border_thickness: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_padding: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_padding: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_id: Option<FontId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,
}

/// One set field of a [`Style`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleField {
    BackgroundColor(Color),
    ForegroundColor(Color),
    BorderColor(Color),
    HorizontalBorderThickness(Dimension),
    VerticalBorderThickness(Dimension),
    HorizontalPadding(Dimension),
    VerticalPadding(Dimension),
    Area(Area),
    FontId(FontId),
    FontSize(Dimension),
}

impl Style {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The set fields, in application order.
    pub fn fields(&self) -> impl Iterator<Item = StyleField> {
        [
            self.background_color.map(StyleField::BackgroundColor),
            self.foreground_color.map(StyleField::ForegroundColor),
            self.border_color.map(StyleField::BorderColor),
            self.horizontal_border_thickness
                .map(StyleField::HorizontalBorderThickness),
            self.vertical_border_thickness
                .map(StyleField::VerticalBorderThickness),
            self.horizontal_padding.map(StyleField::HorizontalPadding),
            self.vertical_padding.map(StyleField::VerticalPadding),
            self.area.map(StyleField::Area),
            self.font_id.map(StyleField::FontId),
            self.font_size.map(StyleField::FontSize),
        ]
        .into_iter()
        .flatten()
    }
}

/// A control that accepts style fields.
///
/// Fields a control has no setter for are ignored.
pub trait Styleable {
    fn apply_style(&mut self, _field: StyleField) {}
}

/// Applies a style to existing controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Styler {
    style: Style,
}

impl Styler {
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn apply(&self, control: &mut dyn Styleable) {
        for field in self.style.fields() {
            control.apply_style(field);
        }
    }
}

/// Builds default controls with a style applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlFactory {
    styler: Styler,
}

impl ControlFactory {
    pub fn new(style: Style) -> Self {
        Self {
            styler: Styler::new(style),
        }
    }

    pub fn create<T: Default + Styleable>(&self) -> T {
        self.style(T::default())
    }

    /// Style an already constructed control.
    pub fn style<T: Styleable>(&self, mut control: T) -> T {
        self.styler.apply(&mut control);
        control
    }
}

// =========================================================================
// Control mappings
// =========================================================================

impl Styleable for Rectangle {
    fn apply_style(&mut self, field: StyleField) {
        match field {
            StyleField::BackgroundColor(color) => self.set_color(color),
            StyleField::Area(area) => self.set_area(area),
            _ => {}
        }
    }
}

impl Styleable for Border {
    fn apply_style(&mut self, field: StyleField) {
        match field {
            StyleField::BorderColor(color) => self.set_color(color),
            StyleField::HorizontalBorderThickness(thickness)
            | StyleField::VerticalBorderThickness(thickness) => self.set_thickness(thickness),
            StyleField::Area(area) => self.set_area(area),
            _ => {}
        }
    }
}

impl Styleable for Label {
    fn apply_style(&mut self, field: StyleField) {
        match field {
            StyleField::ForegroundColor(color) => self.set_font_color(color),
            StyleField::FontId(id) => self.set_font_id(id),
            StyleField::FontSize(size) => self.set_font_size(size),
            _ => {}
        }
    }
}

impl Styleable for Image {
    fn apply_style(&mut self, field: StyleField) {
        if let StyleField::Area(area) = field {
            self.set_width(Some(area.width));
            self.set_height(Some(area.height));
        }
    }
}

impl<C> Styleable for Anchor<C> {
    fn apply_style(&mut self, field: StyleField) {
        if let StyleField::Area(area) = field {
            self.set_reference_area(area);
        }
    }
}

impl<C> Styleable for PaddedPanel<C> {
    fn apply_style(&mut self, field: StyleField) {
        match field {
            StyleField::HorizontalPadding(padding) => self.set_horizontal_padding(padding),
            StyleField::VerticalPadding(padding) => self.set_vertical_padding(padding),
            StyleField::Area(area) => self.set_reference_area(area),
            _ => {}
        }
    }
}

impl<C> Styleable for Button<C> {
    fn apply_style(&mut self, field: StyleField) {
        match field {
            StyleField::BackgroundColor(color) => self.set_fill_color(color),
            StyleField::ForegroundColor(color) => self.set_hover_color(color),
            StyleField::BorderColor(color) => self.set_border_color(color),
            StyleField::HorizontalBorderThickness(thickness)
            | StyleField::VerticalBorderThickness(thickness) => self.set_border_thickness(thickness),
            StyleField::Area(area) => self.set_area(Some(area)),
            _ => {}
        }
    }
}

// No style fields apply to these.
impl Styleable for Empty {}
impl Styleable for Fps {}
impl Styleable for Texture {}
impl<C> Styleable for StackPanel<C> {}
impl<C> Styleable for FixedPanel<C> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every field it is handed.
    #[derive(Default)]
    struct Recorder(Vec<StyleField>);

    impl Styleable for Recorder {
        fn apply_style(&mut self, field: StyleField) {
            self.0.push(field);
        }
    }

    #[test]
    fn fields_apply_in_fixed_order() {
        let style = Style {
            font_size: Some(Dimension::pixel(12.0)),
            area: Some(Area::pixels(1.0, 2.0)),
            background_color: Some(Color::RED),
            vertical_padding: Some(Dimension::pixel(3.0)),
            ..Style::default()
        };
        let mut recorder = Recorder::default();
        Styler::new(style).apply(&mut recorder);
        assert_eq!(
            recorder.0,
            vec![
                StyleField::BackgroundColor(Color::RED),
                StyleField::VerticalPadding(Dimension::pixel(3.0)),
                StyleField::Area(Area::pixels(1.0, 2.0)),
                StyleField::FontSize(Dimension::pixel(12.0)),
            ]
        );
    }

    #[test]
    fn empty_style_leaves_defaults() {
        let label: Label = ControlFactory::default().create();
        assert_eq!(label, Label::default());
    }

    #[test]
    fn factory_styles_label() {
        let factory = ControlFactory::new(Style {
            foreground_color: Some(Color::GREEN),
            font_size: Some(Dimension::ratio(0.05)),
            font_id: Some(FontId(3)),
            background_color: Some(Color::RED),
            ..Style::default()
        });
        let label: Label = factory.create();
        assert_eq!(label.font_color(), Color::GREEN);
        assert_eq!(label.font_size(), Dimension::ratio(0.05));
        assert_eq!(label.font_id(), FontId(3));
    }

    #[test]
    fn factory_styles_button() {
        let factory = ControlFactory::new(Style {
            background_color: Some(Color::BLUE),
            border_color: Some(Color::WHITE),
            horizontal_border_thickness: Some(Dimension::pixel(1.0)),
            vertical_border_thickness: Some(Dimension::pixel(2.0)),
            area: Some(Area::pixels(80.0, 20.0)),
            ..Style::default()
        });
        let button: Button<Label> = factory.style(Button::new(Label::new("go")));
        assert_eq!(button.fill_color(), Color::BLUE);
        assert_eq!(button.border_color(), Color::WHITE);
        // Vertical thickness is applied after horizontal.
        assert_eq!(button.border_thickness(), Dimension::pixel(2.0));
        assert_eq!(button.configured_area(), Some(Area::pixels(80.0, 20.0)));
    }

    #[test]
    fn factory_styles_padded_panel() {
        let factory = ControlFactory::new(Style {
            horizontal_padding: Some(Dimension::pixel(4.0)),
            vertical_padding: Some(Dimension::ratio(0.1)),
            area: Some(Area::ratios(1.0, 1.0)),
            ..Style::default()
        });
        let panel: PaddedPanel<Label> = factory.create();
        assert_eq!(panel.horizontal_padding(), Dimension::pixel(4.0));
        assert_eq!(panel.vertical_padding(), Dimension::ratio(0.1));
        assert_eq!(panel.reference_area(), Area::ratios(1.0, 1.0));
    }

    #[test]
    fn factory_builds_unstyled_containers() {
        let factory = ControlFactory::new(Style {
            background_color: Some(Color::RED),
            area: Some(Area::pixels(10.0, 10.0)),
            ..Style::default()
        });
        let stack: StackPanel<Label> = factory.create();
        let fixed: FixedPanel<Rectangle> = factory.create();
        let capture: Texture = factory.create();
        assert!(stack.controls().is_empty());
        assert!(fixed.controls().is_empty());
        assert!(!capture.is_captured());
        let _: Fps = factory.create();
        let _: Empty = factory.create();
    }

    #[test]
    fn style_from_json() {
        let style = Style::from_json_str(
            r#"{
                "border_color": { "r": 1, "g": 2, "b": 3, "a": 4 },
                "font_size": { "scalar": 0.5, "unit": "ratio" },
                "area": {
                    "width": { "scalar": 10.0 },
                    "height": { "scalar": 0.5, "unit": "ratio" }
                },
                "font_id": 2
            }"#,
        )
        .unwrap();
        assert_eq!(style.border_color, Some(Color::rgba(1, 2, 3, 4)));
        assert_eq!(style.font_size, Some(Dimension::ratio(0.5)));
        assert_eq!(
            style.area,
            Some(Area::new(Dimension::pixel(10.0), Dimension::ratio(0.5)))
        );
        assert_eq!(style.font_id, Some(FontId(2)));
        assert_eq!(style.fields().count(), 4);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = Style::from_json_str("{ \"font_size\": 3 }").unwrap_err();
        assert!(matches!(err, crate::error::BandError::Config(_)));
    }
}
