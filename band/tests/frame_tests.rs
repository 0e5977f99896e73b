//! Integration tests for the frame driver and configuration.

mod common;

use std::io::Write;
use std::panic::{AssertUnwindSafe, catch_unwind};

use band::{
    Action, AppConfig, Area, BandError, Button, Color, Control, Dimension, Direction, DrawCommand,
    HeadlessSurface, Image, Label, Point, Real, StackPanel, Surface, Target, WindowArea,
};
use common::{Counting, init_tracing, png_bytes};

/// Headless surface that clicks on one frame and closes after another.
struct Scripted {
    inner: HeadlessSurface,
    click_on_frame: u64,
    close_after: u64,
}

impl Scripted {
    fn new(window: WindowArea, click_on_frame: u64, close_after: u64) -> Self {
        Self {
            inner: HeadlessSurface::new(window),
            click_on_frame,
            close_after,
        }
    }
}

impl Surface for Scripted {
    band::forward_surface!(
        inner;
        set_target_fps,
        set_window_area,
        set_icon,
        set_title,
        toggle_fullscreen,
        start_drawing,
        stop_drawing,
        load_image,
        delete_image,
        delete_all_images,
        image_area,
        load_font,
        delete_font,
        delete_all_fonts,
        create_blank_texture,
        create_image_texture,
        delete_texture,
        delete_all_textures,
        select_texture,
        unselect_texture,
        draw_texture,
        texture_area,
        clear,
        draw_line,
        draw_circle,
        draw_rectangle,
        draw_triangle,
        draw_text,
        draw_fps,
        measure_text,
        character_pressed,
        mouse_position,
        window_area,
    );

    fn has_action(&self, action: Action) -> bool {
        match action {
            Action::Close => self.inner.frames() >= self.close_after,
            // Updates run before the frame starts.
            Action::LeftClick => self.inner.frames() + 1 == self.click_on_frame,
            _ => self.inner.has_action(action),
        }
    }
}

fn config(width: Real, height: Real) -> AppConfig {
    AppConfig {
        window_area: WindowArea::new(width, height),
        ..AppConfig::default()
    }
}

// =========================================================================
// Frame loop
// =========================================================================

#[test]
fn test_run_reports_button_press_to_callback() {
    init_tracing();
    let mut surface = Scripted::new(WindowArea::new(400.0, 300.0), 2, 3);
    surface.inner.set_mouse_position(Point::pixels(10.0, 10.0));

    let mut button = Button::new(Label::new("press"));
    button.set_area(Some(Area::pixels(100.0, 40.0)));
    let mut root = StackPanel::new(Direction::Vertical);
    root.push(button);

    let mut pressed_on = Vec::new();
    let mut frame = 0;
    band::frame::run(&config(400.0, 300.0), &mut surface, &mut root, |root, _| {
        frame += 1;
        if root.controls()[0].is_pressed() {
            pressed_on.push(frame);
        }
    });

    assert_eq!(pressed_on, vec![2]);
    assert_eq!(surface.inner.frames(), 3);
    assert!(root.controls()[0].is_hovered());
}

#[test]
fn test_run_updates_and_draws_every_frame_then_cleans_up() {
    init_tracing();
    let mut surface = Scripted::new(WindowArea::new(100.0, 100.0), 0, 4);
    let id = surface.load_image(&png_bytes(10, 5)).unwrap();
    let mut image = Image::new(id);
    image.set_width(Some(Dimension::pixel(20.0)));
    let mut root = Counting::new(image);

    band::frame::run(&config(100.0, 100.0), &mut surface, &mut root, |_, _| {});

    assert_eq!(root.updates, 4);
    assert_eq!(root.draws, 4);
    assert_eq!(root.clean_ups, 1);
    assert_eq!(root.last_position, Some(Point::ORIGIN));
    assert_eq!(surface.inner.texture_count(), 0);
    let blits = surface
        .inner
        .commands_on(Target::Window)
        .filter(|c| matches!(c, DrawCommand::Texture { .. }))
        .count();
    assert_eq!(blits, 4);
}

#[test]
fn test_run_rebuilds_image_texture_when_callback_resizes() {
    init_tracing();
    let mut surface = Scripted::new(WindowArea::new(100.0, 100.0), 0, 3);
    let id = surface.load_image(&png_bytes(10, 10)).unwrap();
    let mut image = Image::new(id);
    image.set_width(Some(Dimension::pixel(10.0)));

    let mut frame = 0;
    let mut sizes = Vec::new();
    band::frame::run(&config(100.0, 100.0), &mut surface, &mut image, |image, surface| {
        frame += 1;
        if let Some(texture) = image.texture() {
            sizes.push(surface.texture_area(texture));
        }
        if frame == 2 {
            image.set_width(Some(Dimension::pixel(30.0)));
        }
    });

    assert_eq!(
        sizes,
        vec![Some(Area::pixels(10.0, 10.0)), Some(Area::pixels(30.0, 30.0))]
    );
    assert_eq!(surface.inner.texture_count(), 0);
    assert_eq!(image.texture(), None);
}

#[test]
fn test_run_clears_with_configured_color() {
    init_tracing();
    let mut surface = Scripted::new(WindowArea::new(100.0, 100.0), 0, 2);
    let config = AppConfig {
        clear_color: Color::BLUE,
        title: "cleared".into(),
        ..config(100.0, 100.0)
    };
    let mut root = Label::new("x");

    band::frame::run(&config, &mut surface, &mut root, |_, _| {});

    let clears: Vec<_> = surface
        .inner
        .commands_on(Target::Window)
        .filter(|c| matches!(c, DrawCommand::Clear(_)))
        .cloned()
        .collect();
    assert_eq!(clears, vec![DrawCommand::Clear(Color::BLUE); 2]);
    assert_eq!(surface.inner.title(), "cleared");
}

#[test]
fn test_debug_overlay_draws_fps_last() {
    init_tracing();
    let mut surface = Scripted::new(WindowArea::new(100.0, 100.0), 0, 1);
    let config = AppConfig {
        debug_overlay: true,
        ..config(100.0, 100.0)
    };
    let mut root = Label::new("x");

    band::frame::run(&config, &mut surface, &mut root, |_, _| {});

    let last = surface.inner.commands_on(Target::Window).last().cloned();
    assert!(matches!(last, Some(DrawCommand::Fps { .. })));
}

/// Panics the first time it is drawn.
struct FailsToDraw;

impl Control for FailsToDraw {
    fn area(&self, _surface: &dyn Surface) -> Area {
        Area::pixels(10.0, 10.0)
    }

    fn draw(&mut self, _position: Point, _surface: &mut dyn Surface) {
        panic!("draw failed");
    }
}

#[test]
fn test_run_cleans_up_when_a_control_panics() {
    init_tracing();
    let mut surface = Scripted::new(WindowArea::new(100.0, 100.0), 0, 10);
    let id = surface.load_image(&png_bytes(10, 10)).unwrap();
    let mut image = Image::new(id);
    image.set_width(Some(Dimension::pixel(10.0)));

    let mut root: StackPanel<Box<dyn Control>> = StackPanel::new(Direction::Vertical);
    root.push(Box::new(image));
    root.push(Box::new(FailsToDraw));

    let result = catch_unwind(AssertUnwindSafe(|| {
        band::frame::run(&config(100.0, 100.0), &mut surface, &mut root, |_, _| {});
    }));

    assert!(result.is_err());
    assert_eq!(surface.inner.frames(), 1);
    // The image built its texture before the panic; teardown released it.
    assert!(surface.inner.commands_on(Target::Window).any(|c| matches!(c, DrawCommand::Texture { .. })));
    assert_eq!(surface.inner.texture_count(), 0);
}

// =========================================================================
// Configuration and resources
// =========================================================================

#[test]
fn test_config_loaded_from_file() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "title": "from file", "window_area": {{ "width": 320.0, "height": 240.0 }}, "debug_overlay": true }}"#
    )
    .unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.title, "from file");
    assert_eq!(config.window_area, WindowArea::new(320.0, 240.0));
    assert!(config.debug_overlay);
    assert_eq!(config.target_fps, 60);

    let mut surface = HeadlessSurface::default();
    config.apply(&mut surface);
    assert_eq!(surface.window_area(), WindowArea::new(320.0, 240.0));
}

#[test]
fn test_malformed_config_file_is_config_error() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ \"target_fps\": \"fast\" }}").unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, BandError::Config(_)));
}

#[test]
fn test_resource_loading_errors() {
    init_tracing();
    let mut surface = HeadlessSurface::default();

    assert!(matches!(surface.load_font(&[]), Err(BandError::EmptyFont)));
    assert!(matches!(
        surface.load_image(b"not an image"),
        Err(BandError::ImageDecode(_))
    ));

    let font = surface.load_font(&[0u8; 16]).unwrap();
    let mut label = Label::new("hi");
    label.set_font_id(font);
    surface.start_drawing();
    band::Control::draw(&mut label, Point::ORIGIN, &mut surface);
    surface.stop_drawing();
    assert!(matches!(
        surface.commands_on(Target::Window).next(),
        Some(DrawCommand::Text { font: f, .. }) if *f == font
    ));
}
