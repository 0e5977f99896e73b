//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::io::Cursor;

use band::{Area, Control, Point, Surface};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Encode a blank RGBA image as PNG.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    image::RgbaImage::new(width, height)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

/// Wraps a control and counts protocol calls.
pub struct Counting<C> {
    pub inner: C,
    pub updates: usize,
    pub draws: usize,
    pub clean_ups: usize,
    pub last_position: Option<Point>,
}

impl<C> Counting<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            updates: 0,
            draws: 0,
            clean_ups: 0,
            last_position: None,
        }
    }
}

impl<C: Control> Control for Counting<C> {
    fn area(&self, surface: &dyn Surface) -> Area {
        self.inner.area(surface)
    }

    fn update(&mut self, position: Point, surface: &mut dyn Surface) {
        self.updates += 1;
        self.last_position = Some(position);
        self.inner.update(position, surface);
    }

    fn draw(&mut self, position: Point, surface: &mut dyn Surface) {
        self.draws += 1;
        self.last_position = Some(position);
        self.inner.draw(position, surface);
    }

    fn clean_up(&mut self, surface: &mut dyn Surface) {
        self.clean_ups += 1;
        self.inner.clean_up(surface);
    }
}
