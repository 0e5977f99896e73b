//! Frame driver.
//!
//! A frame is an update pass over the whole tree followed by a draw pass,
//! bracketed by the surface's `start_drawing`/`stop_drawing`. [`run`] loops
//! frames until the surface reports [`Action::Close`] and releases the
//! tree's surface resources on the way out.

use crate::config::AppConfig;
use crate::control::Control;
use crate::frame_timing::measure;
use crate::primitives::{Color, Point};
use crate::surface::{Action, DebugSurface, Surface};

/// Run the update pass from the root control.
pub fn update<C: Control + ?Sized>(position: Point, surface: &mut dyn Surface, control: &mut C) {
    control.update(position, surface);
}

/// Draw one frame of the root control.
///
/// Typically the root is a panel covering the entire window.
pub fn draw_frame<C: Control + ?Sized>(
    clear_color: Color,
    position: Point,
    surface: &mut dyn Surface,
    control: &mut C,
) {
    surface.start_drawing();
    surface.clear(clear_color);
    control.draw(position, surface);
    surface.stop_drawing();
}

/// Cleans up the root control when dropped, including during unwinding.
struct Teardown<'a, C: Control + ?Sized> {
    control: &'a mut C,
    surface: &'a mut dyn Surface,
}

impl<C: Control + ?Sized> Drop for Teardown<'_, C> {
    fn drop(&mut self) {
        tracing::debug!("cleaning up control tree");
        self.control.clean_up(&mut *self.surface);
    }
}

/// Apply `config` to the surface and loop frames until close.
///
/// Each frame runs the update pass, then `callback`, then the draw pass. The
/// callback is where the tree may be mutated: it sees the results of this
/// frame's update (button presses, typed characters) before anything is
/// drawn.
///
/// With [`AppConfig::debug_overlay`] set, the tree is driven through a
/// [`DebugSurface`] so the FPS indicator tops every frame.
pub fn run<C, F>(config: &AppConfig, surface: &mut dyn Surface, control: &mut C, mut callback: F)
where
    C: Control + ?Sized,
    F: FnMut(&mut C, &mut dyn Surface),
{
    config.apply(surface);

    let mut debug_surface;
    let surface: &mut dyn Surface = if config.debug_overlay {
        debug_surface = DebugSurface::new(surface);
        &mut debug_surface
    } else {
        surface
    };

    let mut teardown = Teardown { control, surface };
    let mut frame = 0u64;
    while !teardown.surface.has_action(Action::Close) {
        frame += 1;
        let Teardown { control, surface } = &mut teardown;

        measure("update", frame, || update(Point::ORIGIN, &mut **surface, &mut **control));
        callback(&mut **control, &mut **surface);
        measure("draw", frame, || {
            draw_frame(config.clear_color, Point::ORIGIN, &mut **surface, &mut **control)
        });
    }
    tracing::debug!(frames = frame, "close requested, leaving frame loop");
}
