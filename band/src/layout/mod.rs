//! Composition controls.
//!
//! These own one or more children and translate or constrain the space the
//! children are drawn in. There is no layout pass: each container asks its
//! children for their [`Control::area`](crate::control::Control::area) while
//! it updates or draws them.
//!
//! Containers are generic over the child type. Use a concrete control for a
//! homogeneous container, or `Box<dyn Control>` to mix kinds.

mod anchor;
mod button;
mod fixed_panel;
mod padded_panel;
mod stack_panel;

pub use anchor::Anchor;
pub use button::{Button, ButtonAction};
pub use fixed_panel::FixedPanel;
pub use padded_panel::PaddedPanel;
pub use stack_panel::StackPanel;
