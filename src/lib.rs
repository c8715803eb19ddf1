//! Clamped previous/next navigation over a fixed collection of slides.
//!
//! A [`SlideController`] owns the current 1-based slide index and pushes
//! display state onto any [`RenderingSurface`]. [`Stage`] is an in-memory
//! surface used by the viewer and by tests.

pub mod controller;
pub mod error;
pub mod navigation;
pub mod stage;
pub mod surface;

pub use controller::{SlideController, clamp_index};
pub use error::{SlideError, SurfaceError};
pub use navigation::Navigation;
pub use stage::{Stage, StageElement};
pub use surface::{Display, RenderingSurface, Role};
