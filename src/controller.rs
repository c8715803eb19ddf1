use log::{debug, warn};

use crate::error::SlideError;
use crate::navigation::Navigation;
use crate::surface::{Display, RenderingSurface, Role};

/// Keeps one slide of a surface's slide collection visible and the
/// previous/next arrows in sync with it.
///
/// The index is 1-based. After every successful render over a non-empty
/// collection it lies in `1..=N`; out-of-range requests are clamped, never
/// wrapped or rejected.
pub struct SlideController<S: RenderingSurface> {
    surface: S,
    index: usize,
}

impl<S: RenderingSurface> SlideController<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, index: 1 }
    }

    /// Creates a controller and renders the first slide.
    pub fn mount(surface: S) -> Result<Self, SlideError> {
        let mut controller = Self::new(surface);
        controller.render_at(1)?;
        Ok(controller)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Moves `delta` slides away from the current one, clamped to the
    /// collection.
    pub fn advance_by(&mut self, delta: i64) -> Result<Option<usize>, SlideError> {
        let requested = (self.index as i64).saturating_add(delta);
        self.render_at(requested)
    }

    pub fn navigate(&mut self, navigation: Navigation) -> Result<Option<usize>, SlideError> {
        self.advance_by(navigation.delta())
    }

    /// Shows the slide at `requested` (clamped into `1..=N`) and hides the
    /// others. Returns the effective index, or `None` when the surface has
    /// no slides at all.
    pub fn render_at(&mut self, requested: i64) -> Result<Option<usize>, SlideError> {
        let slides = self.surface.find_all(Role::Slide)?;
        let prev = self.surface.find_first(Role::Previous)?;
        let next = self.surface.find_first(Role::Next)?;

        if slides.is_empty() {
            warn!("render requested at {} but the slide collection is empty", requested);
            for arrow in [prev, next].into_iter().flatten() {
                self.surface.set_display(arrow, Display::Hidden)?;
            }
            self.index = 1;
            return Ok(None);
        }

        let count = slides.len();
        let effective = clamp_index(requested, count);

        for slide in slides.iter() {
            self.surface.set_display(*slide, Display::Hidden)?;
        }
        self.surface.set_display(slides[effective - 1], Display::Shown)?;

        // Hide arrows if there are no more slides to navigate to
        if let Some(prev) = prev {
            self.surface.set_display(prev, Display::shown_if(effective != 1))?;
        }
        if let Some(next) = next {
            self.surface.set_display(next, Display::shown_if(effective != count))?;
        }

        debug!("showing slide {}/{} (requested {})", effective, count, requested);
        self.index = effective;
        Ok(Some(effective))
    }
}

/// Clamps a requested 1-based index into `1..=count`. `count` must be non-zero.
pub fn clamp_index(requested: i64, count: usize) -> usize {
    debug_assert!(count > 0, "cannot clamp into an empty collection");
    if requested > count as i64 {
        count
    } else if requested < 1 {
        1
    } else {
        requested as usize
    }
}
