use crate::error::SurfaceError;

/// What an element is tagged as on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Slide,    // One member of the slide collection
    Previous, // "previous" arrow
    Next,     // "next" arrow
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Shown,
    Hidden,
}

impl Display {
    pub fn shown_if(condition: bool) -> Self {
        if condition { Display::Shown } else { Display::Hidden }
    }

    pub fn is_shown(self) -> bool {
        self == Display::Shown
    }
}

/// The element tree a [`SlideController`](crate::controller::SlideController)
/// reads from and writes to.
///
/// Lookups are expected to be cheap and are repeated on every render, so an
/// implementation must always answer with its current elements. Handles are
/// only required to stay valid until the next lookup.
///
/// Implementations report a missing document or element tree as
/// [`SurfaceError::Unavailable`], a failed query as
/// [`SurfaceError::LookupFailed`], and a stale handle as
/// [`SurfaceError::UnknownElement`].
pub trait RenderingSurface {
    type Element: Copy + std::fmt::Debug;

    /// All elements with `role`, in document order.
    fn find_all(&self, role: Role) -> Result<Vec<Self::Element>, SurfaceError>;

    /// First element with `role`, if there is one.
    fn find_first(&self, role: Role) -> Result<Option<Self::Element>, SurfaceError> {
        Ok(self.find_all(role)?.into_iter().next())
    }

    fn set_display(&mut self, element: Self::Element, display: Display) -> Result<(), SurfaceError>;
}

impl<S: RenderingSurface + ?Sized> RenderingSurface for &mut S {
    type Element = S::Element;

    fn find_all(&self, role: Role) -> Result<Vec<Self::Element>, SurfaceError> {
        (**self).find_all(role)
    }

    fn find_first(&self, role: Role) -> Result<Option<Self::Element>, SurfaceError> {
        (**self).find_first(role)
    }

    fn set_display(&mut self, element: Self::Element, display: Display) -> Result<(), SurfaceError> {
        (**self).set_display(element, display)
    }
}
