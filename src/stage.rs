use crate::error::SurfaceError;
use crate::surface::{Display, RenderingSurface, Role};

/// Handle to an element of a [`Stage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageElement {
    Slide(usize),
    Previous,
    Next,
}

struct Slide<T> {
    content: T,
    display: Display,
}

/// In-memory rendering surface: an ordered list of slides with optional
/// previous/next arrows, each carrying a display flag.
///
/// Everything starts shown, like an unstyled page before its first render.
pub struct Stage<T> {
    slides: Vec<Slide<T>>,
    prev: Option<Display>,
    next: Option<Display>,
}

impl<T> Default for Stage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stage<T> {
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            prev: None,
            next: None,
        }
    }

    /// Adds the previous and next arrows.
    pub fn with_affordances(mut self) -> Self {
        self.prev = Some(Display::Shown);
        self.next = Some(Display::Shown);
        self
    }

    pub fn push_slide(&mut self, content: T) {
        self.slides.push(Slide {
            content,
            display: Display::Shown,
        });
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&T> {
        self.slides.get(index).map(|s| &s.content)
    }

    pub fn visible_slides(&self) -> Vec<&T> {
        self.slides
            .iter()
            .filter(|s| s.display.is_shown())
            .map(|s| &s.content)
            .collect()
    }

    /// Missing elements count as hidden.
    pub fn is_shown(&self, element: StageElement) -> bool {
        self.display_of(element).is_some_and(Display::is_shown)
    }

    fn display_of(&self, element: StageElement) -> Option<Display> {
        match element {
            StageElement::Slide(i) => self.slides.get(i).map(|s| s.display),
            StageElement::Previous => self.prev,
            StageElement::Next => self.next,
        }
    }
}

impl<T> RenderingSurface for Stage<T> {
    type Element = StageElement;

    fn find_all(&self, role: Role) -> Result<Vec<StageElement>, SurfaceError> {
        let elements: Vec<StageElement> = match role {
            Role::Slide => (0..self.slides.len()).map(StageElement::Slide).collect(),
            Role::Previous => self.prev.map(|_| StageElement::Previous).into_iter().collect(),
            Role::Next => self.next.map(|_| StageElement::Next).into_iter().collect(),
        };
        Ok(elements)
    }

    fn set_display(&mut self, element: StageElement, display: Display) -> Result<(), SurfaceError> {
        let slot = match element {
            StageElement::Slide(i) => self.slides.get_mut(i).map(|s| &mut s.display),
            StageElement::Previous => self.prev.as_mut(),
            StageElement::Next => self.next.as_mut(),
        };
        match slot {
            Some(slot) => {
                *slot = display;
                Ok(())
            }
            None => Err(SurfaceError::UnknownElement(format!("{:?}", element))),
        }
    }
}
