use crate::surface::Role;

/// Failure reported by a rendering surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("rendering surface is unavailable: {0}")]
    Unavailable(String),

    #[error("no element {0} on the rendering surface")]
    UnknownElement(String),

    #[error("lookup for {role:?} elements failed: {reason}")]
    LookupFailed { role: Role, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SlideError {
    #[error("rendering surface error: {0}")]
    Surface(#[from] SurfaceError),
}
