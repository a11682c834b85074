use thiserror::Error;

/// Why a backend could not present a frame. `Lost` and `Outdated` are
/// recoverable by reconfiguring the surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("surface lost")]
    Lost,
    #[error("surface outdated")]
    Outdated,
    #[error("timed out acquiring surface texture")]
    Timeout,
    #[error("out of GPU memory")]
    OutOfMemory,
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("rendering surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("frame failed: {0}")]
    Frame(#[from] FrameError),
}
