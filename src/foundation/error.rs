/// Result alias used throughout the crate.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors produced while rendering or exporting the scene.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// The surface could not provide a drawing context (oversized or detached).
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// Invalid input such as out-of-order gradient stops or a bad blur radius.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization or compositing failed.
    #[error("render error: {0}")]
    Render(String),

    /// Encoding or saving the exported image failed.
    #[error("export error: {0}")]
    Export(String),

    /// Anything else, typically I/O from a save target.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::SurfaceUnavailable`].
    pub fn surface_unavailable(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Build a [`SceneError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SceneError::Export`].
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
