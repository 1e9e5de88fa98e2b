use thiserror::Error;

/// Why the GPU side of the effect could not start.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GpuInitError {
    /// No surface, adapter or device could be acquired on this browser.
    #[error("no GPU context available: {0}")]
    Unavailable(String),
    /// The device came up but the eggs shader or pipeline failed validation.
    #[error("eggs pipeline is invalid: {0}")]
    Pipeline(String),
}

impl GpuInitError {
    /// Only a missing GPU context is the user's browser's fault; a broken
    /// pipeline is logged but not alerted.
    #[inline]
    pub fn alerts_user(&self) -> bool {
        matches!(self, GpuInitError::Unavailable(_))
    }
}
