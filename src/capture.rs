//! Camera acquisition boundary
//!
//! The capture hardware must be released on every exit path: successful
//! capture, failure, and abandonment of the capture dialog. The session
//! guard owns the acquisition and releases in `Drop`, so no caller can
//! leak the stream.

use tracing::{debug, warn};

use crate::error::CaptureError;

/// Driver for one camera device
pub trait CaptureBackend {
    /// Acquire the underlying stream. May fail on permission denial.
    fn acquire(&mut self) -> Result<(), CaptureError>;

    /// Grab one frame, returning a stored-image reference
    fn capture_frame(&mut self) -> Result<String, CaptureError>;

    /// Stop the stream. Must be safe to call once after `acquire`.
    fn release(&mut self);
}

/// Scoped camera acquisition. Holds the stream open until dropped.
pub struct CaptureSession<'a, B: CaptureBackend + ?Sized> {
    backend: &'a mut B,
}

impl<'a, B: CaptureBackend + ?Sized> CaptureSession<'a, B> {
    /// Open the stream. On failure nothing is held and nothing needs
    /// releasing.
    pub fn open(backend: &'a mut B) -> Result<Self, CaptureError> {
        backend.acquire().map_err(|err| {
            warn!(%err, "camera acquisition failed");
            err
        })?;
        debug!("camera stream acquired");
        Ok(Self { backend })
    }

    /// Grab one frame from the open stream
    pub fn capture(&mut self) -> Result<String, CaptureError> {
        self.backend.capture_frame()
    }
}

impl<B: CaptureBackend + ?Sized> Drop for CaptureSession<'_, B> {
    fn drop(&mut self) {
        self.backend.release();
        debug!("camera stream released");
    }
}

/// Acquire, grab one frame, release. The common path for the capture
/// dialog; release happens whether or not the capture succeeds.
pub fn capture_photo<B: CaptureBackend>(backend: &mut B) -> Result<String, CaptureError> {
    let mut session = CaptureSession::open(backend)?;
    session.capture()
}
