//! QR scanning session.

use blockgst_ledger::QrPayload;

use crate::camera::{CameraDevice, CameraStream, Facing, ScanError};
use crate::decode::decode_payload;

/// Supplies raw QR text when the current frame contains a decodable code.
///
/// Real devices would run an image decoder here; the in-repo
/// implementation is [`SimulatedDetector`](crate::SimulatedDetector).
pub trait FrameDetector {
    /// Inspect the current frame; `Some` carries the raw code text.
    fn detect(&mut self) -> Option<String>;
}

/// A scanning session over one camera device.
///
/// The session holds at most one acquired stream. `stop` and `Drop` both
/// drain the handle with `take`, which is what guarantees exactly one
/// release per acquire on every exit path.
pub struct ScanSession<'a, C: CameraDevice> {
    camera: &'a C,
    stream: Option<CameraStream>,
}

impl<'a, C: CameraDevice> ScanSession<'a, C> {
    pub fn new(camera: &'a C) -> Self {
        Self {
            camera,
            stream: None,
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.stream.is_some()
    }

    /// Enter scanning mode: open the back camera.
    ///
    /// Acquisition failure surfaces as `DeviceUnavailable` and leaves the
    /// session idle, with nothing to release. Starting an already-live
    /// session is a no-op.
    pub async fn start(&mut self) -> Result<(), ScanError> {
        if self.stream.is_some() {
            return Ok(());
        }
        let stream = self.camera.acquire(Facing::Back).await?;
        self.stream = Some(stream);
        Ok(())
    }

    /// Leave scanning mode, releasing the stream if one is held.
    pub fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            self.camera.release(stream);
        }
    }

    /// Poll one frame.
    ///
    /// A decodable invoice payload stops the session (releasing the
    /// camera) and is returned. An undecodable code surfaces as
    /// `InvalidPayload` with scanning still live, so the user can try
    /// again without re-acquiring. A frame with no code yields `None`.
    pub fn poll_frame<D: FrameDetector>(
        &mut self,
        detector: &mut D,
    ) -> Result<Option<QrPayload>, ScanError> {
        if self.stream.is_none() {
            return Ok(None);
        }
        let Some(raw) = detector.detect() else {
            return Ok(None);
        };

        let payload = decode_payload(&raw)?;
        self.stop();
        Ok(Some(payload))
    }
}

impl<C: CameraDevice> Drop for ScanSession<'_, C> {
    fn drop(&mut self) {
        self.stop();
    }
}
