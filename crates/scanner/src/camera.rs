//! Camera device boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Which camera to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Front,
    /// Environment-facing camera; what scanning uses.
    Back,
}

/// Opaque handle on an open camera stream.
///
/// Handles are not `Clone` on purpose: one acquire yields one handle, and
/// releasing consumes it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CameraStream {
    id: Uuid,
    facing: Facing,
}

impl CameraStream {
    pub fn open(facing: Facing) -> Self {
        Self {
            id: Uuid::now_v7(),
            facing,
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }
}

/// Scanner-side failures, surfaced through the notification sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// Camera acquisition rejected (permissions or hardware).
    #[error("camera unavailable: {0}")]
    DeviceUnavailable(String),

    /// A detected code did not carry a valid invoice payload.
    #[error("invalid QR payload: {0}")]
    InvalidPayload(String),
}

/// Camera device boundary.
///
/// Contract: every successful `acquire` is balanced by exactly one
/// `release`, on every exit path (explicit stop, successful detection,
/// error, teardown).
#[async_trait]
pub trait CameraDevice: Send + Sync {
    async fn acquire(&self, facing: Facing) -> Result<CameraStream, ScanError>;

    fn release(&self, stream: CameraStream);
}
