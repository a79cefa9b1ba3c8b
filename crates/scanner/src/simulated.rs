//! Simulated capture devices for the demo and tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use rand::Rng;

use crate::camera::{CameraDevice, CameraStream, Facing, ScanError};
use crate::session::FrameDetector;

/// In-memory camera. Counts acquires and releases so tests can assert
/// the one-release-per-acquire contract.
#[derive(Debug, Default)]
pub struct SimulatedCamera {
    acquired: AtomicUsize,
    released: AtomicUsize,
    deny: AtomicBool,
}

impl SimulatedCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera whose acquisition is rejected, like a denied permission
    /// prompt.
    pub fn denying() -> Self {
        let camera = Self::default();
        camera.deny.store(true, Ordering::SeqCst);
        camera
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CameraDevice for SimulatedCamera {
    async fn acquire(&self, facing: Facing) -> Result<CameraStream, ScanError> {
        if self.deny.load(Ordering::SeqCst) {
            return Err(ScanError::DeviceUnavailable(
                "Unable to access camera. Please check permissions.".to_string(),
            ));
        }
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(CameraStream::open(facing))
    }

    fn release(&self, stream: CameraStream) {
        drop(stream);
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Probability-stubbed detector: "sees" its configured payload on a
/// fraction of frames instead of running a real image decoder.
#[derive(Debug, Clone)]
pub struct SimulatedDetector {
    payload: String,
    chance: f64,
}

impl SimulatedDetector {
    /// `chance` is the per-frame detection probability, clamped to [0, 1].
    pub fn new(payload: impl Into<String>, chance: f64) -> Self {
        Self {
            payload: payload.into(),
            chance: chance.clamp(0.0, 1.0),
        }
    }

    /// Fires on every frame. For tests and the scripted demo.
    pub fn always(payload: impl Into<String>) -> Self {
        Self::new(payload, 1.0)
    }

    /// Never fires.
    pub fn never() -> Self {
        Self::new(String::new(), 0.0)
    }
}

impl FrameDetector for SimulatedDetector {
    fn detect(&mut self) -> Option<String> {
        if self.chance > 0.0 && rand::thread_rng().gen_bool(self.chance) {
            Some(self.payload.clone())
        } else {
            None
        }
    }
}
