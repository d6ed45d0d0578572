use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use serde::Serialize;

use super::session_logger::SessionLogger;
use super::sign_pipeline::SignPipeline;
use crate::landmarks::domain::landmark_source::LandmarkSource;
use crate::shared::sign::Sign;

/// A sign accepted into the text, with the frame it was committed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CommitEvent {
    pub frame_index: usize,
    pub sign: Sign,
}

pub type ProgressFn = Box<dyn Fn(usize) -> bool + Send>;

/// Configuration for one session run.
pub struct SessionConfig {
    /// Called with the processed frame count; returning `false` aborts the
    /// session with an error.
    pub on_progress: Option<ProgressFn>,
    /// Stops the session early without an error.
    pub cancelled: Arc<AtomicBool>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            on_progress: None,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }
}

/// Abstracts how the source → pipeline loop is driven.
///
/// Implementations may read frames on other threads, but every tick of
/// `pipeline` must happen on one consumer in frame order. Returns the number
/// of frames processed.
pub trait SessionExecutor: Send {
    fn execute(
        &self,
        source: Box<dyn LandmarkSource>,
        pipeline: &mut SignPipeline,
        logger: &mut dyn SessionLogger,
        on_commit: &mut dyn FnMut(CommitEvent),
        config: SessionConfig,
    ) -> Result<usize, Box<dyn std::error::Error>>;
}
