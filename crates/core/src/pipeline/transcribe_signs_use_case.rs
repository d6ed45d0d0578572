use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use serde::Serialize;

use super::session_executor::{CommitEvent, ProgressFn, SessionConfig, SessionExecutor};
use super::session_logger::{NullSessionLogger, SessionLogger};
use super::sign_pipeline::SignPipeline;
use crate::landmarks::domain::landmark_source::LandmarkSource;
use crate::shared::constants::DEFAULT_MAX_SUGGESTIONS;
use crate::text::domain::dictionary::Dictionary;
use crate::text::domain::transcript::Transcript;

/// Result of a completed session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionReport {
    pub frames: usize,
    pub commits: Vec<CommitEvent>,
    pub text: String,
    /// Completions for the trailing partial word of `text`.
    pub suggestions: Vec<String>,
}

/// Turns a landmark stream into text.
///
/// Wires the source, pipeline and transcript together and delegates frame
/// delivery to a `SessionExecutor`. Single use: `execute` consumes the
/// source, so a second call fails.
pub struct TranscribeSignsUseCase {
    source: Option<Box<dyn LandmarkSource>>,
    pipeline: SignPipeline,
    dictionary: Dictionary,
    executor: Box<dyn SessionExecutor>,
    logger: Box<dyn SessionLogger>,
    max_suggestions: usize,
    on_progress: Option<ProgressFn>,
    cancelled: Arc<AtomicBool>,
    transcript: Transcript,
}

impl TranscribeSignsUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: Box<dyn LandmarkSource>,
        pipeline: SignPipeline,
        dictionary: Dictionary,
        executor: Box<dyn SessionExecutor>,
        logger: Option<Box<dyn SessionLogger>>,
        max_suggestions: Option<usize>,
        on_progress: Option<ProgressFn>,
        cancelled: Option<Arc<AtomicBool>>,
    ) -> Self {
        Self {
            source: Some(source),
            pipeline,
            dictionary,
            executor,
            logger: logger.unwrap_or_else(|| Box::new(NullSessionLogger)),
            max_suggestions: max_suggestions.unwrap_or(DEFAULT_MAX_SUGGESTIONS),
            on_progress,
            cancelled: cancelled.unwrap_or_else(|| Arc::new(AtomicBool::new(false))),
            transcript: Transcript::new(),
        }
    }

    pub fn execute(&mut self) -> Result<SessionReport, Box<dyn std::error::Error>> {
        let source = self.source.take().ok_or("Session already executed")?;
        let config = SessionConfig {
            on_progress: self.on_progress.take(),
            cancelled: self.cancelled.clone(),
        };

        let transcript = &mut self.transcript;
        let mut commits = Vec::new();
        let mut on_commit = |event: CommitEvent| {
            transcript.append_sign(event.sign);
            commits.push(event);
        };

        let frames = self.executor.execute(
            source,
            &mut self.pipeline,
            &mut *self.logger,
            &mut on_commit,
            config,
        )?;
        self.logger.summary();

        let suggestions = self
            .transcript
            .suggestions(&self.dictionary, self.max_suggestions)
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(SessionReport {
            frames,
            commits,
            text: self.transcript.text().to_string(),
            suggestions,
        })
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
