use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::RecvTimeoutError;

use crate::landmarks::domain::landmark_source::{LandmarkFrame, LandmarkSource};
use crate::pipeline::session_executor::{CommitEvent, SessionConfig, SessionExecutor};
use crate::pipeline::session_logger::SessionLogger;
use crate::pipeline::sign_pipeline::SignPipeline;

const DEFAULT_CHANNEL_CAPACITY: usize = 8;
/// How often an idle consumer re-checks the cancel flag.
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(50);

type SendError = Box<dyn std::error::Error + Send + Sync>;

/// Reads landmark frames on a dedicated thread and ticks the pipeline on the
/// calling thread.
///
/// Layout: `reader → bounded channel → caller [classify/vote/commit]`
///
/// The caller is the single consumer, so vote-window and commit state are
/// never touched concurrently.
pub struct ThreadedSessionExecutor {
    channel_capacity: usize,
}

impl ThreadedSessionExecutor {
    pub fn new() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl Default for ThreadedSessionExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionExecutor for ThreadedSessionExecutor {
    fn execute(
        &self,
        source: Box<dyn LandmarkSource>,
        pipeline: &mut SignPipeline,
        logger: &mut dyn SessionLogger,
        on_commit: &mut dyn FnMut(CommitEvent),
        config: SessionConfig,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let (frame_tx, frame_rx) =
            crossbeam_channel::bounded::<Result<LandmarkFrame, SendError>>(self.channel_capacity);
        let reader_handle = spawn_reader(source, frame_tx, config.cancelled.clone());

        let result = run_main_loop(frame_rx, pipeline, logger, on_commit, &config);

        // A cancelled reader may be blocked inside the source (e.g. stdin);
        // it stops on its next frame, so it is detached rather than joined.
        if config.cancelled.load(Ordering::Relaxed) {
            return result;
        }
        if reader_handle.join().is_err() {
            return Err("Landmark reader thread panicked".into());
        }
        result
    }
}

fn spawn_reader(
    mut source: Box<dyn LandmarkSource>,
    frame_tx: crossbeam_channel::Sender<Result<LandmarkFrame, SendError>>,
    cancelled: Arc<AtomicBool>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        for frame_result in source.frames() {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            let mapped = frame_result.map_err(|e| -> SendError { e.to_string().into() });
            let failed = mapped.is_err();
            if frame_tx.send(mapped).is_err() || failed {
                break;
            }
        }
        source.close();
    })
}

/// Consumes frames until the channel closes, an error arrives, or the
/// session is cancelled. The cancel flag is polled while waiting, so an idle
/// source does not delay cancellation. Dropping `frame_rx` on return
/// unblocks the reader.
fn run_main_loop(
    frame_rx: crossbeam_channel::Receiver<Result<LandmarkFrame, SendError>>,
    pipeline: &mut SignPipeline,
    logger: &mut dyn SessionLogger,
    on_commit: &mut dyn FnMut(CommitEvent),
    config: &SessionConfig,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut processed = 0;

    loop {
        if config.cancelled.load(Ordering::Relaxed) {
            logger.info(&format!("Session cancelled after {processed} frames"));
            break;
        }
        let frame = match frame_rx.recv_timeout(CANCEL_POLL_INTERVAL) {
            Ok(frame) => frame,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        let landmarks = frame.map_err(|e| -> Box<dyn std::error::Error> { e })?;

        let start = Instant::now();
        let outcome = pipeline.tick(landmarks.as_deref());
        logger.timing("tick", start.elapsed().as_secs_f64() * 1000.0);

        if let Some(sign) = outcome.committed {
            logger.commit(processed, sign);
            on_commit(CommitEvent {
                frame_index: processed,
                sign,
            });
        }

        processed += 1;
        logger.progress(processed);

        if let Some(ref cb) = config.on_progress {
            if !cb(processed) {
                config.cancelled.store(true, Ordering::Relaxed);
                return Err("Cancelled by user".into());
            }
        }
    }

    Ok(processed)
}
