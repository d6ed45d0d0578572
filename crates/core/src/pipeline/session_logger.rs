use std::collections::BTreeMap;
use std::collections::HashMap;
use std::time::Instant;

use crate::shared::sign::Sign;

/// Observer for recognition session events.
///
/// Lets the CLI, tests and future front ends watch a session without the
/// executor knowing where output goes.
pub trait SessionLogger: Send {
    /// Called after each processed frame with the running frame count.
    fn progress(&mut self, frames: usize);

    /// How long a named stage took for one frame.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// A sign was committed on `frame_index`.
    fn commit(&mut self, frame_index: usize, sign: Sign);

    fn info(&mut self, message: &str);

    /// End-of-session report. Default: no-op.
    fn summary(&self) {}
}

/// Discards all events.
pub struct NullSessionLogger;

impl SessionLogger for NullSessionLogger {
    fn progress(&mut self, _frames: usize) {}
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn commit(&mut self, _frame_index: usize, _sign: Sign) {}
    fn info(&mut self, _message: &str) {}
}

/// Running totals for one named stage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageTiming {
    pub count: usize,
    pub total_ms: f64,
}

impl StageTiming {
    pub fn avg_ms(&self) -> f64 {
        self.total_ms / self.count.max(1) as f64
    }
}

/// Logs through the `log` facade and keeps per-stage timings and commit
/// counts for a summary. Progress lines are throttled to every
/// `throttle_frames` frames.
///
/// Memory stays constant per stage, so unbounded live streams are fine.
pub struct StdoutSessionLogger {
    throttle_frames: usize,
    timings: HashMap<String, StageTiming>,
    commits: BTreeMap<&'static str, usize>,
    frames: usize,
    start_time: Instant,
}

impl StdoutSessionLogger {
    pub fn new(throttle_frames: usize) -> Self {
        Self {
            throttle_frames: throttle_frames.max(1),
            timings: HashMap::new(),
            commits: BTreeMap::new(),
            frames: 0,
            start_time: Instant::now(),
        }
    }

    /// Formatted summary, or `None` before any frame was seen.
    pub fn summary_string(&self) -> Option<String> {
        if self.frames == 0 {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!(
            "Session summary ({} frames, {:.1}s total):",
            self.frames,
            elapsed_ms / 1000.0
        )];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let timing = self.timings[stage];
            let (avg_ms, total_ms) = (timing.avg_ms(), timing.total_ms);
            lines.push(format!("  {stage:10}: avg {avg_ms:6.3}ms  total {total_ms:7.1}ms"));
        }

        let total_commits: usize = self.commits.values().sum();
        lines.push(format!("  Committed: {total_commits} signs"));
        for (label, count) in &self.commits {
            lines.push(format!("    {label}: {count}"));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stage: &str) -> Option<StageTiming> {
        self.timings.get(stage).copied()
    }

    pub fn commits_for(&self, sign: Sign) -> usize {
        self.commits.get(sign.as_str()).copied().unwrap_or(0)
    }
}

impl Default for StdoutSessionLogger {
    fn default() -> Self {
        Self::new(300)
    }
}

impl SessionLogger for StdoutSessionLogger {
    fn progress(&mut self, frames: usize) {
        self.frames = frames;
        if frames % self.throttle_frames == 0 {
            log::info!("Processed {frames} frames");
        }
    }

    fn timing(&mut self, stage: &str, duration_ms: f64) {
        let timing = self.timings.entry(stage.to_string()).or_default();
        timing.count += 1;
        timing.total_ms += duration_ms;
    }

    fn commit(&mut self, frame_index: usize, sign: Sign) {
        *self.commits.entry(sign.as_str()).or_default() += 1;
        log::info!("Committed '{sign}' at frame {frame_index}");
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}
