use super::temporal_stabilizer::StabilizedDecision;
use crate::shared::constants::CONFIDENCE_THRESHOLD;
use crate::shared::sign::Sign;

/// Edge-triggered commit of stabilized decisions.
///
/// A sign is emitted once when it first becomes a confident majority. The
/// same sign is only emitted again after a confident "no symbol" majority
/// clears `last_emitted`; a different wrong sign in between does not. Double
/// letters therefore need a neutral pause.
pub struct CommitEngine {
    threshold: usize,
    last_emitted: Option<Sign>,
}

impl CommitEngine {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            last_emitted: None,
        }
    }

    pub fn advance(&mut self, decision: &StabilizedDecision) -> Option<Sign> {
        if decision.count < self.threshold {
            return None;
        }
        match decision.sign {
            Some(sign) if self.last_emitted == Some(sign) => None,
            Some(sign) => {
                self.last_emitted = Some(sign);
                Some(sign)
            }
            None => {
                if self.last_emitted.take().is_some() {
                    log::debug!("Neutral gap cleared commit debounce");
                }
                None
            }
        }
    }

    /// True when `decision` is a real sign at or above the threshold.
    pub fn is_confident(&self, decision: &StabilizedDecision) -> bool {
        decision.sign.is_some() && decision.count >= self.threshold
    }

    pub fn last_emitted(&self) -> Option<Sign> {
        self.last_emitted
    }

    pub fn reset(&mut self) {
        self.last_emitted = None;
    }
}

impl Default for CommitEngine {
    fn default() -> Self {
        Self::new(CONFIDENCE_THRESHOLD)
    }
}
