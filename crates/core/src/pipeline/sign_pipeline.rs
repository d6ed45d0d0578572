use crate::recognition::domain::geometric_classifier::GeometricClassifier;
use crate::recognition::domain::sign_classifier::SignClassifier;
use crate::shared::landmark::Landmark;
use crate::shared::settings::RecognizerSettings;
use crate::shared::sign::Sign;
use crate::stabilization::domain::commit_engine::CommitEngine;
use crate::stabilization::domain::temporal_stabilizer::{StabilizedDecision, TemporalStabilizer};

/// Everything one tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Raw single-frame classification.
    pub classification: Option<Sign>,
    pub decision: StabilizedDecision,
    /// Confident majority sign, for live "Detected: X" display.
    pub detected: Option<Sign>,
    /// Sign accepted into the text on this frame.
    pub committed: Option<Sign>,
}

/// Per-frame `classify → push → advance` over owned state.
///
/// Holds the only copy of the vote window and commit state; callers must
/// drive it from a single consumer.
pub struct SignPipeline {
    classifier: Box<dyn SignClassifier>,
    stabilizer: TemporalStabilizer,
    commit: CommitEngine,
}

impl SignPipeline {
    pub fn new(
        classifier: Box<dyn SignClassifier>,
        stabilizer: TemporalStabilizer,
        commit: CommitEngine,
    ) -> Self {
        Self {
            classifier,
            stabilizer,
            commit,
        }
    }

    pub fn from_settings(settings: &RecognizerSettings) -> Self {
        Self::new(
            Box::new(GeometricClassifier::new()),
            TemporalStabilizer::new(settings.window_size),
            CommitEngine::new(settings.confidence_threshold),
        )
    }

    /// `landmarks == None` means no hand in this frame.
    pub fn tick(&mut self, landmarks: Option<&[Landmark]>) -> FrameOutcome {
        let classification = landmarks.and_then(|lm| self.classifier.classify(lm));
        let decision = self.stabilizer.push(classification);
        log::trace!(
            "classified {} -> vote {} x{}",
            Sign::label(classification),
            Sign::label(decision.sign),
            decision.count
        );
        let committed = self.commit.advance(&decision);
        let detected = if self.commit.is_confident(&decision) {
            decision.sign
        } else {
            None
        };
        FrameOutcome {
            classification,
            decision,
            detected,
            committed,
        }
    }

    pub fn reset(&mut self) {
        self.stabilizer.clear();
        self.commit.reset();
    }

    pub fn last_emitted(&self) -> Option<Sign> {
        self.commit.last_emitted()
    }
}

impl Default for SignPipeline {
    fn default() -> Self {
        Self::from_settings(&RecognizerSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::domain::hand_pose::fixtures::hand;

    fn v_hand() -> Vec<Landmark> {
        hand(false, true, true, false, false)
    }

    #[test]
    fn test_v_emitted_once_at_seventh_frame() {
        let mut p = SignPipeline::default();
        for _ in 0..2 {
            p.tick(None);
        }
        let v = v_hand();
        let outcomes: Vec<FrameOutcome> = (0..8).map(|_| p.tick(Some(&v))).collect();

        for (i, o) in outcomes.iter().enumerate() {
            assert_eq!(o.classification, Some(Sign::V));
            // The two leading no-hand votes win ties until V pulls ahead.
            let majority = if i < 2 {
                StabilizedDecision::new(None, 2)
            } else {
                StabilizedDecision::new(Some(Sign::V), i + 1)
            };
            assert_eq!(o.decision, majority, "frame {i}");
            let expected = if i == 6 { Some(Sign::V) } else { None };
            assert_eq!(o.committed, expected, "frame {i}");
        }
        assert_eq!(outcomes[7].detected, Some(Sign::V));
    }

    #[test]
    fn test_no_hand_frames_vote_sentinel() {
        let mut p = SignPipeline::default();
        let o = p.tick(None);
        assert_eq!(o.classification, None);
        assert_eq!(o.decision, StabilizedDecision::new(None, 1));
        assert_eq!(o.detected, None);
    }

    #[test]
    fn test_malformed_frame_votes_sentinel() {
        let mut p = SignPipeline::default();
        let mut short = v_hand();
        short.pop();
        let o = p.tick(Some(&short));
        assert_eq!(o.classification, None);
        assert_eq!(o.decision.sign, None);
    }

    #[test]
    fn test_detected_requires_threshold() {
        let mut p = SignPipeline::default();
        let v = v_hand();
        let o = (0..6).map(|_| p.tick(Some(&v))).last().unwrap();
        assert_eq!(o.decision, StabilizedDecision::new(Some(Sign::V), 6));
        assert_eq!(o.detected, None);
    }

    #[test]
    fn test_reset_allows_immediate_repeat() {
        let mut p = SignPipeline::default();
        let v = v_hand();
        for _ in 0..10 {
            p.tick(Some(&v));
        }
        assert_eq!(p.last_emitted(), Some(Sign::V));
        p.reset();
        assert_eq!(p.last_emitted(), None);
        let emitted: Vec<_> = (0..7).filter_map(|_| p.tick(Some(&v)).committed).collect();
        assert_eq!(emitted, vec![Sign::V]);
    }
}
