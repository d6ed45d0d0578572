//! Rule-table classifier over finger extension.
//!
//! Rules are evaluated top to bottom and the first match wins. The table is
//! not disjoint: D (index only, any thumb) precedes L (thumb + index), so L
//! is shadowed and never produced. Rule order is the only tie-break.

use super::hand_pose::HandPose;
use super::sign_classifier::SignClassifier;
use crate::shared::landmark::{HandFrame, Landmark};
use crate::shared::sign::Sign;

pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&HandPose) -> bool,
    pub sign: Sign,
}

pub static RULES: &[Rule] = &[
    Rule {
        name: "fist, thumb out",
        matches: |p| p.fingers_closed() && p.thumb,
        sign: Sign::A,
    },
    Rule {
        name: "fist, thumb curled",
        matches: |p| p.fingers_closed() && !p.thumb,
        sign: Sign::S,
    },
    Rule {
        name: "open hand",
        matches: |p| p.thumb && p.index && p.middle && p.ring && p.pinky,
        sign: Sign::B,
    },
    Rule {
        name: "point",
        matches: |p| p.index && !p.middle && !p.ring && !p.pinky,
        sign: Sign::D,
    },
    Rule {
        name: "two fingers",
        matches: |p| p.index && p.middle && !p.ring && !p.pinky,
        sign: Sign::V,
    },
    Rule {
        name: "shaka",
        matches: |p| p.thumb && !p.index && !p.middle && !p.ring && p.pinky,
        sign: Sign::Y,
    },
    Rule {
        name: "L shape",
        matches: |p| p.thumb && p.index && !p.middle && !p.ring && !p.pinky,
        sign: Sign::L,
    },
    Rule {
        name: "three fingers",
        matches: |p| p.index && p.middle && p.ring && !p.pinky,
        sign: Sign::W,
    },
    Rule {
        name: "I love you",
        matches: |p| p.thumb && p.index && !p.middle && !p.ring && p.pinky,
        sign: Sign::ILoveYou,
    },
    Rule {
        name: "pinky",
        matches: |p| !p.thumb && !p.index && !p.middle && !p.ring && p.pinky,
        sign: Sign::I,
    },
];

/// Maps one hand frame to a sign via `RULES`.
#[derive(Default)]
pub struct GeometricClassifier;

impl GeometricClassifier {
    pub fn new() -> Self {
        Self
    }

    /// First matching rule for a pose, if any.
    pub fn match_rule(pose: &HandPose) -> Option<&'static Rule> {
        RULES.iter().find(|rule| (rule.matches)(pose))
    }

    pub fn classify_pose(pose: &HandPose) -> Option<Sign> {
        Self::match_rule(pose).map(|rule| rule.sign)
    }
}

impl SignClassifier for GeometricClassifier {
    fn classify(&self, landmarks: &[Landmark]) -> Option<Sign> {
        let frame = HandFrame::from_slice(landmarks)?;
        let pose = HandPose::from_frame(&frame);
        let rule = Self::match_rule(&pose);
        if let Some(rule) = rule {
            log::trace!("{pose:?} matched rule '{}'", rule.name);
        }
        rule.map(|r| r.sign)
    }
}

#[cfg(test)]
mod tests {
    use super::super::hand_pose::fixtures::hand;
    use super::*;
    use rstest::rstest;

    fn pose(t: bool, i: bool, m: bool, r: bool, p: bool) -> HandPose {
        HandPose::new(t, i, m, r, p)
    }

    fn all_poses() -> impl Iterator<Item = HandPose> {
        (0u8..32).map(|bits| {
            pose(
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
                bits & 16 != 0,
            )
        })
    }

    // ── rule table ──────────────────────────────────────────────────

    #[rstest]
    #[case::fist_thumb_curled(pose(false, false, false, false, false), Some(Sign::S))]
    #[case::fist_thumb_out(pose(true, false, false, false, false), Some(Sign::A))]
    #[case::open_hand(pose(true, true, true, true, true), Some(Sign::B))]
    #[case::point(pose(false, true, false, false, false), Some(Sign::D))]
    #[case::v(pose(false, true, true, false, false), Some(Sign::V))]
    #[case::v_with_thumb(pose(true, true, true, false, false), Some(Sign::V))]
    #[case::shaka(pose(true, false, false, false, true), Some(Sign::Y))]
    #[case::w(pose(false, true, true, true, false), Some(Sign::W))]
    #[case::w_with_thumb(pose(true, true, true, true, false), Some(Sign::W))]
    #[case::love_you(pose(true, true, false, false, true), Some(Sign::ILoveYou))]
    #[case::pinky(pose(false, false, false, false, true), Some(Sign::I))]
    fn test_classify_pose(#[case] p: HandPose, #[case] expected: Option<Sign>) {
        assert_eq!(GeometricClassifier::classify_pose(&p), expected);
    }

    #[rstest]
    #[case::four_fingers_no_thumb(pose(false, true, true, true, true))]
    #[case::middle_only(pose(false, false, true, false, false))]
    #[case::ring_and_pinky(pose(false, false, false, true, true))]
    #[case::index_and_pinky_no_thumb(pose(false, true, false, false, true))]
    #[case::middle_and_ring(pose(true, false, true, true, false))]
    fn test_unmatched_pose_is_none(#[case] p: HandPose) {
        assert_eq!(GeometricClassifier::classify_pose(&p), None);
    }

    #[test]
    fn test_thumb_and_index_resolves_to_point_not_l() {
        let p = pose(true, true, false, false, false);
        let rule = GeometricClassifier::match_rule(&p).unwrap();
        assert_eq!(rule.sign, Sign::D);
        assert_eq!(rule.name, "point");
    }

    #[test]
    fn test_l_is_never_produced() {
        assert!(all_poses().all(|p| GeometricClassifier::classify_pose(&p) != Some(Sign::L)));
    }

    #[test]
    fn test_every_other_sign_is_reachable() {
        for sign in Sign::ALL.iter().filter(|s| **s != Sign::L) {
            assert!(
                all_poses().any(|p| GeometricClassifier::classify_pose(&p) == Some(*sign)),
                "{sign} unreachable"
            );
        }
    }

    // ── landmark input ──────────────────────────────────────────────

    #[test]
    fn test_classify_landmarks_fist_variants() {
        let c = GeometricClassifier::new();
        assert_eq!(c.classify(&hand(false, false, false, false, false)), Some(Sign::S));
        assert_eq!(c.classify(&hand(true, false, false, false, false)), Some(Sign::A));
    }

    #[test]
    fn test_classify_landmarks_v() {
        let c = GeometricClassifier::new();
        assert_eq!(c.classify(&hand(false, true, true, false, false)), Some(Sign::V));
    }

    #[rstest]
    #[case::empty(0)]
    #[case::twenty(20)]
    #[case::twenty_two(22)]
    fn test_malformed_frame_is_none(#[case] len: usize) {
        let c = GeometricClassifier::new();
        let mut points = hand(true, true, true, true, true);
        points.resize(len, Landmark::default());
        assert_eq!(c.classify(&points), None);
    }

    #[test]
    fn test_unmatched_landmarks_is_none() {
        let c = GeometricClassifier::new();
        assert_eq!(c.classify(&hand(false, false, true, false, false)), None);
    }
}
