use std::collections::VecDeque;

use crate::shared::constants::SMOOTHING_WINDOW;
use crate::shared::sign::Sign;

/// Majority entry of the vote window. `sign == None` is the "no symbol"
/// sentinel winning the vote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StabilizedDecision {
    pub sign: Option<Sign>,
    pub count: usize,
}

impl StabilizedDecision {
    pub fn new(sign: Option<Sign>, count: usize) -> Self {
        Self { sign, count }
    }
}

/// Sliding majority vote over the last `window_size` classifications.
///
/// The window is never reset by a push, so the decision drifts as old
/// frames age out. Ties go to the entry that appears first when the window
/// is read oldest to newest.
pub struct TemporalStabilizer {
    window_size: usize,
    window: VecDeque<Option<Sign>>,
}

impl TemporalStabilizer {
    pub fn new(window_size: usize) -> Self {
        let window_size = window_size.max(1);
        Self {
            window_size,
            window: VecDeque::with_capacity(window_size + 1),
        }
    }

    pub fn push(&mut self, classification: Option<Sign>) -> StabilizedDecision {
        self.window.push_back(classification);
        if self.window.len() > self.window_size {
            self.window.pop_front();
        }
        self.decision()
    }

    pub fn decision(&self) -> StabilizedDecision {
        // Tallies in first-appearance order.
        let mut tallies: Vec<(Option<Sign>, usize)> = Vec::with_capacity(self.window.len());
        for vote in &self.window {
            match tallies.iter_mut().find(|(s, _)| s == vote) {
                Some((_, n)) => *n += 1,
                None => tallies.push((*vote, 1)),
            }
        }

        let mut best = StabilizedDecision::new(None, 0);
        for (sign, count) in tallies {
            if count > best.count {
                best = StabilizedDecision::new(sign, count);
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn clear(&mut self) {
        self.window.clear();
    }
}

impl Default for TemporalStabilizer {
    fn default() -> Self {
        Self::new(SMOOTHING_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_n(s: &mut TemporalStabilizer, vote: Option<Sign>, n: usize) -> StabilizedDecision {
        let mut last = s.decision();
        for _ in 0..n {
            last = s.push(vote);
        }
        last
    }

    #[test]
    fn test_starts_empty() {
        let s = TemporalStabilizer::default();
        assert!(s.is_empty());
        assert_eq!(s.decision(), StabilizedDecision::new(None, 0));
    }

    #[test]
    fn test_window_never_exceeds_size() {
        let mut s = TemporalStabilizer::default();
        for i in 0..57 {
            s.push(if i % 3 == 0 { None } else { Some(Sign::A) });
            assert!(s.len() <= 10);
        }
        assert_eq!(s.len(), 10);
    }

    #[test]
    fn test_seven_a_then_three_sentinel() {
        let mut s = TemporalStabilizer::default();
        push_n(&mut s, Some(Sign::A), 7);
        let d = push_n(&mut s, None, 3);
        assert_eq!(d, StabilizedDecision::new(Some(Sign::A), 7));
    }

    #[test]
    fn test_sentinel_can_win() {
        let mut s = TemporalStabilizer::default();
        push_n(&mut s, Some(Sign::B), 2);
        let d = push_n(&mut s, None, 8);
        assert_eq!(d, StabilizedDecision::new(None, 8));
    }

    #[test]
    fn test_tie_goes_to_oldest_first_appearance() {
        let mut s = TemporalStabilizer::default();
        push_n(&mut s, Some(Sign::V), 5);
        let d = push_n(&mut s, Some(Sign::A), 5);
        assert_eq!(d, StabilizedDecision::new(Some(Sign::V), 5));
    }

    #[test]
    fn test_tie_order_follows_window_not_sign_value() {
        let mut s = TemporalStabilizer::new(4);
        s.push(Some(Sign::W));
        s.push(Some(Sign::A));
        s.push(Some(Sign::A));
        let d = s.push(Some(Sign::W));
        assert_eq!(d, StabilizedDecision::new(Some(Sign::W), 2));
    }

    #[test]
    fn test_old_frames_age_out() {
        let mut s = TemporalStabilizer::default();
        push_n(&mut s, Some(Sign::D), 10);
        let d = push_n(&mut s, Some(Sign::V), 6);
        assert_eq!(d, StabilizedDecision::new(Some(Sign::V), 6));
        let d = push_n(&mut s, Some(Sign::V), 4);
        assert_eq!(d, StabilizedDecision::new(Some(Sign::V), 10));
    }

    #[test]
    fn test_clear_empties_window() {
        let mut s = TemporalStabilizer::default();
        push_n(&mut s, Some(Sign::A), 4);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.push(Some(Sign::B)), StabilizedDecision::new(Some(Sign::B), 1));
    }

    #[test]
    fn test_zero_size_is_clamped_to_one() {
        let mut s = TemporalStabilizer::new(0);
        assert_eq!(s.window_size(), 1);
        s.push(Some(Sign::A));
        let d = s.push(Some(Sign::I));
        assert_eq!(d, StabilizedDecision::new(Some(Sign::I), 1));
        assert_eq!(s.len(), 1);
    }
}
