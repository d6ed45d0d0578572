use serde::{Deserialize, Serialize};

use super::constants::LANDMARK_COUNT;

pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

/// One tracked hand point. `x`/`y` are normalized to the frame, `z` is
/// depth relative to the wrist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance in the image plane; depth is ignored.
    pub fn planar_distance(&self, other: &Landmark) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A validated single-hand frame of exactly 21 landmarks, wrist first.
#[derive(Clone, Debug, PartialEq)]
pub struct HandFrame {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandFrame {
    /// Returns `None` unless `landmarks` holds exactly 21 points.
    pub fn from_slice(landmarks: &[Landmark]) -> Option<Self> {
        let points: [Landmark; LANDMARK_COUNT] = landmarks.try_into().ok()?;
        Some(Self { points })
    }

    pub fn point(&self, index: usize) -> &Landmark {
        &self.points[index]
    }

    pub fn wrist(&self) -> &Landmark {
        &self.points[WRIST]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_planar_distance_ignores_depth() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::new(0.3, 0.4, 5.0);
        assert_relative_eq!(a.planar_distance(&b), 0.5);
    }

    #[rstest]
    #[case::empty(0)]
    #[case::one_short(20)]
    #[case::one_extra(22)]
    fn test_from_slice_rejects_wrong_length(#[case] len: usize) {
        let points = vec![Landmark::default(); len];
        assert!(HandFrame::from_slice(&points).is_none());
    }

    #[test]
    fn test_from_slice_keeps_order() {
        let points: Vec<Landmark> = (0..21)
            .map(|i| Landmark::new(i as f64 / 100.0, 0.5, 0.0))
            .collect();
        let frame = HandFrame::from_slice(&points).unwrap();
        assert_eq!(frame.wrist(), &points[0]);
        assert_eq!(frame.point(PINKY_TIP), &points[20]);
    }

    #[test]
    fn test_deserialize_without_z() {
        let lm: Landmark = serde_json::from_str(r#"{"x":0.25,"y":0.75}"#).unwrap();
        assert_relative_eq!(lm.x, 0.25);
        assert_relative_eq!(lm.y, 0.75);
        assert_relative_eq!(lm.z, 0.0);
    }
}
