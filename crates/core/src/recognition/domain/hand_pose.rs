//! Per-finger extension heuristic.
//!
//! A finger counts as extended when its tip lies farther from the wrist than
//! its proximal joint. This tolerates in-plane hand rotation but is cruder
//! than joint-angle methods: a finger bent sideways or pointed at the camera
//! can read as closed.

use crate::shared::landmark::{
    HandFrame, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, PINKY_PIP, PINKY_TIP, RING_PIP,
    RING_TIP, THUMB_MCP, THUMB_TIP,
};

/// Which fingers are extended in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HandPose {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl HandPose {
    pub fn new(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> Self {
        Self {
            thumb,
            index,
            middle,
            ring,
            pinky,
        }
    }

    pub fn from_frame(frame: &HandFrame) -> Self {
        Self {
            thumb: is_extended(frame, THUMB_TIP, THUMB_MCP),
            index: is_extended(frame, INDEX_TIP, INDEX_PIP),
            middle: is_extended(frame, MIDDLE_TIP, MIDDLE_PIP),
            ring: is_extended(frame, RING_TIP, RING_PIP),
            pinky: is_extended(frame, PINKY_TIP, PINKY_PIP),
        }
    }

    /// Index, middle, ring and pinky all closed.
    pub fn fingers_closed(&self) -> bool {
        !self.index && !self.middle && !self.ring && !self.pinky
    }
}

fn is_extended(frame: &HandFrame, tip: usize, proximal: usize) -> bool {
    let wrist = frame.wrist();
    frame.point(tip).planar_distance(wrist) > frame.point(proximal).planar_distance(wrist)
}
