use crate::shared::landmark::Landmark;

/// One frame from a source: `None` when no hand was detected.
pub type LandmarkFrame = Option<Vec<Landmark>>;

/// Domain interface for per-frame hand landmark delivery (camera tracker,
/// recorded stream, test stub).
pub trait LandmarkSource: Send {
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<LandmarkFrame, Box<dyn std::error::Error>>> + '_>;

    fn close(&mut self) {}
}
