use crate::shared::landmark::Landmark;
use crate::shared::sign::Sign;

/// Domain interface for single-frame sign classification.
///
/// Must be total: malformed or unrecognised input yields `None`.
pub trait SignClassifier: Send {
    fn classify(&self, landmarks: &[Landmark]) -> Option<Sign>;
}
