/// Landmarks per detected hand (MediaPipe hand topology).
pub const LANDMARK_COUNT: usize = 21;

/// Frames in the majority-vote window (~1/3 second at 30 fps).
pub const SMOOTHING_WINDOW: usize = 10;

/// Votes out of `SMOOTHING_WINDOW` needed to commit or to reset the debounce.
pub const CONFIDENCE_THRESHOLD: usize = 7;

pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

pub const SETTINGS_DIR_NAME: &str = "SignWait";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
