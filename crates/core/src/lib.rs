//! Hand-landmark sign recognition.
//!
//! Per frame, a hand's 21 landmarks are classified by a geometric rule
//! table, smoothed by a sliding majority vote, and committed to text by an
//! edge-triggered engine. Word suggestions are drawn from a fixed dictionary.

pub mod shared {
    pub mod constants;
    pub mod landmark;
    pub mod settings;
    pub mod sign;
}

pub mod landmarks {
    pub mod domain {
        pub mod landmark_source;
    }
    pub mod infrastructure;
}

pub mod recognition {
    pub mod domain {
        pub mod geometric_classifier;
        pub mod hand_pose;
        pub mod sign_classifier;
    }
}

pub mod stabilization {
    pub mod domain {
        pub mod commit_engine;
        pub mod temporal_stabilizer;
    }
}

pub mod text {
    pub mod domain {
        pub mod dictionary;
        pub mod transcript;
    }
}

pub mod pipeline {
    pub mod infrastructure;
    pub mod session_executor;
    pub mod session_logger;
    pub mod sign_pipeline;
    pub mod transcribe_signs_use_case;
}
