//! Replays recorded landmark streams, one JSON value per line.
//!
//! ```text
//! [{"x":0.51,"y":0.88,"z":0.0}, ... 21 points ...]
//! null
//! []
//! ```
//!
//! `null` and `[]` mean no hand. Blank lines are skipped. Point counts other
//! than 21 are passed through untouched; the classifier rejects them.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::landmarks::domain::landmark_source::{LandmarkFrame, LandmarkSource};
use crate::shared::landmark::Landmark;

#[derive(Error, Debug)]
pub enum LandmarkSourceError {
    #[error("failed to open landmark file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("invalid landmark frame on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub struct JsonLinesLandmarkSource {
    reader: Option<Box<dyn BufRead + Send>>,
}

impl JsonLinesLandmarkSource {
    pub fn new(reader: Box<dyn BufRead + Send>) -> Self {
        Self {
            reader: Some(reader),
        }
    }

    pub fn open(path: &Path) -> Result<Self, LandmarkSourceError> {
        let file = File::open(path).map_err(|source| LandmarkSourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(Box::new(BufReader::new(file))))
    }

    pub fn stdin() -> Self {
        Self::new(Box::new(BufReader::new(io::stdin())))
    }
}

pub fn parse_frame(text: &str, line: usize) -> Result<LandmarkFrame, LandmarkSourceError> {
    let points: Option<Vec<Landmark>> = serde_json::from_str(text)
        .map_err(|source| LandmarkSourceError::Parse { line, source })?;
    Ok(points.filter(|p| !p.is_empty()))
}

impl LandmarkSource for JsonLinesLandmarkSource {
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<LandmarkFrame, Box<dyn std::error::Error>>> + '_> {
        let Some(reader) = self.reader.as_mut() else {
            return Box::new(std::iter::empty());
        };
        Box::new(
            reader
                .lines()
                .enumerate()
                .filter_map(|(i, line)| {
                    let line_no = i + 1;
                    match line {
                        Err(source) => Some(Err(LandmarkSourceError::Read {
                            line: line_no,
                            source,
                        })),
                        Ok(text) if text.trim().is_empty() => None,
                        Ok(text) => Some(parse_frame(&text, line_no)),
                    }
                })
                .map(|r| r.map_err(|e| -> Box<dyn std::error::Error> { Box::new(e) })),
        )
    }

    fn close(&mut self) {
        self.reader = None;
    }
}
