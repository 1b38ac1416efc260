//! Error types for loading, correlating, and saving tagged PDFs.
//!
//! [`AltFigError`] covers the fatal cases that stop a run. Problems with a
//! single figure are never fatal; they are recorded as a [`SkipReason`] on
//! the report of the pass that hit them.

use std::fmt;

use thiserror::Error;

/// Fatal error for a bbox-extraction or alt-text-injection run.
#[derive(Debug, Error)]
pub enum AltFigError {
    /// The input bytes could not be parsed into an object graph.
    #[error("failed to load PDF: {0}")]
    Load(String),

    /// Error reading an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The serialized document could not be produced or persisted.
    #[error("failed to write PDF: {0}")]
    Write(String),

    /// The alt-text side channel is not a valid alt-text mapping.
    #[error("invalid alt-text mapping: {0}")]
    AltTextMap(String),

    /// The page height used for the vertical flip is unusable.
    #[error("invalid page height: {0}")]
    InvalidHeight(f64),
}

impl From<serde_json::Error> for AltFigError {
    fn from(err: serde_json::Error) -> Self {
        AltFigError::AltTextMap(err.to_string())
    }
}

/// Why a matched figure was left out of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `/A` → `/BBox` entry.
    MissingGeometry,
    /// `/BBox` is present but is not an array of exactly four numbers.
    MalformedGeometry,
    /// No `/Pg` reference on the element.
    MissingPageLink,
    /// `/Pg` points at an object that is not in the document's page list.
    UnknownPage,
}

impl SkipReason {
    /// Returns the string tag for this reason.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingGeometry => "MISSING_GEOMETRY",
            SkipReason::MalformedGeometry => "MALFORMED_GEOMETRY",
            SkipReason::MissingPageLink => "MISSING_PAGE_LINK",
            SkipReason::UnknownPage => "UNKNOWN_PAGE",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A figure that a pass could not process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// The figure's object id.
    pub figure: lopdf::ObjectId,
    /// What was wrong with it.
    pub reason: SkipReason,
}
