use std::path::PathBuf;

use thiserror::Error;

/// Authoring-time errors for a [`SortingField`](super::SortingField).
///
/// Runtime queries never fail; these surface when areas or axes are set up.
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("area {index} offset {offset} is smaller than the previous offset {previous}")]
    UnorderedAreas { index: usize, previous: f32, offset: f32 },

    #[error("area {index} has a non-finite offset")]
    NonFiniteArea { index: usize },

    #[error("forward axis must be a finite, non-zero vector")]
    DegenerateAxis,

    #[error("field origin must be finite")]
    NonFiniteOrigin,

    #[error("invalid field definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read field definition {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FieldError>;
