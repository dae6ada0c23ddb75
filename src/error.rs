// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the I/O and request boundaries.
//!
//! Parsing and ranking are total and never produce these. Errors come from
//! loading files, validating the catalog or weights, and from the upstream
//! candidate source.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Main error type for propsearch.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a catalog, score list or weights file.
    #[error("io error on '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON serialization or deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Ranking weights failed validation.
    #[error("invalid ranking weights: {reason}")]
    InvalidWeights { reason: String },

    /// A catalog record failed validation.
    #[error("invalid property '{id}': {reason}")]
    InvalidProperty { id: String, reason: String },

    /// Two catalog records share an id.
    #[error("duplicate property id: {0}")]
    DuplicateProperty(String),

    /// The query text was empty after trimming.
    #[error("query text is empty")]
    EmptyQuery,

    /// The upstream candidate source failed.
    #[error("candidate source error: {0}")]
    Source(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_weights(reason: impl Into<String>) -> Self {
        Error::InvalidWeights {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
