//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Mo.
//! The Mo project belongs to the Dunimd project team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Mo Error Module
//!
//! This module defines the error type shared by every stage of a Less render:
//! plugin resolution, option parsing and the loader-chain call.
//!
//! ## Error Categories
//!
//! - **Resolution**: a plugin reference is unknown or cannot be used in the
//!   requested form. Raised before the loader chain runs and never wrapped.
//! - **Render**: the loader chain (or the Less compiler behind it) failed. The
//!   original error is kept; display and `source()` are its own.
//! - **Validation**: user supplied options do not match the expected shape.
//! - **Serde**: JSON conversion failures.
//!
//! ## Usage
//!
//! ```rust
//! use mox::errors::{MoError, Result};
//!
//! fn check(reference: &str) -> Result<()> {
//!     if reference.is_empty() {
//!         return Err(MoError::resolution(reference, "empty plugin reference"));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Convenience result type used throughout Mo.
pub type Result<T> = std::result::Result<T, MoError>;

/// Canonical error enumeration for Mo.
#[derive(Debug, Error)]
pub enum MoError {
    /// A plugin module reference could not be turned into a plugin.
    #[error("cannot resolve plugin '{reference}': {message}")]
    Resolution { reference: String, message: String },

    /// The loader chain rejected the render.
    #[error(transparent)]
    Render(anyhow::Error),

    /// Validation errors triggered by malformed options.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<serde_json::Error> for MoError {
    fn from(err: serde_json::Error) -> Self {
        MoError::Serde(err.to_string())
    }
}

impl MoError {
    /// Helper to construct resolution errors.
    pub fn resolution(reference: impl Into<String>, message: impl Into<String>) -> Self {
        MoError::Resolution {
            reference: reference.into(),
            message: message.into(),
        }
    }

    /// Normalizes a loader-chain failure, keeping the original error.
    pub fn render(err: anyhow::Error) -> Self {
        MoError::Render(err)
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        MoError::Validation {
            message: message.into(),
        }
    }
}
