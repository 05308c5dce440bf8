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

//! # Less Plugin Capability
//!
//! Anything the Less compiler can register as a plugin implements
//! [`MoLessPlugin`]. Modules in the registry either export a ready instance or
//! a [`MoPluginFactory`] that builds one from JSON arguments.

use serde_json::Value;

use crate::errors::Result;

/// A plugin instance handed to the Less compiler.
pub trait MoLessPlugin: std::fmt::Debug + Send + Sync {
    /// Name reported to the compiler and used in logs.
    fn name(&self) -> &str;

    /// Oldest compiler version this plugin supports, as `[major, minor, patch]`.
    fn min_version(&self) -> Option<[u32; 3]> {
        None
    }

    /// Arguments the instance was constructed with, if any.
    fn options(&self) -> Option<&Value> {
        None
    }
}

/// Constructor exported by a plugin module. Given the descriptor's arguments,
/// it returns a new plugin instance.
pub type MoPluginFactory = fn(&Value) -> Result<Box<dyn MoLessPlugin>>;
