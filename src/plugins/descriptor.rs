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

//! # Plugin Descriptor Module
//!
//! A descriptor is one entry of the `plugins` option. In JSON it is either a
//! bare module reference or a `[reference, arguments]` pair:
//!
//! ```json
//! "plugins": [
//!     "less-plugin-clean-css",
//!     ["less-plugin-functions", { "prefix": "fn" }]
//! ]
//! ```
//!
//! A one element array (`["less-plugin-functions"]`) still selects the
//! constructor; it is called with `null` arguments.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How to obtain one Less plugin instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "MoPluginEntry")]
pub enum MoPluginDescriptor {
    /// Use the module's exported instance as-is.
    Simple(String),
    /// Construct a new instance from the module's constructor.
    Configured(String, Value),
}

/// Accepted JSON shapes of a `plugins` entry.
#[derive(Deserialize)]
#[serde(untagged)]
enum MoPluginEntry {
    Simple(String),
    Configured(String, Value),
    Constructor([String; 1]),
}

impl From<MoPluginEntry> for MoPluginDescriptor {
    fn from(entry: MoPluginEntry) -> Self {
        match entry {
            MoPluginEntry::Simple(reference) => MoPluginDescriptor::Simple(reference),
            MoPluginEntry::Configured(reference, arguments) => {
                MoPluginDescriptor::Configured(reference, arguments)
            }
            MoPluginEntry::Constructor([reference]) => {
                MoPluginDescriptor::Configured(reference, Value::Null)
            }
        }
    }
}

impl MoPluginDescriptor {
    pub fn simple(reference: impl Into<String>) -> Self {
        MoPluginDescriptor::Simple(reference.into())
    }

    pub fn configured(reference: impl Into<String>, arguments: Value) -> Self {
        MoPluginDescriptor::Configured(reference.into(), arguments)
    }

    /// The module reference this descriptor points at.
    pub fn reference(&self) -> &str {
        match self {
            MoPluginDescriptor::Simple(reference) => reference,
            MoPluginDescriptor::Configured(reference, _) => reference,
        }
    }

    /// Constructor arguments, only present for the pair form.
    pub fn arguments(&self) -> Option<&Value> {
        match self {
            MoPluginDescriptor::Simple(_) => None,
            MoPluginDescriptor::Configured(_, arguments) => Some(arguments),
        }
    }
}

impl From<&str> for MoPluginDescriptor {
    fn from(reference: &str) -> Self {
        MoPluginDescriptor::simple(reference)
    }
}
