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

//! # Mo Plugins Module
//!
//! Less plugins are configured by reference and resolved against an explicit
//! registry before every render.
//!
//! - **plugin**: the [`MoLessPlugin`] capability and the constructor signature
//! - **descriptor**: the user-facing `"name"` / `["name", {...}]` entries
//! - **registry**: reference to module lookup table
//! - **resolver**: descriptors to live plugin instances

pub mod descriptor;
pub mod plugin;
pub mod registry;
pub mod resolver;

pub use descriptor::MoPluginDescriptor;
pub use plugin::{MoLessPlugin, MoPluginFactory};
pub use registry::{MoPluginModule, MoPluginRegistry};
pub use resolver::{resolve_plugin, resolve_plugins};
