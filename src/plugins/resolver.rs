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

//! # Plugin Resolver Module
//!
//! Turns the configured plugin descriptors into the instances handed to the
//! Less compiler. Resolution is an order-preserving map over the descriptor
//! list: one instance per descriptor, no deduplication and no caching.
//! Instances built from constructors are fresh on every call.

use std::sync::Arc;

use crate::errors::{MoError, Result};
use crate::plugins::descriptor::MoPluginDescriptor;
use crate::plugins::plugin::MoLessPlugin;
use crate::plugins::registry::MoPluginRegistry;

/// Resolves a single descriptor.
///
/// Constructor failures are returned unchanged.
pub fn resolve_plugin(
    registry: &MoPluginRegistry,
    descriptor: &MoPluginDescriptor,
) -> Result<Arc<dyn MoLessPlugin>> {
    let module = registry.get(descriptor.reference())?;

    match descriptor {
        MoPluginDescriptor::Configured(reference, arguments) => {
            let constructor = module.constructor().ok_or_else(|| {
                MoError::resolution(reference.as_str(), "module does not export a plugin constructor")
            })?;
            let plugin = constructor(arguments)?;
            Ok(Arc::from(plugin))
        }
        MoPluginDescriptor::Simple(reference) => module.exported_instance().cloned().ok_or_else(|| {
            MoError::resolution(reference.as_str(), "module does not export a plugin instance")
        }),
    }
}

/// Resolves every descriptor in order. Absent input yields no plugins.
pub fn resolve_plugins(
    registry: &MoPluginRegistry,
    descriptors: Option<&[MoPluginDescriptor]>,
) -> Result<Vec<Arc<dyn MoLessPlugin>>> {
    let descriptors = descriptors.unwrap_or_default();
    let plugins = descriptors
        .iter()
        .map(|descriptor| resolve_plugin(registry, descriptor))
        .collect::<Result<Vec<_>>>()?;

    if !plugins.is_empty() {
        log::debug!(
            "resolved {} less plugin(s): {}",
            plugins.len(),
            plugins.iter().map(|p| p.name()).collect::<Vec<_>>().join(", ")
        );
    }
    Ok(plugins)
}
