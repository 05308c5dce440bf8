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

//! # Plugin Registry Module
//!
//! This module maps stable plugin references to the modules that back them,
//! replacing dynamic module loading with an explicit lookup table.
//!
//! ## Registry Operations
//!
//! - Register modules exporting an instance, a constructor, or both
//! - Register a designated default constructor that takes precedence
//! - Look modules up by reference

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{MoError, Result};
use crate::plugins::plugin::{MoLessPlugin, MoPluginFactory};

/// The exports of one plugin module.
///
/// A bare descriptor uses `instance` directly. A configured descriptor calls
/// the default constructor when one is exported and the top-level
/// constructor otherwise.
#[derive(Clone, Debug, Default)]
pub struct MoPluginModule {
    instance: Option<Arc<dyn MoLessPlugin>>,
    constructor: Option<MoPluginFactory>,
    default_constructor: Option<MoPluginFactory>,
}

impl MoPluginModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_instance(instance: Arc<dyn MoLessPlugin>) -> Self {
        Self::new().with_instance(instance)
    }

    pub fn from_constructor(constructor: MoPluginFactory) -> Self {
        Self::new().with_constructor(constructor)
    }

    pub fn with_instance(mut self, instance: Arc<dyn MoLessPlugin>) -> Self {
        self.instance = Some(instance);
        self
    }

    pub fn with_constructor(mut self, constructor: MoPluginFactory) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn with_default_constructor(mut self, constructor: MoPluginFactory) -> Self {
        self.default_constructor = Some(constructor);
        self
    }

    /// The exported instance, shared with every caller.
    pub fn exported_instance(&self) -> Option<&Arc<dyn MoLessPlugin>> {
        self.instance.as_ref()
    }

    /// The constructor to call: default export first, then top-level export.
    pub fn constructor(&self) -> Option<MoPluginFactory> {
        self.default_constructor.or(self.constructor)
    }
}

/// Registry mapping plugin references to their modules.
#[derive(Clone, Debug, Default)]
pub struct MoPluginRegistry {
    inner: HashMap<String, MoPluginModule>,
}

impl MoPluginRegistry {
    pub fn new() -> Self {
        MoPluginRegistry {
            inner: HashMap::new(),
        }
    }

    /// Registers a module, replacing any previous one under `reference`.
    pub fn register(&mut self, reference: &str, module: MoPluginModule) {
        self.inner.insert(reference.to_string(), module);
    }

    pub fn register_instance(&mut self, reference: &str, instance: Arc<dyn MoLessPlugin>) {
        self.inner.entry(reference.to_string()).or_default().instance = Some(instance);
    }

    pub fn register_constructor(&mut self, reference: &str, constructor: MoPluginFactory) {
        self.inner.entry(reference.to_string()).or_default().constructor = Some(constructor);
    }

    pub fn register_default_constructor(&mut self, reference: &str, constructor: MoPluginFactory) {
        self.inner
            .entry(reference.to_string())
            .or_default()
            .default_constructor = Some(constructor);
    }

    pub fn get(&self, reference: &str) -> Result<&MoPluginModule> {
        self.inner
            .get(reference)
            .ok_or_else(|| MoError::resolution(reference, "unknown plugin module"))
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.inner.contains_key(reference)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
