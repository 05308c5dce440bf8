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

//! # Mo Options Module
//!
//! User-facing render options. They deserialize from the same camelCase JSON
//! the bundler configuration uses:
//!
//! ```json
//! {
//!     "modifyVars": { "primary-color": "#1890ff" },
//!     "globalVars": { "gutter": "8px" },
//!     "math": "parens-division",
//!     "sourceMap": true,
//!     "plugins": ["less-plugin-clean-css"]
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::errors::{MoError, Result};
use crate::plugins::MoPluginDescriptor;

/// Variable table for `modifyVars` and `globalVars`. Keys keep the order
/// they were declared in.
pub type MoLessVariables = Map<String, Value>;

/// Module-path rewrites in declaration order.
///
/// Resolvers apply the first matching entry, so `"@/components"` declared
/// before `"@"` must stay ahead of it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct MoAliasTable {
    entries: Vec<(String, String)>,
}

impl MoAliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, or replaces the target of an existing one in place.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let from = from.into();
        let to = to.into();
        match self.entries.iter_mut().find(|(key, _)| *key == from) {
            Some(entry) => entry.1 = to,
            None => self.entries.push((from, to)),
        }
    }

    pub fn get(&self, from: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == from)
            .map(|(_, to)| to.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, to)| (key.as_str(), to.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Map<String, Value>> for MoAliasTable {
    type Error = MoError;

    fn try_from(map: Map<String, Value>) -> Result<Self> {
        let mut table = MoAliasTable::new();
        for (from, to) in map {
            match to {
                Value::String(to) => table.insert(from, to),
                other => {
                    return Err(MoError::validation(format!(
                        "alias '{from}' must map to a string, got {other}"
                    )))
                }
            }
        }
        Ok(table)
    }
}

impl From<MoAliasTable> for Map<String, Value> {
    fn from(table: MoAliasTable) -> Self {
        table
            .entries
            .into_iter()
            .map(|(from, to)| (from, Value::String(to)))
            .collect()
    }
}

fn null_as_false<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// How the compiler evaluates math expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoMathMode {
    Always,
    ParensDivision,
    Parens,
    Strict,
    StrictLegacy,
}

/// Less options accepted by the renderer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoLessOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_vars: Option<MoLessVariables>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_vars: Option<MoLessVariables>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub math: Option<MoMathMode>,
    /// `null` reads as `false`.
    #[serde(deserialize_with = "null_as_false")]
    pub source_map: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<MoPluginDescriptor>>,
}

impl MoLessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|err| MoError::validation(format!("invalid less options: {err}")))
    }

    pub fn with_math(mut self, math: MoMathMode) -> Self {
        self.math = Some(math);
        self
    }

    pub fn with_source_map(mut self, enabled: bool) -> Self {
        self.source_map = enabled;
        self
    }

    pub fn with_modify_var(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.modify_vars
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value.into());
        self
    }

    pub fn with_global_var(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.global_vars
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value.into());
        self
    }

    pub fn with_plugin(mut self, descriptor: MoPluginDescriptor) -> Self {
        self.plugins.get_or_insert_with(Vec::new).push(descriptor);
        self
    }
}

/// Host environment forwarded to the loader chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoRunLoadersOptions {
    /// Module-path rewrites applied during resolution.
    pub alias: MoAliasTable,
    /// Base directory for resolution.
    pub root: PathBuf,
}

impl MoRunLoadersOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            alias: MoAliasTable::new(),
            root: root.into(),
        }
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|err| MoError::validation(format!("invalid loader options: {err}")))
    }

    pub fn with_alias(mut self, from: &str, to: &str) -> Self {
        self.alias.insert(from, to);
        self
    }
}

/// One render call: the target file plus its options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoRenderRequest {
    pub filename: PathBuf,
    #[serde(default)]
    pub opts: MoLessOptions,
    #[serde(default)]
    pub ext_opts: MoRunLoadersOptions,
}

impl MoRenderRequest {
    pub fn new(filename: impl Into<PathBuf>, opts: MoLessOptions, ext_opts: MoRunLoadersOptions) -> Self {
        Self {
            filename: filename.into(),
            opts,
            ext_opts,
        }
    }
}
