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

//! # Option Translation Module
//!
//! Maps [`MoLessOptions`] onto the option schema of the Less loader. The
//! mapping is purely structural:
//!
//! | input            | compiler field      |
//! |------------------|---------------------|
//! | request filename | `filename`          |
//! | policy           | `javascriptEnabled` |
//! | `math`           | `math`              |
//! | resolved plugins | `plugins`           |
//! | `modifyVars`     | `modifyVars`        |
//! | `globalVars`     | `globalVars`        |
//! | policy           | `rewriteUrls`       |
//! | `sourceMap`      | `sourceMap`         |
//!
//! Alias table and root are not part of the compiler options; they travel on
//! the loader-chain request (see [`crate::runner::MoRunLoadersRequest`]).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::errors::Result;
use crate::options::{MoLessOptions, MoLessVariables, MoMathMode};
use crate::plugins::MoLessPlugin;

/// URL rewriting mode for imported files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoRewriteUrls {
    #[default]
    All,
    Local,
    Off,
}

/// Compiler settings that requests cannot change.
///
/// The default enables inline JavaScript evaluation and rewrites all URLs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoRenderPolicy {
    pub javascript_enabled: bool,
    pub rewrite_urls: MoRewriteUrls,
}

impl Default for MoRenderPolicy {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            rewrite_urls: MoRewriteUrls::All,
        }
    }
}

/// Options in the shape the Less compiler expects.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoLessCompilerOptions {
    pub filename: PathBuf,
    pub javascript_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub math: Option<MoMathMode>,
    #[serde(serialize_with = "serialize_plugin_names")]
    pub plugins: Vec<Arc<dyn MoLessPlugin>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_vars: Option<MoLessVariables>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_vars: Option<MoLessVariables>,
    pub rewrite_urls: MoRewriteUrls,
    pub source_map: bool,
}

impl MoLessCompilerOptions {
    /// JSON view of the options. Plugins appear by name.
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Options object of the Less loader step.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoLessLoaderOptions {
    pub less_options: MoLessCompilerOptions,
}

fn serialize_plugin_names<S>(
    plugins: &[Arc<dyn MoLessPlugin>],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(plugins.iter().map(|plugin| plugin.name()))
}

/// Builds the Less loader options for `filename`.
pub fn translate_options(
    filename: &Path,
    opts: &MoLessOptions,
    plugins: Vec<Arc<dyn MoLessPlugin>>,
    policy: &MoRenderPolicy,
) -> MoLessLoaderOptions {
    MoLessLoaderOptions {
        less_options: MoLessCompilerOptions {
            filename: filename.to_path_buf(),
            javascript_enabled: policy.javascript_enabled,
            math: opts.math,
            plugins,
            modify_vars: opts.modify_vars.clone(),
            global_vars: opts.global_vars.clone(),
            rewrite_urls: policy.rewrite_urls,
            source_map: opts.source_map,
        },
    }
}
