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

//! # Loader Runner Module
//!
//! The seam between the renderer and the host's loader-chain executor. The
//! executor itself lives outside this crate; it receives a
//! [`MoRunLoadersRequest`] naming the resource, the host environment and the
//! loader steps, and resolves with its own output type.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::options::MoAliasTable;
use crate::translate::MoLessLoaderOptions;

/// Loader reference used for Less files.
pub const LESS_LOADER: &str = "less-loader";

/// One step of a loader chain.
#[derive(Clone, Debug, Serialize)]
pub struct MoLoaderStep {
    pub loader: String,
    pub options: MoLessLoaderOptions,
}

/// Everything the executor needs to run the chain over one resource.
#[derive(Clone, Debug, Serialize)]
pub struct MoRunLoadersRequest {
    pub alias: MoAliasTable,
    pub root: PathBuf,
    pub resource: PathBuf,
    pub loaders: Vec<MoLoaderStep>,
}

/// Transformed output of a loader chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoLoaderOutput {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map: Option<String>,
    #[serde(default)]
    pub file_dependencies: Vec<PathBuf>,
}

impl MoLoaderOutput {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_source_map(mut self, source_map: impl Into<String>) -> Self {
        self.source_map = Some(source_map.into());
        self
    }
}

/// Executes loader chains on behalf of the renderer.
///
/// Any failure (module loading, compilation, IO) is reported through the
/// returned error; the renderer does not retry.
#[async_trait]
pub trait MoLoaderRunner: Send + Sync {
    type Output: Send;

    async fn run_loaders(&self, request: MoRunLoadersRequest) -> anyhow::Result<Self::Output>;
}

#[async_trait]
impl<R: MoLoaderRunner + ?Sized> MoLoaderRunner for Arc<R> {
    type Output = R::Output;

    async fn run_loaders(&self, request: MoRunLoadersRequest) -> anyhow::Result<Self::Output> {
        (**self).run_loaders(request).await
    }
}
