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

//! # Mo Render Module
//!
//! Renders one Less file through the loader chain.
//!
//! A render resolves the configured plugins, translates the options into the
//! Less loader's schema, and makes exactly one call to the
//! [`MoLoaderRunner`]. Successful output is returned untouched; failures are
//! normalized into [`MoError::Render`].
//!
//! ```rust
//! use std::sync::Arc;
//! use mox::{MoLessOptions, MoLessRenderer, MoPluginRegistry, MoRenderRequest, MoRunLoadersOptions};
//!
//! async fn build(runner: impl mox::MoLoaderRunner) -> mox::Result<()> {
//!     let renderer = MoLessRenderer::new(runner, Arc::new(MoPluginRegistry::new()));
//!     let request = MoRenderRequest::new(
//!         "/app/src/index.less",
//!         MoLessOptions::new().with_source_map(true),
//!         MoRunLoadersOptions::new("/app"),
//!     );
//!     renderer.render(request).await?;
//!     Ok(())
//! }
//! ```

use std::sync::Arc;
use std::time::Instant;

use crate::errors::{MoError, Result};
use crate::options::MoRenderRequest;
use crate::plugins::{resolve_plugins, MoPluginRegistry};
use crate::runner::{MoLoaderRunner, MoLoaderStep, MoRunLoadersRequest, LESS_LOADER};
use crate::translate::{translate_options, MoRenderPolicy};

/// Renders Less files with a fixed runner, plugin registry and policy.
///
/// Holds no per-render state; one instance may serve concurrent renders of
/// independent files.
pub struct MoLessRenderer<R> {
    runner: R,
    registry: Arc<MoPluginRegistry>,
    policy: MoRenderPolicy,
    loader: String,
}

impl<R: MoLoaderRunner> MoLessRenderer<R> {
    pub fn new(runner: R, registry: Arc<MoPluginRegistry>) -> Self {
        Self {
            runner,
            registry,
            policy: MoRenderPolicy::default(),
            loader: LESS_LOADER.to_string(),
        }
    }

    pub fn with_policy(mut self, policy: MoRenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Overrides the loader reference placed in the chain.
    pub fn with_loader(mut self, loader: impl Into<String>) -> Self {
        self.loader = loader.into();
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn registry(&self) -> &MoPluginRegistry {
        &self.registry
    }

    pub fn policy(&self) -> &MoRenderPolicy {
        &self.policy
    }

    /// Resolves plugins and builds the single-step loader request.
    ///
    /// Resolution failures are returned as-is.
    pub fn prepare(&self, request: &MoRenderRequest) -> Result<MoRunLoadersRequest> {
        let plugins = resolve_plugins(&self.registry, request.opts.plugins.as_deref())?;
        let options = translate_options(&request.filename, &request.opts, plugins, &self.policy);

        Ok(MoRunLoadersRequest {
            alias: request.ext_opts.alias.clone(),
            root: request.ext_opts.root.clone(),
            resource: request.filename.clone(),
            loaders: vec![MoLoaderStep {
                loader: self.loader.clone(),
                options,
            }],
        })
    }

    pub async fn render(&self, request: MoRenderRequest) -> Result<R::Output> {
        let run_request = self.prepare(&request)?;

        log::debug!("rendering {}", request.filename.display());
        let started = Instant::now();
        let output = execute_loaders(&self.runner, run_request).await;
        match &output {
            Ok(_) => log::debug!(
                "rendered {} in {:?}",
                request.filename.display(),
                started.elapsed()
            ),
            Err(err) => log::warn!("failed to render {}: {}", request.filename.display(), err),
        }
        output
    }
}

/// Runs a prepared request, normalizing the runner's failure.
pub async fn execute_loaders<R>(runner: &R, request: MoRunLoadersRequest) -> Result<R::Output>
where
    R: MoLoaderRunner + ?Sized,
{
    runner.run_loaders(request).await.map_err(MoError::render)
}
