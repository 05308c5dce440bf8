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

//! # Mo Core Library
//!
//! Mo compiles Less stylesheets for a bundler's asset pipeline. It does not
//! implement Less or the loader chain; it prepares everything the chain's
//! Less loader needs and normalizes what comes back.
//!
//! ## Module Overview
//!
//! - **plugins**: plugin descriptors, the plugin registry and the resolver
//! - **options**: user-facing Less options and host environment options
//! - **translate**: mapping of options onto the Less compiler schema
//! - **runner**: the loader-chain executor seam
//! - **render**: the renderer tying resolution, translation and execution
//! - **host**: load hook claiming `.less` resources for the bundler
//! - **errors**: the shared error type
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use mox::{MoLessOptions, MoLessRenderer, MoPluginRegistry, MoRenderRequest, MoRunLoadersOptions};
//!
//! async fn compile(runner: impl mox::MoLoaderRunner) -> mox::Result<()> {
//!     let registry = Arc::new(MoPluginRegistry::new());
//!     let renderer = MoLessRenderer::new(runner, registry);
//!
//!     let opts = MoLessOptions::from_json(&json!({
//!         "modifyVars": {"primary-color": "#1890ff"},
//!         "math": "parens-division",
//!         "sourceMap": true
//!     }))?;
//!     let request = MoRenderRequest::new("/app/src/index.less", opts, MoRunLoadersOptions::new("/app"));
//!
//!     let _css = renderer.render(request).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, MoError>`. Plugin resolution failures are
//! reported as `MoError::Resolution` before the loader chain runs; failures of
//! the chain itself become `MoError::Render`, which wraps the original error.

pub mod errors;
pub mod host;
pub mod options;
pub mod plugins;
pub mod render;
pub mod runner;
pub mod translate;

pub use errors::{MoError, Result};
pub use host::MoLessLoadHook;
pub use options::{
    MoAliasTable, MoLessOptions, MoLessVariables, MoMathMode, MoRenderRequest, MoRunLoadersOptions,
};
pub use plugins::{
    resolve_plugin, resolve_plugins, MoLessPlugin, MoPluginDescriptor, MoPluginFactory,
    MoPluginModule, MoPluginRegistry,
};
pub use render::{execute_loaders, MoLessRenderer};
pub use runner::{MoLoaderOutput, MoLoaderRunner, MoLoaderStep, MoRunLoadersRequest, LESS_LOADER};
pub use translate::{
    translate_options, MoLessCompilerOptions, MoLessLoaderOptions, MoRenderPolicy, MoRewriteUrls,
};
