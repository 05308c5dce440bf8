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

//! # Host Load Hook Module
//!
//! Entry point for the bundler's load stage. The hook claims resources with a
//! `.less` extension, renders them with the options it was configured with,
//! and returns the CSS. Other resources are declined so the host can try its
//! next loader.

use std::path::Path;

use crate::errors::Result;
use crate::options::{MoLessOptions, MoRenderRequest, MoRunLoadersOptions};
use crate::render::MoLessRenderer;
use crate::runner::{MoLoaderOutput, MoLoaderRunner};

const LESS_EXTENSION: &str = "less";

pub struct MoLessLoadHook<R> {
    renderer: MoLessRenderer<R>,
    opts: MoLessOptions,
    ext_opts: MoRunLoadersOptions,
}

impl<R> MoLessLoadHook<R>
where
    R: MoLoaderRunner<Output = MoLoaderOutput>,
{
    pub fn new(renderer: MoLessRenderer<R>, opts: MoLessOptions, ext_opts: MoRunLoadersOptions) -> Self {
        Self {
            renderer,
            opts,
            ext_opts,
        }
    }

    pub fn name(&self) -> &'static str {
        "less"
    }

    pub fn renderer(&self) -> &MoLessRenderer<R> {
        &self.renderer
    }

    /// Whether `path` is a Less source file.
    pub fn handles(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(LESS_EXTENSION))
    }

    /// Renders `path` to CSS, or returns `None` for non-Less resources.
    pub async fn load(&self, path: &Path) -> Result<Option<MoLoaderOutput>> {
        if !Self::handles(path) {
            return Ok(None);
        }

        let request = MoRenderRequest::new(path, self.opts.clone(), self.ext_opts.clone());
        let output = self.renderer.render(request).await?;
        Ok(Some(output))
    }
}
