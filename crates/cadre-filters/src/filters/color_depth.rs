// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::RenderError;
use crate::renderer::FrameRenderer;

/// Quantizes a frame down to a retro color palette.
pub struct ColorDepthReduction {
    inner: Box<dyn FrameRenderer>,
}

impl ColorDepthReduction {
    /// Wraps `inner`, quantizing whatever it renders.
    pub fn new(inner: Box<dyn FrameRenderer>) -> Self {
        Self { inner }
    }
}

impl FrameRenderer for ColorDepthReduction {
    fn render_frame(&self) -> Result<String, RenderError> {
        let frame = self.inner.render_frame()?;
        log::trace!("ColorDepthReduction: Quantizing palette");
        Ok(frame + " with ColorDepthReduction")
    }
}
