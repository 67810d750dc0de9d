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

//! Defines the abstract `FrameRenderer` trait.

use crate::error::RenderError;

/// The contract shared by the base emulator and every filter that wraps it.
///
/// A filter both consumes this trait (the renderer it wraps) and implements
/// it, so filters stack in any order without the caller distinguishing a
/// bare emulator from a fully filtered chain.
pub trait FrameRenderer: Send + Sync {
    /// Renders the next frame as a textual frame description.
    ///
    /// Filters call the wrapped renderer first and append their own
    /// annotation, so errors from the base renderer surface unchanged.
    fn render_frame(&self) -> Result<String, RenderError>;
}
