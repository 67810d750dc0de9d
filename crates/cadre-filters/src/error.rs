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

//! Error types for the frame rendering chain.

use thiserror::Error;

/// An error raised while rendering a frame.
///
/// Filters never fail on their own; they propagate whatever the wrapped
/// renderer reports.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The emulator has no cartridge inserted, so there is nothing to render.
    #[error("no cartridge inserted; nothing to render")]
    NoCartridge,
}
