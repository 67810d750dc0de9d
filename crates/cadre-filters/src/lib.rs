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

//! # Cadre Filters
//!
//! Frame rendering for the emulator, with stackable post-processing filters.
//!
//! A [`VideoGameEmulator`] produces the base frame; each filter wraps another
//! [`FrameRenderer`] and appends its own annotation to the rendered frame, so
//! a stack of N filters yields N annotations, innermost first.

#![warn(missing_docs)]

mod emulator;
mod error;
pub mod filters;
mod renderer;
mod settings;

pub use emulator::VideoGameEmulator;
pub use error::RenderError;
pub use renderer::FrameRenderer;
pub use settings::EmulatorSettings;
