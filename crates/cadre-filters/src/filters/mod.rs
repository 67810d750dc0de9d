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

//! Post-processing filters that wrap a [`FrameRenderer`](crate::FrameRenderer).
//!
//! Each filter owns the renderer it wraps and appends exactly one annotation
//! to its output. Filters stack freely; annotations accumulate innermost
//! first.

mod color_depth;
mod fxaa;
mod scanlines;

pub use self::color_depth::ColorDepthReduction;
pub use self::fxaa::FxaaAntiAliasing;
pub use self::scanlines::Scanlines;
