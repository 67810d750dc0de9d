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

//! # Cadre Widgets
//!
//! The audio-editor widget layer. An [`Audio`] subject owns the shared
//! key-value state; widgets register as observers and repaint whenever the
//! state changes, including changes they triggered themselves through their
//! business methods ([`Slider::slide`], [`Knob::turn`]).

#![warn(missing_docs)]

mod audio;
mod error;
pub mod widgets;

pub use audio::Audio;
pub use error::WidgetError;
pub use widgets::{Knob, Repaint, Slider};
