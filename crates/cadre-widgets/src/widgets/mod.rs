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

//! Concrete observer widgets.

mod knob;
mod slider;

pub use self::knob::Knob;
pub use self::slider::Slider;

/// Why a widget repainted, derived from the shape of the subject's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repaint {
    /// The state is a full settings map; the widget re-read its properties
    /// from it.
    SettingsMap,
    /// The state is a single value; the widget rendered the property change
    /// directly.
    SingleProperty,
}
