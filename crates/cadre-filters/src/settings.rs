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

//! Global settings for the emulator's base renderer.

use serde::{Deserialize, Serialize};

/// A collection of settings that affect the base frame output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmulatorSettings {
    /// Horizontal resolution of the rendered frame, in pixels.
    pub width: u32,
    /// Vertical resolution of the rendered frame, in pixels.
    pub height: u32,
    /// Target refresh rate in frames per second (50 for PAL, 60 for NTSC).
    pub refresh_rate_hz: u32,
}

impl Default for EmulatorSettings {
    fn default() -> Self {
        Self {
            width: 256,
            height: 240,
            refresh_rate_hz: 60,
        }
    }
}
