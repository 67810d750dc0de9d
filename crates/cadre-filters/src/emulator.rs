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

//! The base frame renderer every filter chain bottoms out in.

use crate::error::RenderError;
use crate::renderer::FrameRenderer;
use crate::settings::EmulatorSettings;
use std::sync::atomic::{AtomicU64, Ordering};

/// The emulator itself: renders the raw, unfiltered frame.
///
/// Rendering fails with [`RenderError::NoCartridge`] until a cartridge is
/// inserted. The frame counter advances on every successful render so
/// consecutive frames are distinguishable in logs and demos.
#[derive(Debug)]
pub struct VideoGameEmulator {
    settings: EmulatorSettings,
    cartridge: Option<String>,
    frame_counter: AtomicU64,
}

impl VideoGameEmulator {
    /// Creates an emulator with the given settings and no cartridge.
    pub fn new(settings: EmulatorSettings) -> Self {
        Self {
            settings,
            cartridge: None,
            frame_counter: AtomicU64::new(0),
        }
    }

    /// Inserts a cartridge, replacing any previously inserted one.
    pub fn insert_cartridge(&mut self, title: impl Into<String>) {
        let title = title.into();
        log::info!("VideoGameEmulator: Inserted cartridge '{title}'");
        self.cartridge = Some(title);
    }

    /// Removes the current cartridge, if any.
    pub fn eject_cartridge(&mut self) -> Option<String> {
        let ejected = self.cartridge.take();
        if let Some(title) = &ejected {
            log::info!("VideoGameEmulator: Ejected cartridge '{title}'");
        }
        ejected
    }

    /// Returns the settings the base frame is rendered with.
    pub fn settings(&self) -> &EmulatorSettings {
        &self.settings
    }
}

impl Default for VideoGameEmulator {
    fn default() -> Self {
        Self::new(EmulatorSettings::default())
    }
}

impl FrameRenderer for VideoGameEmulator {
    fn render_frame(&self) -> Result<String, RenderError> {
        let title = self.cartridge.as_deref().ok_or(RenderError::NoCartridge)?;
        let frame = self.frame_counter.fetch_add(1, Ordering::Relaxed);
        log::trace!("VideoGameEmulator: Rendering frame {frame} of '{title}'");
        Ok(format!(
            "{}x{} frame {frame} of {title}",
            self.settings.width, self.settings.height
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_cartridge_fails() {
        let emulator = VideoGameEmulator::default();
        assert_eq!(emulator.render_frame(), Err(RenderError::NoCartridge));
    }

    #[test]
    fn render_with_cartridge_describes_frame() {
        let mut emulator = VideoGameEmulator::default();
        emulator.insert_cartridge("Star Courier");

        let frame = emulator.render_frame().expect("render should succeed");
        assert_eq!(frame, "256x240 frame 0 of Star Courier");
    }

    #[test]
    fn frame_counter_advances_per_render() {
        let mut emulator = VideoGameEmulator::default();
        emulator.insert_cartridge("Star Courier");

        let first = emulator.render_frame().expect("first render");
        let second = emulator.render_frame().expect("second render");
        assert_ne!(first, second);
        assert!(second.contains("frame 1"));
    }

    #[test]
    fn eject_restores_the_no_cartridge_failure() {
        let mut emulator = VideoGameEmulator::default();
        emulator.insert_cartridge("Star Courier");
        assert_eq!(emulator.eject_cartridge().as_deref(), Some("Star Courier"));

        assert_eq!(emulator.render_frame(), Err(RenderError::NoCartridge));
    }
}
