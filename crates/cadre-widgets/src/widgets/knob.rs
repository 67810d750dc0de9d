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

use crate::audio::Audio;
use crate::error::WidgetError;
use crate::widgets::Repaint;
use cadre_core::{Observer, SubjectCell};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

/// A rotary gain knob.
pub struct Knob {
    label: String,
    audio: Mutex<Option<Weak<Mutex<Audio>>>>,
    gain: Mutex<f64>,
    last_repaint: Mutex<Option<Repaint>>,
    repaints: AtomicU64,
}

impl Knob {
    /// Creates an unbound knob at gain 0.0.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            audio: Mutex::new(None),
            gain: Mutex::new(0.0),
            last_repaint: Mutex::new(None),
            repaints: AtomicU64::new(0),
        }
    }

    /// Points this knob at `audio`, replacing any previous binding.
    pub fn bind_audio(&self, audio: &Arc<Mutex<Audio>>) {
        log::info!("Knob '{}': Now references the audio subject", self.label);
        if let Ok(mut slot) = self.audio.lock() {
            *slot = Some(Arc::downgrade(audio));
        }
    }

    /// Business method: turns the knob by setting the gain property.
    pub fn turn(&self, gain: f64) -> Result<(), WidgetError> {
        log::info!("Knob '{}': Turned to gain {gain}, modifying audio", self.label);
        let audio = self.bound_audio()?;
        let mut audio = audio.lock().map_err(|_| WidgetError::Poisoned {
            widget: self.label.clone(),
        })?;
        audio.modify(json!({ "gain": gain }));
        Ok(())
    }

    /// The gain last rendered by the fan-out.
    pub fn gain(&self) -> f64 {
        self.gain.lock().map(|g| *g).unwrap_or_default()
    }

    /// The reason for the most recent repaint, if any happened yet.
    pub fn last_repaint(&self) -> Option<Repaint> {
        self.last_repaint.lock().ok().and_then(|r| *r)
    }

    /// How many times this widget has repainted.
    pub fn times_repainted(&self) -> u64 {
        self.repaints.load(Ordering::Relaxed)
    }

    fn bound_audio(&self) -> Result<Arc<Mutex<Audio>>, WidgetError> {
        let slot = self.audio.lock().map_err(|_| WidgetError::Poisoned {
            widget: self.label.clone(),
        })?;
        slot.as_ref()
            .and_then(Weak::upgrade)
            .ok_or_else(|| WidgetError::SubjectUnbound {
                widget: self.label.clone(),
            })
    }
}

impl Observer<Value> for Knob {
    fn subject_updated(&self, subject: &SubjectCell<Value>) {
        let repaint = match subject.state().as_object() {
            Some(settings) => {
                if let Some(gain) = settings.get("gain").and_then(Value::as_f64) {
                    if let Ok(mut rendered) = self.gain.lock() {
                        *rendered = gain;
                    }
                }
                log::info!("Knob '{}': Project settings changes rendered", self.label);
                Repaint::SettingsMap
            }
            None => {
                log::info!("Knob '{}': Audio property change rendered", self.label);
                Repaint::SingleProperty
            }
        };
        self.repaints.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.last_repaint.lock() {
            *last = Some(repaint);
        }
    }
}
