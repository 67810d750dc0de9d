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

/// A fader-style slider widget.
///
/// A slider can modify audio properties, but it is not intended to alter the
/// project settings data object, so it keeps a reference only to the audio
/// subject. The reference is non-owning and replaceable: the editing session
/// owns the subject, and a slider whose subject has gone away simply fails
/// its business method.
pub struct Slider {
    label: String,
    /// Replaceable, non-owning handle to the one subject this widget mutates.
    audio: Mutex<Option<Weak<Mutex<Audio>>>>,
    /// The widget's own rendered position, refreshed by the fan-out.
    position: Mutex<i64>,
    last_repaint: Mutex<Option<Repaint>>,
    repaints: AtomicU64,
}

impl Slider {
    /// Creates an unbound slider at position 0.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            audio: Mutex::new(None),
            position: Mutex::new(0),
            last_repaint: Mutex::new(None),
            repaints: AtomicU64::new(0),
        }
    }

    /// Points this slider at `audio`, replacing any previous binding.
    ///
    /// Binding only selects the mutation target; notification delivery is a
    /// separate concern handled by [`Audio::register`].
    pub fn bind_audio(&self, audio: &Arc<Mutex<Audio>>) {
        log::info!("Slider '{}': Now references the audio subject", self.label);
        if let Ok(mut slot) = self.audio.lock() {
            *slot = Some(Arc::downgrade(audio));
        }
    }

    /// Business method: moves the slider by setting the audio property.
    ///
    /// The widget does not repaint itself here; the repaint happens in
    /// [`Observer::subject_updated`] once the subject fans the change out,
    /// which also updates every other registered widget.
    pub fn slide(&self, value: i64) -> Result<(), WidgetError> {
        log::info!(
            "Slider '{}': Moved to value {value}, modifying audio",
            self.label
        );
        let audio = self.bound_audio()?;
        let mut audio = audio.lock().map_err(|_| WidgetError::Poisoned {
            widget: self.label.clone(),
        })?;
        audio.modify(json!({ "someProperty": value }));
        Ok(())
    }

    /// The slider's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The position last rendered by the fan-out.
    pub fn position(&self) -> i64 {
        self.position.lock().map(|p| *p).unwrap_or_default()
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

impl Observer<Value> for Slider {
    fn subject_updated(&self, subject: &SubjectCell<Value>) {
        let repaint = match subject.state().as_object() {
            Some(settings) => {
                // A settings map may carry more than this widget's own
                // property; re-read whatever is relevant.
                if let Some(value) = settings.get("someProperty").and_then(Value::as_i64) {
                    if let Ok(mut position) = self.position.lock() {
                        *position = value;
                    }
                }
                log::info!("Slider '{}': Project settings changes rendered", self.label);
                Repaint::SettingsMap
            }
            None => {
                log::info!("Slider '{}': Audio property change rendered", self.label);
                Repaint::SingleProperty
            }
        };
        self.repaints.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.last_repaint.lock() {
            *last = Some(repaint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_without_binding_fails_with_subject_unbound() {
        let slider = Slider::new("volume");

        assert_eq!(
            slider.slide(5),
            Err(WidgetError::SubjectUnbound {
                widget: "volume".to_string()
            })
        );
    }

    #[test]
    fn slide_after_subject_drop_fails_with_subject_unbound() {
        let slider = Slider::new("volume");
        let audio = Arc::new(Mutex::new(Audio::new()));
        slider.bind_audio(&audio);
        drop(audio);

        assert_eq!(
            slider.slide(5),
            Err(WidgetError::SubjectUnbound {
                widget: "volume".to_string()
            })
        );
    }

    #[test]
    fn slide_merges_the_property_into_the_subject() {
        let slider = Slider::new("volume");
        let audio = Arc::new(Mutex::new(Audio::new()));
        slider.bind_audio(&audio);

        slider.slide(37).expect("slide should succeed");

        let audio = audio.lock().expect("audio lock");
        assert_eq!(audio.state(), &json!({ "someProperty": 37 }));
    }

    #[test]
    fn rebinding_replaces_the_previous_subject() {
        let slider = Slider::new("volume");
        let first = Arc::new(Mutex::new(Audio::new()));
        let second = Arc::new(Mutex::new(Audio::new()));
        slider.bind_audio(&first);
        slider.bind_audio(&second);

        slider.slide(9).expect("slide should succeed");

        assert_eq!(first.lock().expect("first lock").state(), &json!({}));
        assert_eq!(
            second.lock().expect("second lock").state(),
            &json!({ "someProperty": 9 })
        );
    }
}
