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

use cadre_widgets::{Audio, Knob, Repaint, Slider};
use serde_json::json;
use std::sync::{Arc, Mutex};

#[test]
fn two_widgets_are_each_notified_once_per_modify() {
    // --- 1. ARRANGE ---
    // Two widgets registered on a subject with empty state.
    let mut audio = Audio::new();
    let slider = Arc::new(Slider::new("volume"));
    let knob = Arc::new(Knob::new("gain"));
    audio.register(slider.clone());
    audio.register(knob.clone());

    // --- 2. ACT ---
    audio.modify(json!({ "x": 1 }));

    // --- 3. ASSERT ---
    assert_eq!(audio.state(), &json!({ "x": 1 }));
    assert_eq!(slider.times_repainted(), 1);
    assert_eq!(knob.times_repainted(), 1);
    assert_eq!(slider.last_repaint(), Some(Repaint::SettingsMap));
    assert_eq!(knob.last_repaint(), Some(Repaint::SettingsMap));
}

#[test]
fn slide_repaints_every_registered_widget_including_the_slider() {
    let audio = Arc::new(Mutex::new(Audio::new()));
    let slider = Arc::new(Slider::new("volume"));
    let knob = Arc::new(Knob::new("gain"));
    slider.bind_audio(&audio);
    {
        let mut audio = audio.lock().expect("audio lock");
        audio.register(slider.clone());
        audio.register(knob.clone());
    }

    slider.slide(42).expect("slide should succeed");

    // The slider did not paint itself in `slide`; the fan-out did.
    assert_eq!(slider.times_repainted(), 1);
    assert_eq!(slider.position(), 42);
    // Sibling widgets repaint from the same notification.
    assert_eq!(knob.times_repainted(), 1);
    assert_eq!(
        audio.lock().expect("audio lock").state(),
        &json!({ "someProperty": 42 })
    );
}

#[test]
fn knob_and_slider_edits_accumulate_in_the_shared_state() {
    let audio = Arc::new(Mutex::new(Audio::new()));
    let slider = Arc::new(Slider::new("volume"));
    let knob = Arc::new(Knob::new("gain"));
    slider.bind_audio(&audio);
    knob.bind_audio(&audio);
    {
        let mut audio = audio.lock().expect("audio lock");
        audio.register(slider.clone());
        audio.register(knob.clone());
    }

    slider.slide(12).expect("slide should succeed");
    knob.turn(0.5).expect("turn should succeed");

    let audio = audio.lock().expect("audio lock");
    assert_eq!(audio.state(), &json!({ "someProperty": 12, "gain": 0.5 }));
    assert_eq!(slider.times_repainted(), 2);
    assert_eq!(knob.times_repainted(), 2);
    assert_eq!(knob.gain(), 0.5);
    assert_eq!(slider.position(), 12);
}

#[test]
fn scalar_state_takes_the_single_property_branch() {
    let mut audio = Audio::new();
    let slider = Arc::new(Slider::new("volume"));
    audio.register(slider.clone());

    // A non-object delta replaces the state wholesale.
    audio.modify(json!(-6));

    assert_eq!(slider.last_repaint(), Some(Repaint::SingleProperty));
    assert_eq!(audio.state(), &json!(-6));
}

#[test]
fn unregistered_widget_stops_repainting() {
    let mut audio = Audio::new();
    let slider = Arc::new(Slider::new("volume"));
    let knob = Arc::new(Knob::new("gain"));
    let slider_id = audio.register(slider.clone());
    audio.register(knob.clone());

    audio.modify(json!({ "x": 1 }));
    assert!(audio.unregister(slider_id));
    audio.modify(json!({ "x": 2 }));

    assert_eq!(slider.times_repainted(), 1);
    assert_eq!(knob.times_repainted(), 2);
}
