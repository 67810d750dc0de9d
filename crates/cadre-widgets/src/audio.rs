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

//! The audio data object widgets observe and mutate.

use cadre_core::{Observer, ObserverId, SubjectCell};
use serde_json::{Map, Value};

/// The shared audio state of an editing session.
///
/// Widgets do not talk to each other: they mutate this subject through
/// [`modify`](Self::modify) and let the notification fan-out repaint every
/// registered widget, themselves included. State is an opaque JSON value
/// (object-rooted by default) so observers can branch on its shape.
#[derive(Debug)]
pub struct Audio {
    cell: SubjectCell<Value>,
}

impl Default for Audio {
    fn default() -> Self {
        Self::new()
    }
}

impl Audio {
    /// Creates an audio subject with an empty settings map and no observers.
    pub fn new() -> Self {
        Self {
            cell: SubjectCell::new(Value::Object(Map::new())),
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &Value {
        self.cell.state()
    }

    /// Merges `delta` into the state and notifies every registered widget,
    /// in registration order.
    pub fn modify(&mut self, delta: Value) {
        log::debug!("Audio: Applying delta {delta}");
        self.cell.modify(delta);
    }

    /// Registers a widget for change notifications.
    pub fn register(&mut self, observer: std::sync::Arc<dyn Observer<Value>>) -> ObserverId {
        self.cell.register(observer)
    }

    /// Removes a previously registered widget.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        self.cell.unregister(id)
    }

    /// Returns the number of registered widgets.
    pub fn observer_count(&self) -> usize {
        self.cell.observer_count()
    }
}
