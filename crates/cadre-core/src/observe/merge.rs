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

//! Defines how a modification delta is folded into subject state.

use serde_json::Value;

/// Folds a modification delta into an existing state value.
///
/// A [`SubjectCell`](crate::SubjectCell) applies the delta through this trait
/// before notifying its observers, so the merge semantics stay with the state
/// type rather than with the cell.
pub trait Merge {
    /// Merges `delta` into `self` in place.
    fn merge(&mut self, delta: Self);
}

/// Key-value merge for JSON state.
///
/// When both sides are objects, the delta's entries are inserted key by key,
/// overwriting colliding keys and keeping disjoint ones. Any other pairing
/// replaces the state wholesale.
impl Merge for Value {
    fn merge(&mut self, delta: Value) {
        match (self, delta) {
            (Value::Object(state), Value::Object(delta)) => {
                for (key, value) in delta {
                    state.insert(key, value);
                }
            }
            (state, delta) => *state = delta,
        }
    }
}
