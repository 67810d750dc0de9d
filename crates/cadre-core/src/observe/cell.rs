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

use crate::observe::Merge;
use std::sync::Arc;

/// A dependent notified after every mutation of a [`SubjectCell`].
///
/// The cell passes itself to the callback so the observer can query the
/// current state and branch on its shape. The reference is shared, which
/// keeps a callback from mutating the subject it is being notified about.
pub trait Observer<S>: Send + Sync {
    /// Called synchronously after the subject's state has changed.
    fn subject_updated(&self, subject: &SubjectCell<S>);
}

/// Handle identifying one registration on a [`SubjectCell`].
///
/// Returned by [`SubjectCell::register`] and consumed by
/// [`SubjectCell::unregister`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

struct ObserverEntry<S> {
    id: ObserverId,
    observer: Arc<dyn Observer<S>>,
}

/// Single owner of a state value with a registration list of dependents.
///
/// Mutations go through [`modify`](SubjectCell::modify), which folds the
/// delta into the state via [`Merge`] and then invokes every registered
/// [`Observer`] exactly once, in registration order.
///
/// # Example
///
/// ```rust
/// use cadre_core::{Observer, SubjectCell};
/// use serde_json::{json, Value};
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// #[derive(Default)]
/// struct Counter(AtomicUsize);
///
/// impl Observer<Value> for Counter {
///     fn subject_updated(&self, _subject: &SubjectCell<Value>) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
///
/// let counter = Arc::new(Counter::default());
/// let mut cell = SubjectCell::new(json!({}));
/// cell.register(counter.clone());
/// cell.modify(json!({ "x": 1 }));
///
/// assert_eq!(counter.0.load(Ordering::Relaxed), 1);
/// assert_eq!(cell.state(), &json!({ "x": 1 }));
/// ```
pub struct SubjectCell<S> {
    state: S,
    observers: Vec<ObserverEntry<S>>,
    next_id: u64,
}

impl<S> SubjectCell<S> {
    /// Creates a cell owning `initial` with no registered observers.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns a shared reference to the current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Registers a dependent to be notified after every mutation.
    ///
    /// Observers are notified in registration order. Registering the same
    /// observer twice notifies it twice.
    ///
    /// ## Returns
    /// A handle that can be passed to [`unregister`](Self::unregister).
    pub fn register(&mut self, observer: Arc<dyn Observer<S>>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push(ObserverEntry { id, observer });
        log::info!(
            "SubjectCell: Registered observer {:?} ({} total)",
            id,
            self.observers.len()
        );
        id
    }

    /// Removes a previously registered observer.
    ///
    /// Returns `false` if the handle does not match a live registration.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|entry| entry.id != id);
        let removed = self.observers.len() < before;
        if removed {
            log::info!("SubjectCell: Unregistered observer {id:?}");
        } else {
            log::warn!("SubjectCell: Unregister for unknown observer {id:?}");
        }
        removed
    }

    /// Returns the number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl<S: Merge> SubjectCell<S> {
    /// Merges `delta` into the state, then notifies every observer.
    ///
    /// The fan-out is synchronous and runs in registration order. Callbacks
    /// are infallible; a panicking observer unwinds through this call and
    /// skips the observers registered after it.
    pub fn modify(&mut self, delta: S) {
        self.state.merge(delta);
        log::trace!(
            "SubjectCell: State modified, notifying {} observer(s)",
            self.observers.len()
        );
        for entry in &self.observers {
            entry.observer.subject_updated(&*self);
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for SubjectCell<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubjectCell")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
