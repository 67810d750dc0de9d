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

//! Error types for the widget layer.

use thiserror::Error;

/// An error raised by a widget's business method.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    /// The widget was asked to mutate its subject before one was bound,
    /// or the bound subject has been dropped.
    #[error("widget '{widget}' has no live audio subject bound")]
    SubjectUnbound {
        /// Label of the widget that was invoked.
        widget: String,
    },
    /// A widget-internal lock was poisoned by a panicking thread.
    #[error("internal lock poisoned in widget '{widget}'")]
    Poisoned {
        /// Label of the widget whose lock is poisoned.
        widget: String,
    },
}
