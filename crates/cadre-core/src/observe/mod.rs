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

//! Provides foundational primitives for state-change notification.
//!
//! This module contains generic, decoupled components for broadcasting state
//! changes to registered dependents. The primary component is the
//! [`SubjectCell`], a single owner of a state value that fans out a
//! synchronous callback to every registered [`Observer`] after each mutation.
//!
//! By keeping these primitives generic over the state type, `cadre-core`
//! allows higher-level crates to define their own state shapes without
//! creating circular dependencies.

mod cell;
mod merge;

pub use self::cell::{Observer, ObserverId, SubjectCell};
pub use self::merge::Merge;
