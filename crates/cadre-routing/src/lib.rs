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

//! # Cadre Routing
//!
//! A map engine that delegates route calculation to a swappable
//! [`RouteCalculator`] strategy. Installing a different calculator changes
//! the behavior of every subsequent [`MapEngine::calculate`] call.

#![warn(missing_docs)]

pub mod calculators;
mod engine;
mod error;
mod geo;
mod route;

pub use engine::MapEngine;
pub use error::RoutingError;
pub use geo::LatLong;
pub use route::{Route, RouteCalculator, TravelMode};
