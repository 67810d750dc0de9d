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

//! The route result type and the strategy contract for producing it.

use crate::engine::MapEngine;
use crate::error::RoutingError;
use std::time::Duration;

/// The means of travel a route was calculated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    /// Two wheels, lane filtering allowed.
    Motorcycle,
    /// Four wheels, stuck in traffic.
    Car,
    /// On foot.
    Walking,
}

/// A calculated route between the engine's endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// The travel mode the calculation assumed.
    pub mode: TravelMode,
    /// Estimated on-road distance in kilometers.
    pub distance_km: f64,
    /// Estimated travel time at the mode's average speed.
    pub duration: Duration,
}

/// The contract every route calculation strategy implements.
///
/// The engine passes itself to the calculator so the strategy can read
/// whatever contextual data it needs (currently the endpoints).
pub trait RouteCalculator: Send + Sync {
    /// Calculates the best route for this strategy's travel mode.
    fn calculate(&self, engine: &MapEngine) -> Result<Route, RoutingError>;

    /// The travel mode this strategy plans for.
    fn mode(&self) -> TravelMode;
}

/// Builds a [`Route`] from a crow-fly distance, a detour factor accounting
/// for the road network, and an average speed. Shared by the concrete
/// calculators.
pub(crate) fn route_from_estimate(
    mode: TravelMode,
    crow_fly_km: f64,
    detour_factor: f64,
    average_speed_kmh: f64,
) -> Route {
    let distance_km = crow_fly_km * detour_factor;
    let hours = distance_km / average_speed_kmh;
    Route {
        mode,
        distance_km,
        duration: Duration::from_secs_f64(hours * 3600.0),
    }
}
