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

use crate::engine::MapEngine;
use crate::error::RoutingError;
use crate::route::{route_from_estimate, Route, RouteCalculator, TravelMode};

/// Calculates the best route by car.
pub struct CarRouteCalculator;

const DETOUR_FACTOR: f64 = 1.25;
const AVERAGE_SPEED_KMH: f64 = 65.0;

impl RouteCalculator for CarRouteCalculator {
    fn calculate(&self, engine: &MapEngine) -> Result<Route, RoutingError> {
        let (origin, destination) = engine.endpoints()?;
        log::debug!("CarRouteCalculator: Calculating best car route");
        Ok(route_from_estimate(
            TravelMode::Car,
            origin.distance_km(&destination),
            DETOUR_FACTOR,
            AVERAGE_SPEED_KMH,
        ))
    }

    fn mode(&self) -> TravelMode {
        TravelMode::Car
    }
}
