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

//! The context object that delegates to the installed route calculator.

use crate::error::RoutingError;
use crate::geo::LatLong;
use crate::route::{Route, RouteCalculator};

/// The map engine: holds the trip endpoints and the installed strategy.
///
/// [`calculate`](Self::calculate) delegates unconditionally to the installed
/// [`RouteCalculator`]; swapping the calculator with
/// [`set_calculator`](Self::set_calculator) changes the behavior of every
/// subsequent call.
pub struct MapEngine {
    origin: Option<LatLong>,
    destination: Option<LatLong>,
    calculator: Box<dyn RouteCalculator>,
}

impl MapEngine {
    /// Creates an engine with the given strategy and no endpoints.
    pub fn new(calculator: Box<dyn RouteCalculator>) -> Self {
        log::info!(
            "MapEngine: Initialized with {:?} calculator",
            calculator.mode()
        );
        Self {
            origin: None,
            destination: None,
            calculator,
        }
    }

    /// Sets both trip endpoints.
    pub fn set_endpoints(&mut self, origin: LatLong, destination: LatLong) {
        self.origin = Some(origin);
        self.destination = Some(destination);
    }

    /// Returns the trip endpoints, or an error if either is unset.
    pub fn endpoints(&self) -> Result<(LatLong, LatLong), RoutingError> {
        match (self.origin, self.destination) {
            (Some(origin), Some(destination)) => Ok((origin, destination)),
            _ => Err(RoutingError::MissingEndpoints),
        }
    }

    /// Replaces the installed strategy for all subsequent calculations.
    pub fn set_calculator(&mut self, calculator: Box<dyn RouteCalculator>) {
        log::info!(
            "MapEngine: Switching {:?} calculator -> {:?}",
            self.calculator.mode(),
            calculator.mode()
        );
        self.calculator = calculator;
    }

    /// Calculates the best route with whichever strategy is installed.
    pub fn calculate(&self) -> Result<Route, RoutingError> {
        self.calculator.calculate(self)
    }
}

impl std::fmt::Debug for MapEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapEngine")
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("calculator", &self.calculator.mode())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::{CarRouteCalculator, MotorcycleRouteCalculator};
    use crate::route::TravelMode;

    fn engine_with_trip(calculator: Box<dyn RouteCalculator>) -> MapEngine {
        let mut engine = MapEngine::new(calculator);
        engine.set_endpoints(
            LatLong::new(48.8566, 2.3522),
            LatLong::new(45.7640, 4.8357),
        );
        engine
    }

    #[test]
    fn calculate_without_endpoints_fails() {
        let engine = MapEngine::new(Box::new(CarRouteCalculator));
        assert_eq!(engine.calculate(), Err(RoutingError::MissingEndpoints));
    }

    #[test]
    fn calculate_delegates_to_installed_strategy() {
        let engine = engine_with_trip(Box::new(MotorcycleRouteCalculator));

        let route = engine.calculate().expect("route should be calculated");
        assert_eq!(route.mode, TravelMode::Motorcycle);
    }

    #[test]
    fn swapping_the_strategy_changes_subsequent_calls() {
        let mut engine = engine_with_trip(Box::new(MotorcycleRouteCalculator));
        let before = engine.calculate().expect("first route");

        engine.set_calculator(Box::new(CarRouteCalculator));
        let after = engine.calculate().expect("second route");

        assert_eq!(before.mode, TravelMode::Motorcycle);
        assert_eq!(after.mode, TravelMode::Car);
        // Same endpoints, different strategy: the estimate changes too.
        assert_ne!(before.duration, after.duration);
    }
}
