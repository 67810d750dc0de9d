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

//! Concrete route calculation strategies.
//!
//! Each calculator estimates the on-road distance from the crow-fly distance
//! and a per-mode detour factor, then derives a duration from the mode's
//! average speed. The numbers are deliberately coarse; the point is that the
//! installed strategy, not the engine, decides them.

mod car;
mod motorcycle;
mod walking;

pub use self::car::CarRouteCalculator;
pub use self::motorcycle::MotorcycleRouteCalculator;
pub use self::walking::WalkingRouteCalculator;
