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

//! Geographic coordinates and distance helpers.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLong {
    /// Latitude in decimal degrees, positive north.
    pub latitude: f64,
    /// Longitude in decimal degrees, positive east.
    pub longitude: f64,
}

impl LatLong {
    /// Creates a coordinate from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometers (haversine formula).
    pub fn distance_km(&self, other: &LatLong) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let point = LatLong::new(48.8566, 2.3522);
        assert_eq!(point.distance_km(&point), 0.0);
    }

    #[test]
    fn paris_to_london_is_about_344_km() {
        let paris = LatLong::new(48.8566, 2.3522);
        let london = LatLong::new(51.5074, -0.1278);

        let distance = paris.distance_km(&london);
        assert!(
            (distance - 344.0).abs() < 2.0,
            "expected ~344 km, got {distance}"
        );
    }

    #[test]
    fn distance_is_symmetric() {
        let a = LatLong::new(40.7128, -74.0060);
        let b = LatLong::new(34.0522, -118.2437);

        assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-9);
    }
}
