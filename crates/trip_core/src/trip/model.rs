use serde::{Deserialize, Serialize};

use crate::constants::{Weight, LAT_RANGE, LONG_RANGE};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl LatLong {
    pub fn new(lat: f64, long: f64) -> Self {
        LatLong { lat, long }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180]
    pub fn is_valid(&self) -> bool {
        LAT_RANGE.contains(&self.lat) && LONG_RANGE.contains(&self.long)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    pub from: LatLong,
    pub to: LatLong,
}

/// A priced flight between two locations.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    pub coordinates: Coordinates,
    pub price: Weight,
}

impl Connection {
    pub fn new(from: &str, to: &str, price: Weight, from_coords: LatLong, to_coords: LatLong) -> Self {
        Connection {
            from: from.to_string(),
            to: to.to_string(),
            coordinates: Coordinates {
                from: from_coords,
                to: to_coords,
            },
            price,
        }
    }

    /// The same connection flown the other way round
    pub fn swapped(&self) -> Self {
        Connection {
            from: self.to.clone(),
            to: self.from.clone(),
            coordinates: Coordinates {
                from: self.coordinates.to,
                to: self.coordinates.from,
            },
            price: self.price,
        }
    }
}

/// Top level document of a connection file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TripData {
    pub connections: Vec<Connection>,
}
