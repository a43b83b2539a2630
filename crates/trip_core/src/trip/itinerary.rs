use serde::Serialize;

use super::model::LatLong;
use crate::util::math::great_circle_km;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Leg {
    pub departure: LatLong,
    pub arrival: LatLong,
}

impl Leg {
    pub fn distance_km(&self) -> f64 {
        great_circle_km(&self.departure, &self.arrival)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Itinerary {
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// One leg per pair of consecutive points
    pub fn from_points(points: &[LatLong]) -> Self {
        let legs = points
            .windows(2)
            .map(|pair| Leg {
                departure: pair[0],
                arrival: pair[1],
            })
            .collect();
        Itinerary { legs }
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn distance_km(&self) -> f64 {
        self.legs.iter().map(Leg::distance_km).sum()
    }
}
