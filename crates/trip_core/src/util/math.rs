use crate::trip::model::LatLong;

/// Mean earth radius in kilometres
const EARTH_RADIUS_KM: f64 = 6371.0;

pub fn great_circle_km(src: &LatLong, dst: &LatLong) -> f64 {
    // Calculate the distance between two points using the Haversine formula
    let lat1 = src.lat.to_radians();
    let lat2 = dst.lat.to_radians();
    let lon1 = src.long.to_radians();
    let lon2 = dst.long.to_radians();
    let a = (lat2 - lat1) / 2.0;
    let b = (lon2 - lon1) / 2.0;
    let c = a.sin().powi(2) + lat1.cos() * lat2.cos() * b.sin().powi(2);
    let d = 2.0 * c.sqrt().asin();

    EARTH_RADIUS_KM * d
}
