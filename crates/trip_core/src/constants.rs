/// Edge weight type
pub type Weight = f64;
/// Valid latitude range in degrees
pub const LAT_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitude range in degrees
pub const LONG_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;
