// gravitational parameters listed in km^3/s^2
pub const EARTH_MU: f64 = 3.986E5;

// length of a solar day in seconds
pub const SOLAR_DAY: f64 = 86400.0;

// the radius fit is expressed in meters; everything else is in km!
pub const METERS_PER_KM: f64 = 1000.0;

pub const TAU: f64 = 2.0 * std::f64::consts::PI;
