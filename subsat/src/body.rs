use crate::quantities::{EARTH_MU, SOLAR_DAY, TAU};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// Central body the satellite orbits.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Body {
    pub name: String,
    /// gravitational parameter, km^3/s^2
    pub mu: f64,
    /// seconds per day used for rev/day conversions
    pub day_length: f64,
}

impl Default for Body {
    fn default() -> Self {
        Body::earth()
    }
}

impl Body {
    pub fn new(name: impl Into<String>, mu: f64, day_length: f64) -> Self {
        Body {
            name: name.into(),
            mu,
            day_length,
        }
    }

    pub fn earth() -> Self {
        Body::new("Earth", EARTH_MU, SOLAR_DAY)
    }

    /// Revolutions per day of an orbit with semi-major axis `a` in km.
    pub fn mean_motion(&self, a: f64) -> f64 {
        self.day_length / TAU * (self.mu / a.powi(3)).sqrt()
    }

    /// Orbital period in seconds.
    pub fn period(&self, a: f64) -> f64 {
        TAU * (a.powi(3) / self.mu).sqrt()
    }
}

pub fn load_body_from_file(filename: &Path) -> Result<Body, Box<dyn Error>> {
    let s = std::fs::read_to_string(filename)?;
    Ok(serde_yaml::from_str(&s)?)
}

pub fn write_body_to_file(path: &Path, body: &Body) -> Result<(), Box<dyn Error>> {
    let s = serde_yaml::to_string(body)?;
    Ok(std::fs::write(path, s)?)
}
