use crate::body::Body;
use crate::errors::*;
use crate::quantities::{EARTH_MU, SOLAR_DAY, TAU};
use crate::radius_lut::mean_subsatellite_radius;
use serde::{Deserialize, Serialize};

/// Semi-major axis in km from the apogee altitude `ap` above the mean
/// sub-satellite radius `rs`, both in km.
///
/// Nothing is validated: `e == 1` divides by zero and `e > 1` flips the sign.
pub fn semi_major_axis(ap: f64, e: f64, rs: f64) -> f64 {
    (ap + rs) / (1.0 - e)
}

/// Mean motion around the Earth in rev/day for a semi-major axis `a` in km.
pub fn mean_motion(a: f64) -> f64 {
    SOLAR_DAY / TAU * (EARTH_MU / a.powi(3)).sqrt()
}

pub fn checked_semi_major_axis(ap: f64, e: f64, rs: f64) -> DomainResult<f64> {
    let e = check_eccentricity(e)?;
    check_semi_major_axis(check_finite("semi-major axis", semi_major_axis(ap, e, rs))?)
}

pub fn checked_mean_motion(a: f64) -> DomainResult<f64> {
    let a = check_semi_major_axis(a)?;
    check_finite("mean motion", mean_motion(a))
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct MeanElements {
    /// deg
    pub inclination: f64,
    pub eccentricity: f64,
    /// deg
    pub arg_perigee: f64,
    /// km
    pub apogee_altitude: f64,
    /// km
    pub subsatellite_radius: f64,
    /// km
    pub semi_major_axis: f64,
    /// rev/day
    pub mean_motion: f64,
}

impl MeanElements {
    pub fn from_apogee(i: f64, e: f64, w: f64, ap: f64) -> Self {
        Self::from_apogee_about(&Body::earth(), i, e, w, ap)
    }

    pub fn from_apogee_about(body: &Body, i: f64, e: f64, w: f64, ap: f64) -> Self {
        let rs = mean_subsatellite_radius(i, e, w);
        let a = semi_major_axis(ap, e, rs);
        MeanElements {
            inclination: i,
            eccentricity: e,
            arg_perigee: w,
            apogee_altitude: ap,
            subsatellite_radius: rs,
            semi_major_axis: a,
            mean_motion: body.mean_motion(a),
        }
    }

    pub fn checked_from_apogee(body: &Body, i: f64, e: f64, w: f64, ap: f64) -> DomainResult<Self> {
        check_eccentricity(e)?;
        let el = Self::from_apogee_about(body, i, e, w, ap);
        check_finite("sub-satellite radius", el.subsatellite_radius)?;
        check_semi_major_axis(el.semi_major_axis)?;
        check_finite("mean motion", el.mean_motion)?;
        Ok(el)
    }

    /// Orbital period in seconds.
    pub fn period(&self, body: &Body) -> f64 {
        body.period(self.semi_major_axis)
    }
}

impl std::fmt::Display for MeanElements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "i={:.3} deg e={:.5} w={:.3} deg Ap={:.3} km -> Rs={:.3} km a={:.3} km MM={:.7} rev/day",
            self.inclination,
            self.eccentricity,
            self.arg_perigee,
            self.apogee_altitude,
            self.subsatellite_radius,
            self.semi_major_axis,
            self.mean_motion,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use float_next_after::*;
    use more_asserts::*;

    #[test]
    fn semi_major_axis_reference() {
        let a = semi_major_axis(500.0, 0.1, 6371.009);
        assert_relative_eq!(a, 7634.454444, max_relative = 1E-9);
        assert_eq!(a, (500.0 + 6371.009) / (1.0 - 0.1));
    }

    #[test]
    fn circular_orbit() {
        assert_eq!(semi_major_axis(500.0, 0.0, 6371.009), 6871.009);
        assert_eq!(semi_major_axis(0.0, 0.0, 6378.0), 6378.0);
    }

    #[test]
    fn parabolic_limit() {
        assert_eq!(semi_major_axis(500.0, 1.0, 6371.009), f64::INFINITY);
        assert_lt!(semi_major_axis(500.0, 1.5, 6371.009), 0.0);

        let e = 1.0f64.next_after(0.0);
        assert_gt!(semi_major_axis(500.0, e, 6371.009), 1E18);

        let mut last = 0.0;
        for e in [0.0, 0.5, 0.9, 0.99, 0.999, 0.9999] {
            let a = semi_major_axis(500.0, e, 6371.009);
            assert_gt!(a, last);
            last = a;
        }
    }

    #[test]
    fn mean_motion_reference() {
        assert_relative_eq!(mean_motion(7634.4544), 13.0147405, max_relative = 1E-4);
        assert_eq!(mean_motion(7634.4544), Body::earth().mean_motion(7634.4544));
    }

    #[test]
    fn mean_motion_bad_axis() {
        assert!(mean_motion(-7000.0).is_nan());
        assert_eq!(mean_motion(0.0), f64::INFINITY);
    }

    #[test]
    fn checked_variants() {
        assert_eq!(
            checked_semi_major_axis(500.0, 0.1, 6371.009),
            Ok(semi_major_axis(500.0, 0.1, 6371.009))
        );
        assert_eq!(
            checked_semi_major_axis(500.0, 1.0, 6371.009),
            Err(DomainError::Eccentricity(1.0))
        );
        assert_eq!(
            checked_semi_major_axis(f64::INFINITY, 0.1, 6371.009),
            Err(DomainError::not_finite("semi-major axis", f64::INFINITY))
        );
        assert!(matches!(
            checked_semi_major_axis(-8000.0, 0.1, 6371.009),
            Err(DomainError::SemiMajorAxis(a)) if a < 0.0
        ));
        assert_eq!(
            checked_semi_major_axis(-6371.009, 0.0, 6371.009),
            Err(DomainError::SemiMajorAxis(0.0))
        );
        assert_eq!(checked_mean_motion(7634.4544), Ok(mean_motion(7634.4544)));
        assert_eq!(checked_mean_motion(0.0), Err(DomainError::SemiMajorAxis(0.0)));
        assert_eq!(checked_mean_motion(-1.0), Err(DomainError::SemiMajorAxis(-1.0)));
    }

    #[test]
    fn chained_elements() {
        let el = MeanElements::from_apogee(55.0, 0.0, 0.0, 500.0);
        assert_eq!(el.subsatellite_radius, mean_subsatellite_radius(55.0, 0.0, 0.0));
        assert_eq!(el.semi_major_axis, el.subsatellite_radius + 500.0);
        assert_eq!(el.mean_motion, mean_motion(el.semi_major_axis));
        assert_relative_eq!(
            el.period(&Body::earth()) * el.mean_motion,
            86400.0,
            max_relative = 1E-12
        );

        let checked = MeanElements::checked_from_apogee(&Body::earth(), 55.0, 0.0, 0.0, 500.0);
        assert_eq!(checked, Ok(el));
        assert!(MeanElements::checked_from_apogee(&Body::earth(), 55.0, 1.2, 0.0, 500.0).is_err());
        assert!(
            MeanElements::checked_from_apogee(&Body::earth(), 55.0, 0.0, 0.0, -7000.0).is_err()
        );
    }

    #[test]
    fn display() {
        let el = MeanElements::from_apogee(0.0, 0.0, 0.0, 0.0);
        let s = el.to_string();
        assert!(s.contains("Rs=6377.788 km"), "{}", s);
        assert!(s.contains("a=6377.788 km"), "{}", s);
    }
}
