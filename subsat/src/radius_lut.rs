use crate::quantities::METERS_PER_KM;

/// One term of the sub-satellite radius polynomial,
/// c * i^inclination * e^eccentricity * w^arg_perigee, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusTerm {
    pub inclination: u8,
    pub eccentricity: u8,
    pub arg_perigee: u8,
    pub coefficient: f64,
}

impl RadiusTerm {
    const fn new(inclination: u8, eccentricity: u8, arg_perigee: u8, coefficient: f64) -> Self {
        RadiusTerm {
            inclination,
            eccentricity,
            arg_perigee,
            coefficient,
        }
    }

    pub fn eval(&self, i: f64, e: f64, w: f64) -> f64 {
        self.coefficient
            * i.powi(self.inclination as i32)
            * e.powi(self.eccentricity as i32)
            * w.powi(self.arg_perigee as i32)
    }

    pub fn degree(&self) -> u8 {
        self.inclination + self.eccentricity + self.arg_perigee
    }
}

pub const N_TERMS: usize = 56;

#[rustfmt::skip]
pub const RADIUS_TERMS: [RadiusTerm; N_TERMS] = [
    RadiusTerm::new(0, 0, 0,  6.377788E6),
    RadiusTerm::new(1, 1, 2, -9.972427E-2),
    RadiusTerm::new(0, 0, 1,  2.836106E1),
    RadiusTerm::new(1, 1, 3,  7.383957E-4),
    RadiusTerm::new(0, 0, 2, -4.915346E-1),
    RadiusTerm::new(1, 2, 0,  9.150674E1),
    RadiusTerm::new(0, 0, 3, -4.017214E-3),
    RadiusTerm::new(1, 2, 1, -1.33747E0),
    RadiusTerm::new(0, 0, 4,  1.273759E-4),
    RadiusTerm::new(1, 2, 2,  1.155062E-3),
    RadiusTerm::new(0, 0, 5, -5.643483E-7),
    RadiusTerm::new(1, 3, 0,  4.645793E0),
    RadiusTerm::new(0, 1, 0,  2.120874E3),
    RadiusTerm::new(1, 3, 1, -1.909859E0),
    RadiusTerm::new(0, 1, 1, -1.886565E2),
    RadiusTerm::new(1, 4, 0,  5.290634E1),
    RadiusTerm::new(0, 1, 2,  5.241726E0),
    RadiusTerm::new(2, 0, 0, -3.926748E0),
    RadiusTerm::new(0, 1, 3, -3.84173E-2),
    RadiusTerm::new(2, 0, 1,  1.703196E-2),
    RadiusTerm::new(0, 1, 4, -2.268633E-6),
    RadiusTerm::new(2, 0, 2, -8.207037E-6),
    RadiusTerm::new(0, 2, 0, -3.447518E3),
    RadiusTerm::new(2, 0, 3,  2.674298E-8),
    RadiusTerm::new(0, 2, 1,  8.553227E1),
    RadiusTerm::new(2, 1, 0,  4.368207E0),
    RadiusTerm::new(0, 2, 2, -4.719285E0),
    RadiusTerm::new(2, 1, 1, -9.744218E-2),
    RadiusTerm::new(0, 2, 3,  3.438466E-2),
    RadiusTerm::new(2, 1, 2, -8.298287E-6),
    RadiusTerm::new(0, 3, 0,  9.952275E3),
    RadiusTerm::new(2, 2, 0,  2.116514E-1),
    RadiusTerm::new(0, 3, 1,  1.634122E2),
    RadiusTerm::new(2, 2, 1, -4.547244E-4),
    RadiusTerm::new(0, 3, 2,  5.259614E-2),
    RadiusTerm::new(2, 3, 0, -9.768337E-2),
    RadiusTerm::new(0, 4, 0, -1.695787E4),
    RadiusTerm::new(3, 0, 0,  1.323687E-3),
    RadiusTerm::new(0, 4, 1, -8.008678E1),
    RadiusTerm::new(3, 0, 1, -1.327782E-4),
    RadiusTerm::new(0, 5, 0,  8.501297E3),
    RadiusTerm::new(3, 0, 2,  5.032226E-8),
    RadiusTerm::new(1, 0, 0,  2.948006E1),
    RadiusTerm::new(3, 1, 0, -3.319618E-2),
    RadiusTerm::new(1, 0, 1, -1.151884E0),
    RadiusTerm::new(3, 1, 1,  7.264131E-4),
    RadiusTerm::new(1, 0, 2,  1.653916E-2),
    RadiusTerm::new(3, 2, 0, -5.846808E-4),
    RadiusTerm::new(1, 0, 3, -1.276845E-4),
    RadiusTerm::new(4, 0, 0,  4.655915E-4),
    RadiusTerm::new(1, 0, 4,  3.521573E-8),
    RadiusTerm::new(4, 0, 1,  6.438237E-8),
    RadiusTerm::new(1, 1, 0, -1.676297E2),
    RadiusTerm::new(4, 1, 0,  4.999741E-6),
    RadiusTerm::new(1, 1, 1,  6.645437E0),
    RadiusTerm::new(5, 0, 0, -2.08623E-6),
];

/// Mean Earth radius under the ground track of a satellite, in km.
///
/// `i` is the inclination in degrees, `e` the eccentricity and `w` the
/// argument of perigee in degrees. The polynomial is an empirical fit and
/// inputs are not range checked, so values outside the fitted region are
/// extrapolated silently.
pub fn mean_subsatellite_radius(i: f64, e: f64, w: f64) -> f64 {
    let meters: f64 = RADIUS_TERMS.iter().map(|t| t.eval(i, e, w)).sum();
    meters / METERS_PER_KM
}
