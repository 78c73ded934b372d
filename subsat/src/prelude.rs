pub use crate::body::{load_body_from_file, write_body_to_file, Body};
pub use crate::elements::{
    checked_mean_motion, checked_semi_major_axis, mean_motion, semi_major_axis, MeanElements,
};
pub use crate::errors::{DomainError, DomainResult};
pub use crate::file_export::{export_mean_motion_vs_sma, export_radius_vs_inclination, write_csv};
pub use crate::math::{apply, linspace, relative_error};
pub use crate::quantities::{EARTH_MU, SOLAR_DAY};
pub use crate::radius_lut::{mean_subsatellite_radius, RadiusTerm, RADIUS_TERMS};
pub use crate::self_test::{run_self_test, ReferenceCase, SelfTestReport};
