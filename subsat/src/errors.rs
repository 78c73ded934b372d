//! Domain errors for the checked formula variants.
//!
//! The plain functions in [`crate::elements`] let floating point anomalies
//! through untouched. The `checked_*` variants validate their inputs first
//! and report the offending value with one of these variants instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Eccentricity outside of [0, 1); the orbit is not closed.
    #[error("eccentricity {0} is outside of [0, 1)")]
    Eccentricity(f64),

    /// Semi-major axis must be finite and strictly positive.
    #[error("semi-major axis {0} km must be finite and positive")]
    SemiMajorAxis(f64),

    #[error("{quantity} evaluated to a non-finite value ({value})")]
    NotFinite { quantity: &'static str, value: f64 },
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn not_finite(quantity: &'static str, value: f64) -> Self {
        DomainError::NotFinite { quantity, value }
    }
}

pub fn check_eccentricity(e: f64) -> DomainResult<f64> {
    if e.is_finite() && (0.0..1.0).contains(&e) {
        Ok(e)
    } else {
        Err(DomainError::Eccentricity(e))
    }
}

pub fn check_semi_major_axis(a: f64) -> DomainResult<f64> {
    if a.is_finite() && a > 0.0 {
        Ok(a)
    } else {
        Err(DomainError::SemiMajorAxis(a))
    }
}

pub fn check_finite(quantity: &'static str, value: f64) -> DomainResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::not_finite(quantity, value))
    }
}
