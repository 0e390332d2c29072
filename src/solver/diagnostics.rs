//! Invariant checks on computed fields.

use thiserror::Error;

use crate::field::Array4;
use crate::types::IndexRange3D;

/// Error type for numerical failures detected after a sweep.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NumericalError {
    /// NaN or infinity in a field.
    #[error("Non-finite value {value} in {variable} at (k={k}, j={j}, i={i})")]
    NonFinite {
        variable: String,
        k: usize,
        j: usize,
        i: usize,
        value: f64,
    },

    /// Time step that is not a positive finite number.
    #[error("Invalid time step dt = {0}")]
    InvalidTimeStep(f64),
}

/// Scan `field` over `range` for NaN or infinite values.
///
/// Reports the first offending point, scanning variables in order and each
/// variable with `i` fastest. `names` labels the variables; missing names
/// fall back to the variable index.
pub fn check_finite(
    field: &Array4,
    names: &[&str],
    range: &IndexRange3D,
) -> Result<(), NumericalError> {
    for nv in 0..field.nvar() {
        for (k, j, i) in range.iter() {
            let value = field.get(nv, k, j, i);
            if !value.is_finite() {
                let variable = names
                    .get(nv)
                    .map_or_else(|| format!("variable {nv}"), |n| (*n).to_string());
                log::error!("Non-finite {variable} = {value} at (k={k}, j={j}, i={i})");
                return Err(NumericalError::NonFinite {
                    variable,
                    k,
                    j,
                    i,
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Accept positive finite time steps.
///
/// An infinite step (no signal anywhere) is rejected as well; callers with
/// a static state should cap the step themselves.
pub fn check_time_step(dt: f64) -> Result<f64, NumericalError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(dt)
    } else {
        log::error!("Invalid time step dt = {dt}");
        Err(NumericalError::InvalidTimeStep(dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Extents3D;

    #[test]
    fn test_finite_field_passes() {
        let mut field = Array4::new(2, Extents3D::new(2, 2, 2));
        field.fill(1.0);
        let range = IndexRange3D::full(field.extents());
        assert_eq!(check_finite(&field, &["RHO", "VX1"], &range), Ok(()));
    }

    #[test]
    fn test_reports_first_nan() {
        let mut field = Array4::new(3, Extents3D::new(2, 3, 4));
        field.set(1, 1, 2, 3, f64::NAN);
        field.set(2, 0, 0, 0, f64::INFINITY);
        let range = IndexRange3D::full(field.extents());

        match check_finite(&field, &["RHO", "VX1"], &range) {
            Err(NumericalError::NonFinite { variable, k, j, i, .. }) => {
                assert_eq!(variable, "VX1");
                assert_eq!((k, j, i), (1, 2, 3));
            }
            other => panic!("Expected NonFinite, got {other:?}"),
        }

        // Outside the scanned range the NaN is ignored; the unnamed
        // variable is reported by index
        let corner = IndexRange3D::new([0, 1], [0, 1], [0, 1]);
        match check_finite(&field, &["RHO", "VX1"], &corner) {
            Err(NumericalError::NonFinite { variable, .. }) => assert_eq!(variable, "variable 2"),
            other => panic!("Expected NonFinite, got {other:?}"),
        }
    }

    #[test]
    fn test_time_step_check() {
        assert_eq!(check_time_step(0.1), Ok(0.1));
        assert!(check_time_step(f64::NAN).is_err());
        assert!(check_time_step(f64::INFINITY).is_err());
        assert!(check_time_step(0.0).is_err());
    }
}
