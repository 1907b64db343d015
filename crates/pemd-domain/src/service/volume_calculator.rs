//! Volume calculation for the four input modes
//!
//! All functions are pure: the shell may call them on every keystroke to
//! preview a volume without touching the ledger.

use pemd_types::EstimateError;

use crate::model::VolumeInput;

/// Thinnest slab accepted in surface mode (m)
pub const MIN_THICKNESS_M: f64 = 0.03;

/// Smallest repeat count
pub const MIN_MULTIPLIER: f64 = 1.0;

fn non_negative(value: f64, field: &'static str) -> Result<f64, EstimateError> {
    if !value.is_finite() {
        return Err(EstimateError::invalid(field, "not a finite number"));
    }
    if value < 0.0 {
        return Err(EstimateError::invalid(field, format!("{} is negative", value)));
    }
    Ok(value)
}

fn check_multiplier(multiplier: f64) -> Result<f64, EstimateError> {
    if !multiplier.is_finite() {
        return Err(EstimateError::invalid("multiplier", "not a finite number"));
    }
    if multiplier < MIN_MULTIPLIER {
        return Err(EstimateError::invalid(
            "multiplier",
            format!("{} is below {}", multiplier, MIN_MULTIPLIER),
        ));
    }
    Ok(multiplier)
}

/// volume × multiplier
pub fn direct_volume(volume: f64, multiplier: f64) -> Result<f64, EstimateError> {
    Ok(non_negative(volume, "volume")? * check_multiplier(multiplier)?)
}

/// length × width × height × multiplier
pub fn dimensions_volume(
    length: f64,
    width: f64,
    height: f64,
    multiplier: f64,
) -> Result<f64, EstimateError> {
    let length = non_negative(length, "length")?;
    let width = non_negative(width, "width")?;
    let height = non_negative(height, "height")?;
    Ok(length * width * height * check_multiplier(multiplier)?)
}

/// surface × thickness × multiplier, thickness at least [`MIN_THICKNESS_M`]
pub fn surface_volume(surface: f64, thickness: f64, multiplier: f64) -> Result<f64, EstimateError> {
    let surface = non_negative(surface, "surface")?;
    let thickness = non_negative(thickness, "thickness")?;
    if thickness < MIN_THICKNESS_M {
        return Err(EstimateError::invalid(
            "thickness",
            format!("{} is below the minimum of {} m", thickness, MIN_THICKNESS_M),
        ));
    }
    Ok(surface * thickness * check_multiplier(multiplier)?)
}

/// unit_volume × multiplier
pub fn unit_volume(unit_volume: f64, multiplier: f64) -> Result<f64, EstimateError> {
    Ok(non_negative(unit_volume, "unit_volume")? * check_multiplier(multiplier)?)
}

/// Volume in m³ for any input mode. Products that overflow are refused.
pub fn compute_volume(input: &VolumeInput) -> Result<f64, EstimateError> {
    let volume = match *input {
        VolumeInput::DirectVolume { volume, multiplier } => direct_volume(volume, multiplier),
        VolumeInput::Dimensions {
            length,
            width,
            height,
            multiplier,
        } => dimensions_volume(length, width, height, multiplier),
        VolumeInput::Surface {
            surface,
            thickness,
            multiplier,
        } => surface_volume(surface, thickness, multiplier),
        VolumeInput::Unit {
            unit_volume: per_unit,
            multiplier,
        } => unit_volume(per_unit, multiplier),
    }?;
    if !volume.is_finite() {
        return Err(EstimateError::invalid("volume", "not a finite number"));
    }
    Ok(volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_volume() {
        let v = direct_volume(0.05, 3.0).unwrap();
        assert!((v - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_dimensions_volume() {
        // 2 x 1 x 0.2 = 0.4
        let v = dimensions_volume(2.0, 1.0, 0.2, 1.0).unwrap();
        assert!((v - 0.4).abs() < 1e-9);
        let v = dimensions_volume(2.0, 1.0, 0.2, 4.0).unwrap();
        assert!((v - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_surface_volume_at_floor() {
        let v = surface_volume(10.0, 0.03, 1.0).unwrap();
        assert!((v - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_surface_volume_below_floor() {
        let err = surface_volume(10.0, 0.02, 1.0).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput { field: "thickness", .. }));
    }

    #[test]
    fn test_unit_volume() {
        let v = unit_volume(0.002, 50.0).unwrap();
        assert!((v - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_negative_rejected() {
        assert!(direct_volume(-1.0, 1.0).is_err());
        assert!(dimensions_volume(1.0, -0.5, 1.0, 1.0).is_err());
        assert!(surface_volume(-3.0, 0.05, 1.0).is_err());
        assert!(unit_volume(-0.1, 1.0).is_err());
    }

    #[test]
    fn test_multiplier_below_one_rejected() {
        let err = direct_volume(1.0, 0.5).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput { field: "multiplier", .. }));
        assert!(unit_volume(1.0, 0.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(direct_volume(f64::NAN, 1.0).is_err());
        assert!(dimensions_volume(f64::INFINITY, 1.0, 1.0, 1.0).is_err());
        assert!(unit_volume(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_zero_volume_is_valid_arithmetic() {
        assert_eq!(direct_volume(0.0, 2.0).unwrap(), 0.0);
        assert_eq!(dimensions_volume(0.0, 1.0, 1.0, 1.0).unwrap(), 0.0);
        assert_eq!(surface_volume(0.0, 0.05, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_overflowing_volume_rejected() {
        let input = VolumeInput::Dimensions {
            length: 1e110,
            width: 1e110,
            height: 1e110,
            multiplier: 1.0,
        };
        let err = compute_volume(&input).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput { field: "volume", .. }));

        let input = VolumeInput::DirectVolume {
            volume: f64::MAX,
            multiplier: 2.0,
        };
        assert!(compute_volume(&input).is_err());
    }

    #[test]
    fn test_compute_volume_dispatch() {
        let input = VolumeInput::Dimensions {
            length: 2.0,
            width: 1.0,
            height: 0.2,
            multiplier: 1.0,
        };
        assert!((compute_volume(&input).unwrap() - 0.4).abs() < 1e-9);

        let input = VolumeInput::Surface {
            surface: 10.0,
            thickness: 0.02,
            multiplier: 1.0,
        };
        assert!(compute_volume(&input).is_err());
    }
}
