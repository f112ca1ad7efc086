//! Fuel planning for a single voyage leg.
//!
//! The required load is always a whole number of units, rounded up: you
//! cannot launch with a partial liter. Both operands stay real-valued until
//! after the division.
//!
//! ```
//! use missionctl_logic::fuel::fuel_required;
//!
//! // Earth → Mars at 3.7 km per liter.
//! assert_eq!(fuel_required(225_000_000.0, 3.7), Ok(60_810_811));
//! ```

use crate::error::{LedgerError, Result};

/// Whole fuel units needed to cover `distance_km` at
/// `efficiency_km_per_unit`.
pub fn fuel_required(distance_km: f64, efficiency_km_per_unit: f64) -> Result<u64> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(LedgerError::validation(
            "distance_km",
            format!("must be a finite, non-negative distance, got {distance_km}"),
        ));
    }
    if !efficiency_km_per_unit.is_finite() || efficiency_km_per_unit <= 0.0 {
        return Err(LedgerError::validation(
            "efficiency_km_per_unit",
            format!("must be finite and positive, got {efficiency_km_per_unit}"),
        ));
    }

    let mut units = (distance_km / efficiency_km_per_unit).ceil();
    // The quotient can underflow to zero; any real distance still costs a unit.
    if units == 0.0 && distance_km > 0.0 {
        units = 1.0;
    }
    // u64::MAX rounds up to 2^64 as f64, so anything at or above it is out of range.
    if units >= u64::MAX as f64 {
        return Err(LedgerError::validation(
            "distance_km",
            format!(
                "{distance_km} km at {efficiency_km_per_unit} km/unit exceeds the fuel counter"
            ),
        ));
    }
    Ok(units as u64)
}
