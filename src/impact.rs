//! Impact outcome calculation.
//!
//! Pure, deterministic mapping from impact parameters to physical
//! estimates: kinetic energy, TNT equivalent, crater diameter, and a
//! simplified seismic magnitude. The surrounding simulation invokes this
//! once per detected impact and once per parameter change for preview;
//! nothing here touches engine state.

use thiserror::Error;

use crate::types::{ImpactParameters, JOULES_PER_TON_TNT};

/// Multiplier of the empirical crater scaling law.
///
/// Calibration constant, not physically derived. The diameter appears as
/// a direct factor so larger impactors scale crater size super-linearly
/// through both the direct term and the energy term.
pub const CRATER_COEFFICIENT: f64 = 2.5;

/// Energy exponent of the empirical crater scaling law.
pub const CRATER_ENERGY_EXPONENT: f64 = 1.0 / 3.4;

/// Reference energy normalizing the crater scaling law (joules).
pub const CRATER_REFERENCE_ENERGY_J: f64 = 1e12;

/// Offset subtracted from log10(E) to form the seismic magnitude proxy.
pub const SEISMIC_LOG_OFFSET: f64 = 8.0;

/// TNT tonnage at which the display switches from tons to megatons.
pub const MEGATON_TONS: f64 = 1e6;

/// TNT tonnage at which the display switches from megatons to gigatons.
pub const GIGATON_TONS: f64 = 1e9;

/// Error raised when the calculator is handed unusable parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImpactError {
    /// A parameter was zero, negative, NaN, or infinite.
    #[error("invalid {name}: {value} (must be finite and positive)")]
    InvalidParameter {
        /// Which parameter was rejected.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Result of one impact calculation.
///
/// An immutable value recomputed from scratch on every call; no field
/// depends on previous results.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactOutcome {
    /// Kinetic energy at entry (joules).
    pub kinetic_energy_j: f64,
    /// Energy expressed as tons of TNT.
    pub tnt_equivalent_tons: f64,
    /// Estimated crater diameter (kilometers).
    pub crater_diameter_km: f64,
    /// log10(E) − 8. Raw value; may be negative for tiny impactors.
    /// Clamp to ≥ 0 for display only.
    pub seismic_magnitude: f64,
}

impl ImpactOutcome {
    /// Seismic magnitude clamped for display.
    pub fn seismic_display(&self) -> f64 {
        self.seismic_magnitude.max(0.0)
    }

    /// TNT equivalent bucketed into a human display scale.
    pub fn tnt_display(&self) -> TntDisplay {
        TntDisplay::from_tons(self.tnt_equivalent_tons)
    }
}

/// TNT equivalent scaled to a display unit.
///
/// The wrapped value is already divided by the unit size: 2.5e9 tons
/// becomes `Gigatons(2.5)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TntDisplay {
    /// Below one megaton, shown as whole tons.
    Tons(f64),
    /// [1e6, 1e9) tons, shown in megatons.
    Megatons(f64),
    /// 1e9 tons and above, shown in gigatons.
    Gigatons(f64),
}

impl TntDisplay {
    /// Bucket a raw tonnage into its display scale.
    pub fn from_tons(tons: f64) -> Self {
        if tons >= GIGATON_TONS {
            TntDisplay::Gigatons(tons / GIGATON_TONS)
        } else if tons >= MEGATON_TONS {
            TntDisplay::Megatons(tons / MEGATON_TONS)
        } else {
            TntDisplay::Tons(tons)
        }
    }
}

/// Reject non-finite or non-positive parameter values.
fn validate(name: &'static str, value: f64) -> Result<f64, ImpactError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ImpactError::InvalidParameter { name, value })
    }
}

/// Compute the outcome of an impact with the given parameters.
///
/// The pipeline:
/// 1. mass from a spherical volume at the given density
/// 2. kinetic energy E = ½mv²
/// 3. crater diameter from the empirical scaling law
///    d_crater = 2.5 · d · (E / 1e12)^(1/3.4)
/// 4. TNT equivalent at 4.184e9 J per ton
/// 5. seismic magnitude proxy log10(E) − 8
///
/// # Errors
/// [`ImpactError::InvalidParameter`] if any of diameter, velocity, or
/// density is non-positive or non-finite. No NaN or negative field ever
/// reaches an `ImpactOutcome`.
pub fn compute_outcome(params: &ImpactParameters) -> Result<ImpactOutcome, ImpactError> {
    let diameter_m = validate("diameter", params.diameter_m)?;
    let velocity_km_s = validate("velocity", params.velocity_km_s)?;
    let density_kg_m3 = validate("density", params.density_kg_m3)?;

    let radius_m = diameter_m / 2.0;
    let velocity_m_s = velocity_km_s * 1000.0;

    let volume_m3 = (4.0 / 3.0) * std::f64::consts::PI * radius_m.powi(3);
    let mass_kg = density_kg_m3 * volume_m3;

    let kinetic_energy_j = 0.5 * mass_kg * velocity_m_s * velocity_m_s;

    let crater_diameter_m = CRATER_COEFFICIENT
        * diameter_m
        * (kinetic_energy_j / CRATER_REFERENCE_ENERGY_J).powf(CRATER_ENERGY_EXPONENT);

    let tnt_equivalent_tons = kinetic_energy_j / JOULES_PER_TON_TNT;

    let seismic_magnitude = kinetic_energy_j.log10() - SEISMIC_LOG_OFFSET;

    Ok(ImpactOutcome {
        kinetic_energy_j,
        tnt_equivalent_tons,
        crater_diameter_km: crater_diameter_m / 1000.0,
        seismic_magnitude,
    })
}

#[cfg(test)]
mod proptest_impact;
