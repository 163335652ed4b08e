//! Fuel requirement model.
//!
//! The formula is a teaching heuristic loosely inspired by the rocket
//! equation, not a physical model:
//!
//! ```text
//! U_fuel = ceil((M_dry + n_crew * m_crew) * (G_dest / G_ref) * k)
//! ```
//!
//! Everything here is pure; callers recompute whenever the assembly or the
//! policy changes.

use academy_config::{FuelSettings, GravitySourceSetting, MassSourceSetting};
use academy_core::constants::{CREW_UNIT_MASS, FUEL_SCALE_FACTOR, REFERENCE_GRAVITY_M_S2};
use academy_core::units::{ceil_units, gravity_factor};
use thiserror::Error;

/// Fuel units needed to lift `dry_mass` plus crew against `destination_gravity`.
///
/// The result is the ceiling of a non-negative product; negative or
/// non-finite intermediate values collapse to zero.
pub fn compute_required_fuel(
    dry_mass: f64,
    crew_count: u32,
    destination_gravity: f64,
    reference_gravity: f64,
    crew_unit_mass: f64,
    scale_factor: f64,
) -> u64 {
    let total_mass = dry_mass + crew_count as f64 * crew_unit_mass;
    let factor = gravity_factor(destination_gravity, reference_gravity);
    ceil_units(total_mass * factor * scale_factor)
}

/// Errors raised when fuel constants come from user settings.
#[derive(Debug, Error, PartialEq)]
pub enum FuelError {
    #[error("reference gravity must be positive, got {0}")]
    NonPositiveReferenceGravity(f64),
    #[error("crew unit mass must be non-negative, got {0}")]
    NegativeCrewUnitMass(f64),
    #[error("scale factor must be non-negative, got {0}")]
    NegativeScaleFactor(f64),
}

/// Tunable constants of the fuel formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelConstants {
    pub reference_gravity: f64,
    pub crew_unit_mass: f64,
    pub scale_factor: f64,
}

impl Default for FuelConstants {
    fn default() -> Self {
        Self {
            reference_gravity: REFERENCE_GRAVITY_M_S2,
            crew_unit_mass: CREW_UNIT_MASS,
            scale_factor: FUEL_SCALE_FACTOR,
        }
    }
}

impl FuelConstants {
    pub fn new(
        reference_gravity: f64,
        crew_unit_mass: f64,
        scale_factor: f64,
    ) -> Result<Self, FuelError> {
        if !(reference_gravity.is_finite() && reference_gravity > 0.0) {
            return Err(FuelError::NonPositiveReferenceGravity(reference_gravity));
        }
        if !(crew_unit_mass.is_finite() && crew_unit_mass >= 0.0) {
            return Err(FuelError::NegativeCrewUnitMass(crew_unit_mass));
        }
        if !(scale_factor.is_finite() && scale_factor >= 0.0) {
            return Err(FuelError::NegativeScaleFactor(scale_factor));
        }
        Ok(Self {
            reference_gravity,
            crew_unit_mass,
            scale_factor,
        })
    }

    /// Validate the `[fuel]` settings table.
    pub fn from_settings(settings: &FuelSettings) -> Result<Self, FuelError> {
        Self::new(
            settings.reference_gravity,
            settings.crew_unit_mass,
            settings.scale_factor,
        )
    }

    /// Required fuel units under these constants.
    pub fn required_fuel(&self, dry_mass: f64, crew_count: u32, gravity: f64) -> u64 {
        compute_required_fuel(
            dry_mass,
            crew_count,
            gravity,
            self.reference_gravity,
            self.crew_unit_mass,
            self.scale_factor,
        )
    }

    /// Formula breakdown suitable for an explanatory panel.
    pub fn estimate(&self, dry_mass: f64, crew_count: u32, gravity: f64) -> FuelEstimate {
        let crew_mass = crew_count as f64 * self.crew_unit_mass;
        FuelEstimate {
            dry_mass,
            crew_mass,
            total_mass: dry_mass + crew_mass,
            gravity,
            gravity_factor: gravity_factor(gravity, self.reference_gravity),
            scale_factor: self.scale_factor,
            required_units: self.required_fuel(dry_mass, crew_count, gravity),
        }
    }
}

/// Intermediate values of one evaluation of the formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelEstimate {
    pub dry_mass: f64,
    pub crew_mass: f64,
    pub total_mass: f64,
    pub gravity: f64,
    pub gravity_factor: f64,
    pub scale_factor: f64,
    pub required_units: u64,
}

/// Which parts contribute dry mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MassSource {
    /// Parts currently on the pad; zero for an empty assembly.
    #[default]
    Assembled,
    /// The level's full required-part set.
    Required,
}

/// Which gravity the formula divides by the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravitySource {
    /// The level's destination gravity.
    #[default]
    Destination,
    /// The gravity of the selected launch site.
    LaunchSite,
}

/// How the session feeds the formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FuelPolicy {
    pub mass_source: MassSource,
    pub gravity_source: GravitySource,
}

impl From<MassSourceSetting> for MassSource {
    fn from(value: MassSourceSetting) -> Self {
        match value {
            MassSourceSetting::Assembled => MassSource::Assembled,
            MassSourceSetting::Required => MassSource::Required,
        }
    }
}

impl From<GravitySourceSetting> for GravitySource {
    fn from(value: GravitySourceSetting) -> Self {
        match value {
            GravitySourceSetting::Destination => GravitySource::Destination,
            GravitySourceSetting::LaunchSite => GravitySource::LaunchSite,
        }
    }
}

impl From<&FuelSettings> for FuelPolicy {
    fn from(settings: &FuelSettings) -> Self {
        Self {
            mass_source: settings.mass_source.into(),
            gravity_source: settings.gravity_source.into(),
        }
    }
}
