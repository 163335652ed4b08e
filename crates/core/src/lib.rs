//! Core constants and shared primitives for the Rocket Academy workspace.

/// Game constants used by the fuel formula.
pub mod constants {
    /// Home-planet baseline gravity (m/s²) the gravity factor is measured against.
    pub const REFERENCE_GRAVITY_M_S2: f64 = 9.8;
    /// Mass units added per astronaut on board.
    pub const CREW_UNIT_MASS: f64 = 100.0;
    /// Converts total mass into playable fuel units.
    pub const FUEL_SCALE_FACTOR: f64 = 15.0;
    /// Lunar surface gravity (m/s²).
    pub const MOON_GRAVITY_M_S2: f64 = 1.62;
    /// Martian surface gravity (m/s²).
    pub const MARS_GRAVITY_M_S2: f64 = 3.71;
}

/// Launch sites a player may pick, each with its own surface gravity.
pub mod site {
    use std::fmt;
    use std::str::FromStr;

    use thiserror::Error;

    use super::constants::{MARS_GRAVITY_M_S2, MOON_GRAVITY_M_S2, REFERENCE_GRAVITY_M_S2};

    /// Where the rocket lifts off from.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum LaunchSite {
        #[default]
        Earth,
        Moon,
        Mars,
    }

    impl LaunchSite {
        pub const ALL: [LaunchSite; 3] = [LaunchSite::Earth, LaunchSite::Moon, LaunchSite::Mars];

        /// Surface gravity of the site in m/s².
        pub fn gravity(&self) -> f64 {
            match self {
                LaunchSite::Earth => REFERENCE_GRAVITY_M_S2,
                LaunchSite::Moon => MOON_GRAVITY_M_S2,
                LaunchSite::Mars => MARS_GRAVITY_M_S2,
            }
        }

        pub fn name(&self) -> &'static str {
            match self {
                LaunchSite::Earth => "earth",
                LaunchSite::Moon => "moon",
                LaunchSite::Mars => "mars",
            }
        }
    }

    impl fmt::Display for LaunchSite {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }

    /// Error returned when a launch site name is not recognised.
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[error("unknown launch site '{0}' (expected earth, moon or mars)")]
    pub struct UnknownSite(pub String);

    impl FromStr for LaunchSite {
        type Err = UnknownSite;

        /// Case-insensitive lookup by name.
        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let lower = s.trim().to_ascii_lowercase();
            LaunchSite::ALL
                .into_iter()
                .find(|site| site.name() == lower)
                .ok_or_else(|| UnknownSite(s.to_string()))
        }
    }
}

/// Small numeric helpers shared across crates.
pub mod units {
    /// Ratio of a gravity to a reference gravity.
    #[inline]
    pub fn gravity_factor(gravity: f64, reference: f64) -> f64 {
        gravity / reference
    }

    /// Ceiling of a non-negative product as whole units, clamping negatives and NaN to zero.
    #[inline]
    pub fn ceil_units(value: f64) -> u64 {
        if value.is_nan() || value <= 0.0 {
            0
        } else {
            value.ceil() as u64
        }
    }
}
