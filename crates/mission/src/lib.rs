//! Launch evaluation, mission progression, and the session controller.

pub mod launch;
pub mod progression;
pub mod session;

pub use facade::*;
pub use academy_assembly as assembly;
pub use academy_fuel as fuel;

mod facade;

use thiserror::Error;

/// Errors raised while setting up a session. Gameplay itself never errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("configuration error: {0}")]
    Config(#[from] academy_config::ConfigError),
    #[error("invalid level catalog: {0}")]
    Catalog(#[from] academy_catalog::CatalogError),
    #[error("invalid fuel settings: {0}")]
    Fuel(#[from] academy_fuel::FuelError),
    #[error("{0}")]
    UnknownSite(#[from] academy_core::site::UnknownSite),
    #[error("level {0} is not in the catalog")]
    UnknownLevel(u32),
}
