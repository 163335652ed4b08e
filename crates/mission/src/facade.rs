//! Re-exported APIs for consumers of the mission crate.

pub use crate::launch::{LaunchOutcome, OutcomeKind, evaluate_launch};
pub use crate::progression::{MissionPhase, Progression};
pub use crate::session::{AttemptRecord, Session};
pub use academy_assembly::{Assembly, AssemblyEvent, AssemblyStage};
pub use academy_catalog::{Catalog, Level, Part};
pub use academy_core::site::LaunchSite;
pub use academy_fuel::{FuelConstants, FuelEstimate, FuelPolicy, GravitySource, MassSource};

pub mod setup {
    use std::path::Path;

    use academy_catalog::Catalog;
    use academy_config::{GameSettings, load_levels, load_settings};

    use crate::SessionError;
    use crate::session::Session;

    /// Load a catalog from `path`, or fall back to the built-in missions.
    pub fn catalog(path: Option<&Path>) -> Result<Catalog, SessionError> {
        match path {
            Some(path) => {
                let configs = load_levels(path)?;
                log::debug!("loaded {} level records from {}", configs.len(), path.display());
                Ok(Catalog::from_configs(&configs)?)
            }
            None => Ok(Catalog::builtin()),
        }
    }

    /// Load settings from `path`, or use defaults.
    pub fn settings(path: Option<&Path>) -> Result<GameSettings, SessionError> {
        match path {
            Some(path) => Ok(load_settings(path)?),
            None => Ok(GameSettings::default()),
        }
    }

    /// Build a ready-to-play session from optional catalog and settings files.
    pub fn session(
        levels: Option<&Path>,
        settings_path: Option<&Path>,
    ) -> Result<Session, SessionError> {
        let catalog = catalog(levels)?;
        let settings = settings(settings_path)?;
        Session::with_settings(catalog, &settings)
    }
}
