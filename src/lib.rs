//! Rocket Academy: assemble a rocket in the right order, fuel it, launch it.
//!
//! This crate stitches the workspace together so front-ends (the console
//! binary, tests, a future GUI) can depend on one name. The game rules live
//! in the member crates re-exported below.

pub use academy_assembly as assembly;
pub use academy_catalog as catalog;
pub use academy_config as config;
pub use academy_core as core;
pub use academy_export as export;
pub use academy_fuel as fuel;
pub use academy_mission as mission;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
