//! Configuration models and loaders for Rocket Academy.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// A part entry as written in a level catalog file.
#[derive(Debug, Deserialize, Clone)]
pub struct PartConfig {
    pub id: String,
    pub name: String,
    pub required_order: u32,
    pub mass: f64,
    #[serde(default)]
    pub fact: Option<String>,
}

/// A mission entry as written in a level catalog file.
#[derive(Debug, Deserialize, Clone)]
pub struct LevelConfig {
    pub level: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub target: String,
    pub planet: String,
    pub gravity: f64,
    #[serde(default)]
    pub astronauts: u32,
    pub reward: u64,
    #[serde(default)]
    pub parts: Vec<PartConfig>,
}

/// Which masses feed the fuel formula.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MassSourceSetting {
    /// Sum of the parts currently stacked on the pad.
    #[default]
    Assembled,
    /// Sum of every part the level requires.
    Required,
}

/// Which gravity feeds the fuel formula.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GravitySourceSetting {
    /// The level's destination gravity.
    #[default]
    Destination,
    /// The gravity of the launch site the player picked.
    LaunchSite,
}

/// `[fuel]` table of the settings file.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FuelSettings {
    pub reference_gravity: f64,
    pub crew_unit_mass: f64,
    pub scale_factor: f64,
    pub mass_source: MassSourceSetting,
    pub gravity_source: GravitySourceSetting,
}

impl Default for FuelSettings {
    fn default() -> Self {
        use academy_core::constants::{
            CREW_UNIT_MASS, FUEL_SCALE_FACTOR, REFERENCE_GRAVITY_M_S2,
        };
        Self {
            reference_gravity: REFERENCE_GRAVITY_M_S2,
            crew_unit_mass: CREW_UNIT_MASS,
            scale_factor: FUEL_SCALE_FACTOR,
            mass_source: MassSourceSetting::default(),
            gravity_source: GravitySourceSetting::default(),
        }
    }
}

/// `[session]` table of the settings file.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionSettings {
    pub starting_level: u32,
    pub launch_site: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            starting_level: 1,
            launch_site: "earth".to_string(),
        }
    }
}

/// Top-level game settings. Every field has a default, so an empty file is valid.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GameSettings {
    pub fuel: FuelSettings,
    pub session: SessionSettings,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load level definitions from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_levels<P: AsRef<Path>>(path: P) -> Result<Vec<LevelConfig>, ConfigError> {
    load_records(path)
}

/// Load game settings from a TOML file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<GameSettings, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse_settings(&contents)
}

/// Parse game settings from TOML text.
pub fn parse_settings(contents: &str) -> Result<GameSettings, ConfigError> {
    Ok(toml::from_str(contents)?)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
