//! Mission catalog: the static set of levels a learner works through.
//!
//! A [`Catalog`] is built once (from the built-in table or from configuration
//! records) and validated on construction. After that it is immutable; the
//! session only ever borrows from it.

mod builtin;

use academy_config::{LevelConfig, PartConfig};
use thiserror::Error;

/// A component the learner stacks onto the launch pad.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub id: String,
    pub name: String,
    /// 1-based bottom-to-top position in a correctly built rocket.
    pub required_order: u32,
    pub mass: f64,
    /// Educational blurb shown by the presentation layer.
    pub fact: Option<String>,
}

/// One mission definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub level: u32,
    pub name: String,
    pub description: String,
    /// Target the outcome messages refer to, e.g. "Geostationary Orbit (GEO)".
    pub target: String,
    pub planet: String,
    /// Destination gravity in m/s².
    pub gravity: f64,
    pub astronauts: u32,
    /// Sorted ascending by `required_order` once the level sits in a [`Catalog`].
    pub required_parts: Vec<Part>,
    pub reward: u64,
}

impl Level {
    /// Look up a required part by id.
    pub fn part(&self, id: &str) -> Option<&Part> {
        self.required_parts.iter().find(|p| p.id == id)
    }

    pub fn part_count(&self) -> usize {
        self.required_parts.len()
    }

    /// Sum of the masses of every required part.
    pub fn dry_mass(&self) -> f64 {
        self.required_parts.iter().map(|p| p.mass).sum()
    }

    /// Part ids in bottom-to-top order.
    pub fn correct_order(&self) -> impl Iterator<Item = &str> {
        self.required_parts.iter().map(|p| p.id.as_str())
    }
}

/// Errors surfaced while validating a catalog.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("level catalog is empty")]
    EmptyCatalog,
    #[error("level ordinals must run 1..={expected_last} without gaps; found level {found} at position {expected}")]
    NonContiguousLevels {
        expected: u32,
        expected_last: u32,
        found: u32,
    },
    #[error("level {level} has no required parts")]
    NoParts { level: u32 },
    #[error("level {level} gravity must be positive, got {gravity}")]
    NonPositiveGravity { level: u32, gravity: f64 },
    #[error("level {level} part '{part}' has invalid mass {mass}")]
    NegativeMass { level: u32, part: String, mass: f64 },
    #[error("level {level} lists part '{part}' more than once")]
    DuplicatePartId { level: u32, part: String },
    #[error("level {level} part '{part}' has required order {order}; orders must be a permutation of 1..={count}")]
    InvalidRequiredOrder {
        level: u32,
        part: String,
        order: u32,
        count: usize,
    },
}

/// Validated, ordered set of levels.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    levels: Vec<Level>,
}

impl Catalog {
    /// Validate and assemble a catalog. Levels may be given in any order.
    pub fn new(mut levels: Vec<Level>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        levels.sort_by_key(|l| l.level);
        let last = levels.len() as u32;
        for (idx, level) in levels.iter_mut().enumerate() {
            let expected = idx as u32 + 1;
            if level.level != expected {
                return Err(CatalogError::NonContiguousLevels {
                    expected,
                    expected_last: last,
                    found: level.level,
                });
            }
            validate_level(level)?;
            level.required_parts.sort_by_key(|p| p.required_order);
        }
        Ok(Self { levels })
    }

    /// Build a catalog from configuration records.
    pub fn from_configs(configs: &[LevelConfig]) -> Result<Self, CatalogError> {
        Self::new(configs.iter().map(level_from_config).collect())
    }

    /// The four missions shipped with the game.
    pub fn builtin() -> Self {
        Self {
            levels: builtin::levels(),
        }
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level by ordinal.
    pub fn level(&self, ordinal: u32) -> Option<&Level> {
        let idx = ordinal.checked_sub(1)? as usize;
        self.levels.get(idx)
    }

    pub fn first(&self) -> &Level {
        &self.levels[0]
    }

    pub fn last_ordinal(&self) -> u32 {
        self.levels.len() as u32
    }

    /// The level following `ordinal`, or `None` at the end of the catalog.
    pub fn next_after(&self, ordinal: u32) -> Option<&Level> {
        self.level(ordinal.checked_add(1)?)
    }
}

fn validate_level(level: &Level) -> Result<(), CatalogError> {
    if !(level.gravity.is_finite() && level.gravity > 0.0) {
        return Err(CatalogError::NonPositiveGravity {
            level: level.level,
            gravity: level.gravity,
        });
    }
    let count = level.required_parts.len();
    if count == 0 {
        return Err(CatalogError::NoParts { level: level.level });
    }

    let mut seen_orders = vec![false; count];
    for (idx, part) in level.required_parts.iter().enumerate() {
        if !(part.mass.is_finite() && part.mass >= 0.0) {
            return Err(CatalogError::NegativeMass {
                level: level.level,
                part: part.id.clone(),
                mass: part.mass,
            });
        }
        if level.required_parts[..idx].iter().any(|p| p.id == part.id) {
            return Err(CatalogError::DuplicatePartId {
                level: level.level,
                part: part.id.clone(),
            });
        }
        let slot = (part.required_order as usize)
            .checked_sub(1)
            .filter(|slot| *slot < count && !seen_orders[*slot]);
        match slot {
            Some(slot) => seen_orders[slot] = true,
            None => {
                return Err(CatalogError::InvalidRequiredOrder {
                    level: level.level,
                    part: part.id.clone(),
                    order: part.required_order,
                    count,
                });
            }
        }
    }
    Ok(())
}

fn level_from_config(config: &LevelConfig) -> Level {
    Level {
        level: config.level,
        name: config.name.clone(),
        description: config.description.clone(),
        target: config.target.clone(),
        planet: config.planet.clone(),
        gravity: config.gravity,
        astronauts: config.astronauts,
        required_parts: config.parts.iter().map(part_from_config).collect(),
        reward: config.reward,
    }
}

fn part_from_config(config: &PartConfig) -> Part {
    Part {
        id: config.id.clone(),
        name: config.name.clone(),
        required_order: config.required_order,
        mass: config.mass,
        fact: config.fact.clone(),
    }
}
