//! Session controller: the single owner of mutable game state.
//!
//! A [`Session`] is created at the start of play with a validated catalog and
//! fuel settings, mutated only through its command methods, and dropped when
//! play ends. Score survives level changes; everything else is per attempt.
//!
//! Derived values (required fuel, phase, ordering) are recomputed on every
//! read from the current state, so there is nothing to invalidate.

use academy_assembly::{Assembly, AssemblyEvent};
use academy_catalog::{Catalog, Level, Part};
use academy_config::GameSettings;
use academy_core::site::LaunchSite;
use academy_fuel::{FuelConstants, FuelEstimate, FuelPolicy, GravitySource, MassSource};

use crate::SessionError;
use crate::launch::{LaunchOutcome, OutcomeKind, evaluate_launch};
use crate::progression::{MissionPhase, Progression};

/// One evaluated launch, kept for the attempt log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    pub level: u32,
    pub target: String,
    pub outcome: OutcomeKind,
    pub loaded_fuel: u64,
    pub required_fuel: u64,
    pub reward: u64,
    pub score_after: u64,
}

#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    constants: FuelConstants,
    policy: FuelPolicy,
    launch_site: LaunchSite,
    active: usize,
    assembly: Assembly,
    fuel: u64,
    score: u64,
    last_outcome: Option<LaunchOutcome>,
    attempts: Vec<AttemptRecord>,
}

impl Session {
    /// Start at the first level with default fuel constants and policy.
    pub fn new(catalog: Catalog) -> Self {
        let assembly = Assembly::new(catalog.first());
        Self {
            catalog,
            constants: FuelConstants::default(),
            policy: FuelPolicy::default(),
            launch_site: LaunchSite::default(),
            active: 0,
            assembly,
            fuel: 0,
            score: 0,
            last_outcome: None,
            attempts: Vec::new(),
        }
    }

    /// Start a session configured from a settings file.
    pub fn with_settings(catalog: Catalog, settings: &GameSettings) -> Result<Self, SessionError> {
        let constants = FuelConstants::from_settings(&settings.fuel)?;
        let launch_site: LaunchSite = settings.session.launch_site.parse()?;
        let starting = settings.session.starting_level;
        let mut session = Self::new(catalog)
            .with_constants(constants)
            .with_policy(FuelPolicy::from(&settings.fuel));
        session.launch_site = launch_site;
        if !session.select_level(starting) {
            return Err(SessionError::UnknownLevel(starting));
        }
        Ok(session)
    }

    pub fn with_constants(mut self, constants: FuelConstants) -> Self {
        self.constants = constants;
        self
    }

    pub fn with_policy(mut self, policy: FuelPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn place_part(&mut self, part_id: &str) -> Vec<AssemblyEvent> {
        self.assembly.place(part_id)
    }

    /// Indices are 0-based, bottom first.
    pub fn reorder_part(&mut self, from: usize, to: usize) -> Vec<AssemblyEvent> {
        self.assembly.reorder(from, to)
    }

    pub fn remove_last_part(&mut self) -> Vec<AssemblyEvent> {
        self.assembly.remove_last()
    }

    /// Load `amount` fuel units. Negative input is clamped to zero; ignored
    /// once the launch has been attempted. Returns the fuel now loaded.
    pub fn set_fuel(&mut self, amount: i64) -> u64 {
        if self.assembly.is_frozen() {
            log::debug!("fuel change to {amount} ignored: launch already attempted");
            return self.fuel;
        }
        if amount < 0 {
            log::warn!("negative fuel amount {amount} clamped to 0");
        }
        self.fuel = amount.max(0) as u64;
        self.fuel
    }

    /// Evaluate a launch, freeze the pad, and bank the reward on success.
    ///
    /// Repeated launches of a frozen pad return the stored outcome without
    /// granting the reward again.
    pub fn attempt_launch(&mut self) -> LaunchOutcome {
        if self.assembly.is_frozen() {
            if let Some(outcome) = &self.last_outcome {
                return outcome.clone();
            }
        }

        let required_fuel = self.required_fuel();
        let level = self.active_level();
        let outcome = evaluate_launch(&self.assembly, self.fuel, required_fuel, level);
        let (ordinal, target) = (level.level, level.target.clone());
        self.score = self.score.saturating_add(outcome.reward());
        log::info!(
            "launch on level {ordinal} -> {} (fuel {}/{required_fuel}, score {})",
            outcome.kind(),
            self.fuel,
            self.score
        );

        self.attempts.push(AttemptRecord {
            level: ordinal,
            target,
            outcome: outcome.kind(),
            loaded_fuel: self.fuel,
            required_fuel,
            reward: outcome.reward(),
            score_after: self.score,
        });
        self.assembly.freeze();
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    /// Reset the pad and tank for another go at the same level.
    ///
    /// Not available after a successful launch; the player advances instead.
    pub fn retry(&mut self) -> bool {
        if self.last_success() {
            log::debug!("retry ignored: last launch succeeded");
            return false;
        }
        self.reset_attempt();
        true
    }

    /// Move on after a successful launch, wrapping to the first level after the last.
    pub fn advance_or_wrap(&mut self) -> Option<Progression> {
        if !self.last_success() {
            return None;
        }
        let current = self.active_level().level;
        let progression = match self.catalog.next_after(current) {
            Some(next) => Progression::Advanced { level: next.level },
            None => Progression::AllLevelsCompleted {
                level: self.catalog.first().level,
            },
        };
        self.activate(progression.level());
        log::info!("progression from level {current}: {progression:?}");
        Some(progression)
    }

    /// Jump to any level in the catalog, discarding the current attempt.
    pub fn select_level(&mut self, ordinal: u32) -> bool {
        if self.catalog.level(ordinal).is_none() {
            log::debug!("select level {ordinal} ignored: not in catalog");
            return false;
        }
        self.activate(ordinal);
        true
    }

    pub fn set_launch_site(&mut self, site: LaunchSite) {
        self.launch_site = site;
    }

    pub fn assembled_parts(&self) -> &[Part] {
        self.assembly.placed()
    }

    pub fn assembly(&self) -> &Assembly {
        &self.assembly
    }

    pub fn is_complete(&self) -> bool {
        self.assembly.is_complete()
    }

    pub fn is_correctly_ordered(&self) -> bool {
        self.assembly.is_correctly_ordered()
    }

    pub fn is_frozen(&self) -> bool {
        self.assembly.is_frozen()
    }

    /// Fuel units the formula currently demands under the session policy.
    pub fn required_fuel(&self) -> u64 {
        self.fuel_estimate().required_units
    }

    pub fn fuel_estimate(&self) -> FuelEstimate {
        let level = self.active_level();
        let dry_mass = match self.policy.mass_source {
            MassSource::Assembled => self.assembly.placed_mass(),
            MassSource::Required => level.dry_mass(),
        };
        let gravity = match self.policy.gravity_source {
            GravitySource::Destination => level.gravity,
            GravitySource::LaunchSite => self.launch_site.gravity(),
        };
        self.constants.estimate(dry_mass, level.astronauts, gravity)
    }

    pub fn fuel(&self) -> u64 {
        self.fuel
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn last_outcome(&self) -> Option<&LaunchOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn active_level(&self) -> &Level {
        &self.catalog.levels()[self.active]
    }

    pub fn phase(&self) -> MissionPhase {
        MissionPhase::derive(
            self.assembly.is_correctly_ordered(),
            self.fuel,
            self.required_fuel(),
        )
    }

    /// Whether the launch control should be enabled: full pad, some fuel, not yet launched.
    pub fn can_launch(&self) -> bool {
        !self.assembly.is_frozen() && self.assembly.is_complete() && self.fuel > 0
    }

    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> FuelPolicy {
        self.policy
    }

    pub fn launch_site(&self) -> LaunchSite {
        self.launch_site
    }

    fn last_success(&self) -> bool {
        self.last_outcome
            .as_ref()
            .map(LaunchOutcome::is_success)
            .unwrap_or(false)
    }

    fn activate(&mut self, ordinal: u32) {
        self.active = ordinal as usize - 1;
        self.assembly = Assembly::new(self.active_level());
        self.fuel = 0;
        self.last_outcome = None;
    }

    fn reset_attempt(&mut self) {
        self.assembly.reset();
        self.fuel = 0;
        self.last_outcome = None;
    }
}
