//! Launch evaluation: turns the pad state into a single outcome.

use std::fmt;

use academy_assembly::Assembly;
use academy_catalog::Level;

/// Result of one launch attempt, carrying what the message for it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    MissingParts {
        placed: usize,
        required: usize,
    },
    InsufficientFuel {
        required_fuel: u64,
        loaded_fuel: u64,
        target: String,
    },
    WrongOrder,
    Success {
        reward: u64,
        target: String,
    },
}

/// Data-free discriminant of [`LaunchOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    MissingParts,
    InsufficientFuel,
    WrongOrder,
    Success,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::MissingParts => "missing_parts",
            OutcomeKind::InsufficientFuel => "insufficient_fuel",
            OutcomeKind::WrongOrder => "wrong_order",
            OutcomeKind::Success => "success",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LaunchOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            LaunchOutcome::MissingParts { .. } => OutcomeKind::MissingParts,
            LaunchOutcome::InsufficientFuel { .. } => OutcomeKind::InsufficientFuel,
            LaunchOutcome::WrongOrder => OutcomeKind::WrongOrder,
            LaunchOutcome::Success { .. } => OutcomeKind::Success,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LaunchOutcome::Success { .. })
    }

    /// Coins earned by this attempt.
    pub fn reward(&self) -> u64 {
        match self {
            LaunchOutcome::Success { reward, .. } => *reward,
            _ => 0,
        }
    }
}

/// Decide the outcome of launching `assembly` with `loaded_fuel` units.
///
/// Checks run in a fixed order and the first failing one wins: completeness,
/// then fuel, then stacking order.
pub fn evaluate_launch(
    assembly: &Assembly,
    loaded_fuel: u64,
    required_fuel: u64,
    level: &Level,
) -> LaunchOutcome {
    if !assembly.is_complete() {
        return LaunchOutcome::MissingParts {
            placed: assembly.len(),
            required: level.part_count(),
        };
    }
    if loaded_fuel < required_fuel {
        return LaunchOutcome::InsufficientFuel {
            required_fuel,
            loaded_fuel,
            target: level.target.clone(),
        };
    }
    if !assembly.is_correctly_ordered() {
        return LaunchOutcome::WrongOrder;
    }
    LaunchOutcome::Success {
        reward: level.reward,
        target: level.target.clone(),
    }
}
