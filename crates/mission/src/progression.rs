//! Mission progression signals and the derived play phase.

/// What happened when the session moved past a successful launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progression {
    /// Moved on to the next mission.
    Advanced { level: u32 },
    /// The last mission was cleared; play wraps to `level` (the first one).
    AllLevelsCompleted { level: u32 },
}

impl Progression {
    /// Ordinal of the level now active.
    pub fn level(&self) -> u32 {
        match self {
            Progression::Advanced { level } | Progression::AllLevelsCompleted { level } => *level,
        }
    }
}

/// Step of the assemble → fuel → launch flow the player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionPhase {
    Assemble,
    Fuel,
    Launch,
}

impl MissionPhase {
    /// Phase implied by the current pad and tank state.
    pub fn derive(complete_and_ordered: bool, loaded_fuel: u64, required_fuel: u64) -> Self {
        if !complete_and_ordered {
            MissionPhase::Assemble
        } else if loaded_fuel < required_fuel {
            MissionPhase::Fuel
        } else {
            MissionPhase::Launch
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MissionPhase::Assemble => "assemble",
            MissionPhase::Fuel => "fuel",
            MissionPhase::Launch => "launch",
        }
    }
}
