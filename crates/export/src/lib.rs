//! Export helpers for attempt logs (CSV) and session snapshots (JSON).

use thiserror::Error;

/// Errors raised while writing export artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub mod attempts {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use academy_mission::AttemptRecord;
    use serde::Serialize;

    use crate::ExportError;

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// CSV row emitted per launch attempt.
    #[derive(Debug, Clone, Serialize)]
    pub struct Row<'a> {
        pub attempt: usize,
        pub level: u32,
        pub target: &'a str,
        pub outcome: &'static str,
        pub loaded_fuel: u64,
        pub required_fuel: u64,
        pub reward: u64,
        pub score_after: u64,
    }

    impl<'a> Row<'a> {
        pub fn from_record(index: usize, record: &'a AttemptRecord) -> Self {
            Self {
                attempt: index + 1,
                level: record.level,
                target: &record.target,
                outcome: record.outcome.as_str(),
                loaded_fuel: record.loaded_fuel,
                required_fuel: record.required_fuel,
                reward: record.reward,
                score_after: record.score_after,
            }
        }
    }

    /// Write a header plus one row per attempt.
    pub fn write_attempts<W: Write>(writer: W, records: &[AttemptRecord]) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for (index, record) in records.iter().enumerate() {
            csv.serialize(Row::from_record(index, record))?;
        }
        if records.is_empty() {
            csv.write_record([
                "attempt",
                "level",
                "target",
                "outcome",
                "loaded_fuel",
                "required_fuel",
                "reward",
                "score_after",
            ])?;
        }
        csv.flush()?;
        Ok(())
    }

    /// Write the attempt log to `path` (`-` for stdout).
    pub fn write_attempts_to_path(path: &Path, records: &[AttemptRecord]) -> Result<(), ExportError> {
        let writer = writer_for_path(path)?;
        write_attempts(writer, records)
    }
}

pub mod snapshot {
    use std::fs::{self, File};
    use std::path::Path;

    use academy_mission::{LaunchOutcome, Session};
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use crate::ExportError;

    /// Formula breakdown as exported.
    #[derive(Debug, Clone, Serialize)]
    pub struct FuelBreakdown {
        pub dry_mass: f64,
        pub crew_mass: f64,
        pub gravity: f64,
        pub gravity_factor: f64,
        pub scale_factor: f64,
        pub required_units: u64,
    }

    /// Last launch result as exported.
    #[derive(Debug, Clone, Serialize)]
    pub struct OutcomeSnapshot {
        pub kind: &'static str,
        pub reward: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub required_fuel: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub target: Option<String>,
    }

    impl From<&LaunchOutcome> for OutcomeSnapshot {
        fn from(outcome: &LaunchOutcome) -> Self {
            let (required_fuel, target) = match outcome {
                LaunchOutcome::InsufficientFuel {
                    required_fuel,
                    target,
                    ..
                } => (Some(*required_fuel), Some(target.clone())),
                LaunchOutcome::Success { target, .. } => (None, Some(target.clone())),
                _ => (None, None),
            };
            Self {
                kind: outcome.kind().as_str(),
                reward: outcome.reward(),
                required_fuel,
                target,
            }
        }
    }

    /// Point-in-time view of a session.
    #[derive(Debug, Clone, Serialize)]
    pub struct SessionSnapshot {
        pub exported_at: String,
        pub level: u32,
        pub level_name: String,
        pub target: String,
        pub launch_site: String,
        pub phase: &'static str,
        pub placed: Vec<String>,
        pub complete: bool,
        pub correctly_ordered: bool,
        pub frozen: bool,
        pub fuel_loaded: u64,
        pub fuel: FuelBreakdown,
        pub score: u64,
        pub attempts: usize,
        pub last_outcome: Option<OutcomeSnapshot>,
    }

    impl SessionSnapshot {
        /// Capture the session as it stands now.
        pub fn capture(session: &Session) -> Self {
            let level = session.active_level();
            let estimate = session.fuel_estimate();
            Self {
                exported_at: chrono::Utc::now().to_rfc3339(),
                level: level.level,
                level_name: level.name.clone(),
                target: level.target.clone(),
                launch_site: session.launch_site().to_string(),
                phase: session.phase().as_str(),
                placed: session
                    .assembled_parts()
                    .iter()
                    .map(|p| p.id.clone())
                    .collect(),
                complete: session.is_complete(),
                correctly_ordered: session.is_correctly_ordered(),
                frozen: session.is_frozen(),
                fuel_loaded: session.fuel(),
                fuel: FuelBreakdown {
                    dry_mass: estimate.dry_mass,
                    crew_mass: estimate.crew_mass,
                    gravity: estimate.gravity,
                    gravity_factor: estimate.gravity_factor,
                    scale_factor: estimate.scale_factor,
                    required_units: estimate.required_units,
                },
                score: session.score(),
                attempts: session.attempts().len(),
                last_outcome: session.last_outcome().map(OutcomeSnapshot::from),
            }
        }
    }

    /// Write the snapshot as pretty JSON, creating parent directories as needed.
    pub fn write_snapshot(path: &Path, snapshot: &SessionSnapshot) -> Result<(), ExportError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, snapshot)?;
        Ok(())
    }
}
