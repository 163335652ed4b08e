//! English text for events and outcomes. The library only hands over data.

use std::io::{Result, Write};

use rocket_academy::mission::{AssemblyEvent, LaunchOutcome, Progression, Session};

pub(super) fn banner(out: &mut dyn Write, session: &Session) -> Result<()> {
    let level = session.active_level();
    writeln!(out, "=== Mission {}: {} ===", level.level, level.name)?;
    if !level.description.is_empty() {
        writeln!(out, "{}", level.description)?;
    }
    writeln!(
        out,
        "Objective: {} | Destination gravity: {} m/s² | Crew: {} | Reward: {} coins",
        level.target, level.gravity, level.astronauts, level.reward
    )
}

pub(super) fn parts(out: &mut dyn Write, session: &Session) -> Result<()> {
    let level = session.active_level();
    writeln!(out, "Parts for mission {}:", level.level)?;
    for part in session.assembly().required() {
        let marker = if session.assembly().contains(&part.id) {
            "x"
        } else {
            " "
        };
        writeln!(
            out,
            "  [{marker}] {:<14} {} (mass {})",
            part.id, part.name, part.mass
        )?;
    }
    Ok(())
}

pub(super) fn events(out: &mut dyn Write, events: &[AssemblyEvent]) -> Result<()> {
    if events.is_empty() {
        return unchanged(out);
    }
    for event in events {
        match event {
            AssemblyEvent::PartPlaced { part, position } => {
                writeln!(
                    out,
                    "Part {} placed at position #{position}. You can reorder parts with 'move'.",
                    part.name
                )?;
                if let Some(fact) = &part.fact {
                    writeln!(out, "  Fact: {fact}")?;
                }
            }
            AssemblyEvent::PartRemoved {
                part,
                remaining_count,
            } => writeln!(
                out,
                "You removed the part {}. The rocket now has {remaining_count} parts.",
                part.name
            )?,
            AssemblyEvent::PartReordered { part } => writeln!(
                out,
                "Part {} reordered. The bottom-to-top order matters for launch!",
                part.name
            )?,
            AssemblyEvent::AssemblyComplete => writeln!(
                out,
                "Assembly complete. Check fuel and order before launching."
            )?,
        }
    }
    Ok(())
}

pub(super) fn unchanged(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Nothing changed.")
}

pub(super) fn fuel(out: &mut dyn Write, session: &Session) -> Result<()> {
    let required = session.required_fuel();
    let loaded = session.fuel();
    let status = if loaded >= required {
        "sufficient".to_string()
    } else {
        format!("{} units short", required - loaded)
    };
    writeln!(out, "Fuel loaded: {loaded} units (required {required}, {status}).")
}

pub(super) fn outcome(out: &mut dyn Write, outcome: &LaunchOutcome, score: u64) -> Result<()> {
    match outcome {
        LaunchOutcome::Success { reward, target } => writeln!(
            out,
            "SUCCESS! Perfect launch to {target}. You earned {reward} coins. Total: {score} coins."
        ),
        LaunchOutcome::WrongOrder => writeln!(
            out,
            "WARNING! The part order is incorrect. Flight was unstable. Try again!"
        ),
        LaunchOutcome::MissingParts { placed, required } => writeln!(
            out,
            "FAIL! Essential parts are missing ({placed} of {required} placed). Complete the assembly."
        ),
        LaunchOutcome::InsufficientFuel {
            required_fuel,
            target,
            ..
        } => writeln!(
            out,
            "CRITICAL FAIL! Insufficient fuel. You need at least {required_fuel} units to reach {target}."
        ),
    }
}

pub(super) fn progression(
    out: &mut dyn Write,
    progression: &Progression,
    session: &Session,
) -> Result<()> {
    if let Progression::AllLevelsCompleted { .. } = progression {
        writeln!(
            out,
            "You completed all levels! Resetting to {}.",
            session.active_level().name
        )?;
    }
    banner(out, session)
}

pub(super) fn status(out: &mut dyn Write, session: &Session) -> Result<()> {
    let level = session.active_level();
    let estimate = session.fuel_estimate();
    let stack: Vec<&str> = session
        .assembled_parts()
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    writeln!(out, "Mission {} ({})", level.level, level.target)?;
    writeln!(
        out,
        "  Stack (bottom→top): [{}] {}/{}",
        stack.join(", "),
        stack.len(),
        level.part_count()
    )?;
    writeln!(
        out,
        "  Complete: {} | Correct order: {} | Phase: {}",
        yes_no(session.is_complete()),
        yes_no(session.is_correctly_ordered()),
        session.phase().as_str()
    )?;
    writeln!(
        out,
        "  Fuel: {} / {} units (dry {} + crew {}, gravity x{:.3}, scale {})",
        session.fuel(),
        estimate.required_units,
        estimate.dry_mass,
        estimate.crew_mass,
        estimate.gravity_factor,
        estimate.scale_factor
    )?;
    writeln!(
        out,
        "  Launch site: {} | Ready to launch: {}",
        session.launch_site(),
        yes_no(session.can_launch())
    )?;
    writeln!(out, "  Score: {} coins", session.score())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
