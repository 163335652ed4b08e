use std::io::Write;

use rocket_academy::mission::{LaunchSite, Session};

use super::render;

/// One line of console input.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Command {
    Parts,
    Place(String),
    /// 1-based positions, bottom first.
    Move { from: usize, to: usize },
    Undo,
    Fuel(i64),
    Launch,
    Retry,
    Next,
    Level(u32),
    Site(LaunchSite),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Quit,
}

const USAGE: &str = "commands: parts | place <id> | move <from> <to> | undo | fuel <units> | launch | retry | next | level <n> | site <earth|moon|mars> | status | help | quit";

/// Parse a console line. Blank lines and `#` comments yield `Ok(None)`.
pub(super) fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let command = match (keyword.as_str(), args.as_slice()) {
        ("parts", []) => Command::Parts,
        ("place", [id]) => Command::Place((*id).to_string()),
        ("move", [from, to]) => Command::Move {
            from: parse_number(from)?,
            to: parse_number(to)?,
        },
        ("undo", []) => Command::Undo,
        ("fuel", [amount]) => Command::Fuel(parse_number(amount)?),
        ("launch", []) => Command::Launch,
        ("retry", []) => Command::Retry,
        ("next", []) => Command::Next,
        ("level", [n]) => Command::Level(parse_number(n)?),
        ("site", [name]) => Command::Site(name.parse().map_err(|err| format!("{err}"))?),
        ("status", []) => Command::Status,
        ("help", []) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        _ => return Err(format!("unrecognised command '{line}'; {USAGE}")),
    };
    Ok(Some(command))
}

fn parse_number<T: std::str::FromStr>(word: &str) -> Result<T, String> {
    word.parse()
        .map_err(|_| format!("'{word}' is not a valid number"))
}

/// Apply a command to the session and print what happened.
pub(super) fn execute(
    session: &mut Session,
    command: Command,
    out: &mut dyn Write,
) -> std::io::Result<Flow> {
    match command {
        Command::Parts => render::parts(out, session)?,
        Command::Place(id) => {
            if session.active_level().part(&id).is_none() {
                writeln!(
                    out,
                    "Mission {} has no part '{id}'. Type 'parts' to list them.",
                    session.active_level().level
                )?;
            } else {
                let events = session.place_part(&id);
                render::events(out, &events)?;
            }
        }
        Command::Move { from, to } => {
            let events = match (from.checked_sub(1), to.checked_sub(1)) {
                (Some(from), Some(to)) => session.reorder_part(from, to),
                _ => Vec::new(),
            };
            render::events(out, &events)?;
        }
        Command::Undo => {
            let events = session.remove_last_part();
            render::events(out, &events)?;
        }
        Command::Fuel(amount) => {
            session.set_fuel(amount);
            render::fuel(out, session)?;
        }
        Command::Launch => {
            let outcome = session.attempt_launch();
            render::outcome(out, &outcome, session.score())?;
        }
        Command::Retry => {
            if session.retry() {
                writeln!(out, "Pad cleared. Try mission {} again.", session.active_level().level)?;
            } else {
                render::unchanged(out)?;
            }
        }
        Command::Next => match session.advance_or_wrap() {
            Some(progression) => render::progression(out, &progression, session)?,
            None => writeln!(out, "Launch successfully before moving on.")?,
        },
        Command::Level(n) => {
            if session.select_level(n) {
                render::banner(out, session)?;
            } else {
                writeln!(out, "No mission {n} in this catalog.")?;
            }
        }
        Command::Site(site) => {
            session.set_launch_site(site);
            writeln!(out, "Launch site set to {site}.")?;
        }
        Command::Status => render::status(out, session)?,
        Command::Help => writeln!(out, "{USAGE}")?,
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
