use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rocket_academy::export::{attempts as export_attempts, snapshot as export_snapshot};
use rocket_academy::mission::{LaunchSite, Session, setup};

#[path = "rocket_academy/console.rs"]
mod console;
#[path = "rocket_academy/render.rs"]
mod render;

/// Build, fuel and launch rockets one console command at a time.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rocket Academy: assemble parts in order, load fuel, launch"
)]
struct Cli {
    /// Level catalog (YAML list, TOML file, or directory of TOML files); built-in missions when omitted
    #[arg(long)]
    levels: Option<PathBuf>,

    /// Settings TOML with [fuel] and [session] tables
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Starting level (overrides settings)
    #[arg(long)]
    level: Option<u32>,

    /// Launch site (overrides settings)
    #[arg(long, value_enum)]
    site: Option<SiteArg>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Write the launch attempt log as CSV on exit (`-` for stdout)
    #[arg(long)]
    attempts_csv: Option<PathBuf>,

    /// Write a JSON snapshot of the session on exit
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum SiteArg {
    Earth,
    Moon,
    Mars,
}

impl From<SiteArg> for LaunchSite {
    fn from(value: SiteArg) -> Self {
        match value {
            SiteArg::Earth => LaunchSite::Earth,
            SiteArg::Moon => LaunchSite::Moon,
            SiteArg::Mars => LaunchSite::Mars,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let mut session = setup::session(cli.levels.as_deref(), cli.settings.as_deref())?;
    if let Some(level) = cli.level {
        if !session.select_level(level) {
            anyhow::bail!(
                "level {} not found; catalog has levels 1..={}",
                level,
                session.catalog().last_ordinal()
            );
        }
    }
    if let Some(site) = cli.site {
        session.set_launch_site(site.into());
    }
    log::info!(
        "starting at mission {} of {} from {}",
        session.active_level().level,
        session.catalog().len(),
        session.launch_site()
    );

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::banner(&mut out, &session)?;
    run(&mut session, input, &mut out)?;
    out.flush()?;
    drop(out);

    if let Some(path) = &cli.attempts_csv {
        export_attempts::write_attempts_to_path(path, session.attempts())?;
    }
    if let Some(path) = &cli.snapshot {
        let snapshot = export_snapshot::SessionSnapshot::capture(&session);
        export_snapshot::write_snapshot(path, &snapshot)?;
    }

    Ok(())
}

fn run(session: &mut Session, input: Box<dyn BufRead>, out: &mut dyn Write) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        let command = match console::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(hint) => {
                writeln!(out, "{hint}")?;
                continue;
            }
        };
        if console::execute(session, command, out)? == console::Flow::Quit {
            break;
        }
    }
    Ok(())
}
