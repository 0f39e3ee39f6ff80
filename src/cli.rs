// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::options::{AppOptions, DataOptions};
use crate::core::sanitize::fmt_age;
use crate::engine::{QueryEngine, QueryOutcome};
use crate::error::AppError;
use crate::table::TableData;

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Mode {
    Run(AppOptions),
    Help,
}

/// Positional dataset paths only: `[players.csv] [football.csv]`.
pub fn parse_args<I>(args: I) -> Result<Mode, AppError>
where
    I: IntoIterator<Item = String>,
{
    let mut paths: Vec<PathBuf> = Vec::new();
    for a in args {
        match a.as_str() {
            "-h" | "--help" => return Ok(Mode::Help),
            s if s.starts_with('-') => return Err(AppError::Args(format!("Unknown arg: {}", a))),
            _ => paths.push(PathBuf::from(a)),
        }
    }
    if paths.len() > 2 {
        return Err(AppError::Args(format!(
            "Expected at most 2 dataset paths, got {}",
            paths.len()
        )));
    }

    let mut paths = paths.into_iter();
    let mut data = DataOptions::default();
    if let Some(p) = paths.next() { data.players_path = p; }
    data.football_path = paths.next();

    Ok(Mode::Run(AppOptions { data }))
}

/// Load the datasets, then read queries from stdin until EOF or `:q`.
pub fn run(opts: &AppOptions) -> Result<(), AppError> {
    let engine = QueryEngine::open(&opts.data).inspect_err(|e| loge!("Startup: {e}"))?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(&engine, stdin.lock(), stdout.lock())
}

pub fn repl<R: BufRead, W: Write>(engine: &QueryEngine, mut input: R, mut out: W) -> Result<(), AppError> {
    writeln!(
        out,
        "Loaded {} player(s){}.",
        engine.players().len(),
        engine
            .football()
            .map(|f| format!(", {} football row(s)", f.len()))
            .unwrap_or_default()
    )?;

    loop {
        let Some(query) = prompt(&mut input, &mut out, "Enter player name: ")? else { break };
        if query == ":q" { break; }

        let mut outcome = engine.submit_query(&query, None);

        if let QueryOutcome::Ambiguous { choices, .. } = &outcome {
            writeln!(out, "{}", outcome.message().unwrap_or_default())?;
            for (i, name) in choices.iter().enumerate() {
                writeln!(out, "  {:>2}) {}", i + 1, name)?;
            }
            let Some(pick) = prompt(&mut input, &mut out, "Select a player: ")? else { break };
            let chosen = pick
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| choices.get(i))
                .cloned();
            match chosen {
                Some(name) => outcome = engine.submit_query(&query, Some(&name)),
                None => {
                    writeln!(out, "No such choice: {pick}")?;
                    continue;
                }
            }
        }

        print_outcome(engine, &outcome, &mut out)?;
    }

    out.flush()?;
    Ok(())
}

/// `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    loop {
        write!(out, "{label}")?;
        out.flush()?;
        let mut line = s!();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }
        let line = line.trim();
        if !line.is_empty() {
            return Ok(Some(s!(line)));
        }
    }
}

fn print_outcome<W: Write>(engine: &QueryEngine, outcome: &QueryOutcome, out: &mut W) -> io::Result<()> {
    let Some(lookup) = outcome.lookup() else {
        writeln!(out, "{}", outcome.message().unwrap_or_default())?;
        return Ok(());
    };
    let store = engine.players();
    let Some(p) = store.get(lookup.record) else { return Ok(()) };

    let na = |v: &Option<String>| v.clone().unwrap_or_else(|| s!("n/a"));
    writeln!(out, "\nPlayer Information:")?;
    writeln!(out, "  Full Name:     {}", na(&p.full_name))?;
    writeln!(out, "  Nationality:   {}", na(&p.nationality))?;
    writeln!(out, "  College:       {}", na(&p.college))?;
    writeln!(out, "  High School:   {}", na(&p.high_school))?;
    writeln!(out, "  Team:          {}", na(&p.team))?;
    writeln!(out, "  Team Location: {}", na(&p.team_location))?;
    writeln!(out, "  League:        {}", na(&p.league))?;
    writeln!(out, "  Age:           {}", p.age.map(fmt_age).unwrap_or_else(|| s!("n/a")))?;

    if lookup.connections.is_empty() {
        writeln!(out, "\nNo connections.")?;
    }
    for table in lookup.connections.iter() {
        writeln!(out, "\n{} ({} row(s))", table.heading, table.rows.len())?;
        write!(out, "{}", TableData::from_records(store, &table.rows).to_aligned_text())?;
    }

    if let Some(mates) = &lookup.teammates {
        writeln!(out, "\nTeammates ({})", mates.len())?;
        if !mates.is_empty() {
            write!(out, "{}", TableData::from_teammates(mates).to_aligned_text())?;
        }
    }
    writeln!(out)?;
    Ok(())
}
