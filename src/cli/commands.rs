//! Command dispatch: turns parsed CLI arguments into session calls.

use std::io::{self, BufRead, IsTerminal, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{Command, Outcome, Session, TreeKind, Value};
use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::Traversal;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = effective_settings(cli)?;
    match &cli.command {
        Commands::Build { kind, values } => _build(*kind, values, &settings),
        Commands::Traverse {
            kind,
            traversal,
            values,
        } => _traverse(*kind, *traversal, values, &settings),
        Commands::Export { kind, values } => _export(*kind, values, &settings),
        Commands::Demo { kind } => _demo(*kind, &settings),
        Commands::Session { kind } => _session(*kind, &settings),
        Commands::Config => _config(&settings),
        Commands::Completion { shell } => _completion(*shell),
    }
}

/// Loaded settings with command line overrides applied on top.
#[instrument(level = "debug", skip(cli))]
pub fn effective_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        settings.seed = Some(seed);
    }
    if let Some(max) = cli.max_root_children {
        settings.max_root_children = max;
    }
    if let Some(max) = cli.max_other_node_children {
        settings.max_other_node_children = max;
    }
    settings.validate()?;
    debug!(?settings, "effective settings");
    Ok(settings)
}

fn session_with(kind: TreeKind, values: &[Value], settings: &Settings) -> Session {
    let mut session = Session::new(kind, settings);
    session.insert_all(values);
    session
}

#[instrument(skip(settings))]
fn _build(kind: TreeKind, values: &[Value], settings: &Settings) -> CliResult<()> {
    let session = session_with(kind, values, settings);
    output::header(&format!(
        "{kind} tree, {} nodes, depth {}",
        session.len(),
        session.depth()
    ));
    for traversal in Traversal::ALL {
        output::values(traversal.label(), &session.traverse(traversal));
    }
    output::values("Leaves", &session.leaves());
    output::block(&session.render());
    Ok(())
}

#[instrument(skip(settings))]
fn _traverse(
    kind: TreeKind,
    traversal: Traversal,
    values: &[Value],
    settings: &Settings,
) -> CliResult<()> {
    let session = session_with(kind, values, settings);
    output::block(&itertools::join(session.traverse(traversal), " "));
    Ok(())
}

#[instrument(skip(settings))]
fn _export(kind: TreeKind, values: &[Value], settings: &Settings) -> CliResult<()> {
    let session = session_with(kind, values, settings);
    output::block(&session.export_json()?);
    Ok(())
}

#[instrument(skip(settings))]
fn _demo(kind: TreeKind, settings: &Settings) -> CliResult<()> {
    let mut session = Session::new(kind, settings);
    let loaded = session.execute(Command::Random)?;
    output::outcome(&loaded);
    output::block(&session.render());
    Ok(())
}

#[instrument(skip(settings))]
fn _session(kind: TreeKind, settings: &Settings) -> CliResult<()> {
    let mut session = Session::new(kind, settings);
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        output::header(&format!("{kind} tree session, type 'help' for commands"));
    }
    let mut stdout = io::stdout().lock();
    run_script(&mut session, stdin.lock(), &mut stdout, interactive)?;
    Ok(())
}

fn _config(settings: &Settings) -> CliResult<()> {
    output::block(&settings.to_toml()?);
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Executes one command per input line and writes one result line per command.
///
/// Blank lines and `#` comments are skipped. Lines that fail to parse or
/// execute produce a `Warning:` line and the loop continues. Stops at `quit`
/// or end of input; returns the number of executed commands.
pub fn run_script<R, W>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    interactive: bool,
) -> CliResult<usize>
where
    R: BufRead,
    W: Write,
{
    let mut executed = 0;
    let mut line = String::new();
    loop {
        if interactive {
            output::prompt(&format!("{}>", session.kind()));
        }
        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(|e| CliError::io("read command", e))?;
        if read == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let result = trimmed
            .parse::<Command>()
            .and_then(|command| session.execute(command));
        let written = match result {
            Ok(outcome) => {
                executed += 1;
                let done = outcome == Outcome::Quit;
                let written = writeln!(out, "{outcome}");
                if done {
                    written.map_err(|e| CliError::io("write result", e))?;
                    break;
                }
                written
            }
            Err(e) => writeln!(out, "Warning: {e}"),
        };
        written.map_err(|e| CliError::io("write result", e))?;
    }
    Ok(executed)
}
