//! Help-text introspection: drives the probe and builds the program model.
//!
//! The parsing is pinned to the classic docker help layout: an `Options:`
//! header followed by option lines, a `Commands:` header followed by
//! `<name> <description>` lines, and per-command help opening with a
//! `Usage:` line. Anything else is a fatal parse error rather than a guess.

mod switch;
mod usage;

use anyhow::{anyhow, bail, Context, Result};

use crate::model::{ProgramModel, Subcommand, Switch};
use switch::parse_switch_line;
use usage::usage_positionals;

const OPTIONS_MARKER: &str = "Options:";
const COMMANDS_MARKER: &str = "Commands:";

/// Source of help text for one target binary.
///
/// The process-backed implementation lives in [`crate::probe`]; tests
/// replay canned transcripts instead of spawning anything.
pub trait HelpSource {
    fn help_output(&self, args: &[&str]) -> Result<String>;
}

/// Build the full model for `program` by walking its help output: global
/// options first, then one `help <command>` invocation per listed command.
pub fn introspect(program: &str, source: &dyn HelpSource) -> Result<ProgramModel> {
    let global_switches =
        global_switches(source).context("parse global options from `-h` output")?;
    tracing::debug!(count = global_switches.len(), "parsed global options");

    let listing = source.help_output(&["help"])?;
    let mut subcommands = Vec::new();
    for (name, description) in command_listing(&listing)? {
        let help = source.help_output(&["help", &name])?;
        let sub = parse_subcommand(&name, &description, &help)
            .with_context(|| format!("parse help for subcommand `{name}`"))?;
        tracing::debug!(
            subcommand = %sub.name,
            switches = sub.switches.len(),
            args = sub.args.len(),
            "parsed subcommand"
        );
        subcommands.push(sub);
    }

    tracing::info!(
        program,
        options = global_switches.len(),
        subcommands = subcommands.len(),
        "introspection complete"
    );
    Ok(ProgramModel {
        program: program.to_string(),
        global_switches,
        subcommands,
    })
}

/// Parse the `Options:` section of the top-level `-h` output. A later
/// `Commands:` header marks that no further options follow.
fn global_switches(source: &dyn HelpSource) -> Result<Vec<Switch>> {
    let help = source.help_output(&["-h"])?;
    let mut lines = help.lines();
    if !skip_to_marker(&mut lines, OPTIONS_MARKER) {
        bail!("`{OPTIONS_MARKER}` header not found");
    }

    let mut switches = Vec::new();
    for line in lines {
        if line.trim_end() == COMMANDS_MARKER {
            break;
        }
        if let Some(switch) = parse_switch_line(line)? {
            switches.push(switch);
        }
    }
    Ok(switches)
}

/// Parse the `Commands:` listing of the bare `help` output into
/// `(name, description)` pairs, preserving source order.
fn command_listing(help: &str) -> Result<Vec<(String, String)>> {
    let mut lines = help.lines();
    if !skip_to_marker(&mut lines, COMMANDS_MARKER) {
        bail!("`{COMMANDS_MARKER}` header not found in `help` output");
    }

    let mut entries = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            break;
        }
        let (name, description) = match trimmed.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim_start()),
            None => (trimmed, ""),
        };
        entries.push((name.to_string(), description.to_string()));
    }
    Ok(entries)
}

/// Parse one `help <command>` transcript: usage line first, then every
/// hyphen-prefixed line as a switch. Other lines are ignored.
fn parse_subcommand(name: &str, description: &str, help: &str) -> Result<Subcommand> {
    let mut lines = help.lines();
    let usage = lines
        .by_ref()
        .find(|line| line.trim_start().starts_with("Usage:"))
        .ok_or_else(|| anyhow!("no `Usage:` line in help output"))?;
    let args = usage_positionals(name, usage);

    let mut switches = Vec::new();
    for line in lines {
        if let Some(switch) = parse_switch_line(line)? {
            switches.push(switch);
        }
    }

    Ok(Subcommand {
        name: name.to_string(),
        description: description.to_string(),
        args,
        switches,
    })
}

/// Advance `lines` past the first line equal to `marker` (ignoring trailing
/// whitespace). Returns false if the marker never appears.
fn skip_to_marker<'a, I>(lines: &mut I, marker: &str) -> bool
where
    I: Iterator<Item = &'a str>,
{
    lines.any(|line| line.trim_end() == marker)
}
