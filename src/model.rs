//! In-memory model of one target program's help surface.
//!
//! All three types are built once by the introspection pass and never
//! mutated afterwards; the renderer only reads them.

use serde::Serialize;

/// One option flag parsed from a help listing.
#[derive(Debug, Clone, Serialize)]
pub struct Switch {
    /// Single-letter spellings, stored without the leading hyphen.
    pub shorts: Vec<String>,
    /// Word spellings, stored without the `--` prefix.
    pub longs: Vec<String>,
    pub description: String,
    /// Value placeholder shown in help output (e.g. `FILE`), if the flag
    /// takes an argument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metavar: Option<String>,
}

impl Switch {
    /// True when the flag's value names a filesystem path, in which case
    /// the shell keeps its ordinary path completion for the argument.
    pub fn takes_file_argument(&self) -> bool {
        match &self.metavar {
            Some(metavar) => metavar == "FILE" || metavar.contains("PATH"),
            None => false,
        }
    }
}

/// One verb of the target program, with its own options and positionals.
#[derive(Debug, Clone, Serialize)]
pub struct Subcommand {
    pub name: String,
    pub description: String,
    /// Positional placeholder tokens from the usage line, in source order.
    /// May encode alternation and repetition (`REPOSITORY|IMAGE`,
    /// `[CONTAINER...]`).
    pub args: Vec<String>,
    pub switches: Vec<Switch>,
}

/// Everything learned about one target binary in a single generation run.
#[derive(Debug, Serialize)]
pub struct ProgramModel {
    pub program: String,
    pub global_switches: Vec<Switch>,
    pub subcommands: Vec<Subcommand>,
}
