//! Command-line surface for the generator.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which program's completions to generate.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetProgram {
    Docker,
    #[value(name = "docker-compose", alias = "compose")]
    DockerCompose,
}

impl TargetProgram {
    pub fn binary_name(self) -> &'static str {
        match self {
            TargetProgram::Docker => "docker",
            TargetProgram::DockerCompose => "docker-compose",
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "dockerfish",
    version,
    about = "Generate fish shell completions for docker and docker-compose",
    after_help = "The completion script is written to stdout:\n  dockerfish docker > ~/.config/fish/completions/docker.fish"
)]
pub struct Args {
    /// Program whose help output to introspect
    #[arg(value_enum)]
    pub target: TargetProgram,

    /// Path to the target executable (default: /usr/bin/<target>, then $PATH)
    #[arg(long, value_name = "PATH")]
    pub binary: Option<PathBuf>,

    /// Emit the parsed command model as JSON instead of completions
    #[arg(long)]
    pub json: bool,
}
