use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;
mod introspect;
mod model;
mod probe;
mod render;

use cli::{Args, TargetProgram};
use probe::HelpProbe;
use render::{ComposeTarget, DockerTarget, Target};

const DEFAULT_BIN_DIR: &str = "/usr/bin";

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean artifact to redirect.
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let binary = resolve_binary(args.target, args.binary)?;
    tracing::debug!(binary = %binary.display(), "resolved target executable");

    let probe = HelpProbe::new(binary);
    let model = introspect::introspect(args.target.binary_name(), &probe)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    let target: &dyn Target = match args.target {
        TargetProgram::Docker => &DockerTarget,
        TargetProgram::DockerCompose => &ComposeTarget,
    };
    print!("{}", render::render(&model, target));
    Ok(())
}

fn resolve_binary(target: TargetProgram, override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }
    let name = target.binary_name();
    let default = PathBuf::from(DEFAULT_BIN_DIR).join(name);
    if default.is_file() {
        return Ok(default);
    }
    which::which(name).with_context(|| format!("locate `{name}` executable"))
}
