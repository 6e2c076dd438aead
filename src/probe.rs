//! Help probe: runs the target binary and captures its help output.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::Command;

use crate::introspect::HelpSource;

/// Process-backed [`HelpSource`].
///
/// docker exits non-zero for several of its help invocations, so the exit
/// status is logged but never treated as an error; only a failure to spawn
/// the executable aborts the run.
pub struct HelpProbe {
    binary: PathBuf,
}

impl HelpProbe {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }
}

impl HelpSource for HelpProbe {
    fn help_output(&self, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .with_context(|| format!("spawn {} {}", self.binary.display(), args.join(" ")))?;

        tracing::debug!(
            ?args,
            status = %exit_status_string(&output.status),
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "captured help output"
        );

        // Help text lands on stdout or stderr depending on the invocation;
        // keep both, stdout first.
        let mut text = String::from_utf8_lossy(&output.stdout).to_string();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }
}

fn exit_status_string(status: &std::process::ExitStatus) -> String {
    if let Some(code) = status.code() {
        format!("{code}")
    } else {
        "terminated by signal".to_string()
    }
}
