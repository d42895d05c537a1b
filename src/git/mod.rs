pub mod cli;
pub mod types;


pub use cli::{Shell, SystemShell};
pub use types::{ShellError, ShellOutput, ShellResult};

use crate::errors::{PruneError, Result};

/// The few git invocations the pruning run depends on
pub struct Git<S: Shell> {
    pub shell: S,
}

impl<S: Shell> Git<S> {
    pub fn new(shell: S) -> Self {
        Self { shell }
    }

    /// Resolve `refname` with `git rev-parse <ref> --`
    ///
    /// The trailing `--` echoed back by git is stripped along with surrounding whitespace.
    pub fn rev_parse(&self, refname: &str) -> Result<String> {
        let output = self
            .shell
            .run("git", &["rev-parse", refname, "--"])
            .map_err(|e| {
                log::error!("Cannot resolve reference '{}'", refname);
                PruneError::Reference(e)
            })?;

        let resolved = output.stdout.trim_end();
        let resolved = resolved.strip_suffix("--").unwrap_or(resolved).trim_end();

        log::debug!("Resolved {} to {}", refname, resolved);
        Ok(resolved.to_string())
    }

    /// Raw output of `git branch -r --merged <reference>`, one remote branch per line
    pub fn merged_branches(&self, reference: &str) -> Result<String> {
        let output = self
            .shell
            .run("git", &["branch", "-r", "--merged", reference])
            .map_err(|e| PruneError::Git(e.to_string()))?;

        Ok(output.stdout)
    }
}
