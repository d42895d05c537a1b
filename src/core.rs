use crate::{
    errors::{PruneError, Result},
    git::{Shell, ShellError, ShellResult},
};
use serde::Serialize;

pub fn branch_count(branches: &[String]) -> String {
    format!(
        "Would delete the following {} branch(es):",
        branches.len()
    )
}

/// Build one `git push <remote> --delete <branch>` per branch
///
/// Fails with `NoCommand` when there is nothing to delete.
pub fn delete_commands(remote: &str, branches: &[String], dry_run: bool) -> Result<Vec<String>> {
    if branches.is_empty() {
        return Err(PruneError::NoCommand);
    }

    let commands = branches
        .iter()
        .map(|branch| {
            let command = format!("git push {} --delete {}", remote, branch);
            if dry_run {
                format!("{} --dry-run", command)
            } else {
                command
            }
        })
        .collect();

    Ok(commands)
}

/// Run every command in order, collecting one outcome per command
///
/// A failing command never stops the ones after it.
pub fn execute<S: Shell>(shell: &S, commands: &[String]) -> Vec<ShellResult> {
    let mut outcomes = Vec::with_capacity(commands.len());

    for command in commands {
        let mut tokens = command.split_whitespace();
        let Some(program) = tokens.next() else {
            outcomes.push(Err(ShellError::new("Empty command", None)));
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        let outcome = shell.run(program, &args);
        match &outcome {
            Ok(_) => log::info!("{}", command),
            Err(e) => log::warn!("{} failed: {}", command, e),
        }
        outcomes.push(outcome);
    }

    outcomes
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub reference: String,
    pub dry_run: bool,
    pub commands: Vec<String>,
    pub succeeded: Vec<String>,
    pub failed: Vec<ShellError>,
}

impl Report {
    /// Successes carry git's stderr, which is where `git push` reports deletions
    pub fn from_outcomes(reference: &str, dry_run: bool, outcomes: Vec<ShellResult>) -> Self {
        let mut report = Report {
            reference: reference.to_string(),
            dry_run,
            ..Default::default()
        };

        for outcome in outcomes {
            match outcome {
                Ok(output) => report
                    .succeeded
                    .push(output.stderr.trim_end().to_string()),
                Err(e) => report.failed.push(e),
            }
        }

        report
    }

    pub fn success_messages(&self) -> String {
        self.succeeded.join("\n")
    }

    pub fn failure_messages(&self) -> String {
        self.failed
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
