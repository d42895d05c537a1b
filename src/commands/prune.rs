use crate::{
    config::Config,
    core::{branch_count, delete_commands, execute, Report},
    errors::{PruneError, Result},
    git::{Git, Shell},
    parser::branch_pipeline,
};
use clap::Args;

#[derive(Debug, Args)]
pub struct Prune {
    /// Reference the remote branches must already be merged into
    #[arg(value_name = "REFNAME")]
    pub refname: String,

    /// Preview the deletions with `git push --dry-run`
    #[arg(short = 'n', long, conflicts_with = "print")]
    pub dry_run: bool,

    /// Process at most this many branches
    #[arg(short, long, value_name = "L")]
    pub limit: Option<usize>,

    /// Only print the delete commands, run nothing
    #[arg(short, long)]
    pub print: bool,

    /// Remote to delete from (defaults to pruneMerged.remote, then origin)
    #[arg(short, long, value_name = "NAME")]
    pub remote: Option<String>,

    /// Succeed without doing anything when no branch is left to delete
    #[arg(long)]
    pub allow_empty: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// What one run works on once the command line is resolved
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub refname: String,
    pub dry_run: bool,
    pub limit: Option<usize>,
}

impl Prune {
    pub fn options(&self) -> Options {
        Options {
            refname: self.refname.clone(),
            dry_run: self.dry_run,
            limit: self.limit,
        }
    }

    /// Command-line flags take precedence over git configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(remote) = &self.remote {
            config.remote = remote.clone();
        }
        if self.allow_empty {
            config.allow_empty = true;
        }
        config
    }

    /// Run the whole prune and return what happened
    ///
    /// In print mode nothing is executed and the report only lists the commands.
    pub fn execute<S: Shell>(&self, git: &Git<S>, config: Config) -> Result<Report> {
        let config = self.apply(config);
        let options = self.options();

        let reference = git.rev_parse(&options.refname)?;
        let listing = git.merged_branches(&reference)?;

        let branches = branch_pipeline(
            &listing,
            &config.protected_patterns(),
            options.limit,
            &config.remote,
        );

        let commands = match delete_commands(&config.remote, &branches, options.dry_run) {
            Ok(commands) => commands,
            Err(PruneError::NoCommand) if config.allow_empty => {
                log::warn!("No merged branch left to delete in {}", options.refname);
                let report = Report::from_outcomes(&reference, options.dry_run, Vec::new());
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    println!("{}", branch_count(&branches));
                }
                return Ok(report);
            }
            Err(e) => return Err(e),
        };

        if !self.json {
            println!("{}", branch_count(&branches));
            for branch in &branches {
                println!("{}", branch);
            }
        }

        if self.print {
            let report = Report {
                commands,
                ..Report::from_outcomes(&reference, options.dry_run, Vec::new())
            };
            if self.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for command in &report.commands {
                    println!("{}", command);
                }
            }
            return Ok(report);
        }

        let outcomes = execute(&git.shell, &commands);
        let report = Report {
            commands,
            ..Report::from_outcomes(&reference, options.dry_run, outcomes)
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            if !report.succeeded.is_empty() {
                println!("{}", report.success_messages());
            }
            if !report.failed.is_empty() {
                eprintln!("{}", report.failure_messages());
            }
        }

        if !report.failed.is_empty() {
            log::warn!(
                "{} of {} deletions failed",
                report.failed.len(),
                report.commands.len()
            );
        }

        Ok(report)
    }
}
