use crate::{errors::Result, parser::PROTECTED_BRANCHES};

const REMOTE_KEY: &str = "pruneMerged.remote";
const PROTECT_KEY: &str = "pruneMerged.protect";
const ALLOW_EMPTY_KEY: &str = "pruneMerged.allowEmpty";

pub const DEFAULT_REMOTE: &str = "origin";

/// Settings read from git configuration (`pruneMerged.*`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub remote: String,
    /// Extra protected substrings on top of the built-in ones
    pub protected: Vec<String>,
    /// Treat an empty branch list as a successful no-op instead of an error
    pub allow_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            protected: Vec::new(),
            allow_empty: false,
        }
    }
}

impl Config {
    /// Load from the repository around the current directory, or the global config outside one
    pub fn load() -> Result<Self> {
        let config = match git2::Repository::discover(".") {
            Ok(repo) => repo.config()?,
            Err(e) => {
                log::debug!("No repository found ({}), using default git config", e.message());
                git2::Config::open_default()?
            }
        };

        Self::from_git_config(&config)
    }

    pub fn from_git_config(config: &git2::Config) -> Result<Self> {
        let defaults = Self::default();

        let remote = not_found_as_none(config.get_string(REMOTE_KEY))?.unwrap_or(defaults.remote);
        let allow_empty =
            not_found_as_none(config.get_bool(ALLOW_EMPTY_KEY))?.unwrap_or(defaults.allow_empty);

        let mut protected = Vec::new();
        if let Some(mut entries) = not_found_as_none(config.multivar(PROTECT_KEY, None))? {
            while let Some(entry) = entries.next() {
                let entry = entry?;
                if let Some(value) = entry.value() {
                    let value = value.trim();
                    if !value.is_empty() {
                        protected.push(value.to_string());
                    }
                }
            }
        }

        Ok(Self {
            remote,
            protected,
            allow_empty,
        })
    }

    /// Every substring that protects a branch: built-ins, the same names on the
    /// configured remote, then the configured extras
    pub fn protected_patterns(&self) -> Vec<String> {
        let mut patterns: Vec<String> = PROTECTED_BRANCHES.iter().map(|p| p.to_string()).collect();

        if self.remote != DEFAULT_REMOTE {
            patterns.push(format!("{}/develop", self.remote));
            patterns.push(format!("{}/master", self.remote));
        }

        for pattern in &self.protected {
            if !patterns.contains(pattern) {
                patterns.push(pattern.clone());
            }
        }

        patterns
    }
}

fn not_found_as_none<T>(result: std::result::Result<T, git2::Error>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn open(dir: &Path, content: &str) -> git2::Config {
        let path = dir.join("config");
        std::fs::write(&path, content).unwrap();
        git2::Config::open(&path).unwrap()
    }

    #[test]
    fn test_defaults_when_keys_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = open(dir.path(), "[core]\n\tbare = false\n");

        let config = Config::from_git_config(&config).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.remote, "origin");
        assert!(!config.allow_empty);
    }

    #[test]
    fn test_reads_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let config = open(
            dir.path(),
            "[pruneMerged]\n\tremote = upstream\n\tprotect = upstream/release\n\tprotect = staging\n\tallowEmpty = true\n",
        );

        let config = Config::from_git_config(&config).unwrap();

        assert_eq!(config.remote, "upstream");
        assert_eq!(config.protected, vec!["upstream/release", "staging"]);
        assert!(config.allow_empty);
    }

    #[test]
    fn test_invalid_bool_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = open(dir.path(), "[pruneMerged]\n\tallowEmpty = perhaps\n");

        assert!(Config::from_git_config(&config).is_err());
    }

    #[test]
    fn test_protected_patterns_default_remote() {
        let config = Config::default();
        assert_eq!(
            config.protected_patterns(),
            vec!["origin/develop", "origin/master"]
        );
    }

    #[test]
    fn test_protected_patterns_custom_remote_and_extras() {
        let config = Config {
            remote: "upstream".to_string(),
            protected: vec!["origin/master".to_string(), "release".to_string()],
            allow_empty: false,
        };

        assert_eq!(
            config.protected_patterns(),
            vec![
                "origin/develop",
                "origin/master",
                "upstream/develop",
                "upstream/master",
                "release",
            ]
        );
    }
}
