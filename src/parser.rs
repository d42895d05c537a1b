// Branch listing pipeline

/// Substrings that mark a branch as never eligible for deletion
pub const PROTECTED_BRANCHES: [&str; 2] = ["origin/develop", "origin/master"];

/// Split the raw `git branch -r` listing into trimmed names, one per non-blank line
pub fn parse_branches(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

pub fn is_protected(branch: &str, protected: &[String]) -> bool {
    protected.iter().any(|pattern| branch.contains(pattern.as_str()))
}

/// Drop every branch containing one of the `protected` substrings, keeping the order of the rest
pub fn filter_protected(branches: Vec<String>, protected: &[String]) -> Vec<String> {
    branches
        .into_iter()
        .filter(|branch| !is_protected(branch, protected))
        .collect()
}

pub fn sort_branches(mut branches: Vec<String>) -> Vec<String> {
    branches.sort();
    branches
}

/// First `limit` branches, or all of them when there is no limit
pub fn take_branches(limit: Option<usize>, branches: Vec<String>) -> Vec<String> {
    match limit {
        Some(limit) => branches.into_iter().take(limit).collect(),
        None => branches,
    }
}

/// Remove `<remote>/` from each name
///
/// This is a plain substring replacement, not a prefix strip: `xorigin/foo` becomes `xfoo`.
pub fn strip_remote_from_name(remote: &str, branches: Vec<String>) -> Vec<String> {
    let prefix = format!("{}/", remote);
    branches
        .into_iter()
        .map(|branch| branch.replace(&prefix, ""))
        .collect()
}

/// Parse, filter, sort, limit and strip, in that order
pub fn branch_pipeline(
    raw: &str,
    protected: &[String],
    limit: Option<usize>,
    remote: &str,
) -> Vec<String> {
    let candidates = parse_branches(raw);
    let listed = candidates.len();

    let branches = filter_protected(candidates, protected);
    log::debug!(
        "{} merged branches listed, {} after protection filter",
        listed,
        branches.len()
    );

    let branches = take_branches(limit, sort_branches(branches));
    strip_remote_from_name(remote, branches)
}
