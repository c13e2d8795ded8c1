use crate::error::{Result, TagmakerError};

/// A branch reference, optionally qualified with a remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRef {
    pub name: String,
    pub remote: Option<String>,
}

impl BranchRef {
    /// Create a local branch reference
    pub fn local(name: impl Into<String>) -> Result<Self> {
        let name = validate_name(name.into())?;
        Ok(BranchRef { name, remote: None })
    }

    /// Create a remote-tracking branch reference (e.g. "origin/main")
    pub fn remote_tracking(name: impl Into<String>, remote: impl Into<String>) -> Result<Self> {
        let name = validate_name(name.into())?;
        Ok(BranchRef {
            name,
            remote: Some(remote.into()),
        })
    }

    /// The reference handed to checkout: "<remote>/<name>" or the bare name
    pub fn checkout_target(&self) -> String {
        match &self.remote {
            Some(remote) => format!("{}/{}", remote, self.name),
            None => self.name.clone(),
        }
    }
}

/// Reject names that cannot be a branch, before any subprocess runs.
/// Names starting with '-' would be parsed as flags by the underlying tool.
fn validate_name(name: String) -> Result<String> {
    if name.is_empty() {
        return Err(TagmakerError::branch("Branch name must not be empty"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(TagmakerError::branch(format!(
            "Branch name '{}' must not contain whitespace",
            name
        )));
    }
    if name.starts_with('-') {
        return Err(TagmakerError::branch(format!(
            "Branch name '{}' must not start with '-'",
            name
        )));
    }
    Ok(name)
}
