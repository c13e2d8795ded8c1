//! Git backend driving the system git binary.
//!
//! Every operation is a blocking subprocess invocation with inherited
//! stdout/stderr: git streams its own progress to the invoking terminal and
//! handles its own authentication (SSH agent, credential helpers). A hung
//! command therefore blocks the whole tool; there is no timeout handling.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::{Result, TagmakerError};

/// Git backend using the system git binary
#[derive(Debug)]
pub struct SystemGit {
    /// Working tree root
    work_tree: PathBuf,
}

impl SystemGit {
    /// Open the git repository containing `path`
    ///
    /// This performs one subprocess call to resolve the working tree root.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let output = Command::new("git")
            .arg("-C")
            .arg(path.as_ref())
            .args(["rev-parse", "--show-toplevel"])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TagmakerError::config(format!(
                "Not in a git repository: {}",
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(SystemGit {
            work_tree: PathBuf::from(stdout.trim()),
        })
    }

    /// The working tree root this repository operates on
    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    /// Build a git command rooted at the working tree
    fn git_cmd(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("-C").arg(&self.work_tree);
        cmd
    }

    /// Run a git subcommand, streaming its output to the terminal.
    /// Returns a description of the failure on a non-zero exit.
    fn exec(&self, args: &[&str]) -> std::result::Result<(), String> {
        let status = self
            .git_cmd()
            .args(args)
            .status()
            .map_err(|e| format!("failed to run git: {}", e))?;

        if status.success() {
            Ok(())
        } else {
            Err(format!(
                "`git {}` exited with {}",
                args.join(" "),
                describe_status(status)
            ))
        }
    }
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

impl super::Repository for SystemGit {
    fn fetch(&self, remote: &str) -> Result<()> {
        self.exec(&["fetch", remote]).map_err(TagmakerError::fetch)
    }

    fn checkout(&self, reference: &str) -> Result<()> {
        self.exec(&["checkout", reference])
            .map_err(TagmakerError::checkout)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.exec(&["tag", name]).map_err(TagmakerError::tag)
    }

    fn push_tag(&self, remote: &str, tag_name: &str) -> Result<()> {
        self.exec(&["push", remote, tag_name])
            .map_err(TagmakerError::push)
    }
}
