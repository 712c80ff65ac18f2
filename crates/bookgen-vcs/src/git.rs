//! Subprocess client for the `git` executable.
//!
//! Every operation blocks until the underlying process exits. Output is
//! captured; stderr of a failed command is carried in the error.

use std::path::PathBuf;
use std::process::Command;

/// Git invocation error.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    /// The `git` executable could not be spawned (missing from PATH, etc.).
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),
    /// A git command exited with a non-zero status.
    #[error("`git {command}` failed (exit code {code}): {stderr}")]
    CommandFailed {
        /// Arguments of the failed invocation, space-joined.
        command: String,
        /// Exit code, or -1 when terminated by a signal.
        code: i32,
        /// Captured stderr, trimmed.
        stderr: String,
    },
}

/// Thin client over the `git` executable, bound to one working directory.
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Create a client operating on the repository at `workdir`.
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Run one git command, returning captured stdout.
    pub(crate) fn run(&self, args: &[&str]) -> Result<String, GitError> {
        tracing::debug!(command = args.join(" "), "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Machine-readable working tree status (`git status --porcelain`),
    /// trimmed. Empty string means a clean tree.
    pub fn status_porcelain(&self) -> Result<String, GitError> {
        Ok(self.run(&["status", "--porcelain"])?.trim().to_owned())
    }

    /// True when the working tree has uncommitted changes.
    pub fn has_changes(&self) -> Result<bool, GitError> {
        Ok(!self.status_porcelain()?.is_empty())
    }

    /// Stage everything (`git add .`).
    pub fn stage_all(&self) -> Result<(), GitError> {
        self.run(&["add", "."]).map(drop)
    }

    /// Commit staged changes with the given message.
    pub fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run(&["commit", "-m", message]).map(drop)
    }

    /// Push the given branch to the given remote.
    pub fn push(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        self.run(&["push", remote, branch]).map(drop)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::GitCli;

    /// Initialize a repository in a fresh tempdir with test identity set.
    pub(crate) fn init_repo() -> (tempfile::TempDir, GitCli) {
        let dir = tempfile::tempdir().unwrap();
        let git = GitCli::new(dir.path());
        git.run(&["init", "-q", "-b", "main"]).unwrap();
        git.run(&["config", "user.email", "test@example.com"]).unwrap();
        git.run(&["config", "user.name", "Test"]).unwrap();
        (dir, git)
    }
}
