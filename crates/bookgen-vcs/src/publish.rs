//! The publish pipeline: status → add → commit → push.
//!
//! Each step is a fallible subprocess call whose result is inspected here
//! rather than bubbled through blindly, so the commit-vs-push policy below
//! is visible in one place:
//!
//! - a clean working tree short-circuits the whole pipeline,
//! - a commit failure stops the pipeline before push without escalating
//!   ([`PublishOutcome::CommitRejected`]),
//! - a push failure is a hard error.

use crate::git::{GitCli, GitError};

/// Parameters for one publish run.
#[derive(Debug, Clone, Copy)]
pub struct PublishRequest<'a> {
    /// Remote to push to (e.g. `origin`).
    pub remote: &'a str,
    /// Branch to push (e.g. `main`).
    pub branch: &'a str,
    /// Commit message.
    pub message: &'a str,
}

/// How a publish run ended, short of a hard error.
#[derive(Debug)]
pub enum PublishOutcome {
    /// Working tree was clean; nothing staged, committed, or pushed.
    NoChanges,
    /// Commit was rejected; push was not attempted.
    CommitRejected(GitError),
    /// Changes committed and pushed.
    Pushed,
}

/// Run the full publish pipeline against a repository.
///
/// # Errors
///
/// Returns [`GitError`] when status, staging, or push fails. A commit
/// failure is reported through [`PublishOutcome::CommitRejected`] instead.
pub fn publish(git: &GitCli, request: &PublishRequest<'_>) -> Result<PublishOutcome, GitError> {
    tracing::info!("checking working tree for changes");
    if !git.has_changes()? {
        return Ok(PublishOutcome::NoChanges);
    }

    tracing::info!("staging all changes");
    git.stage_all()?;

    tracing::info!(message = request.message, "committing");
    if let Err(err) = git.commit(request.message) {
        return Ok(PublishOutcome::CommitRejected(err));
    }

    tracing::info!(remote = request.remote, branch = request.branch, "pushing");
    git.push(request.remote, request.branch)?;
    Ok(PublishOutcome::Pushed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::test_support::init_repo;
    use std::fs;

    const REQUEST: PublishRequest<'static> = PublishRequest {
        remote: "origin",
        branch: "main",
        message: "update docs",
    };

    /// Initialize a bare repository and wire it up as `origin`.
    fn add_bare_origin(git: &GitCli) -> tempfile::TempDir {
        let remote_dir = tempfile::tempdir().unwrap();
        GitCli::new(remote_dir.path())
            .run(&["init", "-q", "--bare", "-b", "main"])
            .unwrap();
        git.run(&["remote", "add", "origin", &remote_dir.path().to_string_lossy()])
            .unwrap();
        remote_dir
    }

    #[test]
    fn test_publish_no_changes_short_circuits() {
        let (_dir, git) = init_repo();
        // No remote configured: if the pipeline went past the status check,
        // push would fail and this test with it

        let outcome = publish(&git, &REQUEST).unwrap();
        assert!(matches!(outcome, PublishOutcome::NoChanges));
    }

    #[test]
    fn test_publish_commits_and_pushes() {
        let (dir, git) = init_repo();
        let _remote = add_bare_origin(&git);
        fs::write(dir.path().join("intro.md"), "Hello").unwrap();

        let outcome = publish(&git, &REQUEST).unwrap();

        assert!(matches!(outcome, PublishOutcome::Pushed));
        assert!(!git.has_changes().unwrap());
    }

    #[test]
    fn test_publish_uses_request_message() {
        let (dir, git) = init_repo();
        let _remote = add_bare_origin(&git);
        fs::write(dir.path().join("intro.md"), "Hello").unwrap();

        let request = PublishRequest {
            message: "docs: regenerate tree",
            ..REQUEST
        };
        publish(&git, &request).unwrap();

        let log = git.run(&["log", "-1", "--pretty=%s"]).unwrap();
        assert_eq!(log.trim(), "docs: regenerate tree");
    }

    #[test]
    fn test_publish_push_failure_is_hard_error() {
        let (dir, git) = init_repo();
        // Changes present but no remote: commit succeeds, push fails
        fs::write(dir.path().join("intro.md"), "Hello").unwrap();

        let err = publish(&git, &REQUEST).unwrap_err();
        assert!(matches!(err, GitError::CommandFailed { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_publish_commit_rejection_is_soft() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, git) = init_repo();
        fs::write(dir.path().join("intro.md"), "Hello").unwrap();

        // A failing pre-commit hook makes the commit step fail
        let hook = dir.path().join(".git/hooks/pre-commit");
        fs::write(&hook, "#!/bin/sh\nexit 1\n").unwrap();
        fs::set_permissions(&hook, fs::Permissions::from_mode(0o755)).unwrap();

        let outcome = publish(&git, &REQUEST).unwrap();
        assert!(matches!(outcome, PublishOutcome::CommitRejected(_)));
    }
}
