//! Git publishing pipeline for the bookgen documentation generator.
//!
//! Provides [`GitCli`], a thin client over the `git` executable, and
//! [`publish`], an explicit ordered pipeline (status → add → commit → push)
//! whose steps return inspectable results instead of relying on
//! exception-style short-circuiting.

mod git;
mod publish;

pub use git::{GitCli, GitError};
pub use publish::{PublishOutcome, PublishRequest, publish};
