//! Common constants used throughout create-effect-agent.

/// Project name used when neither a flag nor the target path supplies one
pub const DEFAULT_PROJECT_NAME: &str = "my-effect-lib";

/// Longest project name npm accepts
pub const MAX_PROJECT_NAME_LEN: usize = 214;

/// Message of the commit created after a successful generation
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Committer identity used when git has no `user.name` / `user.email` configured
pub const FALLBACK_GIT_AUTHOR: (&str, &str) = ("create-effect-agent", "create-effect-agent@localhost");
