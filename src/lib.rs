pub mod commands;
pub mod package;
pub mod runtime;
pub mod tool_version;

/// Version of the running binary, `git describe` output without the `v` prefix.
pub const VERSION: &str = env!("PORTUP_VERSION");
