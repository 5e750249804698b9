//! tidesh - small interactive Unix shell
//!
//! The crate covers the shell front-end: tokenizing input lines, the builtin
//! commands, prompt resolution and the terminal/process-group session.
//! External command execution, pipelines and redirection are left to callers
//! of [`shell::builtin::dispatch`].

pub mod shell;

pub use shell::{Session, SessionConfig};
