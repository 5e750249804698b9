//! Built-in commands
//!
//! Three commands are interpreted by the shell itself: `exit`, `cd` and
//! `history`. Anything else reports "not a builtin" so the caller is free to
//! hand the line to an external-command executor.

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use nix::unistd::{self, User};

use super::Session;

/// Commands interpreted directly by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Cd,
    History,
}

impl Builtin {
    /// Exact, case-sensitive lookup by command name. No abbreviations.
    pub fn lookup(name: &str) -> Option<Builtin> {
        match name {
            "exit" => Some(Builtin::Exit),
            "cd" => Some(Builtin::Cd),
            "history" => Some(Builtin::History),
            _ => None,
        }
    }
}

/// Try to handle a tokenized line as a builtin.
///
/// Returns true when the line was a recognized builtin, whether or not it
/// succeeded; false means the line is not a builtin and nothing was done.
pub fn dispatch(session: &Session, args: &[String]) -> bool {
    let Some(first) = args.first() else {
        return false;
    };

    match Builtin::lookup(first) {
        Some(Builtin::Exit) => {
            if session.config().exit_bypass {
                // In-process test hook: report handled without terminating.
                return true;
            }
            process::exit(0);
        }
        Some(Builtin::Cd) => {
            // A failed cd is still a recognized builtin invocation.
            if let Err(e) = change_dir(args) {
                eprintln!("{}: {:#}", "cd".red(), e);
            }
            true
        }
        // Recognized and acknowledged; no history store in this core.
        Some(Builtin::History) => true,
        None => false,
    }
}

/// cd - change the working directory.
///
/// `args[0]` is the `cd` word itself; `args[1]`, when present, is used
/// verbatim (no `~` expansion). With no target the home directory is
/// resolved from `$HOME`, then from the system user database.
///
/// On failure the working directory is unchanged and the error carries a
/// descriptive message; the process never terminates here.
pub fn change_dir(args: &[String]) -> Result<()> {
    let target = match args.get(1) {
        Some(dir) => PathBuf::from(dir),
        None => home_dir()?,
    };
    env::set_current_dir(&target).with_context(|| format!("{}", target.display()))?;
    Ok(())
}

/// Home directory for the current user: `$HOME` if set, else the entry in
/// the system user database for our uid.
fn home_dir() -> Result<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    match User::from_uid(unistd::getuid()) {
        Ok(Some(user)) => Ok(user.dir),
        _ => bail!("cannot determine home directory"),
    }
}
