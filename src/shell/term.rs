//! Controlling-terminal access
//!
//! The session claims a process group and the terminal foreground exactly
//! once, at startup. All of those OS calls go through [`TerminalControl`] so
//! the session logic can run against an inert implementation in tests and in
//! non-terminal environments (CI, pipes).

use std::io::{self, IsTerminal};

use nix::errno::Errno;
use nix::sys::termios::{self, Termios};
use nix::unistd::{self, Pid};
use thiserror::Error;

/// Failures while claiming the controlling terminal.
#[derive(Debug, Error)]
pub enum TermError {
    #[error("couldn't put the shell in its own process group: {0}")]
    SetProcessGroup(#[source] Errno),
    #[error("couldn't read terminal attributes: {0}")]
    GetAttributes(#[source] Errno),
    #[error("couldn't claim the foreground process group: {0}")]
    SetForeground(#[source] Errno),
}

/// Access to the terminal bound to standard input.
pub trait TerminalControl {
    /// Whether the bound stream is an actual terminal device.
    fn is_interactive(&self) -> bool;

    /// Place the process in a fresh process group keyed by its own pid,
    /// returning the new group id.
    fn join_own_process_group(&self) -> Result<Pid, TermError>;

    /// Snapshot the terminal's current attribute set, if one exists.
    fn capture_modes(&self) -> Result<Option<Termios>, TermError>;

    /// Make `pgid` the terminal's foreground process group.
    fn set_foreground(&self, pgid: Pid) -> Result<(), TermError>;
}

/// The real controlling terminal on standard input.
pub struct OsTerminal;

impl TerminalControl for OsTerminal {
    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn join_own_process_group(&self) -> Result<Pid, TermError> {
        let pgid = unistd::getpid();
        unistd::setpgid(pgid, pgid).map_err(TermError::SetProcessGroup)?;
        Ok(pgid)
    }

    fn capture_modes(&self) -> Result<Option<Termios>, TermError> {
        termios::tcgetattr(io::stdin())
            .map(Some)
            .map_err(TermError::GetAttributes)
    }

    fn set_foreground(&self, pgid: Pid) -> Result<(), TermError> {
        unistd::tcsetpgrp(io::stdin(), pgid).map_err(TermError::SetForeground)
    }
}

/// Inert terminal with a fixed interactivity answer. Never touches OS state.
pub struct NullTerminal {
    pub interactive: bool,
}

impl TerminalControl for NullTerminal {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn join_own_process_group(&self) -> Result<Pid, TermError> {
        Ok(Pid::this())
    }

    fn capture_modes(&self) -> Result<Option<Termios>, TermError> {
        Ok(None)
    }

    fn set_foreground(&self, _pgid: Pid) -> Result<(), TermError> {
        Ok(())
    }
}
