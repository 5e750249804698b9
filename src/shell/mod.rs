//! Shell core module

pub mod builtin;
pub mod parser;
pub mod prompt;
pub mod term;

use std::env;
use std::process;

use colored::Colorize;
use nix::sys::termios::Termios;
use nix::unistd::Pid;

use self::term::{OsTerminal, TerminalControl};

/// Session switches, passed in explicitly instead of read ambiently by the
/// logic that consumes them.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Claim a process group and the terminal foreground at startup.
    pub claim_terminal: bool,
    /// Make the `exit` builtin report handled instead of terminating.
    /// In-process test hook; nothing else sets it.
    pub exit_bypass: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            claim_terminal: true,
            exit_bypass: false,
        }
    }
}

impl SessionConfig {
    /// Honor the documented environment switches: `SKIP_TC=1` skips the
    /// terminal takeover, `SKIP_EXIT=1` keeps `exit` from terminating.
    pub fn from_env() -> Self {
        let set = |name: &str| env::var(name).map(|v| v == "1").unwrap_or(false);
        Self {
            claim_terminal: !set("SKIP_TC"),
            exit_bypass: set("SKIP_EXIT"),
        }
    }
}

/// One running shell instance.
///
/// Owns the controlling terminal, the process group claimed for job control,
/// the saved terminal attribute snapshot and the resolved prompt. The
/// terminal is bound once at construction and never reassigned.
pub struct Session {
    terminal: Box<dyn TerminalControl>,
    config: SessionConfig,
    is_interactive: bool,
    pgid: Option<Pid>,
    saved_modes: Option<Termios>,
    prompt: Option<String>,
}

impl Session {
    /// Start a session on the real controlling terminal (standard input).
    pub fn new(config: SessionConfig) -> Self {
        Self::with_terminal(config, Box::new(OsTerminal))
    }

    /// Start a session over an explicit terminal controller.
    ///
    /// When the terminal is interactive and `config.claim_terminal` is set,
    /// the session moves the process into its own process group, snapshots
    /// the terminal attributes and claims the foreground. Failing to enter
    /// the process group is fatal; the snapshot and foreground claim are
    /// best-effort.
    pub fn with_terminal(config: SessionConfig, terminal: Box<dyn TerminalControl>) -> Self {
        let is_interactive = terminal.is_interactive();

        let mut pgid = None;
        let mut saved_modes = None;
        if is_interactive && config.claim_terminal {
            let own = match terminal.join_own_process_group() {
                Ok(pid) => pid,
                Err(e) => {
                    eprintln!("{}: {}", "tidesh".red(), e);
                    process::exit(1);
                }
            };
            saved_modes = terminal.capture_modes().ok().flatten();
            let _ = terminal.set_foreground(own);
            pgid = Some(own);
        }

        let prompt = prompt::resolve(prompt::PROMPT_VAR);

        Self {
            terminal,
            config,
            is_interactive,
            pgid,
            saved_modes,
            prompt: Some(prompt),
        }
    }

    /// The controller the session was bound to at construction.
    pub fn terminal(&self) -> &dyn TerminalControl {
        self.terminal.as_ref()
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Whether standard input was a terminal device at construction.
    pub fn is_interactive(&self) -> bool {
        self.is_interactive
    }

    /// Process group claimed at construction; `None` when non-interactive
    /// or when the takeover was skipped.
    pub fn pgid(&self) -> Option<Pid> {
        self.pgid
    }

    /// Terminal attributes captured at construction, held for eventual
    /// restoration.
    pub fn saved_modes(&self) -> Option<&Termios> {
        self.saved_modes.as_ref()
    }

    /// Resolved prompt; `None` once the session has been destroyed.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    /// Release the prompt storage. Safe to call repeatedly; `Drop` is the
    /// backstop for sessions that never reach this.
    pub fn destroy(&mut self) {
        self.prompt = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::term::NullTerminal;

    fn quiet_config() -> SessionConfig {
        SessionConfig {
            claim_terminal: false,
            exit_bypass: true,
        }
    }

    #[test]
    fn test_new_session_has_prompt() {
        let session =
            Session::with_terminal(quiet_config(), Box::new(NullTerminal { interactive: false }));
        assert!(session.prompt().is_some());
    }

    #[test]
    fn test_destroy_clears_prompt_and_is_idempotent() {
        let mut session =
            Session::with_terminal(quiet_config(), Box::new(NullTerminal { interactive: false }));
        session.destroy();
        assert!(session.prompt().is_none());
        session.destroy();
        assert!(session.prompt().is_none());
    }

    #[test]
    fn test_interactive_claim_records_process_group() {
        let config = SessionConfig {
            claim_terminal: true,
            exit_bypass: true,
        };
        let session = Session::with_terminal(config, Box::new(NullTerminal { interactive: true }));
        assert!(session.is_interactive());
        assert!(session.pgid().is_some());
        // The inert terminal has no attribute set to snapshot.
        assert!(session.saved_modes().is_none());
    }

    #[test]
    fn test_non_interactive_skips_claim() {
        let config = SessionConfig {
            claim_terminal: true,
            exit_bypass: true,
        };
        let session = Session::with_terminal(config, Box::new(NullTerminal { interactive: false }));
        assert!(!session.is_interactive());
        assert!(session.pgid().is_none());
    }

    #[test]
    fn test_config_bypass_skips_claim_even_when_interactive() {
        let session =
            Session::with_terminal(quiet_config(), Box::new(NullTerminal { interactive: true }));
        assert!(session.terminal().is_interactive());
        assert!(session.pgid().is_none());
    }
}
