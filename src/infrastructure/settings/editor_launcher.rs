//! Settings editor that opens the global settings file in an external program.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use tracing::{debug, info, warn};

use crate::domain::ports::SettingsEditor;
use crate::infrastructure::credentials::JsonFileCredentialStore;

/// Launches `$VISUAL`, then `$EDITOR`, then the platform opener on the settings file.
///
/// The call returns once the program is started; a background thread reaps it on exit.
#[derive(Debug, Clone)]
pub struct EditorSettingsLauncher {
    store: JsonFileCredentialStore,
    program: Option<OsString>,
}

impl EditorSettingsLauncher {
    pub fn new(store: JsonFileCredentialStore) -> Self {
        let program = std::env::var_os("VISUAL")
            .or_else(|| std::env::var_os("EDITOR"))
            .filter(|p| !p.is_empty());
        Self { store, program }
    }

    /// Overrides the program used to open the file.
    pub fn with_program(mut self, program: impl Into<OsString>) -> Self {
        self.program = Some(program.into());
        self
    }

    fn command(&self, path: PathBuf) -> Command {
        if let Some(program) = &self.program {
            let mut cmd = Command::new(program);
            cmd.arg(path);
            return cmd;
        }

        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl SettingsEditor for EditorSettingsLauncher {
    fn open_settings(&self) -> io::Result<()> {
        let path = self
            .store
            .ensure_global_file()
            .map_err(io::Error::other)?
            .to_path_buf();

        spawn_reaped(self.command(path.clone()))?;
        info!(path = %path.display(), "Opened settings file");
        Ok(())
    }
}

/// Starts `cmd` detached from stdio; a background thread waits on the child.
fn spawn_reaped(mut cmd: Command) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
    let mut child = cmd.spawn()?;

    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => {
            debug!(%status, "Settings editor exited");
            Some(status)
        }
        Err(e) => {
            warn!(error = %e, "Failed to wait for settings editor");
            None
        }
    }))
}
