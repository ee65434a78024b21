//! Getting a strategy out of the app: plan files and the system clipboard.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

/// Error that occurred while writing a plan file.
#[derive(Debug)]
pub struct SaveError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// File name for a plan saved at `now`: `fake_to_real_plan_YYYYMMDD_HHMMSS.txt`.
pub fn plan_filename(now: NaiveDateTime) -> String {
    format!("fake_to_real_plan_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// Write `content` byte-for-byte to a timestamped plan file inside `dir`.
///
/// An existing file with the same name (same second) is overwritten.
pub fn save_plan(dir: &Path, content: &str, now: NaiveDateTime) -> Result<PathBuf, SaveError> {
    let path = dir.join(plan_filename(now));

    fs::write(&path, content.as_bytes()).map_err(|source| {
        warn!(path = ?path, error = %source, "plan_save_failed");
        SaveError {
            path: path.clone(),
            source,
        }
    })?;

    info!(path = ?path, bytes = content.len(), "plan_saved");
    Ok(path)
}

/// Error that occurred while copying to the clipboard.
#[derive(Debug)]
pub struct ClipboardError {
    pub message: String,
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ClipboardError {}

/// Destination for the copy action.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard, reached through the platform's copy command.
#[derive(Debug, Default)]
pub struct SystemClipboard;

/// Copy commands tried in order, with their arguments.
#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[("pbcopy", &[])];

/// Reads the whole of stdin as UTF-8 and sets it as the clipboard text.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
const POWERSHELL_SET_CLIPBOARD: &str = "[Console]::InputEncoding = [Text.Encoding]::UTF8; \
     Set-Clipboard -Value ([Console]::In.ReadToEnd())";

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[(
    "powershell",
    &["-NoProfile", "-NonInteractive", "-Command", POWERSHELL_SET_CLIPBOARD],
)];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Pipe `text` into `program` and wait for it to finish.
///
/// The child is always waited on, even when writing its input fails.
fn pipe_to_command(program: &str, args: &[&str], text: &str) -> io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // stdin is closed at the end of this block so the child sees EOF.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("{} exited with {}", program, status)))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut failures = Vec::new();

        for &(program, args) in CLIPBOARD_COMMANDS {
            match pipe_to_command(program, args, text) {
                Ok(()) => {
                    info!(program, bytes = text.len(), "strategy_copied");
                    return Ok(());
                }
                Err(e) => {
                    debug!(program, error = %e, "clipboard_command_failed");
                    failures.push(format!("{}: {}", program, e));
                }
            }
        }

        warn!(failures = ?failures, "clipboard_unavailable");
        Err(ClipboardError {
            message: format!("No clipboard command succeeded ({})", failures.join("; ")),
        })
    }
}

/// Clipboard that keeps its contents in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError {
                message: "clipboard offline".to_string(),
            });
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
