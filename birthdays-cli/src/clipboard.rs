//! Copying text to the system clipboard.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use tracing::debug;

pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Clipboard tools tried in order, with the arguments that make them read stdin.
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

/// Pipes text into the first platform clipboard tool found in PATH.
pub struct SystemClipboard {
    program: PathBuf,
    args: &'static [&'static str],
}

impl SystemClipboard {
    pub fn detect() -> Option<Self> {
        CLIPBOARD_TOOLS.iter().find_map(|(name, args)| {
            which::which(name).ok().map(|program| {
                debug!(program = %program.display(), "Using clipboard tool");
                SystemClipboard {
                    program,
                    args: *args,
                }
            })
        })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;

        // stdin is dropped before waiting so the tool sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin
                .write_all(text.as_bytes())
                .context("Failed to write to clipboard tool"),
            None => Err(anyhow::anyhow!("Clipboard tool has no stdin")),
        };

        let status = child.wait()?;
        written?;
        if !status.success() {
            anyhow::bail!("{} exited with {}", self.program.display(), status);
        }

        Ok(())
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn clipboard(program: &str) -> SystemClipboard {
        SystemClipboard {
            program: which::which(program).unwrap(),
            args: &[],
        }
    }

    #[test]
    fn pipes_text_into_tool() {
        clipboard("cat").write_text("Happy birthday!").unwrap();
    }

    #[test]
    fn tool_failure_is_an_error() {
        let err = clipboard("false").write_text("Happy birthday!").unwrap_err();
        assert!(err.to_string().contains("exited with"));
    }
}
