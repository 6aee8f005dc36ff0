// src/system/clipboard.rs
use std::io::{self, Write};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("No clipboard tool found (tried pbcopy, clip, wl-copy, xclip, xsel)")]
    NoTool,

    #[error("Clipboard tool '{0}' failed")]
    ToolFailed(String),
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// A command that copies whatever it reads on stdin to the clipboard.
#[derive(Debug, Clone, Copy)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

pub const CLIPBOARD_TOOLS: &[ClipboardTool] = &[
    ClipboardTool { program: "pbcopy", args: &[] },
    ClipboardTool { program: "clip", args: &[] },
    ClipboardTool { program: "wl-copy", args: &[] },
    ClipboardTool { program: "xclip", args: &["-selection", "clipboard"] },
    ClipboardTool { program: "xsel", args: &["--clipboard", "--input"] },
];

pub fn copy_to_clipboard(text: &str) -> Result<&'static str> {
    copy_with(CLIPBOARD_TOOLS, text)
}

// Pipe `text` into the first tool that exists; returns the tool's name
pub fn copy_with(tools: &[ClipboardTool], text: &str) -> Result<&'static str> {
    for tool in tools {
        let spawned = Command::new(tool.program)
            .args(tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Clipboard tool {} not available", tool.program);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(mut stdin) = child.stdin.take() {
            // A tool that exits early closes the pipe; its exit status tells the story
            match stdin.write_all(text.as_bytes()) {
                Err(e) if e.kind() != io::ErrorKind::BrokenPipe => return Err(e.into()),
                _ => {}
            }
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::ToolFailed(tool.program.to_string()));
        }

        log::info!("Copied password to clipboard via {}", tool.program);
        return Ok(tool.program);
    }

    Err(ClipboardError::NoTool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tool_available() {
        let tools = [ClipboardTool { program: "passgen-no-such-clipboard-tool", args: &[] }];
        let err = copy_with(&tools, "secret").unwrap_err();
        assert!(matches!(err, ClipboardError::NoTool));
    }

    #[cfg(unix)]
    #[test]
    fn test_falls_through_to_next_tool() {
        let tools = [
            ClipboardTool { program: "passgen-no-such-clipboard-tool", args: &[] },
            ClipboardTool { program: "cat", args: &[] },
        ];
        assert_eq!(copy_with(&tools, "secret").unwrap(), "cat");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_tool_is_reported() {
        let tools = [ClipboardTool { program: "false", args: &[] }];
        let err = copy_with(&tools, "secret").unwrap_err();
        assert!(matches!(err, ClipboardError::ToolFailed(ref name) if name == "false"));
    }
}
