//! Editing the document source in an external editor.
//!
//! The text is written to a temporary file, the user's editor is run on it,
//! and the file is read back once the editor exits.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use std::env;
use std::fs::{self, File};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

/// The editor to run: `$VISUAL`, then `$EDITOR`, then `vi`.
pub fn resolve_editor_command() -> String {
    env::var("VISUAL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| env::var("EDITOR").ok().filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| "vi".to_string())
}

/// Runs `editor` on a temporary copy of `text` and returns the edited text.
///
/// `editor` is a shell command line; the file path is appended as its last
/// argument, so `"code --wait"` works. The temporary file is removed
/// afterwards whether or not the editor succeeded.
///
/// # Errors
///
/// Returns an error if the file cannot be written or read back, the editor
/// cannot be started, or it exits unsuccessfully.
pub fn edit_in_external_editor(text: &str, editor: &str) -> Result<String> {
    let path = write_temp_file(text)?;
    let launched = launch_editor(editor, &path);
    let edited = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read edited source from {}", path.display()));
    let _ = fs::remove_file(&path);

    launched?;
    let edited = edited?;
    info!("external edit finished, {} bytes", edited.len());
    Ok(edited)
}

fn write_temp_file(text: &str) -> Result<PathBuf> {
    let mut path = env::temp_dir();
    path.push(format!(
        "vectorcraft-{}-{}.svg",
        std::process::id(),
        Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    fs::write(&path, text)
        .with_context(|| format!("Failed to create temporary file {}", path.display()))?;
    Ok(path)
}

fn launch_editor(editor: &str, path: &Path) -> Result<()> {
    let path_text = path.to_string_lossy();
    if path_text.starts_with('-') {
        bail!("Invalid temporary file path: {}", path_text);
    }

    debug!("running editor: {} {}", editor, path_text);
    let mut command = Command::new("sh");
    command
        .arg("-c")
        .arg(format!("{} {}", editor, shell_single_quote(&path_text)));
    // Piped input has been consumed; the editor reads the keyboard instead
    if !io::stdin().is_terminal() {
        if let Ok(tty) = File::open("/dev/tty") {
            command.stdin(Stdio::from(tty));
        }
    }
    let status = command
        .status()
        .with_context(|| format!("Failed to run editor `{}`", editor))?;
    if !status.success() {
        bail!("Editor `{}` failed with {}", editor, status);
    }
    Ok(())
}

fn shell_single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_reads_back_changes() {
        let edited = edit_in_external_editor("<svg><rect/></svg>", "sed -i s/rect/circle/").unwrap();
        assert_eq!(edited, "<svg><circle/></svg>");
    }

    #[test]
    fn test_untouched_file_comes_back_unchanged() {
        let edited = edit_in_external_editor("<svg/>\n", "true").unwrap();
        assert_eq!(edited, "<svg/>\n");
    }

    #[test]
    fn test_failing_editor_is_an_error() {
        let err = edit_in_external_editor("<svg/>", "false").unwrap_err();
        assert!(format!("{:#}", err).contains("failed"));
    }

    #[test]
    fn test_shell_single_quote() {
        assert_eq!(shell_single_quote("/tmp/a b"), "'/tmp/a b'");
        assert_eq!(shell_single_quote("it's"), "'it'\\''s'");
    }
}
