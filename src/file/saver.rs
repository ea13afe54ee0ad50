//! SVG file saving and export.
//!
//! Writes are atomic: the document goes to a temporary file which is then
//! renamed over the target, so the target is never left half written.

use crate::config::Config;
use crate::document::parser::parse_document;
use crate::editor::session::EditorSession;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::loader::is_compressed_path;

/// Saves document text to a file.
///
/// Creates a `.bak` copy of an existing target first when
/// `config.create_backup` is set. Targets ending in `.svgz` or `.gz` are
/// written gzip-compressed.
///
/// # Examples
///
/// ```no_run
/// use vectorcraft::config::Config;
/// use vectorcraft::file::saver::save_svg_file;
///
/// save_svg_file("output.svg", "<svg/>", &Config::default()).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the backup, the temp file write, or the rename fails.
pub fn save_svg_file<P: AsRef<Path>>(path: P, text: &str, config: &Config) -> Result<()> {
    let path = path.as_ref();

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    // Malformed documents are still saved; they are the user's text
    if let Err(e) = parse_document(text) {
        warn!("saving document that does not parse: {}", e);
    }

    write_file_atomic(path, text.as_bytes(), is_compressed_path(path))?;
    info!("saved {}", path.display());
    Ok(())
}

/// Writes the document into `dir` under a timestamped name and returns the
/// path written, e.g. `vectorcraft-1700000000000.svg`.
pub fn export_svg<P: AsRef<Path>>(dir: P, text: &str, config: &Config) -> Result<PathBuf> {
    export_svg_at(dir, text, config, Utc::now())
}

/// [`export_svg`] with an explicit clock reading.
pub fn export_svg_at<P: AsRef<Path>>(
    dir: P,
    text: &str,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<PathBuf> {
    let target = dir
        .as_ref()
        .join(EditorSession::export_file_name(&config.export_prefix, now));
    write_file_atomic(&target, text.as_bytes(), false)?;
    info!("exported {}", target.display());
    Ok(target)
}

/// Creates a backup of a file by copying it with a .bak extension.
fn create_backup(path: &Path) -> Result<()> {
    let mut backup_path = path.to_path_buf();
    let original_name = backup_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name"))?;
    backup_path.set_file_name(format!("{}.bak", original_name));
    fs::copy(path, backup_path).context("Failed to create backup")?;
    Ok(())
}

/// Writes data to a file atomically, optionally compressing with gzip.
fn write_file_atomic(path: &Path, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let temp_path = path.with_extension("tmp");

    if compress {
        let file = fs::File::create(&temp_path).context("Failed to create temp file")?;
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        fs::write(&temp_path, data).context("Failed to write temp file")?;
    }

    fs::rename(&temp_path, path).context("Failed to rename temp file")?;

    Ok(())
}
