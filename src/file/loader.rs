//! SVG file loading.
//!
//! Documents are loaded as text. Parsing happens later in the editor session,
//! because a document that does not parse is still editable as text.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Loads an SVG document from the filesystem.
///
/// Files ending in `.svgz` or `.gz` are gunzipped first.
///
/// # Examples
///
/// ```no_run
/// use vectorcraft::file::loader::load_svg_file;
///
/// let text = load_svg_file("drawing.svg").unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid gzip (for
/// compressed files), or is not valid UTF-8.
pub fn load_svg_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();

    if is_compressed_path(path_ref) {
        read_gzipped_file(path_ref)
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file: {}", path_ref.display()))
    }
}

/// Loads an SVG document from standard input.
///
/// Gzip input is detected by its magic bytes.
///
/// # Examples
///
/// ```no_run
/// use vectorcraft::file::loader::load_svg_from_stdin;
///
/// // Usage: cat drawing.svgz | vectorcraft
/// let text = load_svg_from_stdin().unwrap();
/// ```
pub fn load_svg_from_stdin() -> Result<String> {
    load_svg_from_reader(std::io::stdin()).context("Failed to read from stdin")
}

/// Reads a whole document from any reader, gunzipping when the gzip magic
/// bytes (`0x1f 0x8b`) are present.
pub fn load_svg_from_reader<R: Read>(mut reader: R) -> Result<String> {
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .context("Failed to read input")?;

    if buffer.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&buffer)
    } else {
        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

/// Returns true for `.svgz` and `.gz` paths.
pub fn is_compressed_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("svgz") || ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

fn read_gzipped_file(path: &Path) -> Result<String> {
    use flate2::read::GzDecoder;

    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open compressed file: {}", path.display()))?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress file - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped input")?;
    Ok(content)
}
