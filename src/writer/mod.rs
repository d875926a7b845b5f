use crate::error::{CoaError, CoaResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use umya_spreadsheet::Spreadsheet;

/// Sibling path that receives the bytes before the final rename
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

/// Produce `path` through a temporary sibling file.
///
/// `write` receives the temporary path. The target only appears once `write`
/// succeeded, so a failed run never leaves a half-written file behind.
pub fn write_atomically<F>(path: &Path, write: F) -> CoaResult<()>
where
    F: FnOnce(&Path) -> CoaResult<()>,
{
    let partial = partial_path(path);

    if let Err(e) = write(&partial) {
        let _ = fs::remove_file(&partial);
        return Err(e);
    }

    fs::rename(&partial, path).inspect_err(|_| {
        let _ = fs::remove_file(&partial);
    })?;
    debug!(path = %path.display(), "wrote file");
    Ok(())
}

/// Save a workbook as .xlsx at `path`
pub fn save_workbook(book: &Spreadsheet, path: &Path) -> CoaResult<()> {
    write_atomically(path, |partial| {
        umya_spreadsheet::writer::xlsx::write(book, partial)
            .map_err(|e| CoaError::Xlsx(format!("Failed to save Excel file: {}", e)))
    })
}
