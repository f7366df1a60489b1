//! Atomic PNG export of a whole output plan
//!
//! Every sheet is encoded into a temporary file next to its destination
//! first. Only once all of them encoded cleanly are they renamed into place,
//! so a failed run never leaves a partial sheet at a final path.
//!
//! Sheets already on disk are moved into a backup directory under the root
//! before their replacement lands. If any rename fails, the sheets placed so
//! far are removed and the backups restored, so the set on disk stays the
//! previous one rather than a mix of old and new.

use crate::io::error::{Result, SpriteError};
use crate::io::progress::ProgressManager;
use crate::source::layers::OutputFile;
use image::codecs::png::PngEncoder;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile, TempDir};
use tracing::{debug, info, warn};

/// Write every planned sheet under `root`, returning the final paths
///
/// # Errors
///
/// Returns an error if:
/// - A destination directory cannot be created
/// - A sheet cannot be encoded or its temporary file written
/// - An existing sheet cannot be moved aside or a temporary file cannot be
///   renamed onto its destination; sheets placed earlier are rolled back
pub fn write_outputs(
    root: &Path,
    outputs: &[OutputFile],
    progress: Option<&ProgressManager>,
) -> Result<Vec<PathBuf>> {
    if let Some(pm) = progress {
        pm.start_stage("encode", outputs.len());
    }

    let mut staged = Vec::with_capacity(outputs.len());
    for output in outputs {
        let destination = root.join(output.relative_path());
        let temp = stage_sheet(output, &destination)?;
        debug!(
            layer = %output.layer,
            placeholder = output.placeholder,
            "encoded sheet"
        );
        if let Some(pm) = progress {
            pm.advance(&output.layer.to_string());
        }
        staged.push((temp, destination));
    }

    if staged.is_empty() {
        return Ok(Vec::new());
    }

    let backups = Builder::new()
        .prefix(".backup-")
        .tempdir_in(root)
        .map_err(|e| SpriteError::FileSystem {
            path: root.to_path_buf(),
            operation: "create backup directory",
            source: e,
        })?;

    let mut placed: Vec<(PathBuf, Option<PathBuf>)> = Vec::with_capacity(staged.len());
    for (index, (temp, destination)) in staged.into_iter().enumerate() {
        if let Err(error) = place(temp, &destination, index, &backups, &mut placed) {
            roll_back(&placed);
            return Err(error);
        }
        info!(path = %destination.display(), "wrote sheet");
    }

    Ok(placed.into_iter().map(|(destination, _)| destination).collect())
}

/// Move any existing sheet aside, then rename the staged file onto `destination`
fn place(
    temp: NamedTempFile,
    destination: &Path,
    index: usize,
    backups: &TempDir,
    placed: &mut Vec<(PathBuf, Option<PathBuf>)>,
) -> Result<()> {
    let backup = if destination.is_file() {
        let backup = backups.path().join(index.to_string());
        std::fs::rename(destination, &backup).map_err(|e| SpriteError::FileSystem {
            path: destination.to_path_buf(),
            operation: "back up existing sheet",
            source: e,
        })?;
        Some(backup)
    } else {
        None
    };
    placed.push((destination.to_path_buf(), backup));

    temp.persist(destination)
        .map_err(|e| SpriteError::FileSystem {
            path: destination.to_path_buf(),
            operation: "rename into place",
            source: e.error,
        })?;
    Ok(())
}

/// Undo placements newest first: restore backups, drop sheets that had none
fn roll_back(placed: &[(PathBuf, Option<PathBuf>)]) {
    for (destination, backup) in placed.iter().rev() {
        let restored = match backup {
            Some(backup) => std::fs::rename(backup, destination),
            None if destination.is_file() => std::fs::remove_file(destination),
            None => Ok(()),
        };
        if let Err(e) = restored {
            warn!(path = %destination.display(), error = %e, "failed to roll back sheet");
        }
    }
}

fn stage_sheet(output: &OutputFile, destination: &Path) -> Result<NamedTempFile> {
    let directory = destination.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory).map_err(|e| SpriteError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let mut temp = NamedTempFile::new_in(directory).map_err(|e| SpriteError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create temporary file",
        source: e,
    })?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        output
            .sheet
            .as_image()
            .write_with_encoder(PngEncoder::new(&mut writer))
            .map_err(|e| SpriteError::ImageExport {
                path: destination.to_path_buf(),
                source: e,
            })?;
        writer.flush().map_err(|e| SpriteError::FileSystem {
            path: destination.to_path_buf(),
            operation: "flush temporary file",
            source: e,
        })?;
    }

    Ok(temp)
}
