use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{info, success};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the log file to `dest_file`. With `compress` the backup is a zip
    /// archive next to it (`<name>.zip`) holding the log. Returns the path of
    /// the backup actually written.
    pub fn backup(src: &Path, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);

        // 1️⃣ Check log exists
        if !src.exists() {
            return Err(AppError::Backup(format!(
                "Work log not found: {}",
                src.display()
            )));
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Existing destination → ask confirmation unless forced
        ensure_writable(&target, force)?;

        // 4️⃣ Copy or compress straight from the log
        if compress {
            compress_backup(src, &target, &entry_name(src, dest))?;
        } else {
            fs::copy(src, &target)?;
        }
        success(format!("Backup created: {}", target.display()));

        tracing::info!(src = %src.display(), dest = %target.display(), compress, "backup done");
        Ok(target)
    }
}

/// Name of the log inside the archive: the requested file name, or the log's
/// own name when the request already is a `.zip`.
fn entry_name(src: &Path, dest: &Path) -> String {
    let name = if dest.extension() == Some(OsStr::new("zip")) {
        src.file_name()
    } else {
        dest.file_name()
    };

    name.map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "work_log.json".to_string())
}

/// Write `src` as the single deflated entry of a new archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path, entry: &str) -> AppResult<()> {
    let mut f = fs::File::open(src)?;
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    info(format!("Compressed: {}", zip_path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_keeps_requested_name() {
        let src = Path::new("/data/work_log.json");
        assert_eq!(entry_name(src, Path::new("b/copy.json")), "copy.json");
    }

    #[test]
    fn entry_falls_back_to_log_name_for_zip_targets() {
        let src = Path::new("/data/work_log.json");
        assert_eq!(entry_name(src, Path::new("b/copy.zip")), "work_log.json");
    }
}
