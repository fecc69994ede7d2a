//! Zip extraction into the download directory.

use crate::error::{DataError, Result};
use std::{
    fs::{self, File},
    io::{self, BufReader},
    path::Path,
};
use tracing::{debug, warn};

/// Extracts `zip_path` into `dest_dir` and returns the number of files written.
///
/// Entries keep their archive-relative paths and overwrite whatever is already
/// there. Stored permission bits are ignored, so a second extraction over the
/// same directory always succeeds. Entries whose names would escape `dest_dir`
/// are skipped.
pub fn extract_zip(zip_path: &Path, dest_dir: &Path) -> Result<usize> {
    debug!(archive = %zip_path.display(), dest = %dest_dir.display(), "extracting");

    fs::create_dir_all(dest_dir)?;

    let file = File::open(zip_path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file))?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        let relative = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => {
                warn!(entry = entry.name(), "skipping entry with unsafe path");
                continue;
            }
        };
        let out_path = dest_dir.join(&relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
        } else {
            if let Some(parent) = out_path.parent() {
                fs::create_dir_all(parent)?;
            }
            // A read-only leftover from an earlier extraction must not block the rewrite.
            if out_path.is_file() {
                fs::remove_file(&out_path)?;
            }
            let mut out_file = File::create(&out_path)?;
            io::copy(&mut entry, &mut out_file).map_err(|e| {
                DataError::Extract(format!("{}: {e}", relative.display()))
            })?;
            written += 1;
        }
    }

    debug!(files = written, "extraction complete");
    Ok(written)
}

/// Extracts, then deletes the archive.
pub fn extract_and_remove(zip_path: &Path, dest_dir: &Path) -> Result<usize> {
    let written = extract_zip(zip_path, dest_dir)?;
    fs::remove_file(zip_path)?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::FileOptions;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
        for (name, body) in entries {
            zip.start_file(*name, FileOptions::default()).unwrap();
            zip.write_all(body).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn extracts_nested_entries_and_removes_archive() {
        let tmp = tempdir().unwrap();
        let archive = tmp.path().join("ds.zip");
        write_zip(
            &archive,
            &[
                ("audio/1-100032-A-0.wav", b"RIFF"),
                ("meta/esc50.csv", b"filename,fold,target\n"),
            ],
        );
        let dest = tmp.path().join("out");

        let n = extract_and_remove(&archive, &dest).unwrap();

        assert_eq!(n, 2);
        assert!(!archive.exists());
        assert_eq!(
            fs::read(dest.join("meta/esc50.csv")).unwrap(),
            b"filename,fold,target\n"
        );
        assert!(dest.join("audio/1-100032-A-0.wav").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn read_only_entries_can_be_extracted_twice() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        let dest = tmp.path().join("out");
        let archive = tmp.path().join("ro.zip");
        for _ in 0..2 {
            let mut zip = zip::ZipWriter::new(File::create(&archive).unwrap());
            let ro = FileOptions::default().unix_permissions(0o444);
            zip.add_directory("locked/", FileOptions::default().unix_permissions(0o555))
                .unwrap();
            zip.start_file("locked/esc50.csv", ro).unwrap();
            zip.write_all(b"filename\n").unwrap();
            zip.finish().unwrap();

            assert_eq!(extract_and_remove(&archive, &dest).unwrap(), 1);
        }

        let csv = dest.join("locked/esc50.csv");
        let mode = fs::metadata(&csv).unwrap().permissions().mode();
        assert_ne!(mode & 0o200, 0, "extracted file should stay writable");
        let dir_mode = fs::metadata(dest.join("locked")).unwrap().permissions().mode();
        assert_ne!(dir_mode & 0o200, 0, "extracted dir should stay writable");
    }

    #[test]
    fn skips_entries_escaping_destination() {
        let tmp = tempdir().unwrap();
        let archive = tmp.path().join("evil.zip");
        write_zip(&archive, &[("../outside.txt", b"x"), ("inside.txt", b"y")]);
        let dest = tmp.path().join("out");

        let n = extract_zip(&archive, &dest).unwrap();

        assert_eq!(n, 1);
        assert!(!tmp.path().join("outside.txt").exists());
        assert!(dest.join("inside.txt").is_file());
    }

    #[test]
    fn corrupt_archive_is_an_extract_error() {
        let tmp = tempdir().unwrap();
        let archive = tmp.path().join("broken.zip");
        fs::write(&archive, b"definitely not a zip").unwrap();

        let err = extract_and_remove(&archive, tmp.path()).unwrap_err();
        assert!(matches!(err, DataError::Extract(_)), "got {err:?}");
        assert!(archive.exists(), "archive must survive a failed extraction");
    }
}
