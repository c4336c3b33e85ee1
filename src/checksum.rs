//! SHA-256 digest files for release archives.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Hex-encoded SHA-256 of the file at `path`.
///
/// # Errors
///
/// Fails when the file cannot be opened or read.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(hex::encode(hasher.finalize()))
}

/// Write `<stem>.sha256` next to `archive` (or into `out_dir`) holding
/// `<digest> <archive file name>`. Any previous digest file is replaced.
///
/// # Errors
///
/// Fails when `archive` has no file name, cannot be read, or the digest
/// file cannot be written.
pub fn write_checksum(archive: &Path, out_dir: Option<&Path>) -> Result<PathBuf> {
    let file_name = archive
        .file_name()
        .with_context(|| format!("{} has no file name", archive.display()))?;
    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => archive.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    let target = dir.join(Path::new(file_name).with_extension("sha256"));

    let digest = sha256_file(archive)?;
    std::fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    std::fs::write(&target, format!("{digest} {}\n", file_name.to_string_lossy()))
        .with_context(|| format!("Failed to write {}", target.display()))?;
    log::info!("Wrote {}", target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_file() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("install-waterfox-1.5.0.zip");
        std::fs::write(&archive, "abc").unwrap();
        std::fs::write(tmp.path().join("install-waterfox-1.5.0.sha256"), "stale\n").unwrap();

        let written = write_checksum(&archive, None).unwrap();

        assert_eq!(written, tmp.path().join("install-waterfox-1.5.0.sha256"));
        assert_eq!(
            std::fs::read_to_string(written).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad install-waterfox-1.5.0.zip\n"
        );
    }

    #[test]
    fn test_out_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("pkg.zip");
        std::fs::write(&archive, "").unwrap();
        let out = tmp.path().join("artifacts");

        let written = write_checksum(&archive, Some(&out)).unwrap();

        assert_eq!(written, out.join("pkg.sha256"));
        assert!(std::fs::read_to_string(written)
            .unwrap()
            .starts_with("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855 "));
    }

    #[test]
    fn test_missing_archive() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(write_checksum(&tmp.path().join("gone.zip"), None).is_err());
    }
}
