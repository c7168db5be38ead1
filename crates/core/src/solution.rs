use crate::error::SolutionError;
use crate::models::SolutionFingerprint;
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::ZipArchive;

/// Unpacks an uploaded solution archive into `dest`.
pub fn unpack_archive(bytes: &[u8], dest: &Path) -> Result<(), SolutionError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    archive.extract(dest)?;
    Ok(())
}

/// Finds the solution descriptor inside an unpacked archive.
///
/// Recursive, sorted traversal so the pick is deterministic when a zip
/// carries more than one `.sln`.
pub fn find_solution_file(root: &Path) -> Option<PathBuf> {
    let mut matches: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|item| item.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("sln"))
        })
        .map(|entry| entry.into_path())
        .collect();

    matches.sort_unstable();
    matches.into_iter().next()
}

pub fn digest_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Records what was unpacked, for request logging.
pub fn fingerprint_archive(archive_bytes: &[u8], solution_path: &Path) -> SolutionFingerprint {
    SolutionFingerprint {
        solution_path: solution_path.to_string_lossy().to_string(),
        archive_checksum: digest_bytes(archive_bytes),
        unpacked_at: Utc::now(),
    }
}
