//! Photo upload discovery
//!
//! Flat, non-recursive listing of the uploads directory. A file qualifies
//! when its stem is exactly four digits and its extension is a recognized
//! image type. Directory enumeration order is never trusted: results are
//! captured into an id-sorted list, and duplicate ids for the same member
//! resolve with a defined tie-break (lower-cased file name order, first
//! wins) instead of last-seen-wins.

use super::error::{Result, RosterError};
use super::types::{MemberId, PhotoFile};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Discover qualifying photo files in `dir` (non-recursive)
pub fn discover_photos(dir: &Path) -> Result<Vec<PhotoFile>> {
    if !dir.is_dir() {
        return Err(RosterError::DirNotFound(dir.to_path_buf()));
    }

    let mut candidates: Vec<PhotoFile> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = match entry.file_name().to_str() {
            Some(name) => name,
            // Non-UTF-8 names cannot encode a member id
            None => continue,
        };
        if let Some(photo) = PhotoFile::from_file_name(name) {
            candidates.push(photo);
        }
    }

    candidates.sort_by(|a, b| {
        a.file_name
            .to_lowercase()
            .cmp(&b.file_name.to_lowercase())
    });

    let mut seen: HashSet<MemberId> = HashSet::new();
    let mut photos: Vec<PhotoFile> = candidates
        .into_iter()
        .filter(|photo| seen.insert(photo.id.clone()))
        .collect();
    photos.sort_by(|a, b| a.id.cmp(&b.id));

    debug!(dir = %dir.display(), photos = photos.len(), "Photo discovery complete");
    Ok(photos)
}
