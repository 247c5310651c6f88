//! Core types for the roster maintenance tools
//!
//! The member directory site stores one roster record per member; uploaded
//! photos are flat files whose names encode the member id. These types tie
//! the two worlds together.

use serde::Serialize;
use std::fmt;

/// Image extensions recognized as member photo uploads (case-insensitive)
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// A member identifier: exactly four ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Validate and wrap a candidate identifier
    pub fn new(raw: &str) -> Option<Self> {
        if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A discovered photo upload whose file name encodes a member id
#[derive(Debug, Clone, Serialize)]
pub struct PhotoFile {
    pub id: MemberId,
    pub file_name: String,
}

impl PhotoFile {
    /// Parse a file name of the form `<4 digits>.<jpg|jpeg|png>`.
    ///
    /// The extension comparison is case-insensitive; anything else
    /// (wrong digit count, extra dots, unknown extension) is rejected.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (stem, ext) = name.rsplit_once('.')?;
        if !PHOTO_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
            return None;
        }
        let id = MemberId::new(stem)?;
        Some(Self {
            id,
            file_name: name.to_string(),
        })
    }

    /// The reference value the roster should carry for this photo
    pub fn expected_url(&self) -> String {
        format!("/members/{}", self.file_name)
    }
}

/// A reconciliation problem the operator should know about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncWarning {
    /// A photo was uploaded for an id that has no roster record
    PhotoWithoutRecord { id: MemberId, file_name: String },
    /// The roster record exists but carries no photo-reference field
    RecordWithoutPhotoField { id: MemberId },
}

impl fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncWarning::PhotoWithoutRecord { id, file_name } => {
                write!(f, "photo {} has no roster record for member {}", file_name, id)
            }
            SyncWarning::RecordWithoutPhotoField { id } => {
                write!(f, "roster record {} has no photo reference field", id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_id_requires_four_digits() {
        assert!(MemberId::new("1001").is_some());
        assert!(MemberId::new("102").is_none());
        assert!(MemberId::new("10021").is_none());
        assert!(MemberId::new("10a1").is_none());
        assert!(MemberId::new("").is_none());
    }

    #[test]
    fn photo_file_parses_known_extensions() {
        let photo = PhotoFile::from_file_name("1002.png").unwrap();
        assert_eq!(photo.id.as_str(), "1002");
        assert_eq!(photo.expected_url(), "/members/1002.png");

        // Extension case is irrelevant, but the name is kept verbatim
        let photo = PhotoFile::from_file_name("1002.PNG").unwrap();
        assert_eq!(photo.file_name, "1002.PNG");
        assert_eq!(photo.expected_url(), "/members/1002.PNG");
    }

    #[test]
    fn photo_file_rejects_everything_else() {
        assert!(PhotoFile::from_file_name("102.jpg").is_none());
        assert!(PhotoFile::from_file_name("10021.jpg").is_none());
        assert!(PhotoFile::from_file_name("1002.gif").is_none());
        assert!(PhotoFile::from_file_name("1002").is_none());
        assert!(PhotoFile::from_file_name("1002.tar.png").is_none());
        assert!(PhotoFile::from_file_name(".png").is_none());
    }
}
