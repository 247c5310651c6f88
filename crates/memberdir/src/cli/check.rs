//! Check command - report which members have no uploaded photo
//!
//! Standalone inventory pass: the expected member set comes from the roster
//! data file, the present set from the uploads directory. The two report
//! partitions always cover the expected set exactly and never overlap.

use crate::cli::error::HelpfulError;
use crate::cli::output::{print_banner, print_rule};
use crate::roster::{discover_photos, MemberId, PhotoFile, RosterFile};
use serde::Serialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Debug)]
pub struct CheckArgs {
    pub photos: PathBuf,
    pub data_file: PathBuf,
    pub json: bool,
}

/// Inventory of which expected members have an uploaded photo
#[derive(Debug, Serialize)]
pub struct InventoryReport {
    pub expected_total: usize,
    pub present_total: usize,
    pub missing_total: usize,
    pub missing: Vec<MemberId>,
    pub present: Vec<MemberId>,
}

/// Execute the check command
pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    if !args.photos.exists() {
        return Err(HelpfulError::photo_dir_not_found(&args.photos).into());
    }
    if !args.photos.is_dir() {
        return Err(HelpfulError::not_a_directory(&args.photos).into());
    }
    if !args.data_file.exists() {
        return Err(HelpfulError::data_file_not_found(&args.data_file).into());
    }

    let roster = RosterFile::load(&args.data_file)?;
    let expected = roster.member_ids();
    if expected.is_empty() {
        return Err(HelpfulError::empty_roster(&args.data_file).into());
    }

    let photos = discover_photos(&args.photos)?;
    let report = build_report(&expected, &photos);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output_report(&report);
    }

    Ok(())
}

/// Partition the expected member set into present/missing
fn build_report(expected: &[MemberId], photos: &[PhotoFile]) -> InventoryReport {
    let uploaded: HashSet<&MemberId> = photos.iter().map(|photo| &photo.id).collect();

    let mut present: Vec<MemberId> = Vec::new();
    let mut missing: Vec<MemberId> = Vec::new();
    for id in expected {
        if uploaded.contains(id) {
            present.push(id.clone());
        } else {
            missing.push(id.clone());
        }
    }
    present.sort();
    missing.sort();

    InventoryReport {
        expected_total: expected.len(),
        present_total: present.len(),
        missing_total: missing.len(),
        missing,
        present,
    }
}

/// Render the human-readable report
fn output_report(report: &InventoryReport) {
    print_banner("MEMBER PHOTO INVENTORY");
    println!("Expected members: {}", report.expected_total);
    println!("Photos uploaded:  {}", report.present_total);
    println!("Photos missing:   {}", report.missing_total);

    println!();
    println!("Members without a photo:");
    print_rule();
    for id in &report.missing {
        println!("  - {}.jpg", id);
    }

    println!();
    println!("Photos already uploaded:");
    print_rule();
    for id in &report.present {
        println!("  - {}.jpg", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::path::Path;
    use tempfile::TempDir;

    const ROSTER: &str = r#"export const members = [
  { id: "1001", photoUrl: "/members/1001.jpg" },
  { id: "1002", photoUrl: "https://placeholder.example/b.svg" },
  { id: "1003", photoUrl: "https://placeholder.example/c.svg" },
]
"#;

    fn id(raw: &str) -> MemberId {
        MemberId::new(raw).unwrap()
    }

    fn create_fixture(dir: &Path, photo_names: &[&str]) -> (PathBuf, PathBuf) {
        let photos = dir.join("public").join("members");
        fs::create_dir_all(&photos).unwrap();
        for name in photo_names {
            File::create(photos.join(name)).unwrap();
        }

        let lib = dir.join("lib");
        fs::create_dir_all(&lib).unwrap();
        let data_file = lib.join("members-data.ts");
        fs::write(&data_file, ROSTER).unwrap();

        (photos, data_file)
    }

    #[test]
    fn partitions_are_complete_and_disjoint() {
        let expected = vec![id("1001"), id("1002"), id("1003")];
        let photos = vec![
            PhotoFile::from_file_name("1001.jpg").unwrap(),
            PhotoFile::from_file_name("1003.PNG").unwrap(),
        ];

        let report = build_report(&expected, &photos);
        assert_eq!(report.expected_total, 3);
        assert_eq!(report.present_total, 2);
        assert_eq!(report.missing_total, 1);
        assert_eq!(report.missing, vec![id("1002")]);
        assert_eq!(report.present, vec![id("1001"), id("1003")]);

        let mut union: Vec<MemberId> = report
            .missing
            .iter()
            .chain(report.present.iter())
            .cloned()
            .collect();
        union.sort();
        assert_eq!(union, expected);
    }

    #[test]
    fn photos_outside_the_roster_do_not_count_as_present() {
        let expected = vec![id("1001")];
        let photos = vec![PhotoFile::from_file_name("1044.jpg").unwrap()];

        let report = build_report(&expected, &photos);
        assert_eq!(report.present_total, 0);
        assert_eq!(report.missing, vec![id("1001")]);
    }

    #[test]
    fn test_check_run() {
        let temp_dir = TempDir::new().unwrap();
        let (photos, data_file) = create_fixture(temp_dir.path(), &["1001.jpg", "1002.PNG"]);

        run(CheckArgs {
            photos,
            data_file,
            json: true,
        })
        .unwrap();
    }

    #[test]
    fn test_check_missing_photo_dir() {
        let temp_dir = TempDir::new().unwrap();
        let (_, data_file) = create_fixture(temp_dir.path(), &[]);

        let result = run(CheckArgs {
            photos: temp_dir.path().join("does-not-exist"),
            data_file,
            json: false,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_check_missing_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let (photos, _) = create_fixture(temp_dir.path(), &[]);

        let result = run(CheckArgs {
            photos,
            data_file: temp_dir.path().join("nope.ts"),
            json: false,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_check_empty_roster() {
        let temp_dir = TempDir::new().unwrap();
        let (photos, data_file) = create_fixture(temp_dir.path(), &[]);
        fs::write(&data_file, "export const members = []\n").unwrap();

        let result = run(CheckArgs {
            photos,
            data_file,
            json: false,
        });
        assert!(result.is_err());
    }
}
