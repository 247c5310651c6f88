//! Sync command - rewrite roster photo references to match uploads
//!
//! Discovery, then a single-pass plan over the parsed roster, then one
//! whole-file write when anything changed. Photos that cannot be
//! reconciled are reported as warnings rather than dropped.

use crate::cli::error::HelpfulError;
use crate::cli::output::{print_rule, print_table, truncate_value};
use crate::roster::{discover_photos, MemberId, RosterFile, SyncWarning};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Longest old-value preview shown in a progress line
const OLD_VALUE_PREVIEW: usize = 50;

/// Arguments for the sync command
#[derive(Debug)]
pub struct SyncArgs {
    pub photos: PathBuf,
    pub data_file: PathBuf,
    pub dry_run: bool,
    pub json: bool,
}

/// One applied (or planned, under --dry-run) reference rewrite
#[derive(Debug, Clone, Serialize)]
pub struct AppliedUpdate {
    pub id: MemberId,
    pub old: String,
    pub new: String,
}

/// Outcome of a sync run
#[derive(Debug, Serialize)]
pub struct SyncReport {
    pub photos_found: usize,
    pub records_updated: usize,
    /// None when the roster was never read (no photos discovered)
    pub members_without_photo: Option<usize>,
    pub dry_run: bool,
    pub updates: Vec<AppliedUpdate>,
    pub warnings: Vec<String>,
}

/// Execute the sync command
pub fn run(args: SyncArgs) -> anyhow::Result<()> {
    if !args.photos.exists() {
        return Err(HelpfulError::photo_dir_not_found(&args.photos).into());
    }
    if !args.photos.is_dir() {
        return Err(HelpfulError::not_a_directory(&args.photos).into());
    }

    let photos = discover_photos(&args.photos)?;

    if !args.json {
        println!(
            "Found {} member photo(s) in {}",
            photos.len(),
            args.photos.display()
        );
        if !photos.is_empty() {
            println!();
            let rows = photos
                .iter()
                .map(|photo| vec![photo.file_name.clone(), photo.id.to_string()])
                .collect();
            print_table(&["File", "Member ID"], rows);
            println!();
        }
    }

    if photos.is_empty() {
        // Nothing to reconcile; the roster file is left untouched
        let report = SyncReport {
            photos_found: 0,
            records_updated: 0,
            members_without_photo: None,
            dry_run: args.dry_run,
            updates: Vec::new(),
            warnings: Vec::new(),
        };
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("No photos to sync. Upload files named like 1001.jpg first.");
        }
        return Ok(());
    }

    if !args.data_file.exists() {
        return Err(HelpfulError::data_file_not_found(&args.data_file).into());
    }

    info!(path = %args.data_file.display(), "Reading roster data file");
    let mut roster = RosterFile::load(&args.data_file)?;

    let mut warnings: Vec<SyncWarning> = Vec::new();
    let mut plan: Vec<(usize, AppliedUpdate)> = Vec::new();
    let mut matched = 0usize;

    for photo in &photos {
        let record = match roster.find_record(&photo.id) {
            Some(index) => index,
            None => {
                warnings.push(SyncWarning::PhotoWithoutRecord {
                    id: photo.id.clone(),
                    file_name: photo.file_name.clone(),
                });
                continue;
            }
        };
        matched += 1;

        let new = photo.expected_url();
        match roster.photo_url(record) {
            None => warnings.push(SyncWarning::RecordWithoutPhotoField {
                id: photo.id.clone(),
            }),
            Some(current) if current == new => {}
            Some(current) => {
                plan.push((
                    record,
                    AppliedUpdate {
                        id: photo.id.clone(),
                        old: current.to_string(),
                        new,
                    },
                ));
            }
        }
    }

    for (record, update) in &plan {
        if !args.dry_run {
            roster.replace_photo_url(*record, &update.new);
        }
        if !args.json {
            println!(
                "   ✓ {} member {}: {} → {}",
                if args.dry_run { "Would update" } else { "Updated" },
                update.id,
                truncate_value(&update.old, OLD_VALUE_PREVIEW),
                update.new
            );
        }
    }

    if !plan.is_empty() && !args.dry_run {
        roster.write(&args.data_file)?;
        info!(updates = plan.len(), "Roster data file rewritten");
    }

    let report = SyncReport {
        photos_found: photos.len(),
        records_updated: plan.len(),
        members_without_photo: Some(roster.member_count() - matched),
        dry_run: args.dry_run,
        updates: plan.into_iter().map(|(_, update)| update).collect(),
        warnings: warnings.iter().map(|warning| warning.to_string()).collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output_summary(&report);
    }

    Ok(())
}

/// Render the human-readable summary
fn output_summary(report: &SyncReport) {
    if report.records_updated == 0 {
        println!("No reference changes needed; roster already matches the uploads.");
    }

    println!();
    println!("Summary");
    print_rule();
    println!("Photos found:          {}", report.photos_found);
    println!(
        "Records updated:       {}{}",
        report.records_updated,
        if report.dry_run {
            " (dry run, nothing written)"
        } else {
            ""
        }
    );
    if let Some(remaining) = report.members_without_photo {
        println!("Members without photo: {}", remaining);
    }

    if !report.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &report.warnings {
            println!("  - {}", warning);
        }
    }

    if report.members_without_photo.unwrap_or(0) > 0 {
        println!();
        println!("Tip: run 'memberdir check' to list the members still missing a photo.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::error::HelpfulError;
    use std::fs::{self, File};
    use std::path::Path;
    use tempfile::TempDir;

    const ROSTER: &str = r#"export const members: Member[] = [
  {
    id: "1001",
    name: "Alpha",
    photoUrl: "https://placeholder.example/alpha.svg",
  },
  {
    id: "1002",
    name: "Bravo",
    photoUrl:
      "/members/1002.png",
  },
  {
    id: "1003",
    name: "Charlie",
    photoUrl: "https://placeholder.example/charlie.svg",
  },
]
"#;

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

    fn sync(photos: PathBuf, data_file: PathBuf, dry_run: bool) -> anyhow::Result<()> {
        run(SyncArgs {
            photos,
            data_file,
            dry_run,
            json: true,
        })
    }

    #[test]
    fn updates_mismatched_reference_and_preserves_the_rest() {
        let temp_dir = TempDir::new().unwrap();
        let (photos, data_file) = create_fixture(temp_dir.path(), &["1001.jpg", "1002.png"]);

        sync(photos, data_file.clone(), false).unwrap();

        let written = fs::read_to_string(&data_file).unwrap();
        let expected =
            ROSTER.replace("https://placeholder.example/alpha.svg", "/members/1001.jpg");
        assert_eq!(written, expected);
    }

    #[test]
    fn second_run_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let (photos, data_file) = create_fixture(temp_dir.path(), &["1001.jpg", "1003.png"]);

        sync(photos.clone(), data_file.clone(), false).unwrap();
        let after_first = fs::read_to_string(&data_file).unwrap();

        sync(photos, data_file.clone(), false).unwrap();
        let after_second = fs::read_to_string(&data_file).unwrap();
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn dry_run_leaves_the_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let (photos, data_file) = create_fixture(temp_dir.path(), &["1001.jpg"]);

        sync(photos, data_file.clone(), true).unwrap();
        assert_eq!(fs::read_to_string(&data_file).unwrap(), ROSTER);
    }

    #[test]
    fn no_photos_exits_cleanly_without_reading_the_roster() {
        let temp_dir = TempDir::new().unwrap();
        let photos = temp_dir.path().join("empty");
        fs::create_dir_all(&photos).unwrap();

        // The roster path does not even exist; with zero photos that is fine
        sync(photos, temp_dir.path().join("missing.ts"), false).unwrap();
    }

    #[test]
    fn missing_photo_dir_reports_exit_code_two() {
        let temp_dir = TempDir::new().unwrap();
        let (_, data_file) = create_fixture(temp_dir.path(), &[]);

        let err = sync(temp_dir.path().join("does-not-exist"), data_file.clone(), false)
            .unwrap_err();
        let helpful = err.downcast_ref::<HelpfulError>().unwrap();
        assert_eq!(helpful.exit_code, 2);

        // The roster file was never touched
        assert_eq!(fs::read_to_string(&data_file).unwrap(), ROSTER);
    }

    #[test]
    fn unmatched_photo_is_a_warning_not_an_update() {
        let temp_dir = TempDir::new().unwrap();
        let (photos, data_file) = create_fixture(temp_dir.path(), &["1044.png"]);

        sync(photos, data_file.clone(), false).unwrap();
        // No record for 1044, so the roster must be unchanged
        assert_eq!(fs::read_to_string(&data_file).unwrap(), ROSTER);
    }
}
