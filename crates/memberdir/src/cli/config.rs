//! Configuration paths for memberdir
//!
//! Simple path resolution with sensible defaults. All paths are relative
//! to the project root: uploads under public/members, the roster data file
//! under lib/members-data.ts.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the project root
pub const ROOT_ENV: &str = "MEMBERDIR_ROOT";

/// Resolve the project root: `$MEMBERDIR_ROOT`, else the current directory
pub fn project_root() -> PathBuf {
    env::var_os(ROOT_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Default photo uploads directory: `<root>/public/members`
pub fn photos_dir() -> PathBuf {
    project_root().join("public").join("members")
}

/// Default roster data file: `<root>/lib/members-data.ts`
pub fn data_file() -> PathBuf {
    project_root().join("lib").join("members-data.ts")
}

/// Arguments for the config command
#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Show resolved paths in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Run the config command - shows current paths
pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    let root = project_root();
    let photos = photos_dir();
    let roster = data_file();

    if args.json {
        let config = serde_json::json!({
            "root": root.to_string_lossy(),
            "photos": {
                "path": photos.to_string_lossy(),
                "exists": photos.is_dir(),
            },
            "data_file": {
                "path": roster.to_string_lossy(),
                "exists": roster.is_file(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("MEMBERDIR CONFIGURATION");
        println!("=======================");
        println!();
        println!("Project root: {}", root.display());
        println!();
        println!(
            "Photos:       {} ({})",
            photos.display(),
            if photos.is_dir() { "exists" } else { "not found" }
        );
        println!(
            "Roster:       {} ({})",
            roster.display(),
            if roster.is_file() { "exists" } else { "not found" }
        );
    }

    Ok(())
}
