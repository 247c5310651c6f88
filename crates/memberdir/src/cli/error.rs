//! Helpful error types for CLI commands
//!
//! Every error includes:
//! - What went wrong
//! - Context about the situation
//! - Suggestions for how to fix it

use std::fmt;
use std::path::Path;

/// An error with helpful context and suggestions
#[derive(Debug)]
pub struct HelpfulError {
    /// The main error message
    pub message: String,
    /// Additional context about what was happening
    pub context: Option<String>,
    /// Suggestions for how to fix the error
    pub suggestions: Vec<String>,
    /// Process exit code when this error terminates the run
    pub exit_code: u8,
}

impl HelpfulError {
    /// Create a new helpful error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            exit_code: 1,
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a suggestion for fixing the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add multiple suggestions
    pub fn with_suggestions(
        mut self,
        suggestions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.suggestions
            .extend(suggestions.into_iter().map(|s| s.into()));
        self
    }

    /// Override the exit code reported for this error
    pub fn with_exit_code(mut self, code: u8) -> Self {
        self.exit_code = code;
        self
    }

    // === Common error constructors ===

    /// Photo uploads directory does not exist
    pub fn photo_dir_not_found(path: &Path) -> Self {
        Self::new(format!("Photo directory not found: {}", path.display()))
            .with_context("The uploads folder must exist before photos can be inventoried or synced")
            .with_suggestions([
                format!("TRY: Create it: mkdir -p {}", path.display()),
                "TRY: Upload photos named after member ids: 1001.jpg, 1002.png, ...".to_string(),
                "TRY: Point at another folder with --photos <DIR>".to_string(),
            ])
            .with_exit_code(2)
    }

    /// Path exists but is not a directory
    pub fn not_a_directory(path: &Path) -> Self {
        Self::new(format!("Not a directory: {}", path.display()))
            .with_context("The photo path must be a directory of uploaded image files")
            .with_suggestion(format!("TRY: Check the path: ls -la {}", path.display()))
    }

    /// Roster data file does not exist
    pub fn data_file_not_found(path: &Path) -> Self {
        Self::new(format!("Roster data file not found: {}", path.display()))
            .with_context("The member roster is read to learn which ids exist")
            .with_suggestions([
                format!("TRY: Check that the file exists: ls -la {}", path.display()),
                "TRY: Point at another file with --data-file <FILE>".to_string(),
            ])
    }

    /// Roster file parsed but contained no member records
    pub fn empty_roster(path: &Path) -> Self {
        Self::new(format!("No member records found in: {}", path.display()))
            .with_context("Expected records carrying id: \"NNNN\" fields")
            .with_suggestion("TRY: Verify this is the members data file, not another source file")
    }
}

impl fmt::Display for HelpfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {}", self.message)?;

        if let Some(ctx) = &self.context {
            writeln!(f, "CONTEXT: {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "  {}", suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HelpfulError {}

/// Render an error as a JSON object on stdout (for `--json` mode)
pub fn print_json_error(err: &anyhow::Error) {
    let payload = match err.downcast_ref::<HelpfulError>() {
        Some(helpful) => serde_json::json!({
            "error": helpful.message,
            "context": helpful.context,
            "suggestions": helpful.suggestions,
        }),
        None => serde_json::json!({ "error": format!("{:#}", err) }),
    };
    println!("{}", payload);
}
