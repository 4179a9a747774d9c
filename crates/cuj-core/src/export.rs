//! Markdown export of a journey.
//!
//! [`MarkdownDocument`] is the pure projection of a [`Journey`] to Markdown;
//! [`MarkdownExport`] pairs that text with the file name it is saved under
//! and performs the save.
//!
//! # Document Layout
//!
//! ```text
//! # {title | Customer User Journey}
//!
//! **Description:** ...        always present, in this order
//! **User Persona:** ...
//! **Goal:** ...
//! **Platform:** ...
//!
//! ---
//!
//! ## Step {n}: {action | Untitled Step}
//!
//! **Screen:** ...             always present
//! **User Input:** ...
//! **System Response:** ...
//! **Expected Outcome:** ...
//! **Pain Points:** ...        only when non-empty
//! **Notes:** ...              only when non-empty
//!
//! ---
//! ```
//!
//! Every paragraph is followed by a blank line.
//!
//! # Examples
//!
//! ```rust
//! use cuj_core::{export::export_markdown, Journey};
//!
//! let mut journey = Journey::new();
//! journey.title = "Signup".to_string();
//! journey.steps[0].action = "Tap button".to_string();
//!
//! let export = export_markdown(&journey);
//! assert_eq!(export.file_name, "Signup.md");
//! assert!(export.contents.starts_with("# Signup\n\n"));
//! assert!(export.contents.contains("## Step 1: Tap button\n\n"));
//! ```

use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::{
    error::{CujError, Result},
    models::{Journey, Step, StepField},
};

/// Display wrapper rendering a journey as the exported Markdown document.
pub struct MarkdownDocument<'a>(pub &'a Journey);

fn paragraph(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    write!(f, "**{label}:** {value}\n\n")
}

fn rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("---\n\n")
}

impl MarkdownDocument<'_> {
    fn fmt_step(f: &mut fmt::Formatter<'_>, step: &Step) -> fmt::Result {
        write!(f, "## Step {}: {}\n\n", step.step_number, step.title())?;

        for field in [
            StepField::Screen,
            StepField::UserInput,
            StepField::SystemResponse,
            StepField::ExpectedOutcome,
        ] {
            paragraph(f, field.label(), step.field(field))?;
        }

        for field in [StepField::PainPoints, StepField::Notes] {
            let value = step.field(field);
            if !value.is_empty() {
                paragraph(f, field.label(), value)?;
            }
        }

        rule(f)
    }
}

impl fmt::Display for MarkdownDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let journey = self.0;

        write!(f, "# {}\n\n", journey.display_title())?;
        paragraph(f, "Description", &journey.description)?;
        paragraph(f, "User Persona", &journey.user_persona)?;
        paragraph(f, "Goal", &journey.goal)?;
        paragraph(f, "Platform", journey.platform.as_str())?;
        rule(f)?;

        for step in &journey.steps {
            Self::fmt_step(f, step)?;
        }

        Ok(())
    }
}

/// Renders the journey to its Markdown document.
pub fn to_markdown(journey: &Journey) -> String {
    MarkdownDocument(journey).to_string()
}

/// File name an export of `journey` is offered under.
pub fn file_name(journey: &Journey) -> String {
    let stem = if journey.title.is_empty() {
        "cuj"
    } else {
        journey.title.as_str()
    };
    format!("{stem}.md")
}

/// An exported document ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownExport {
    pub file_name: String,
    pub contents: String,
}

/// Builds the export for `journey`. The journey itself is left untouched.
pub fn export_markdown(journey: &Journey) -> MarkdownExport {
    MarkdownExport {
        file_name: file_name(journey),
        contents: to_markdown(journey),
    }
}

impl MarkdownExport {
    /// UTF-8 bytes of the document.
    pub fn as_bytes(&self) -> &[u8] {
        self.contents.as_bytes()
    }

    /// Writes the document into `dir` and returns the path written.
    ///
    /// Path separators in the file name are replaced so the file always
    /// lands directly inside `dir`. An existing file is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `CujError::FileSystem` if the directory cannot be created or
    /// the file cannot be written.
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| CujError::file_system(dir, e))?;

        let path = dir.join(sanitize_file_name(&self.file_name));
        fs::write(&path, self.as_bytes()).map_err(|e| CujError::file_system(&path, e))?;

        info!("Exported journey to {}", path.display());
        Ok(path)
    }
}

/// Replaces characters that would let a title escape the target directory.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::{Platform, StepId};

    fn signup_journey() -> Journey {
        let mut journey = Journey::new();
        journey.title = "Signup".to_string();
        journey.steps[0].action = "Tap button".to_string();
        journey.steps[0].screen = "Home".to_string();
        journey.steps[0].pain_points = "Slow load".to_string();
        journey
    }

    #[test]
    fn test_signup_scenario() {
        let markdown = to_markdown(&signup_journey());

        assert!(markdown.contains("# Signup\n"));
        assert!(markdown.contains("## Step 1: Tap button\n"));
        assert!(markdown.contains("**Screen:** Home\n"));
        assert!(markdown.contains("**Pain Points:** Slow load\n"));
        assert!(!markdown.contains("**Notes:**"));
    }

    #[test]
    fn test_empty_title_uses_defaults() {
        let journey = Journey::new();
        let export = export_markdown(&journey);

        assert!(export.contents.starts_with("# Customer User Journey\n\n"));
        assert_eq!(export.file_name, "cuj.md");
    }

    #[test]
    fn test_empty_action_is_untitled() {
        let mut journey = Journey::new();
        journey.steps.push(Step::empty(StepId(2), 2));

        let markdown = to_markdown(&journey);
        assert!(markdown.contains("## Step 1: Untitled Step\n"));
        assert!(markdown.contains("## Step 2: Untitled Step\n"));
    }

    #[test]
    fn test_full_document_layout() {
        let mut journey = signup_journey();
        journey.description = "First run".to_string();
        journey.user_persona = "New User".to_string();
        journey.goal = "Create an account".to_string();
        journey.platform = Platform::Android;
        journey.steps[0].notes = "Needs copy review".to_string();
        let mut second = Step::empty(StepId(3), 2);
        second.user_input = "Email".to_string();
        journey.steps.push(second);

        let expected = concat!(
            "# Signup\n\n",
            "**Description:** First run\n\n",
            "**User Persona:** New User\n\n",
            "**Goal:** Create an account\n\n",
            "**Platform:** Android\n\n",
            "---\n\n",
            "## Step 1: Tap button\n\n",
            "**Screen:** Home\n\n",
            "**User Input:** \n\n",
            "**System Response:** \n\n",
            "**Expected Outcome:** \n\n",
            "**Pain Points:** Slow load\n\n",
            "**Notes:** Needs copy review\n\n",
            "---\n\n",
            "## Step 2: Untitled Step\n\n",
            "**Screen:** \n\n",
            "**User Input:** Email\n\n",
            "**System Response:** \n\n",
            "**Expected Outcome:** \n\n",
            "---\n\n",
        );
        assert_eq!(to_markdown(&journey), expected);
    }

    #[test]
    fn test_header_labels_present_when_empty() {
        let markdown = to_markdown(&Journey::new());

        assert!(markdown.contains("**Description:** \n\n"));
        assert!(markdown.contains("**User Persona:** \n\n"));
        assert!(markdown.contains("**Goal:** \n\n"));
        assert!(markdown.contains("**Platform:** iOS\n\n---\n\n"));
    }

    #[test]
    fn test_export_is_deterministic_and_pure() {
        let journey = signup_journey();
        let before = journey.clone();

        let first = export_markdown(&journey);
        let second = export_markdown(&journey);

        assert_eq!(first, second);
        assert_eq!(first.as_bytes(), second.as_bytes());
        assert_eq!(journey, before);
    }

    #[test]
    fn test_save_in_writes_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let export = export_markdown(&signup_journey());

        let path = export.save_in(temp_dir.path()).expect("Failed to save export");

        assert_eq!(path, temp_dir.path().join("Signup.md"));
        let written = fs::read_to_string(&path).expect("Failed to read export");
        assert_eq!(written, export.contents);
    }

    #[test]
    fn test_save_in_creates_missing_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let target = temp_dir.path().join("nested").join("out");

        let path = export_markdown(&Journey::new())
            .save_in(&target)
            .expect("Failed to save export");

        assert_eq!(path, target.join("cuj.md"));
        assert!(path.exists());
    }

    #[test]
    fn test_save_in_keeps_file_inside_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut journey = Journey::new();
        journey.title = "../escape/attempt".to_string();

        let export = export_markdown(&journey);
        assert_eq!(export.file_name, "../escape/attempt.md");

        let path = export.save_in(temp_dir.path()).expect("Failed to save export");
        assert_eq!(path.parent(), Some(temp_dir.path()));
        assert_eq!(path.file_name().unwrap(), ".._escape_attempt.md");
    }

    #[test]
    fn test_save_in_reports_file_system_errors() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();

        let err = export_markdown(&Journey::new())
            .save_in(&blocker)
            .unwrap_err();
        assert!(matches!(err, CujError::FileSystem { .. }));
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Signup.md"), "Signup.md");
        assert_eq!(sanitize_file_name("a/b\\c.md"), "a_b_c.md");
        assert_eq!(sanitize_file_name("Onboarding: v2.md"), "Onboarding: v2.md");
    }
}
