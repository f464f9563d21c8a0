//! Plugin manifest version patching.
//!
//! The manifest carries a header line such as ` * Version: 8.4.0-dev`. The
//! first such line is rewritten to `Version: <next version>` for the new
//! development cycle.

mod outcome;

pub use outcome::PatchOutcome;

use regex::{NoExpand, Regex};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, error, info};

/// Default manifest location inside the clone.
pub const DEFAULT_MANIFEST_PATH: &str = "plugins/woocommerce/woocommerce.php";

/// `Version: x.y.z` plus the rest of that line, including its `\n`.
///
/// Version digits are ASCII only. The rest of the line stops at `\r` and the
/// Unicode line separators, so a CRLF-terminated header does not match.
static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Version: [0-9]+\.[0-9]+\.[0-9]+[^\r\n\x{2028}\x{2029}]*\n")
        .expect("version line pattern is valid")
});

/// Rewrites the first version line in `contents` to `Version: {version}\n`.
///
/// Returns `None` when no line matched. `version` is inserted literally.
#[must_use]
pub fn bump_version_line(contents: &str, version: &str) -> Option<String> {
    if !VERSION_LINE.is_match(contents) {
        return None;
    }
    let replacement = format!("Version: {version}\n");
    Some(
        VERSION_LINE
            .replace(contents, NoExpand(&replacement))
            .into_owned(),
    )
}

/// Bumps the version line of the manifest at `path` in place.
///
/// Never fails: read or write errors are logged and returned as
/// [`PatchOutcome::Skipped`]. A file without a version line is written back
/// unchanged and reported as `Patched { replaced: false }`.
pub async fn patch_manifest(path: &Path, version: &str) -> PatchOutcome {
    match try_patch(path, version).await {
        Ok(replaced) => {
            if replaced {
                info!(path = %path.display(), version, "Updated plugin file version");
            } else {
                debug!(path = %path.display(), "No version line found in plugin file");
            }
            PatchOutcome::Patched { replaced }
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Unable to update plugin file.");
            PatchOutcome::Skipped {
                reason: e.to_string(),
            }
        }
    }
}

async fn try_patch(path: &Path, version: &str) -> std::io::Result<bool> {
    let contents = tokio::fs::read_to_string(path).await?;
    let (updated, replaced) = match bump_version_line(&contents, version) {
        Some(updated) => (updated, true),
        None => (contents, false),
    };
    tokio::fs::write(path, updated).await?;
    Ok(replaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn replaces_plain_version_line() {
        let updated = bump_version_line("Version: 1.2.3\n", "XX.XX").unwrap();
        assert_eq!(updated, "Version: XX.XX\n");
    }

    #[test]
    fn leaves_other_lines_untouched() {
        let contents = "<?php\n/**\n * Plugin Name: Widget\n * Version: 8.4.0-dev\n * Requires PHP: 7.4\n */\n";
        let updated = bump_version_line(contents, "8.5").unwrap();
        assert_eq!(
            updated,
            "<?php\n/**\n * Plugin Name: Widget\n * Version: 8.5\n * Requires PHP: 7.4\n */\n"
        );
    }

    #[test]
    fn replaces_only_first_match() {
        let contents = "Version: 1.0.0\nVersion: 2.0.0\n";
        let updated = bump_version_line(contents, "XX.XX").unwrap();
        assert_eq!(updated, "Version: XX.XX\nVersion: 2.0.0\n");
    }

    #[test]
    fn returns_none_without_match() {
        assert_eq!(bump_version_line("Version: 1.2\nOther: 3\n", "XX.XX"), None);
        assert_eq!(bump_version_line("no header here", "XX.XX"), None);
    }

    #[test]
    fn requires_trailing_newline() {
        assert_eq!(bump_version_line("Version: 1.2.3", "XX.XX"), None);
    }

    #[test]
    fn crlf_line_is_not_matched() {
        assert_eq!(bump_version_line("Version: 1.2.3\r\n", "XX.XX"), None);
    }

    #[test]
    fn non_ascii_digits_are_not_a_version() {
        let arabic_indic = "Version: \u{661}.\u{662}.\u{663}\n";
        assert_eq!(bump_version_line(arabic_indic, "XX.XX"), None);
    }

    #[test]
    fn version_is_inserted_literally() {
        let updated = bump_version_line("Version: 1.2.3\n", "$1.0").unwrap();
        assert_eq!(updated, "Version: $1.0\n");
    }

    #[tokio::test]
    async fn patch_manifest_rewrites_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plugin.php");
        std::fs::write(&path, "Version: 9.9.9\nOther: stuff\n").unwrap();

        let outcome = patch_manifest(&path, "XX.XX").await;

        assert_eq!(outcome, PatchOutcome::Patched { replaced: true });
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Version: XX.XX\nOther: stuff\n"
        );
    }

    #[tokio::test]
    async fn patch_manifest_without_match_keeps_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plugin.php");
        std::fs::write(&path, "Stable tag: 1.0\n").unwrap();

        let outcome = patch_manifest(&path, "XX.XX").await;

        assert_eq!(outcome, PatchOutcome::Patched { replaced: false });
        assert_eq!(outcome.as_str(), "unchanged");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Stable tag: 1.0\n");
    }

    #[tokio::test]
    async fn patch_manifest_missing_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.php");

        let outcome = patch_manifest(&path, "XX.XX").await;

        assert!(matches!(outcome, PatchOutcome::Skipped { .. }));
        assert!(!outcome.is_replaced());
        assert!(!path.exists());
    }
}
