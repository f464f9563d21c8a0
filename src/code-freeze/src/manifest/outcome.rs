//! Manifest patch outcome.

/// Result of the best-effort manifest update.
///
/// Read and write failures are not errors: the version bump carries on and
/// the failure is reported here instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The file was read and written back.
    Patched {
        /// Whether a version line was found and rewritten.
        replaced: bool,
    },

    /// The file could not be read or written.
    Skipped {
        /// Why the file was left alone.
        reason: String,
    },
}

impl PatchOutcome {
    /// Returns the outcome as a string for summaries.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patched { replaced: true } => "patched",
            Self::Patched { replaced: false } => "unchanged",
            Self::Skipped { .. } => "skipped",
        }
    }

    /// Returns true if the version line was rewritten.
    #[must_use]
    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Patched { replaced: true })
    }
}
