use std::path::PathBuf;

/// Result of one `(entity, module)` render attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Rendered content was written to the target file.
    Written { target: PathBuf },
    /// Target already exists and overwriting is disabled.
    SkippedExisting { target: PathBuf },
    /// The module has no output package, so the rendered content has no
    /// destination.
    NotPersisted { module: String },
}

impl RenderOutcome {
    /// Whether the outcome counts as failed in the run summary.
    pub fn is_failure(&self) -> bool {
        matches!(self, RenderOutcome::NotPersisted { .. })
    }

    /// Gets a message describing the outcome for the run log.
    pub fn get_message(&self) -> String {
        match self {
            RenderOutcome::Written { target } => {
                format!("Writing to '{}'", target.display())
            }
            RenderOutcome::SkippedExisting { target } => {
                format!("Skipping write to '{}' (target already exists)", target.display())
            }
            RenderOutcome::NotPersisted { module } => {
                format!(
                    "Module '{module}' has no output package configured, rendered output was discarded"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn written_message_names_the_target() {
        let target = PathBuf::from("src/main/java/com/x/dao/UserDao.java");
        let outcome = RenderOutcome::Written { target: target.clone() };
        assert_eq!(outcome.get_message(), format!("Writing to '{}'", target.display()));
    }

    #[test]
    fn skipped_message_mentions_the_existing_target() {
        let target = PathBuf::from("src/main/java/com/x/dao/UserDao.java");
        let outcome = RenderOutcome::SkippedExisting { target: target.clone() };
        assert_eq!(
            outcome.get_message(),
            format!("Skipping write to '{}' (target already exists)", target.display())
        );
    }

    #[test]
    fn not_persisted_message_names_the_module() {
        let outcome = RenderOutcome::NotPersisted { module: "dto".to_string() };
        assert!(outcome.get_message().contains("'dto'"));
        assert!(outcome.get_message().contains("no output package"));
    }

    #[test]
    fn only_not_persisted_counts_as_a_failure() {
        let target = PathBuf::from("UserDao.java");
        assert!(!RenderOutcome::Written { target: target.clone() }.is_failure());
        assert!(!RenderOutcome::SkippedExisting { target }.is_failure());
        assert!(RenderOutcome::NotPersisted { module: "dto".to_string() }.is_failure());
    }
}
