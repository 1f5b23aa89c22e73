//! Batch resolution across sibling declarations

use crate::config::RawTargetDeclaration;

use super::{ConfigError, Resolution, TargetConfigResolver};

/// Result of resolving one declaration within a batch.
#[derive(Debug, Clone)]
pub struct TargetOutcome {
    /// The declaration's authored name, kept even on failure so reports can
    /// name the offender.
    pub declaration: String,
    pub result: Result<Resolution, ConfigError>,
}

/// Aggregated outcomes of a multi-target resolution pass.
///
/// Failures are independent per target: one invalid declaration never aborts
/// its siblings, and every defect is collected so authors see all of them in
/// one pass.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<TargetOutcome>,
}

impl BatchReport {
    pub fn has_errors(&self) -> bool {
        self.outcomes.iter().any(|o| o.result.is_err())
    }

    pub fn error_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Canonical configurations from the targets that resolved.
    pub fn resolutions(&self) -> impl Iterator<Item = &Resolution> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }
}

impl TargetConfigResolver {
    /// Resolve many sibling declarations, collecting every outcome.
    pub fn resolve_batch<'a>(
        &self,
        declarations: impl IntoIterator<Item = &'a RawTargetDeclaration>,
    ) -> BatchReport {
        let outcomes = declarations
            .into_iter()
            .map(|raw| TargetOutcome {
                declaration: raw.name.clone(),
                result: self.resolve(raw),
            })
            .collect();
        BatchReport { outcomes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_keeps_going_past_failures() {
        let resolver = TargetConfigResolver::new();
        let good = RawTargetDeclaration {
            name: "Joyship2".to_string(),
            target_type: "Game".to_string(),
            build_settings: "V6".to_string(),
            extra_modules: vec!["Joyship2".to_string()],
        };
        let bad = RawTargetDeclaration {
            name: "Joyship2Editor".to_string(),
            target_type: "Editor".to_string(),
            build_settings: "V9".to_string(),
            extra_modules: vec![],
        };

        let report = resolver.resolve_batch([&bad, &good]);

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.error_count(), 1);
        assert!(report.has_errors());
        assert_eq!(report.resolutions().count(), 1);
        assert_eq!(report.outcomes[0].declaration, "Joyship2Editor");
        assert!(report.outcomes[0].result.is_err());
        assert!(report.outcomes[1].result.is_ok());
    }
}
