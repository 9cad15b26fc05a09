use super::checker::SubsetRule;
use crate::model::MissingGatesDiagnostic;

pub fn render_diagnostic(diagnostic: &MissingGatesDiagnostic, rule: &SubsetRule) -> String {
    format!(
        "ERROR: ClusterProfile {:?}: {derived} featureset is missing {} featuregate(s) that are enabled in {baseline}:\n  - {}\n\nAll featuregates enabled in {baseline} must also be enabled in {derived}.",
        diagnostic.cluster_profile.as_str(),
        diagnostic.missing_count,
        diagnostic.missing.join("\n  - "),
        baseline = rule.baseline,
        derived = rule.derived,
    )
}

pub fn render_report(diagnostics: &[MissingGatesDiagnostic], rule: &SubsetRule) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| render_diagnostic(diagnostic, rule))
        .collect::<Vec<String>>()
        .join("\n\n")
}
