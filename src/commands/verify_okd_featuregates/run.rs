use std::fs;
use std::io::Write;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use super::checker::{SubsetRule, check_subset};
use super::loader::read_feature_gate_manifests;
use super::render::render_report;
use crate::cli::VerifyOkdFeatureGatesArgs;
use crate::model::VerificationReport;
use crate::util::{now_utc_string, write_json_pretty};

const REPORT_VERSION: u32 = 1;

pub fn run(args: VerifyOkdFeatureGatesArgs) -> Result<()> {
    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();
    run_with_output(&args, &mut err_out)
}

pub fn validate(args: &VerifyOkdFeatureGatesArgs) -> Result<()> {
    if args.featureset_manifest_path.as_os_str().is_empty() {
        bail!("--featureset-manifest-path is required");
    }
    fs::read_dir(&args.featureset_manifest_path)
        .context("--featureset-manifest-path cannot be read")?;
    if args.baseline_feature_set == args.derived_feature_set {
        bail!(
            "--baseline-feature-set and --derived-feature-set must differ (both are {:?})",
            args.baseline_feature_set
        );
    }
    Ok(())
}

pub fn run_with_output(args: &VerifyOkdFeatureGatesArgs, err_out: &mut dyn Write) -> Result<()> {
    validate(args)?;

    let manifest_dir = &args.featureset_manifest_path;
    let rule = SubsetRule {
        baseline: args.baseline_feature_set.clone(),
        derived: args.derived_feature_set.clone(),
    };

    info!(
        manifest_dir = %manifest_dir.display(),
        baseline = %rule.baseline,
        derived = %rule.derived,
        "verifying featuregate manifests"
    );

    let manifests = read_feature_gate_manifests(manifest_dir)?;
    let outcome = check_subset(&manifests.by_profile, &rule);

    for skipped in &outcome.skipped_profiles {
        debug!(
            cluster_profile = %skipped.cluster_profile,
            missing_feature_set = %skipped.missing_feature_set,
            "cluster profile skipped"
        );
    }

    info!(
        manifests = manifests.sources.len(),
        classified = manifests
            .sources
            .iter()
            .filter(|source| source.cluster_profile.is_some())
            .count(),
        checked_profiles = outcome.checked_profiles.len(),
        skipped_profiles = outcome.skipped_profiles.len(),
        violations = outcome.diagnostics.len(),
        "featuregate verification evaluated"
    );

    if let Some(report_path) = &args.report_path {
        let report = VerificationReport {
            report_version: REPORT_VERSION,
            generated_at: now_utc_string(),
            manifest_dir: manifest_dir.display().to_string(),
            baseline_feature_set: rule.baseline.clone(),
            derived_feature_set: rule.derived.clone(),
            passed: outcome.passed(),
            sources: manifests.sources.clone(),
            checked_profiles: outcome.checked_profiles.clone(),
            skipped_profiles: outcome.skipped_profiles.clone(),
            diagnostics: outcome.diagnostics.clone(),
        };
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote verification report");
    }

    if !outcome.passed() {
        writeln!(err_out, "{}", render_report(&outcome.diagnostics, &rule))
            .context("failed to write verification diagnostics")?;
        bail!("{} featuregate verification failed", rule.derived);
    }

    Ok(())
}
