use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

pub const DEFAULT_FEATURE_SET: &str = "Default";
pub const OKD_FEATURE_SET: &str = "OKD";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub enum ClusterProfile {
    SelfManagedHA,
    Hypershift,
}

impl ClusterProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SelfManagedHA => "SelfManagedHA",
            Self::Hypershift => "Hypershift",
        }
    }
}

impl fmt::Display for ClusterProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type GateSet = BTreeSet<String>;

pub type FeatureGatesByProfile = BTreeMap<ClusterProfile, BTreeMap<String, GateSet>>;

#[derive(Debug, Clone, Serialize)]
pub struct ManifestSource {
    pub path: String,
    pub sha256: String,
    pub cluster_profile: Option<ClusterProfile>,
    pub feature_set: Option<String>,
    pub enabled_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FeatureGateManifests {
    pub by_profile: FeatureGatesByProfile,
    pub sources: Vec<ManifestSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingGatesDiagnostic {
    pub cluster_profile: ClusterProfile,
    pub missing: Vec<String>,
    pub missing_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedProfile {
    pub cluster_profile: ClusterProfile,
    pub missing_feature_set: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub report_version: u32,
    pub generated_at: String,
    pub manifest_dir: String,
    pub baseline_feature_set: String,
    pub derived_feature_set: String,
    pub passed: bool,
    pub sources: Vec<ManifestSource>,
    pub checked_profiles: Vec<ClusterProfile>,
    pub skipped_profiles: Vec<SkippedProfile>,
    pub diagnostics: Vec<MissingGatesDiagnostic>,
}
