use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use super::document::{nested_seq, nested_str, string_map};
use super::error::ManifestError;
use super::profile::classify;
use crate::model::{
    ClusterProfile, DEFAULT_FEATURE_SET, FeatureGateManifests, GateSet, ManifestSource,
};
use crate::util::sha256_hex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSetEntry {
    pub cluster_profile: ClusterProfile,
    pub feature_set: String,
    pub enabled: GateSet,
}

pub fn read_feature_gate_manifests(
    manifest_dir: &Path,
) -> Result<FeatureGateManifests, ManifestError> {
    let paths = discover_manifest_files(manifest_dir)?;

    let mut manifests = FeatureGateManifests::default();
    let mut origins: BTreeMap<(ClusterProfile, String), PathBuf> = BTreeMap::new();

    for path in paths {
        let data = fs::read(&path).map_err(|source| ManifestError::FileRead {
            path: path.clone(),
            source,
        })?;
        let document: Value =
            serde_yaml::from_slice(&data).map_err(|source| ManifestError::Parse {
                path: path.clone(),
                source,
            })?;
        if let Some(kind) = non_mapping_kind(&document) {
            return Err(ManifestError::NotAMapping { path, kind });
        }

        let entry = extract_feature_set_entry(&path, &document)?;
        let mut source = ManifestSource {
            path: path.display().to_string(),
            sha256: sha256_hex(&data),
            cluster_profile: None,
            feature_set: None,
            enabled_count: 0,
        };

        let Some(entry) = entry else {
            debug!(path = %path.display(), "no recognized cluster profile; skipping manifest");
            manifests.sources.push(source);
            continue;
        };

        debug!(
            path = %path.display(),
            cluster_profile = %entry.cluster_profile,
            feature_set = %entry.feature_set,
            enabled = entry.enabled.len(),
            "classified featuregate manifest"
        );

        match origins.entry((entry.cluster_profile, entry.feature_set.clone())) {
            Entry::Occupied(existing) => {
                return Err(ManifestError::DuplicateFeatureSetEntry {
                    profile: entry.cluster_profile,
                    feature_set: entry.feature_set,
                    first_path: existing.get().clone(),
                    second_path: path,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(path.clone());
            }
        }

        source.cluster_profile = Some(entry.cluster_profile);
        source.feature_set = Some(entry.feature_set.clone());
        source.enabled_count = entry.enabled.len();
        manifests.sources.push(source);

        manifests
            .by_profile
            .entry(entry.cluster_profile)
            .or_default()
            .insert(entry.feature_set, entry.enabled);
    }

    Ok(manifests)
}

pub fn extract_feature_set_entry(
    path: &Path,
    document: &Value,
) -> Result<Option<FeatureSetEntry>, ManifestError> {
    let annotations = string_map(document, &["metadata", "annotations"]);
    let cluster_profile = match classify(&annotations) {
        Ok(Some(profile)) => profile,
        Ok(None) => return Ok(None),
        Err(conflict) => {
            return Err(ManifestError::AmbiguousProfileAnnotation {
                path: path.to_path_buf(),
                first: conflict.first,
                second: conflict.second,
            });
        }
    };

    let feature_set = nested_str(document, &["spec", "featureSet"])
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_FEATURE_SET)
        .to_string();

    Ok(Some(FeatureSetEntry {
        cluster_profile,
        feature_set,
        enabled: enabled_feature_gates(document),
    }))
}

fn enabled_feature_gates(document: &Value) -> GateSet {
    let Some(current) = nested_seq(document, &["status", "featureGates"])
        .and_then(|versions| versions.first())
    else {
        return GateSet::new();
    };

    nested_seq(current, &["enabled"])
        .unwrap_or_default()
        .iter()
        .filter_map(|gate| nested_str(gate, &["name"]))
        .filter(|name| !name.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn non_mapping_kind(document: &Value) -> Option<&'static str> {
    match document {
        Value::Mapping(_) | Value::Null => None,
        Value::Sequence(_) => Some("a sequence"),
        Value::String(_) => Some("a string"),
        Value::Number(_) => Some("a number"),
        Value::Bool(_) => Some("a bool"),
        Value::Tagged(_) => Some("a tagged value"),
    }
}

fn discover_manifest_files(manifest_dir: &Path) -> Result<Vec<PathBuf>, ManifestError> {
    let unreadable = |source| ManifestError::DirectoryUnreadable {
        path: manifest_dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(manifest_dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if entry.file_type().map_err(unreadable)?.is_dir() {
            continue;
        }
        paths.push(entry.path());
    }
    paths.sort();

    Ok(paths)
}
