use std::collections::BTreeMap;

use crate::model::ClusterProfile;

pub const RELEASE_INCLUDE_PREFIX: &str = "include.release.openshift.io/";
pub const CONFIG_OPERATOR_ONLY: &str = "false-except-for-the-config-operator";

const SELF_MANAGED_HA_MARKER: &str = "self-managed-high-availability";
const HYPERSHIFT_MARKER: &str = "ibm-cloud-managed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileConflict {
    pub first: ClusterProfile,
    pub second: ClusterProfile,
}

pub fn classify(
    annotations: &BTreeMap<&str, &str>,
) -> Result<Option<ClusterProfile>, ProfileConflict> {
    let mut resolved: Option<ClusterProfile> = None;

    for (key, value) in annotations {
        if !key.starts_with(RELEASE_INCLUDE_PREFIX) || *value != CONFIG_OPERATOR_ONLY {
            continue;
        }
        let Some(profile) = profile_for_key(key) else {
            continue;
        };

        match resolved {
            Some(first) if first != profile => {
                return Err(ProfileConflict {
                    first,
                    second: profile,
                });
            }
            _ => resolved = Some(profile),
        }
    }

    Ok(resolved)
}

fn profile_for_key(key: &str) -> Option<ClusterProfile> {
    if key.contains(SELF_MANAGED_HA_MARKER) {
        Some(ClusterProfile::SelfManagedHA)
    } else if key.contains(HYPERSHIFT_MARKER) {
        Some(ClusterProfile::Hypershift)
    } else {
        None
    }
}
