use crate::model::{
    ClusterProfile, DEFAULT_FEATURE_SET, FeatureGatesByProfile, MissingGatesDiagnostic,
    OKD_FEATURE_SET, SkippedProfile,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetRule {
    pub baseline: String,
    pub derived: String,
}

impl Default for SubsetRule {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_FEATURE_SET.to_string(),
            derived: OKD_FEATURE_SET.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    pub diagnostics: Vec<MissingGatesDiagnostic>,
    pub checked_profiles: Vec<ClusterProfile>,
    pub skipped_profiles: Vec<SkippedProfile>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub fn check_subset(
    feature_sets_by_profile: &FeatureGatesByProfile,
    rule: &SubsetRule,
) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();

    for (profile, feature_sets) in feature_sets_by_profile {
        let Some(baseline_gates) = feature_sets.get(&rule.baseline) else {
            outcome.skipped_profiles.push(SkippedProfile {
                cluster_profile: *profile,
                missing_feature_set: rule.baseline.clone(),
            });
            continue;
        };
        let Some(derived_gates) = feature_sets.get(&rule.derived) else {
            outcome.skipped_profiles.push(SkippedProfile {
                cluster_profile: *profile,
                missing_feature_set: rule.derived.clone(),
            });
            continue;
        };

        outcome.checked_profiles.push(*profile);

        let missing = baseline_gates
            .difference(derived_gates)
            .cloned()
            .collect::<Vec<String>>();
        if missing.is_empty() {
            continue;
        }

        outcome.diagnostics.push(MissingGatesDiagnostic {
            cluster_profile: *profile,
            missing_count: missing.len(),
            missing,
        });
    }

    outcome
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{SubsetRule, check_subset};
    use crate::model::{ClusterProfile, FeatureGatesByProfile, GateSet, SkippedProfile};

    fn gates(names: &[&str]) -> GateSet {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn profile_sets(entries: Vec<(&str, Vec<&str>)>) -> BTreeMap<String, GateSet> {
        entries
            .into_iter()
            .map(|(feature_set, names)| (feature_set.to_string(), gates(&names)))
            .collect()
    }

    #[test]
    fn reports_exact_sorted_difference_per_profile() {
        let mapping: FeatureGatesByProfile = BTreeMap::from([(
            ClusterProfile::Hypershift,
            profile_sets(vec![("Default", vec!["Zeta", "A", "B", "C"]), ("OKD", vec!["A", "B"])]),
        )]);

        let outcome = check_subset(&mapping, &SubsetRule::default());

        assert!(!outcome.passed());
        assert_eq!(outcome.diagnostics.len(), 1);
        let diagnostic = &outcome.diagnostics[0];
        assert_eq!(diagnostic.cluster_profile, ClusterProfile::Hypershift);
        assert_eq!(diagnostic.missing, vec!["C".to_string(), "Zeta".to_string()]);
        assert_eq!(diagnostic.missing_count, 2);
    }

    #[test]
    fn okd_superset_passes() {
        let mapping: FeatureGatesByProfile = BTreeMap::from([(
            ClusterProfile::SelfManagedHA,
            profile_sets(vec![("Default", vec!["A", "B"]), ("OKD", vec!["A", "B", "C"])]),
        )]);

        let outcome = check_subset(&mapping, &SubsetRule::default());

        assert!(outcome.passed());
        assert_eq!(outcome.checked_profiles, vec![ClusterProfile::SelfManagedHA]);
    }

    #[test]
    fn profiles_missing_either_side_are_skipped() {
        let mapping: FeatureGatesByProfile = BTreeMap::from([
            (
                ClusterProfile::SelfManagedHA,
                profile_sets(vec![("Default", vec!["A", "B"]), ("TechPreviewNoUpgrade", vec![])]),
            ),
            (
                ClusterProfile::Hypershift,
                profile_sets(vec![("OKD", vec![]), ("TechPreviewNoUpgrade", vec!["X"])]),
            ),
        ]);

        let outcome = check_subset(&mapping, &SubsetRule::default());

        assert!(outcome.passed());
        assert!(outcome.checked_profiles.is_empty());
        assert_eq!(
            outcome.skipped_profiles,
            vec![
                SkippedProfile {
                    cluster_profile: ClusterProfile::SelfManagedHA,
                    missing_feature_set: "OKD".to_string(),
                },
                SkippedProfile {
                    cluster_profile: ClusterProfile::Hypershift,
                    missing_feature_set: "Default".to_string(),
                },
            ]
        );
    }

    #[test]
    fn every_violating_profile_is_reported() {
        let mapping: FeatureGatesByProfile = BTreeMap::from([
            (
                ClusterProfile::SelfManagedHA,
                profile_sets(vec![("Default", vec!["A"]), ("OKD", vec![])]),
            ),
            (
                ClusterProfile::Hypershift,
                profile_sets(vec![("Default", vec!["B"]), ("OKD", vec![])]),
            ),
        ]);

        let outcome = check_subset(&mapping, &SubsetRule::default());

        let profiles = outcome
            .diagnostics
            .iter()
            .map(|diagnostic| diagnostic.cluster_profile)
            .collect::<Vec<_>>();
        assert_eq!(
            profiles,
            vec![ClusterProfile::SelfManagedHA, ClusterProfile::Hypershift]
        );
    }

    #[test]
    fn checking_twice_is_idempotent() {
        let mapping: FeatureGatesByProfile = BTreeMap::from([(
            ClusterProfile::Hypershift,
            profile_sets(vec![("Default", vec!["A", "B", "C"]), ("OKD", vec!["A"])]),
        )]);
        let rule = SubsetRule::default();

        assert_eq!(check_subset(&mapping, &rule), check_subset(&mapping, &rule));
    }

    #[test]
    fn custom_rule_compares_named_feature_sets() {
        let mapping: FeatureGatesByProfile = BTreeMap::from([(
            ClusterProfile::SelfManagedHA,
            profile_sets(vec![
                ("Default", vec!["A"]),
                ("OKD", vec!["A"]),
                ("TechPreviewNoUpgrade", vec!["A", "T"]),
            ]),
        )]);
        let rule = SubsetRule {
            baseline: "TechPreviewNoUpgrade".to_string(),
            derived: "OKD".to_string(),
        };

        let outcome = check_subset(&mapping, &rule);

        assert_eq!(outcome.diagnostics[0].missing, vec!["T".to_string()]);
    }
}
