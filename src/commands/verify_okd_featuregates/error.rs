use std::path::PathBuf;

use thiserror::Error;

use crate::model::ClusterProfile;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read manifest dir {}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to read {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(
        "unable to parse {}: expected a mapping at the top level, found {kind}",
        path.display()
    )]
    NotAMapping { path: PathBuf, kind: &'static str },

    #[error(
        "{} carries release annotations for both {first} and {second}",
        path.display()
    )]
    AmbiguousProfileAnnotation {
        path: PathBuf,
        first: ClusterProfile,
        second: ClusterProfile,
    },

    #[error(
        "ClusterProfile {profile} featureset {feature_set:?} is declared by both {} and {}",
        first_path.display(),
        second_path.display()
    )]
    DuplicateFeatureSetEntry {
        profile: ClusterProfile,
        feature_set: String,
        first_path: PathBuf,
        second_path: PathBuf,
    },
}
