use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "featuregate-tools",
    version,
    about = "Verification tooling for generated FeatureGate manifests"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        name = "verify-okd-featuregates",
        about = "Verify that all featuregates enabled in Default are also enabled in OKD"
    )]
    VerifyOkdFeatureGates(VerifyOkdFeatureGatesArgs),
}

#[derive(Args, Debug, Clone)]
pub struct VerifyOkdFeatureGatesArgs {
    #[arg(
        long = "featureset-manifest-path",
        default_value = "payload-manifests/featuregates",
        help = "path to directory containing the FeatureGate YAMLs for each FeatureSet,ClusterProfile tuple."
    )]
    pub featureset_manifest_path: PathBuf,

    #[arg(long, default_value = "Default")]
    pub baseline_feature_set: String,

    #[arg(long, default_value = "OKD")]
    pub derived_feature_set: String,

    #[arg(long)]
    pub report_path: Option<PathBuf>,
}
