//! Provisioning descriptor types
//!
//! These are the value objects handed to the provisioning library: a
//! [`Cluster`] describing the Kubernetes cluster and a [`Provider`]
//! describing the cloud account it is created in.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default Kubernetes version for GCP clusters
pub const DEFAULT_GCP_KUBERNETES_VERSION: &str = "1.14.6";

/// Default GCP zone
pub const DEFAULT_GCP_LOCATION: &str = "europe-west3-a";

/// Default GCP machine type
pub const DEFAULT_GCP_MACHINE_TYPE: &str = "n1-standard-4";

/// Default node disk size in GB
pub const DEFAULT_DISK_SIZE_GB: u32 = 30;

/// Default number of nodes
pub const DEFAULT_NODE_COUNT: u32 = 1;

/// Kubernetes cluster to provision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Cluster name
    pub name: String,

    /// Kubernetes version (e.g., "1.14.6")
    pub kubernetes_version: String,

    /// Zone or region the cluster runs in
    pub location: String,

    /// Machine type of the worker nodes
    pub machine_type: String,

    /// Disk size of each node in GB
    #[serde(rename = "diskSizeGB")]
    pub disk_size_gb: u32,

    /// Number of nodes
    pub node_count: u32,
}

/// Supported cloud provider types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderType {
    /// Google Cloud Platform
    #[serde(rename = "GCP")]
    Gcp,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderType::Gcp => write!(f, "GCP"),
        }
    }
}

/// Cloud account a cluster is provisioned in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Provider type
    #[serde(rename = "type")]
    pub provider_type: ProviderType,

    /// Cloud project name
    pub project_name: String,

    /// Path to the service account credentials file
    pub credentials_file_path: String,

    /// Provider-specific settings
    #[serde(default)]
    pub custom_configurations: HashMap<String, String>,
}

/// Cluster and provider pair handed to a provisioner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvisionRequest {
    pub cluster: Cluster,
    pub provider: Provider,
}

impl ProvisionRequest {
    pub fn new(cluster: &Cluster, provider: &Provider) -> Self {
        Self {
            cluster: cluster.clone(),
            provider: provider.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ProvisionRequest {
        let cluster = Cluster {
            name: "mega-cluster".to_string(),
            kubernetes_version: "1.16.0".to_string(),
            location: "north-pole".to_string(),
            machine_type: "HAL".to_string(),
            disk_size_gb: 9000,
            node_count: 3,
        };
        let provider = Provider {
            provider_type: ProviderType::Gcp,
            project_name: "cool-project".to_string(),
            credentials_file_path: "/path/to/credentials".to_string(),
            custom_configurations: HashMap::from([("VAR1".to_string(), "VALUE1".to_string())]),
        };
        ProvisionRequest::new(&cluster, &provider)
    }

    #[test]
    fn test_provider_type_display() {
        assert_eq!(ProviderType::Gcp.to_string(), "GCP");
    }

    #[test]
    fn test_request_json_keys() {
        let value = serde_json::to_value(sample_request()).unwrap();

        assert_eq!(value["cluster"]["kubernetesVersion"], "1.16.0");
        assert_eq!(value["cluster"]["diskSizeGB"], 9000);
        assert_eq!(value["cluster"]["nodeCount"], 3);
        assert_eq!(value["provider"]["type"], "GCP");
        assert_eq!(value["provider"]["projectName"], "cool-project");
        assert_eq!(value["provider"]["customConfigurations"]["VAR1"], "VALUE1");
    }

    #[test]
    fn test_provider_without_custom_configurations_deserializes() {
        let yaml = "type: GCP\nprojectName: p\ncredentialsFilePath: /c\n";
        let provider: Provider = serde_yaml_ng::from_str(yaml).unwrap();

        assert_eq!(provider.provider_type, ProviderType::Gcp);
        assert!(provider.custom_configurations.is_empty());
    }
}
