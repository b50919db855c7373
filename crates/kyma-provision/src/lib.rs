//! Provisioning descriptors for the Kyma CLI
//!
//! This crate holds the value objects the CLI hands to the provisioning
//! library when creating a cluster, and the seam through which they are
//! handed off:
//!
//! - [`Cluster`] - name, Kubernetes version and node topology
//! - [`Provider`] - cloud project, credentials and provider-specific settings
//! - [`Provisioner`] - backend accepting a cluster/provider pair
//!
//! # Architecture
//!
//! ```text
//! Provisioner (trait)
//! └── RequestWriter (YAML/JSON request document)
//! ```
//!
//! The CLI never talks to a cloud API. Creating infrastructure, polling
//! and retries belong to the provisioning library.

pub mod error;
pub mod extra;
pub mod traits;
pub mod types;
pub mod writer;

pub use error::{ProvisionError, Result};
pub use extra::parse_extra;
pub use traits::Provisioner;
pub use types::{
    Cluster, Provider, ProviderType, ProvisionRequest, DEFAULT_DISK_SIZE_GB,
    DEFAULT_GCP_KUBERNETES_VERSION, DEFAULT_GCP_LOCATION, DEFAULT_GCP_MACHINE_TYPE,
    DEFAULT_NODE_COUNT,
};
pub use writer::{RequestFormat, RequestTarget, RequestWriter};
