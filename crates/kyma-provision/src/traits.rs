//! Provisioner trait definition
//!
//! The provisioner is the hand-off point to the provisioning library. The
//! CLI builds the descriptors and never talks to a cloud API itself.

use crate::error::Result;
use crate::types::{Cluster, Provider, ProvisionRequest};
use async_trait::async_trait;

/// Trait for provisioning backends
///
/// # Example
///
/// ```ignore
/// use kyma_provision::{Provisioner, RequestFormat, RequestTarget, RequestWriter};
///
/// let provisioner = RequestWriter::new(RequestTarget::Stdout, RequestFormat::Yaml);
/// let request = provisioner.provision(&cluster, &provider).await?;
/// println!("Requested cluster {}", request.cluster.name);
/// ```
#[async_trait]
pub trait Provisioner: Send + Sync {
    /// Get the provisioner name (e.g., "request-writer")
    fn name(&self) -> &'static str;

    /// Hand the cluster and provider descriptors to the backend
    ///
    /// Returns the request that was accepted.
    async fn provision(&self, cluster: &Cluster, provider: &Provider)
        -> Result<ProvisionRequest>;
}
