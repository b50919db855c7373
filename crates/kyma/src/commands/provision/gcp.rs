//! `kyma provision gcp` command
//!
//! Turns the command flags into a [`Cluster`] and a [`Provider`] and hands
//! both to a [`Provisioner`]. Creating the GKE cluster is the provisioning
//! library's job; this command only prepares what it needs.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Args;
use kyma_provision::{
    parse_extra, Cluster, Provider, ProviderType, ProvisionError, ProvisionRequest, Provisioner,
    RequestFormat, RequestTarget, RequestWriter, DEFAULT_DISK_SIZE_GB,
    DEFAULT_GCP_KUBERNETES_VERSION, DEFAULT_GCP_LOCATION, DEFAULT_GCP_MACHINE_TYPE,
    DEFAULT_NODE_COUNT,
};
use std::path::Path;
use tracing::{debug, info};

use crate::output;

/// Cluster and project settings for a GCP cluster
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Name of the cluster to provision (required)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Name of the GCP project to provision the cluster in (required)
    #[arg(short, long, default_value = "")]
    pub project: String,

    /// Path to the GCP service account key file (required)
    // Plain string, copied verbatim into `Provider::credentials_file_path`
    #[arg(short = 'c', long = "credentials", default_value = "")]
    pub credentials_file: String,

    /// Kubernetes version of the cluster
    #[arg(short = 'k', long = "kube-version", default_value = DEFAULT_GCP_KUBERNETES_VERSION)]
    pub kubernetes_version: String,

    /// Region or zone of the cluster
    #[arg(short, long, default_value = DEFAULT_GCP_LOCATION)]
    pub location: String,

    /// Machine type used for the cluster nodes
    #[arg(short = 't', long = "type", default_value = DEFAULT_GCP_MACHINE_TYPE)]
    pub machine_type: String,

    /// Disk size in GB of each node
    #[arg(long = "disk-size", default_value_t = DEFAULT_DISK_SIZE_GB)]
    pub disk_size_gb: u32,

    /// Number of cluster nodes
    #[arg(long = "nodes", default_value_t = DEFAULT_NODE_COUNT)]
    pub node_count: u32,

    /// Provider-specific settings as KEY=VALUE (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub extra: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            name: String::new(),
            project: String::new(),
            credentials_file: String::new(),
            kubernetes_version: DEFAULT_GCP_KUBERNETES_VERSION.to_string(),
            location: DEFAULT_GCP_LOCATION.to_string(),
            machine_type: DEFAULT_GCP_MACHINE_TYPE.to_string(),
            disk_size_gb: DEFAULT_DISK_SIZE_GB,
            node_count: DEFAULT_NODE_COUNT,
            extra: Vec::new(),
        }
    }
}

impl Options {
    /// Check the flags that have no usable default
    pub fn validate(&self) -> kyma_provision::Result<()> {
        let required = [
            ("name", &self.name),
            ("project", &self.project),
            ("credentials", &self.credentials_file),
        ];
        for (flag, value) in required {
            if value.trim().is_empty() {
                return Err(ProvisionError::missing_field(flag));
            }
        }

        if !Path::new(&self.credentials_file).is_file() {
            return Err(ProvisionError::credentials_not_found(&self.credentials_file));
        }

        Ok(())
    }
}

/// Arguments of `kyma provision gcp`
#[derive(Args, Debug)]
pub struct GcpArgs {
    #[command(flatten)]
    pub options: Options,

    /// Where to write the provisioning request (`-` for stdout)
    #[arg(short, long, default_value = "-")]
    pub output: Utf8PathBuf,

    /// Format of the provisioning request (yaml, json)
    #[arg(long, default_value = "yaml")]
    pub format: String,
}

/// Build the cluster descriptor from the command options
pub fn new_cluster(options: &Options) -> Cluster {
    Cluster {
        name: options.name.clone(),
        kubernetes_version: options.kubernetes_version.clone(),
        location: options.location.clone(),
        machine_type: options.machine_type.clone(),
        disk_size_gb: options.disk_size_gb,
        node_count: options.node_count,
    }
}

/// Build the GCP provider descriptor from the command options
///
/// Fails on the first `extra` entry that is not `KEY=VALUE`.
pub fn new_provider(options: &Options) -> kyma_provision::Result<Provider> {
    Ok(Provider {
        provider_type: ProviderType::Gcp,
        project_name: options.project.clone(),
        credentials_file_path: options.credentials_file.clone(),
        custom_configurations: parse_extra(&options.extra)?,
    })
}

/// Run the gcp provision command
pub async fn run(args: GcpArgs) -> Result<()> {
    let format: RequestFormat = args.format.parse()?;
    let provisioner = RequestWriter::new(RequestTarget::from_arg(&args.output), format);

    let request = execute(&args.options, &provisioner).await?;

    output::success(&format!(
        "Provisioning request for cluster '{}' handed to {}",
        request.cluster.name,
        provisioner.name()
    ));
    print_summary(&request);

    Ok(())
}

/// Validate the options, build the descriptors and provision
pub async fn execute(
    options: &Options,
    provisioner: &dyn Provisioner,
) -> Result<ProvisionRequest> {
    options.validate()?;

    let cluster = new_cluster(options);
    let provider = new_provider(options).context("Failed to build GCP provider")?;
    debug!("Cluster: {:?}", cluster);
    debug!(
        "Provider: {} project={} custom_configurations={}",
        provider.provider_type,
        provider.project_name,
        provider.custom_configurations.len()
    );

    info!(
        "Provisioning GCP cluster {} in project {}",
        cluster.name, provider.project_name
    );
    let pb = output::spinner(&format!("Provisioning GCP cluster '{}'...", cluster.name));
    let result = provisioner.provision(&cluster, &provider).await;
    pb.finish_and_clear();

    result.with_context(|| format!("Failed to provision cluster '{}'", cluster.name))
}

fn print_summary(request: &ProvisionRequest) {
    output::header("Cluster");
    output::kv("Name", &request.cluster.name);
    output::kv("Project", &request.provider.project_name);
    output::kv("Location", &request.cluster.location);
    output::kv("Kubernetes", &request.cluster.kubernetes_version);
    output::kv(
        "Nodes",
        &format!(
            "{} x {} ({} GB)",
            request.cluster.node_count, request.cluster.machine_type, request.cluster.disk_size_gb
        ),
    );
}
