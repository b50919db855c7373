//! Request writer provisioner
//!
//! Serializes the provisioning request as a YAML or JSON document for the
//! provisioning library to pick up, either on stdout or in a file.

use async_trait::async_trait;
use camino::Utf8PathBuf;
use std::io::Write;
use tracing::{debug, info};

use crate::error::{ProvisionError, Result};
use crate::traits::Provisioner;
use crate::types::{Cluster, Provider, ProvisionRequest};

/// Document format of a written request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Yaml,
    Json,
}

impl RequestFormat {
    /// Render a request in this format
    pub fn render(&self, request: &ProvisionRequest) -> Result<String> {
        match self {
            RequestFormat::Yaml => Ok(serde_yaml_ng::to_string(request)?),
            RequestFormat::Json => {
                let mut json = serde_json::to_string_pretty(request)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

impl std::fmt::Display for RequestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestFormat::Yaml => write!(f, "yaml"),
            RequestFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for RequestFormat {
    type Err = ProvisionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(RequestFormat::Yaml),
            "json" => Ok(RequestFormat::Json),
            _ => Err(ProvisionError::UnknownFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Where a request is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTarget {
    Stdout,
    File(Utf8PathBuf),
}

impl RequestTarget {
    /// Interpret a CLI path argument, `-` meaning stdout
    pub fn from_arg(path: &Utf8PathBuf) -> Self {
        if path.as_str() == "-" {
            RequestTarget::Stdout
        } else {
            RequestTarget::File(path.clone())
        }
    }
}

/// Provisioner that writes the request document out
#[derive(Debug, Clone)]
pub struct RequestWriter {
    target: RequestTarget,
    format: RequestFormat,
}

impl RequestWriter {
    pub fn new(target: RequestTarget, format: RequestFormat) -> Self {
        Self { target, format }
    }

    async fn write(&self, document: &str) -> Result<()> {
        match &self.target {
            RequestTarget::Stdout => write_stdout(document)?,
            RequestTarget::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(path, document).await?;
                info!("Provisioning request written to {}", path);
            }
        }
        Ok(())
    }
}

fn write_stdout(document: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[async_trait]
impl Provisioner for RequestWriter {
    fn name(&self) -> &'static str {
        "request-writer"
    }

    async fn provision(
        &self,
        cluster: &Cluster,
        provider: &Provider,
    ) -> Result<ProvisionRequest> {
        let request = ProvisionRequest::new(cluster, provider);
        debug!(
            "Rendering {} request for cluster {} ({})",
            self.format, cluster.name, provider.provider_type
        );

        let document = self.format.render(&request)?;
        self.write(&document).await?;

        Ok(request)
    }
}
