//! Kyma CLI - Kubernetes cluster bootstrap
//!
//! Library half of the `kyma` binary, exposing the argument types and
//! command implementations to integration tests.

pub mod cli;
pub mod commands;
pub mod output;
