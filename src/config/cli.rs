use clap::{Parser, Subcommand, ValueEnum};
use clio::ClioPath;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Query the Gloo gateway management API (single cluster and federated) over gRPC-web
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Base URL of the Gloo API server, e.g. http://localhost:8090
    #[clap(long)]
    pub(crate) endpoint: String,

    /// Extra request metadata as name=value. Can specify multiple times.
    #[clap(long, value_parser = parse_header)]
    pub(crate) header: Vec<(String, String)>,

    /// Give up on a call after this many seconds
    #[clap(long)]
    pub(crate) timeout_seconds: Option<u64>,

    /// One of error, warn, info, debug, trace
    #[clap(long, default_value = "info")]
    pub(crate) log_level: log::LevelFilter,

    /// Generate a YAML summary of the run (config, result, logs, timing)
    #[clap(long, value_parser = clap::value_parser!(ClioPath))]
    pub(crate) summary_file: Option<ClioPath>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum Command {
    /// List all resources of a kind
    List {
        #[arg(value_enum)]
        kind: ResourceKind,
    },

    /// Print the stored YAML of a single resource
    Yaml {
        #[arg(value_enum)]
        kind: ResourceKind,
        #[clap(long)]
        name: String,
        #[clap(long)]
        namespace: String,
        /// Cluster the resource lives in. Ignored for federated kinds.
        #[clap(long)]
        #[serde(default)]
        cluster: Option<String>,
    },

    /// Print a single resource including its status. Only available for edge (non federated) kinds.
    Details {
        #[arg(value_enum)]
        kind: ResourceKind,
        #[clap(long)]
        name: String,
        #[clap(long)]
        namespace: String,
        #[clap(long)]
        cluster: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub(crate) enum ResourceKind {
    Gateways,
    MatchableHttpGateways,
    MatchableTcpGateways,
    VirtualServices,
    RouteTables,
    FederatedGateways,
    FederatedMatchableHttpGateways,
    FederatedMatchableTcpGateways,
    FederatedVirtualServices,
    FederatedRouteTables,
    FederatedUpstreams,
    FederatedUpstreamGroups,
    FederatedSettings,
}

impl ResourceKind {
    pub(crate) fn is_federated(&self) -> bool {
        !matches!(
            self,
            ResourceKind::Gateways
                | ResourceKind::MatchableHttpGateways
                | ResourceKind::MatchableTcpGateways
                | ResourceKind::VirtualServices
                | ResourceKind::RouteTables
        )
    }
}

pub(crate) fn parse_header(value: &str) -> Result<(String, String), String> {
    let (name, value) = value
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got {:?}", value))?;

    let name = name.trim().to_ascii_lowercase();
    if name.is_empty() {
        return Err("header name must not be empty".to_string());
    }

    Ok((name, value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn kind_names_match_cli_values() {
        for kind in ResourceKind::iter() {
            let parsed = ResourceKind::from_str(&kind.to_string(), false).unwrap();
            assert_eq!(parsed, kind);
        }

        assert_eq!(ResourceKind::FederatedUpstreamGroups.to_string(), "federated-upstream-groups");
        assert_eq!(ResourceKind::iter().filter(|kind| !kind.is_federated()).count(), 5);
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from([
            "gloo-api",
            "--endpoint",
            "http://localhost:8090",
            "--header",
            "Authorization=Bearer t",
            "yaml",
            "gateways",
            "--name",
            "my-gw",
            "--namespace",
            "gloo-system",
        ])
        .unwrap();

        assert_eq!(cli.header, vec![("authorization".to_string(), "Bearer t".to_string())]);
        assert_eq!(
            cli.command,
            Command::Yaml {
                kind: ResourceKind::Gateways,
                name: "my-gw".to_string(),
                namespace: "gloo-system".to_string(),
                cluster: None,
            }
        );
    }

    #[test]
    fn details_requires_cluster() {
        let result = Cli::try_parse_from([
            "gloo-api",
            "--endpoint",
            "http://localhost:8090",
            "details",
            "virtual-services",
            "--name",
            "default",
            "--namespace",
            "gloo-system",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn malformed_header() {
        assert!(parse_header("no-separator").is_err());
        assert!(parse_header("=value").is_err());
    }
}
