use self::{
    cli::{Cli, Command},
    path::ConfigPath,
};
use anyhow::{ensure, Context, Result};
use clap::Parser;
use fn_error_context::context;
use log::LevelFilter;
use serde::Serializer;
use serde_json::Value;
use serde_with::{serde_as, DisplayFromStr};
use std::{collections::BTreeMap, env};

pub(crate) mod cli;
pub(crate) mod path;

pub(crate) const CONFIG_ENV: &str = "GLOO_API_CONFIG";

/// All parsed arguments, from either the CLI or the config file
#[serde_as]
#[derive(serde::Serialize)]
pub(crate) struct GlooApiConfig {
    pub(crate) endpoint: String,
    #[serde(serialize_with = "redacted_headers")]
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) timeout_seconds: Option<u64>,
    #[serde_as(as = "DisplayFromStr")]
    pub(crate) log_level: LevelFilter,
    pub(crate) summary_file: Option<ConfigPath>,
    pub(crate) command: Command,
}

// Header values are usually credentials
fn redacted_headers<S: Serializer>(headers: &BTreeMap<String, String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(headers.keys().map(|name| (name, "<redacted>")))
}

impl GlooApiConfig {
    pub(crate) fn parse_from_config_file(config_bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_yaml::from_slice(config_bytes)?;

        let mut value = value.as_object().context("config file must be a YAML object")?.clone();

        let endpoint = value
            .remove("endpoint")
            .context("endpoint is required")?
            .as_str()
            .context("endpoint must be a string")?
            .to_string();

        let headers = match value.remove("headers") {
            Some(value) => value
                .as_object()
                .context("headers must be an object")?
                .iter()
                .map(|(name, value)| {
                    Ok((
                        name.to_ascii_lowercase(),
                        value.as_str().context(format!("header {} must be a string", name))?.to_string(),
                    ))
                })
                .collect::<Result<BTreeMap<String, String>>>()?,
            None => BTreeMap::new(),
        };

        let timeout_seconds = match value.remove("timeout_seconds") {
            Some(value) => Some(value.as_u64().context("timeout_seconds must be a positive integer")?),
            None => None,
        };

        let log_level = match value.remove("log_level") {
            Some(value) => value
                .as_str()
                .context("log_level must be a string")?
                .parse::<LevelFilter>()
                .context("log_level must be one of off, error, warn, info, debug, trace")?,
            None => LevelFilter::Info,
        };

        let summary_file = match value.remove("summary_file") {
            Some(value) => Some(ConfigPath::new(value.as_str().context("summary_file must be a string")?)?),
            None => None,
        };

        let command = serde_json::from_value::<Command>(value.remove("command").context("command is required")?)
            .context("command must be one of list, yaml or details with their arguments")?;

        ensure!(
            value.is_empty(),
            "unknown keys {:?} in config file",
            value.keys().map(|key| key.to_string()).collect::<Vec<String>>().join(", ")
        );

        let config = Self {
            endpoint,
            headers,
            timeout_seconds,
            log_level,
            summary_file,
            command,
        };

        config.validate()?;

        Ok(config)
    }

    pub(crate) fn parse_from_cli(cli: Cli) -> Result<Self> {
        let config = Self {
            endpoint: cli.endpoint,
            headers: cli.header.into_iter().collect(),
            timeout_seconds: cli.timeout_seconds,
            log_level: cli.log_level,
            summary_file: cli.summary_file.map(ConfigPath::from),
            command: cli.command,
        };

        config.validate()?;

        Ok(config)
    }

    #[context("validating config")]
    fn validate(&self) -> Result<()> {
        let endpoint = url::Url::parse(&self.endpoint).context(format!("endpoint {} is not a valid URL", self.endpoint))?;
        // plain HTTP/1.1 only, TLS is left to whatever fronts the API server
        ensure!(endpoint.scheme() == "http", "endpoint scheme must be http, got {}", endpoint.scheme());
        ensure!(
            endpoint.path() == "/" && endpoint.query().is_none(),
            "endpoint {} must not carry a path or query",
            self.endpoint
        );

        ensure!(self.timeout_seconds != Some(0), "timeout_seconds must be greater than zero");

        if let Command::Details { kind, .. } = &self.command {
            ensure!(!kind.is_federated(), "details is not available for {}, use yaml instead", kind);
        }

        Ok(())
    }

    #[context("parsing {} file {}", CONFIG_ENV, path)]
    pub(crate) fn parse_from_config_path(path: &str, num_args: usize) -> Result<Self> {
        ensure!(
            num_args == 1,
            "{CONFIG_ENV} is set, but there are {num_args} CLI arguments. {CONFIG_ENV} is meant to be used with no arguments."
        );

        GlooApiConfig::parse_from_config_file(&std::fs::read(path).context(format!("reading {}", path))?)
    }

    pub(crate) fn new() -> Result<GlooApiConfig> {
        Ok(match config_file_from_env() {
            Some(path) => GlooApiConfig::parse_from_config_path(&path, env::args().len())?,
            None => GlooApiConfig::parse_from_cli(Cli::parse()).context("CLI parsing")?,
        })
    }
}

/// An empty variable counts as unset
pub(crate) fn config_file_from_env() -> Option<String> {
    env::var(CONFIG_ENV).ok().filter(|path| !path.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::ResourceKind;
    use serial_test::serial;
    use std::io::Write;

    const FULL_CONFIG: &str = r#"
endpoint: http://gloo-fed.example.com:8090
headers:
  Authorization: Bearer t
timeout_seconds: 30
log_level: debug
command:
  yaml:
    kind: virtual-services
    name: default
    namespace: gloo-system
    cluster: kind-local
"#;

    #[test]
    fn full_config_file() -> Result<()> {
        let config = GlooApiConfig::parse_from_config_file(FULL_CONFIG.as_bytes())?;

        assert_eq!(config.endpoint, "http://gloo-fed.example.com:8090");
        assert_eq!(config.headers.get("authorization").map(String::as_str), Some("Bearer t"));
        assert_eq!(config.timeout_seconds, Some(30));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.summary_file.is_none());
        assert_eq!(
            config.command,
            Command::Yaml {
                kind: ResourceKind::VirtualServices,
                name: "default".to_string(),
                namespace: "gloo-system".to_string(),
                cluster: Some("kind-local".to_string()),
            }
        );

        let serialized = serde_json::to_value(&config)?;
        assert_eq!(serialized["headers"]["authorization"], "<redacted>");
        assert_eq!(serialized["log_level"], "DEBUG");
        Ok(())
    }

    #[test]
    fn minimal_config_file() -> Result<()> {
        let config = GlooApiConfig::parse_from_config_file(b"endpoint: http://localhost:8090\ncommand:\n  list:\n    kind: federated-settings\n")?;

        assert!(config.headers.is_empty());
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(
            config.command,
            Command::List {
                kind: ResourceKind::FederatedSettings
            }
        );
        Ok(())
    }

    #[test]
    fn invalid_config_files() {
        let cases = [
            ("- not an object", "YAML object"),
            ("command: {list: {kind: gateways}}", "endpoint is required"),
            ("endpoint: 8090\ncommand: {list: {kind: gateways}}", "endpoint must be a string"),
            ("endpoint: not a url\ncommand: {list: {kind: gateways}}", "not a valid URL"),
            ("endpoint: ftp://gloo\ncommand: {list: {kind: gateways}}", "scheme must be http"),
            ("endpoint: https://gloo\ncommand: {list: {kind: gateways}}", "scheme must be http"),
            ("endpoint: http://gloo/api\ncommand: {list: {kind: gateways}}", "must not carry a path"),
            ("endpoint: http://gloo\ncommand: {list: {kind: gateways}}\ntimeout_seconds: 0", "greater than zero"),
            ("endpoint: http://gloo\ncommand: {list: {kind: gateways}}\nlog_level: loud", "log_level"),
            ("endpoint: http://gloo", "command is required"),
            ("endpoint: http://gloo\ncommand: {list: {kind: listeners}}", "command must be"),
            ("endpoint: http://gloo\ncommand: {list: {kind: gateways}}\nretries: 3", "unknown keys"),
            (
                "endpoint: http://gloo\ncommand: {details: {kind: federated-upstreams, name: a, namespace: b, cluster: c}}",
                "details is not available",
            ),
        ];

        for (config, expected) in cases {
            let err = GlooApiConfig::parse_from_config_file(config.as_bytes()).err();
            let message = err.map(|err| format!("{:#}", err)).unwrap_or_default();
            assert!(message.contains(expected), "config {:?}: expected {:?} in {:?}", config, expected, message);
        }
    }

    #[test]
    fn config_path_requires_no_arguments() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(FULL_CONFIG.as_bytes())?;
        let path = file.path().to_str().context("non utf-8 temp path")?;

        assert!(GlooApiConfig::parse_from_config_path(path, 1).is_ok());
        assert!(GlooApiConfig::parse_from_config_path(path, 3).is_err());
        assert!(GlooApiConfig::parse_from_config_path("/nonexistent/gloo-api.yaml", 1).is_err());
        Ok(())
    }

    #[test]
    #[serial]
    fn config_file_env_var() {
        env::set_var(CONFIG_ENV, "");
        assert_eq!(config_file_from_env(), None);

        env::set_var(CONFIG_ENV, "/etc/gloo-api/config.yaml");
        assert_eq!(config_file_from_env().as_deref(), Some("/etc/gloo-api/config.yaml"));

        env::remove_var(CONFIG_ENV);
        assert_eq!(config_file_from_env(), None);
    }

    #[test]
    fn cli_and_config_file_agree() -> Result<()> {
        let cli = Cli::try_parse_from([
            "gloo-api",
            "--endpoint",
            "http://gloo-fed.example.com:8090",
            "--header",
            "Authorization=Bearer t",
            "--timeout-seconds",
            "30",
            "--log-level",
            "debug",
            "yaml",
            "virtual-services",
            "--name",
            "default",
            "--namespace",
            "gloo-system",
            "--cluster",
            "kind-local",
        ])?;

        let from_cli = serde_json::to_value(GlooApiConfig::parse_from_cli(cli)?)?;
        let from_file = serde_json::to_value(GlooApiConfig::parse_from_config_file(FULL_CONFIG.as_bytes())?)?;
        assert_eq!(from_cli, from_file);
        Ok(())
    }
}
