use crate::{config::GlooApiConfig, run::RunTime};
use anyhow::{bail, Context, Result};
use lazy_static::lazy_static;
use log::{LevelFilter, Metadata, Record};
use std::sync::{Arc, Mutex};

struct GlooApiLogger;

static LOGGER: GlooApiLogger = GlooApiLogger;

pub(crate) fn init(level: LevelFilter) -> Result<()> {
    match log::set_logger(&LOGGER) {
        Ok(_) => log::set_max_level(level),
        Err(_) => bail!("Logger initalization failed"),
    };

    Ok(())
}

lazy_static! {
    pub(crate) static ref LOG_RECORDS: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
}

fn format_record(record: &Record) -> String {
    format!(
        "{} - {} - {}:{}: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args()
    )
}

impl log::Log for GlooApiLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log_string = format_record(record);

            {
                let mut log_records = match LOG_RECORDS.lock() {
                    Ok(log_records) => log_records,
                    Err(err) => {
                        eprintln!("Failed to lock log records: {}", err);
                        return;
                    }
                };
                log_records.push(log_string.clone());
            }

            // stdout carries the command output
            eprintln!("{}", log_string);
        }
    }

    fn flush(&self) {}
}

#[derive(serde::Serialize)]
struct Summary {
    // Converted up front, serde_yaml would write the command enum as a YAML tag
    config: serde_json::Value,
    result: RunResult,
    logs: Vec<String>,
    run_time: RunTime,
}

#[derive(serde::Serialize)]
struct RunResult {
    success: bool,
    output_bytes: Option<usize>,
    error: Option<String>,
}

pub(crate) fn generate_summary(config: &GlooApiConfig, run_result: &Result<String>, run_time: RunTime) -> Result<()> {
    let Some(summary_file) = &config.summary_file else {
        return Ok(());
    };

    let logs = match LOG_RECORDS.lock() {
        Ok(logs) => logs.clone(),
        Err(err) => {
            vec![format!("Failed to lock log records: {}", err)]
        }
    };

    let summary = Summary {
        config: serde_json::to_value(config).context("serializing config")?,
        result: RunResult {
            success: run_result.is_ok(),
            output_bytes: run_result.as_ref().ok().map(String::len),
            error: run_result.as_ref().err().map(|err| format!("{:#}", err)),
        },
        logs,
        run_time,
    };

    let summary_file = summary_file.create().context("opening summary file for writing")?;
    serde_yaml::to_writer(summary_file, &summary).context("serializing run summary into summary file")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{cli::Command, cli::ResourceKind, path::ConfigPath};
    use std::time::Instant;

    #[test]
    fn record_line_format() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("calling rpc.edge.gloo.solo.io.GatewayResourceApi/ListGateways"))
                .level(log::Level::Debug)
                .file(Some("src/grpc_web/client.rs"))
                .line(Some(77))
                .build(),
        );

        assert!(line.ends_with(" - DEBUG - src/grpc_web/client.rs:77: calling rpc.edge.gloo.solo.io.GatewayResourceApi/ListGateways"));
    }

    #[test]
    fn summary_is_written_only_when_requested() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("summary.yaml");

        let mut config = GlooApiConfig {
            endpoint: "http://localhost:8090".to_string(),
            headers: [("authorization".to_string(), "Bearer secret".to_string())].into_iter().collect(),
            timeout_seconds: Some(5),
            log_level: LevelFilter::Info,
            summary_file: None,
            command: Command::List {
                kind: ResourceKind::Gateways,
            },
        };

        generate_summary(&config, &Ok("items: []\n".to_string()), RunTime::since_start(Instant::now()))?;
        assert!(!file.exists());

        config.summary_file = Some(ConfigPath::new(file.to_str().context("non utf-8 temp path")?)?);
        generate_summary(&config, &Err(anyhow::anyhow!("calling list_gateways")), RunTime::since_start(Instant::now()))?;

        let summary: serde_yaml::Value = serde_yaml::from_str(&std::fs::read_to_string(&file)?)?;
        assert_eq!(summary["config"]["endpoint"].as_str(), Some("http://localhost:8090"));
        assert_eq!(summary["config"]["headers"]["authorization"].as_str(), Some("<redacted>"));
        assert_eq!(summary["config"]["command"]["list"]["kind"].as_str(), Some("gateways"));
        assert_eq!(summary["result"]["success"].as_bool(), Some(false));
        assert_eq!(summary["result"]["error"].as_str(), Some("calling list_gateways"));
        assert!(summary["run_time"].as_str().is_some_and(|time| time.ends_with('s')));
        Ok(())
    }
}
