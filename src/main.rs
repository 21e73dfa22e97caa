use anyhow::{Context, Result};
use config::GlooApiConfig;
use run::RunTime;

mod config;
mod logging;
mod run;

#[tokio::main]
async fn main() -> Result<()> {
    let config = GlooApiConfig::new()?;

    logging::init(config.log_level).context("initializing logging")?;

    let start = std::time::Instant::now();
    let run_result = run::run(&config).await;
    let run_time = RunTime::since_start(start);

    logging::generate_summary(&config, &run_result, run_time).context("generating summary")?;

    let output = run_result?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}
