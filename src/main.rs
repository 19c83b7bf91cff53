// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/main.rs
// Version: 1.0.0
//
// Runs all selected probes with the in-process runner and logs the report.
// Configuration comes from the JSON file named by QUAD_BENCH_CONFIG (defaults
// otherwise); QUAD_BENCH_LOG_CONFIG may name a log4rs YAML file.

use anyhow::Context;
use log::{LevelFilter, info};
use quad_bench::benchmark::report::ReportFile;
use quad_bench::benchmark::{BenchmarkReport, BenchmarkRunner, EnvironmentInfo, RunnerConfig};
use quad_bench::utils::logging::init_logging;
use std::env;
use std::path::PathBuf;

const LOG_TARGET: &str = "quad_bench::main";

const CONFIG_ENV: &str = "QUAD_BENCH_CONFIG";
const LOG_CONFIG_ENV: &str = "QUAD_BENCH_LOG_CONFIG";

fn main() -> anyhow::Result<()> {
    let log_config = env::var_os(LOG_CONFIG_ENV).map(PathBuf::from);
    init_logging(log_config.as_deref(), LevelFilter::Info).context("could not set up logging")?;

    let config = match env::var_os(CONFIG_ENV).map(PathBuf::from) {
        Some(path) => {
            info!(target: LOG_TARGET, "📄 Loading runner config from {:?}", path);
            RunnerConfig::from_json_file(&path)?
        }
        None => RunnerConfig::default(),
    };

    let environment = EnvironmentInfo::capture();
    info!(target: LOG_TARGET, "🧪 quad-bench {} on {} ({})",
        environment.harness_version, environment.cpu_label(), environment.arch
    );
    info!(target: LOG_TARGET, "⏱️ Warm-up: {} × {:?}, measurement: {} × {:?}",
        config.warmup_iterations, config.warmup_time(),
        config.measurement_iterations, config.measurement_time()
    );

    let runner = BenchmarkRunner::new(config)?;
    let summaries = runner.run()?;
    let report = BenchmarkReport::new(runner.config().clone(), environment, summaries);
    report.log_summary();

    if let Some(path) = &report.config.report_path {
        ReportFile::new(path.clone())
            .save(&report)
            .with_context(|| format!("could not save report to {:?}", path))?;
    }

    Ok(())
}
