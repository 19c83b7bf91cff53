// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/runner_test.rs
// Version: 1.0.0
//
// This file tests the measurement runner: configuration defaults and
// validation, probe selection, and short real runs on small datasets.
//
// Tree Location:
// - tests/runner_test.rs (runner tests)
// - Depends on: quad-bench, tempfile

#[cfg(test)]
mod tests {
    use quad_bench::benchmark::runner::run_iteration;
    use quad_bench::benchmark::{Isolation, TimeUnit};
    use quad_bench::{
        ArithmeticBench, BenchmarkRunner, DatasetConfig, HarnessError, ProbeId, RunnerConfig,
    };
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    const BATCH: u64 = 256;

    fn quick_config(length: usize) -> RunnerConfig {
        RunnerConfig {
            warmup_iterations: 1,
            warmup_time_ms: 1,
            measurement_iterations: 2,
            measurement_time_ms: 2,
            dataset: DatasetConfig {
                length,
                ..DatasetConfig::default()
            },
            ..RunnerConfig::default()
        }
    }

    #[test]
    fn test_default_protocol() {
        let config = RunnerConfig::default();
        assert_eq!(config.warmup_iterations, 3);
        assert_eq!(config.warmup_time(), Duration::from_secs(7));
        assert_eq!(config.measurement_iterations, 5);
        assert_eq!(config.measurement_time(), Duration::from_secs(10));
        assert_eq!(config.isolation, Isolation::FreshInstance);
        assert_eq!(config.time_unit, TimeUnit::Nanoseconds);
        assert!(config.include.is_empty());
        assert!(config.report_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RunnerConfig::from_json_str(
            r#"{ "measurement_iterations": 2, "isolation": "shared", "dataset": { "length": 1024 } }"#,
        )
        .unwrap();
        assert_eq!(config.measurement_iterations, 2);
        assert_eq!(config.isolation, Isolation::Shared);
        assert_eq!(config.dataset.length, 1024);
        assert_eq!(config.dataset.seed, 12345);
        assert_eq!(config.warmup_iterations, 3);
        assert_eq!(config.measurement_time_ms, 10_000);
    }

    #[test]
    fn test_config_file_loading() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "include": ["division"], "time_unit": "microseconds" }}"#).unwrap();
        let config = RunnerConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.time_unit, TimeUnit::Microseconds);
        let names: Vec<String> = config.selected_probes().unwrap().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["decimal_division", "quad_division"]);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        println!("🧪 Rejecting configs the runner cannot honor");
        let cases = [
            r#"{ "measurement_iterations": 0 }"#,
            r#"{ "measurement_time_ms": 0 }"#,
            r#"{ "warmup_iterations": 2, "warmup_time_ms": 0 }"#,
            r#"{ "include": ["modulo"] }"#,
            r#"{ "dataset": { "length": 1000 } }"#,
            r#"{ "warmup_iterations": "three" }"#,
        ];
        for json in cases {
            assert!(RunnerConfig::from_json_str(json).is_err(), "accepted {}", json);
        }

        let missing = RunnerConfig::from_json_file(std::path::Path::new("/nonexistent/quad.json"));
        assert!(matches!(missing, Err(HarnessError::Config { .. })));
    }

    #[test]
    fn test_zero_warmup_allowed() {
        let config = RunnerConfig::from_json_str(r#"{ "warmup_iterations": 0, "warmup_time_ms": 0 }"#);
        assert!(config.is_ok());
    }

    #[test]
    fn test_include_filter_matches_fragments() {
        let config = RunnerConfig {
            include: vec!["quad_".to_string(), "decimal_add".to_string()],
            ..RunnerConfig::default()
        };
        let selected = config.selected_probes().unwrap();
        assert_eq!(selected.len(), 5);
        assert_eq!(selected[0].name(), "decimal_addition");
        assert!(selected[1..].iter().all(|p| p.name().starts_with("quad_")));
    }

    #[test]
    fn test_iteration_runs_whole_batches() {
        let mut bench = ArithmeticBench::setup(&quick_config(1024).dataset).unwrap();
        let probe = ProbeId::from_name("quad_addition").unwrap();
        let sample = run_iteration(&mut bench, probe, Duration::ZERO).unwrap();
        assert_eq!(sample.calls, BATCH);
        assert_eq!(bench.cursor().index(), BATCH as usize);

        let sample = run_iteration(&mut bench, probe, Duration::from_millis(2)).unwrap();
        assert!(sample.calls >= BATCH);
        assert_eq!(sample.calls % BATCH, 0);
        assert!(sample.elapsed_ns >= 2_000_000);
    }

    #[test]
    fn test_run_probe_cursor_accounts_for_every_call() {
        let runner = BenchmarkRunner::new(quick_config(1024)).unwrap();
        let mut bench = ArithmeticBench::setup(&runner.config().dataset).unwrap();
        let probe = ProbeId::from_name("decimal_multiplication").unwrap();

        let summary = runner.run_probe(&mut bench, probe).unwrap();
        assert_eq!(summary.samples.len(), 2);
        assert!(summary.warmup_calls >= BATCH);
        let total = summary.warmup_calls + summary.measured_calls();
        assert_eq!(bench.cursor().index(), (total % 1024) as usize);
        assert!(summary.average_ns > 0.0);
        let slack = summary.average_ns * 1e-9;
        assert!(summary.best_ns <= summary.average_ns + slack);
        assert!(summary.average_ns <= summary.worst_ns + slack);
    }

    #[test]
    fn test_full_run_yields_one_summary_per_probe() {
        for isolation in [Isolation::FreshInstance, Isolation::Shared] {
            let config = RunnerConfig {
                isolation,
                warmup_iterations: 0,
                measurement_iterations: 1,
                measurement_time_ms: 1,
                ..quick_config(1024)
            };
            let summaries = BenchmarkRunner::new(config).unwrap().run().unwrap();
            let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
            let expected: Vec<String> = ProbeId::ALL.iter().map(|p| p.name()).collect();
            assert_eq!(names, expected);
            for summary in &summaries {
                assert_eq!(summary.warmup_calls, 0);
                assert!(summary.measured_calls() >= BATCH);
            }
        }
    }

    #[test]
    fn test_time_unit_conversion() {
        assert_eq!(TimeUnit::Nanoseconds.from_nanos(1500.0), 1500.0);
        assert_eq!(TimeUnit::Microseconds.from_nanos(1500.0), 1.5);
        assert_eq!(TimeUnit::Milliseconds.suffix(), "ms/op");
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Initial runner tests.
//   - Purpose: Config defaults, JSON loading and validation, probe selection,
//     batch accounting, and short end-to-end runs in both isolation modes.
