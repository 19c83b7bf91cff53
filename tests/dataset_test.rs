// Quad Bench - Free and Open Source Software Statement
//
// This project, quad-bench, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/dataset_test.rs
// Version: 1.0.0
//
// This file tests dataset generation: reproducibility for a fixed seed,
// operand quality at the default configuration, magnitude parity between the
// two representations, and rejection of invalid dataset configurations.
//
// Tree Location:
// - tests/dataset_test.rs (generator and dataset store tests)
// - Depends on: quad-bench

#[cfg(test)]
mod tests {
    use quad_bench::benchmark::generator::{DEFAULT_SCALE_FACTOR, DEFAULT_SEED};
    use quad_bench::core::DECIMAL_PRECISION;
    use quad_bench::{ArithmeticBench, DatasetConfig, HarnessError, Representation};

    fn small_config(length: usize) -> DatasetConfig {
        DatasetConfig {
            length,
            ..DatasetConfig::default()
        }
    }

    #[test]
    fn test_fixed_seed_reproduces_operands() {
        let config = small_config(4096);
        let a = ArithmeticBench::setup(&config).expect("first setup");
        let b = ArithmeticBench::setup(&config).expect("second setup");

        let (da, db) = (a.decimal_dataset(), b.decimal_dataset());
        for i in 0..config.length {
            let (a1, a2) = da.operands(i);
            let (b1, b2) = db.operands(i);
            assert_eq!(a1.to_string(), b1.to_string(), "decimal first operand {}", i);
            assert_eq!(a2.to_string(), b2.to_string(), "decimal second operand {}", i);
        }

        let (qa, qb) = (a.quad_dataset(), b.quad_dataset());
        for i in 0..config.length {
            let (a1, a2) = qa.operands(i);
            let (b1, b2) = qb.operands(i);
            assert_eq!(a1.to_f64().to_bits(), b1.to_f64().to_bits(), "quad first operand {}", i);
            assert_eq!(a2.to_f64().to_bits(), b2.to_f64().to_bits(), "quad second operand {}", i);
        }
        for i in 0..64 {
            assert_eq!(qa.operands(i).0.to_string(), qb.operands(i).0.to_string());
        }
    }

    #[test]
    fn test_different_seed_changes_operands() {
        let a = ArithmeticBench::setup(&small_config(16)).unwrap();
        let b = ArithmeticBench::setup(&DatasetConfig {
            seed: DEFAULT_SEED + 1,
            ..small_config(16)
        })
        .unwrap();
        assert_ne!(
            a.decimal_dataset().operands(0).0.to_string(),
            b.decimal_dataset().operands(0).0.to_string()
        );
    }

    #[test]
    fn test_default_scenario_operand_zero_and_quad_add() {
        println!("🧪 Default dataset: seed 12345, 65536 pairs, scale 1e39");
        let config = DatasetConfig::default();
        assert_eq!(config.length, 65536);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.scale_factor, 1e39);

        let mut bench = ArithmeticBench::setup(&config).expect("default setup succeeds");
        let (d1, d2) = bench.decimal_dataset().operands(0);
        let (q1, q2) = bench.quad_dataset().operands(0);

        for (decimal, quad) in [(d1, q1), (d2, q2)] {
            assert!(!decimal.is_zero() && !quad.is_zero());
            let (d, q) = (decimal.to_f64(), quad.to_f64());
            assert!(d.is_finite() && q.is_finite());
            assert_eq!(d.is_sign_negative(), q.is_sign_negative());
            let orders = (d.abs().log10() - q.abs().log10()).abs();
            assert!(orders < 1.0, "decimal {} and quad {} differ in magnitude", d, q);
            assert!(q.abs() < 10.0 * DEFAULT_SCALE_FACTOR);
        }

        assert_eq!(bench.cursor().index(), 0);
        bench.quad_addition().expect("quad addition succeeds");
        let result = bench.quad_dataset().result(0).expect("result stored at index 0");
        assert!(result.is_finite());
        assert!(result.to_f64() != 0.0);
        assert_eq!(bench.cursor().index(), 1);
        assert_eq!(bench.quad_dataset().written_results(), 1);
        assert_eq!(bench.decimal_dataset().written_results(), 0);
    }

    #[test]
    fn test_operands_are_scaled_standard_normal() {
        println!("🧪 Operands: standard normal deviates scaled by 1e39, both signs");
        let bench = ArithmeticBench::setup(&small_config(1024)).unwrap();
        let values: Vec<f64> = bench
            .quad_dataset()
            .first_operands()
            .iter()
            .chain(bench.quad_dataset().second_operands())
            .map(|q| q.to_f64() / DEFAULT_SCALE_FACTOR)
            .collect();

        let negative = values.iter().filter(|v| **v < 0.0).count();
        assert!((800..=1248).contains(&negative), "{} negative of 2048", negative);
        assert!(values.iter().all(|v| v.abs() < 10.0));

        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        assert!(mean.abs() < 0.15, "mean {}", mean);
        assert!((0.75..1.25).contains(&variance), "variance {}", variance);

        // Mixed signs mean some additions cancel: |a + b| < max(|a|, |b|).
        let dataset = bench.quad_dataset();
        let cancelling = (0..dataset.len())
            .filter(|&i| {
                let (a, b) = dataset.operands(i);
                (a.to_f64() < 0.0) != (b.to_f64() < 0.0)
            })
            .count();
        assert!(cancelling > 300, "{} of 1024 pairs have opposite signs", cancelling);
    }

    #[test]
    fn test_decimal_and_quad_operands_match() {
        let bench = ArithmeticBench::setup(&small_config(512)).unwrap();
        let (decimal, quad) = (bench.decimal_dataset(), bench.quad_dataset());
        for i in 0..decimal.len() {
            let (d1, d2) = decimal.operands(i);
            let (q1, q2) = quad.operands(i);
            for (d, q) in [(d1.to_f64(), q1.to_f64()), (d2.to_f64(), q2.to_f64())] {
                assert!((d - q).abs() <= q.abs() * 1e-15, "pair {}: {} vs {}", i, d, q);
            }
        }
    }

    #[test]
    fn test_decimal_operands_respect_precision() {
        let bench = ArithmeticBench::setup(&small_config(256)).unwrap();
        for value in bench
            .decimal_dataset()
            .first_operands()
            .iter()
            .chain(bench.decimal_dataset().second_operands())
        {
            assert!(value.digits() <= DECIMAL_PRECISION.get());
        }
    }

    #[test]
    fn test_setup_rejects_non_power_of_two_length() {
        let err = ArithmeticBench::setup(&small_config(1000)).err().expect("must fail");
        assert_eq!(err, HarnessError::InvalidDatasetLength { length: 1000 });
    }

    #[test]
    fn test_setup_rejects_invalid_scale_factor() {
        for scale_factor in [f64::INFINITY, f64::NAN, 0.0, -1e39] {
            let config = DatasetConfig {
                scale_factor,
                ..small_config(16)
            };
            assert!(ArithmeticBench::setup(&config).is_err(), "scale {} accepted", scale_factor);
        }
    }
}

// Changelog:
// - v1.0.0 (2026-10-18): Initial dataset tests.
//   - Purpose: Reproducibility, the default seed/length/scale scenario, shared
//     draw magnitude parity, and configuration rejection.
