//! 桶哈希基准测试集成测试

use bucket_hash_bench::{
    fib_hash, java_hash, log_info, modulo_hash, BenchConfig, BenchError, BenchmarkRunner, Bits,
    BucketHistogram, HashKind, FIB_MULTIPLIER,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use test_log::test;

const SEED: u64 = 42;
const SAMPLE_COUNT: usize = 100_000;

/// 生成随机非负键与位数
fn generate_inputs(count: usize) -> Vec<(i32, i32)> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..count)
        .map(|_| (rng.gen_range(0..=i32::MAX), rng.gen_range(1..=30)))
        .collect()
}

/// 快速配置：每轮只调用一次
fn quick_config() -> BenchConfig {
    BenchConfig::default()
        .with_warmup_iterations(1)
        .with_measurement_iterations(2)
        .with_iteration_time(Duration::ZERO)
        .with_operations(10_000)
}

#[test]
fn test_modulo_matches_remainder() {
    for (x, bits) in generate_inputs(SAMPLE_COUNT) {
        let size = 1 << bits;
        let b = modulo_hash(x, size, bits);
        assert_eq!(b, x % size);
        assert!((0..size).contains(&b), "x={}, bits={}", x, bits);
    }
}

#[test]
fn test_java_hash_matches_formula() {
    for (x, bits) in generate_inputs(SAMPLE_COUNT) {
        let size = 1 << bits;
        let b = java_hash(x, size, bits);
        let expected = ((x as u32 ^ ((x as u32) >> 16)) & (size as u32 - 1)) as i32;
        assert_eq!(b, expected);
        assert!((0..size).contains(&b), "x={}, bits={}", x, bits);
    }
}

#[test]
fn test_fib_hash_matches_formula() {
    for (x, bits) in generate_inputs(SAMPLE_COUNT) {
        let size = 1 << bits;
        let b = fib_hash(x, size, bits);
        let product = (x as u64 * FIB_MULTIPLIER as u64) & 0xFFFF_FFFF;
        assert_eq!(b as u64, product >> (32 - bits));
        assert!((0..size).contains(&b), "x={}, bits={}", x, bits);
    }
}

#[test]
fn test_fib_boundary_values() {
    assert_eq!(fib_hash(0, 4, 2), 0);
    assert_eq!(fib_hash(1, 4, 2), (663_608_942u32 >> 30) as i32);
    assert_eq!(fib_hash(2, 4, 2), 1);
}

#[test]
fn test_determinism() {
    for (x, bits) in generate_inputs(1_000) {
        let size = 1 << bits;
        for kind in HashKind::ALL {
            assert_eq!(kind.hash(x, size, bits), kind.hash(x, size, bits));
        }
    }
}

#[test]
fn test_strided_keys_distribution() {
    // 步长等于表大小的键：取模全部落入0号桶，斐波那契哈希仍然分散
    for bits in [4, 6, 8, 10] {
        let bits = Bits::new(bits).unwrap();
        let size = bits.table_size().get();
        let keys = || (0..100_000).map(move |i| i * size);

        let modulo = BucketHistogram::collect(HashKind::Modulo, bits, keys()).unwrap();
        let fib = BucketHistogram::collect(HashKind::FibHash, bits, keys()).unwrap();

        log_info!(
            "bits={} modulo ratio={} fib ratio={:.3}",
            bits,
            modulo.max_min_ratio(),
            fib.max_min_ratio()
        );
        assert_eq!(modulo.counts()[0], 100_000);
        assert_eq!(modulo.empty_buckets(), size as usize - 1);
        assert_eq!(fib.empty_buckets(), 0);
        assert!(fib.max_min_ratio() < 1.5, "bits={} ratio={}", bits, fib.max_min_ratio());
        assert!(fib.max_min_ratio() < modulo.max_min_ratio());
    }
}

#[test]
fn test_contiguous_keys_cover_all_buckets() {
    let bits = Bits::new(10).unwrap();
    for kind in HashKind::ALL {
        let hist = BucketHistogram::collect(kind, bits, 0..1_000_000).unwrap();
        assert_eq!(hist.total(), 1_000_000);
        assert_eq!(hist.empty_buckets(), 0, "{} 存在空桶", kind);
    }
}

#[test]
fn test_full_sweep_shape() {
    let runner = BenchmarkRunner::new(quick_config()).unwrap();
    let report = runner.run().unwrap();

    assert_eq!(report.rows().len(), 27);
    assert!(report.failures().is_empty());
    for row in report.rows() {
        assert!((2..=10).contains(&row.bits.get()));
        assert!(row.ns_per_op() >= 0.0);
        assert_eq!(row.summary.cycles, 2);
    }
    for kind in HashKind::ALL {
        for bits in 2..=10 {
            assert!(report.find(kind, bits).is_some(), "缺少 {} bits={}", kind, bits);
        }
    }

    let text = report.summary();
    assert_eq!(text.lines().count(), 28);
    let metrics = report.export_prometheus();
    assert_eq!(metrics.matches("hash_bench_ns_per_op{").count(), 27);
}

#[test]
fn test_min_iteration_time_respected() {
    let config = quick_config()
        .with_kinds([HashKind::FibHash])
        .with_bits([6])
        .with_iteration_time(Duration::from_millis(5))
        .with_operations(1_000);
    let runner = BenchmarkRunner::new(config).unwrap();
    let result = runner.measure(HashKind::FibHash, 6).unwrap();
    assert_eq!(result.summary.cycles, 2);
    assert!(result.ns_per_op() > 0.0);
    assert!(result.summary.min_ns <= result.summary.max_ns);
}

#[test]
fn test_bad_bits_do_not_stop_sweep() {
    let config = quick_config().with_bits([2, 0, 31, 10]);
    let report = BenchmarkRunner::new(config).unwrap().run().unwrap();
    assert_eq!(report.rows().len(), 6);
    assert_eq!(report.failures().len(), 6);
    assert!(report.failures().iter().all(|f| f.bits == 0 || f.bits == 31));
}

#[test]
fn test_measure_rejects_bits() {
    let runner = BenchmarkRunner::new(quick_config()).unwrap();
    assert!(matches!(
        runner.measure(HashKind::JavaHash, 31),
        Err(BenchError::InvalidBits { bits: 31 })
    ));
}
