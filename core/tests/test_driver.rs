#[cfg(test)]
mod driver_tests {
    use std::io::Write;

    use tempfile::NamedTempFile;
    use chunkbench_core::prelude::*;
    use chunkbench_core::telemetry::MetricsError;

    // ------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------
    fn text(len: usize) -> Vec<u8> {
        let words = ["alpha ", "beta ", "gamma ", "delta ", "epsilon ", "zeta ", "eta ", "theta "];
        let mut out = Vec::with_capacity(len);
        let mut i = 0usize;
        while out.len() < len {
            out.extend_from_slice(words[(i * 7 + i / 3) % words.len()].as_bytes());
            i += 1;
        }
        out.truncate(len);
        out
    }

    fn temp_file(data: &[u8]) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("temp file");
        f.write_all(data).expect("write temp file");
        f.flush().unwrap();
        f
    }

    // ------------------------------------------------------------
    // End-to-end
    // ------------------------------------------------------------
    #[test]
    fn gzip_forty_kib_file_end_to_end() {
        let file = temp_file(&text(40_960));
        let config = BenchConfig::new(CodecKind::Gzip);

        let mut stdout = Vec::new();
        let report = run_and_report(&config, InputSource::file(file.path()), &mut stdout).unwrap();

        assert!(report.in_memory);
        assert_eq!(report.chunks, 10);
        assert_eq!(report.level, Some(6));

        let summary = report.summary.as_ref().expect("compress run has a summary");
        assert_eq!(summary.chunk_count, 10);
        assert!(summary.total_compressed < 40_960);

        let expected_ratio = (10.0 * 4.0 * 1024.0) / summary.total_compressed as f64;
        let printed = String::from_utf8(stdout).unwrap();
        assert!(printed.contains("Original dataset bytes: 40960\n"), "{printed}");
        assert!(printed.contains(&format!("Total compressed bytes: {}\n", summary.total_compressed)));
        assert!(printed.contains(&format!("Average compression ratio: {:.2}\n", expected_ratio)), "{printed}");
        assert!(printed.contains("p50"));
    }

    #[test]
    fn dpzip_total_is_sum_of_estimates() {
        let data = text(40_960);
        let dp = run(&BenchConfig::new(CodecKind::Dpzip), InputSource::memory(data.clone())).unwrap();
        let zs = run(&BenchConfig::new(CodecKind::Zstd), InputSource::memory(data)).unwrap();

        let dp_total = dp.summary.unwrap().total_compressed;
        let zs_total = zs.summary.unwrap().total_compressed;
        // Every zstd chunk here is well under 3151 bytes, so every estimate is scaled up.
        assert!(dp_total > zs_total, "dpzip {dp_total} vs zstd {zs_total}");
    }

    // ------------------------------------------------------------
    // Streaming path
    // ------------------------------------------------------------
    #[test]
    fn large_source_is_streamed_in_bounded_windows() {
        let data = text(10 * 4096 + 100);
        let file = temp_file(&data);
        let window = 2 * 4096;
        let config = BenchConfig::new(CodecKind::Zstd).with_streaming(window as u64, window);

        let report = run(&config, InputSource::file(file.path())).unwrap();

        assert!(!report.in_memory);
        assert!(report.peak_buffer_bytes <= window);
        assert_eq!(report.windows, 6);
        assert_eq!(report.chunks, 11);
        assert_eq!(report.summary.unwrap().chunk_count, 11);
    }

    #[test]
    fn streamed_and_in_memory_runs_agree() {
        let data = text(64 * 1024 + 777);
        let file = temp_file(&data);

        let whole = run(&BenchConfig::new(CodecKind::Lz4), InputSource::file(file.path())).unwrap();
        let streamed = run(
            &BenchConfig::new(CodecKind::Lz4).with_streaming(16 * 1024, 16 * 1024),
            InputSource::file(file.path()),
        )
        .unwrap();

        assert!(whole.in_memory && !streamed.in_memory);
        assert_eq!(whole.peak_buffer_bytes, data.len());
        assert!(streamed.peak_buffer_bytes <= 16 * 1024);
        let (a, b) = (whole.summary.unwrap(), streamed.summary.unwrap());
        assert_eq!(a.chunk_count, b.chunk_count);
        assert_eq!(a.input_bytes, b.input_bytes);
        assert_eq!(a.total_compressed, b.total_compressed);
        assert_eq!(a.percentiles, b.percentiles);
        assert_eq!(a.exact_ratio, b.exact_ratio);
    }

    #[test]
    fn odd_chunk_size_runs_in_memory() {
        let report = run(
            &BenchConfig::new(CodecKind::Gzip).with_chunk_kb(3),
            InputSource::memory(text(10_000)),
        )
        .unwrap();

        assert!(report.in_memory);
        // 3 x 3072 + 784
        assert_eq!(report.chunks, 4);
        let summary = report.summary.unwrap();
        assert_eq!(summary.input_bytes, 10_000);
        assert_eq!(summary.chunk_count, 4);
    }

    #[test]
    fn odd_chunk_size_streams_with_short_chunk_per_window() {
        let data = text(20_000);
        let file = temp_file(&data);
        let config = BenchConfig::new(CodecKind::Zstd)
            .with_chunk_kb(3)
            .with_streaming(8192, 8192);

        let report = run(&config, InputSource::file(file.path())).unwrap();

        assert!(!report.in_memory);
        assert_eq!(report.windows, 3);
        assert!(report.peak_buffer_bytes <= 8192);
        // Windows of 8192, 8192, 3616 bytes: 3 + 3 + 2 chunks.
        assert_eq!(report.chunks, 8);
        let summary = report.summary.unwrap();
        assert_eq!(summary.input_bytes, 20_000);
        assert_eq!(summary.chunk_count, 8);
    }

    #[test]
    fn chunk_larger_than_source_is_one_chunk() {
        let config = BenchConfig::new(CodecKind::Lz4).with_chunk_kb(64 * 1024);
        let report = run(&config, InputSource::memory(text(10_000))).unwrap();
        assert_eq!(report.chunks, 1);
    }

    // ------------------------------------------------------------
    // Parallel pool
    // ------------------------------------------------------------
    #[test]
    fn worker_pool_matches_single_thread() {
        let data = text(200 * 1024 + 5);
        let single = run(&BenchConfig::new(CodecKind::Gzip), InputSource::memory(data.clone())).unwrap();
        let pooled = run(
            &BenchConfig::new(CodecKind::Gzip)
                .with_parallelism(ParallelismProfile::fixed(4))
                .with_streaming(64 * 1024, 64 * 1024),
            InputSource::memory(data),
        )
        .unwrap();

        assert_eq!(pooled.workers, 4);
        let (a, b) = (single.summary.unwrap(), pooled.summary.unwrap());
        assert_eq!(a.chunk_count, b.chunk_count);
        assert_eq!(a.total_compressed, b.total_compressed);
        assert_eq!(a.percentiles, b.percentiles);
        assert_eq!(a.average_ratio, b.average_ratio);
    }

    // ------------------------------------------------------------
    // Decompress direction
    // ------------------------------------------------------------
    #[test]
    fn decompress_run_prints_nothing() {
        let data = text(12 * 1024);
        let config = BenchConfig::new(CodecKind::Zstd).with_direction(Direction::Decompress);

        let mut stdout = Vec::new();
        let report = run_and_report(&config, InputSource::memory(data), &mut stdout).unwrap();

        assert!(stdout.is_empty());
        assert!(report.summary.is_none());
        assert_eq!(report.chunks, 3);
        assert!(report.stage_times_ms.contains_key("decompress"));
        assert!(report.stage_times_ms.contains_key("prepare"));
    }

    // ------------------------------------------------------------
    // Errors and edge cases
    // ------------------------------------------------------------
    #[test]
    fn missing_file_is_reported_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.bin");
        let err = run(&BenchConfig::new(CodecKind::Gzip), InputSource::file(&path)).unwrap_err();

        assert!(matches!(&err, BenchError::FileNotFound { path: p } if p == &path));
        assert!(err.to_string().contains("does-not-exist.bin"));
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&BenchConfig::new(CodecKind::Gzip), InputSource::file(dir.path())).unwrap_err();
        assert!(matches!(err, BenchError::FileNotFound { .. }));
    }

    #[test]
    fn empty_source_compress_has_no_statistics() {
        let file = temp_file(b"");
        let err = run(&BenchConfig::new(CodecKind::Zstd), InputSource::file(file.path())).unwrap_err();
        assert!(matches!(err, BenchError::Metrics(MetricsError::EmptyStatisticsInput)));
    }

    #[test]
    fn empty_source_decompress_is_fine() {
        let config = BenchConfig::new(CodecKind::Lz4).with_direction(Direction::Decompress);
        let report = run(&config, InputSource::memory(Vec::new())).unwrap();
        assert_eq!(report.chunks, 0);
        assert_eq!(report.windows, 0);
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let zero_window = BenchConfig::new(CodecKind::Gzip).with_streaming(1, 0);
        assert!(matches!(zero_window.validate(), Err(BenchError::Config(_))));

        let unaligned = BenchConfig::new(CodecKind::Gzip).with_streaming(1, 4096 + 1);
        assert!(unaligned.validate().is_ok());

        let huge = BenchConfig::new(CodecKind::Gzip).with_chunk_kb(64 * 1024);
        assert!(huge.validate().is_ok());

        let bad_level = BenchConfig::new(CodecKind::Gzip).with_level(Some(11));
        assert!(matches!(bad_level.validate(), Err(BenchError::Compression(_))));

        let whole_input = BenchConfig::new(CodecKind::Gzip).with_chunk_kb(0).with_streaming(1, 1000);
        assert!(whole_input.validate().is_ok());
    }

    #[test]
    fn overflowing_chunk_size_is_a_config_error() {
        let config = BenchConfig::new(CodecKind::Zstd).with_chunk_kb(usize::MAX / 512);
        assert!(matches!(config.chunk_size(), Err(BenchError::Config(_))));
        assert!(matches!(config.validate(), Err(BenchError::Config(_))));

        let err = run(&config, InputSource::memory(text(100))).unwrap_err();
        assert!(err.to_string().contains("overflows"), "{err}");
    }

    #[test]
    fn report_serializes_to_json() {
        let report = run(&BenchConfig::new(CodecKind::Zstd), InputSource::memory(text(9000))).unwrap();
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["codec"], "zstd");
        assert_eq!(value["direction"], "compress");
        assert_eq!(value["chunks"], 3);
        assert!(value["summary"]["exact_ratio"].as_f64().unwrap() > 0.0);
    }
}
