#[cfg(test)]
mod telemetry_timer_tests {
    use std::time::Duration;

    use chunkbench_core::telemetry::{Stage, StageTimes, TelemetryTimer};

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Read, Duration::from_millis(5));
        times.add(Stage::Read, Duration::from_millis(7));
        times.add(Stage::Compress, Duration::from_millis(1));

        assert_eq!(times.get(Stage::Read), Duration::from_millis(12));
        assert_eq!(times.get(Stage::Decompress), Duration::ZERO);
        assert_eq!(times.total(), Duration::from_millis(13));
        assert!((times.get_ms(Stage::Read) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn merge_adds_per_stage() {
        let mut a = StageTimes::default();
        a.add(Stage::Prepare, Duration::from_millis(3));
        let mut b = StageTimes::default();
        b.add(Stage::Prepare, Duration::from_millis(4));
        b.add(Stage::Read, Duration::from_millis(1));

        a.merge(&b);
        assert_eq!(a.get(Stage::Prepare), Duration::from_millis(7));
        assert_eq!(a.get(Stage::Read), Duration::from_millis(1));
    }

    #[test]
    fn timer_charges_closure_to_stage() {
        let mut timer = TelemetryTimer::new();
        let value = timer.time(Stage::Read, || {
            std::thread::sleep(Duration::from_millis(5));
            42
        });
        timer.finish();

        assert_eq!(value, 42);
        assert!(timer.stage_times.get(Stage::Read) >= Duration::from_millis(5));
        assert!(timer.stage_times.total() <= timer.elapsed());
    }

    #[test]
    fn stage_display_names() {
        assert_eq!(Stage::Read.to_string(), "read");
        assert_eq!(Stage::Prepare.to_string(), "prepare");
        assert_eq!(Stage::Compress.to_string(), "compress");
        assert_eq!(Stage::Decompress.to_string(), "decompress");
    }
}
