#[cfg(test)]
mod estimator_tests {
    use proptest::prelude::*;
    use chunkbench_core::compression::{DPZIP_BREAKPOINTS, SizeEstimationTable, estimate_dpzip_size};

    #[test]
    fn literal_cases() {
        assert_eq!(estimate_dpzip_size(380), 505);
        assert_eq!(estimate_dpzip_size(4000), 4000);
    }

    #[test]
    fn zero_maps_to_zero() {
        assert_eq!(estimate_dpzip_size(0), 0);
    }

    #[test]
    fn segment_edges() {
        // 633 * 1.27 = 803.91
        assert_eq!(estimate_dpzip_size(633), 803);
        // 3151 * 1.02 = 3214.02
        assert_eq!(estimate_dpzip_size(3151), 3214);
        assert_eq!(estimate_dpzip_size(3152), 3152);
    }

    #[test]
    fn above_last_breakpoint_is_identity() {
        for s in [3152u64, 4096, 1 << 20, u32::MAX as u64] {
            assert_eq!(estimate_dpzip_size(s), s);
        }
    }

    fn segment_of(s: u64) -> usize {
        DPZIP_BREAKPOINTS.partition_point(|bp| bp.upper < s)
    }

    proptest! {
        #[test]
        fn prop_monotone_within_segment(a in 0u64..4000, b in 0u64..4000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assume!(segment_of(lo) == segment_of(hi));
            prop_assert!(estimate_dpzip_size(lo) <= estimate_dpzip_size(hi));
        }

        #[test]
        fn prop_scale_is_defined_everywhere(s in any::<u32>()) {
            let table = SizeEstimationTable::dpzip();
            let scale = table.scale_for(s as u64);
            prop_assert!((1.0..=1.33).contains(&scale));
        }
    }
}
