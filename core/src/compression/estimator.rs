//! compression/estimator.rs
//! dpzip size model: maps a real zstd output size to the size a hardware
//! compressor is expected to produce.
//!
//! Piecewise-linear lookup over ten calibration breakpoints. Each segment
//! scales by the mean of two neighbouring calibration factors; the first
//! segment uses its own factor. Above the last breakpoint the size passes
//! through unchanged, so the mapping is total for every input.

/// One calibration segment: sizes `<= upper` are scaled by `scale`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Breakpoint {
    pub upper: u64,
    pub scale: f64,
}

/// Calibrated against zstd level 3 on 4 KiB chunks.
pub const DPZIP_BREAKPOINTS: [Breakpoint; 10] = [
    Breakpoint { upper: 380,  scale: 1.33 },
    Breakpoint { upper: 633,  scale: (1.33 + 1.21) / 2.0 },
    Breakpoint { upper: 738,  scale: (1.21 + 1.21) / 2.0 },
    Breakpoint { upper: 1202, scale: (1.21 + 1.05) / 2.0 },
    Breakpoint { upper: 1624, scale: (1.05 + 1.03) / 2.0 },
    Breakpoint { upper: 1734, scale: (1.03 + 1.03) / 2.0 },
    Breakpoint { upper: 1883, scale: (1.00 + 1.03) / 2.0 },
    Breakpoint { upper: 2048, scale: (1.02 + 1.00) / 2.0 },
    Breakpoint { upper: 2539, scale: (1.04 + 1.02) / 2.0 },
    Breakpoint { upper: 3151, scale: (1.00 + 1.04) / 2.0 },
];

/// Ordered breakpoint table with strictly increasing upper bounds.
#[derive(Clone, Debug)]
pub struct SizeEstimationTable {
    breakpoints: &'static [Breakpoint],
}

impl SizeEstimationTable {
    /// Build a table. Returns `None` unless bounds are strictly increasing.
    pub fn new(breakpoints: &'static [Breakpoint]) -> Option<Self> {
        let increasing = breakpoints.windows(2).all(|w| w[0].upper < w[1].upper);
        increasing.then_some(Self { breakpoints })
    }

    pub fn dpzip() -> Self {
        Self { breakpoints: &DPZIP_BREAKPOINTS }
    }

    /// Scale factor applied to `size`; 1.0 above the last breakpoint.
    pub fn scale_for(&self, size: u64) -> f64 {
        let idx = self.breakpoints.partition_point(|bp| bp.upper < size);
        self.breakpoints.get(idx).map_or(1.0, |bp| bp.scale)
    }

    /// Estimated size, truncated toward zero.
    pub fn estimate(&self, size: u64) -> u64 {
        let scale = self.scale_for(size);
        if scale == 1.0 {
            return size;
        }
        (size as f64 * scale) as u64
    }
}

impl Default for SizeEstimationTable {
    fn default() -> Self {
        Self::dpzip()
    }
}

/// Estimated dpzip size for a zstd output of `zstd_size` bytes.
pub fn estimate_dpzip_size(zstd_size: u64) -> u64 {
    SizeEstimationTable::dpzip().estimate(zstd_size)
}
