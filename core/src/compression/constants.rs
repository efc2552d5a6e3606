//! compression/constants.rs
//! Default level table and accepted level ranges per codec.
//!
//! A level of `None` always means "codec default"; `Some(0)` is a real level
//! for gzip, zstd and lz4 and is never treated as unset.

/// Default compression levels.
pub const DEFAULT_LEVEL_GZIP: i32 = 6;
pub const DEFAULT_LEVEL_ZSTD: i32 = 3;
pub const DEFAULT_LEVEL_DPZIP: i32 = DEFAULT_LEVEL_ZSTD;

/// gzip (flate2) accepts 0 (store) through 9 (best).
pub const GZIP_LEVELS: std::ops::RangeInclusive<i32> = 0..=9;

/// LZ4 frame levels: 0 is the fast default, 3..=12 select the HC compressor.
pub const LZ4_LEVELS: std::ops::RangeInclusive<i32> = 0..=12;
