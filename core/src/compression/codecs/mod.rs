//! compression/codecs/mod.rs
//! One compressor/decompressor pair per codec.
//!
//! Every chunk is compressed as a self-contained frame so chunks stay
//! independent and can be processed in any order.

pub mod dpzip;
pub mod gzip;
pub mod lz4;
pub mod zstd;

pub use self::dpzip::*;
pub use self::gzip::*;
pub use self::lz4::*;
pub use self::zstd::*;
