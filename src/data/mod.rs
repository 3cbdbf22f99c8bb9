//! Dataset loading
//!
//! The only data source is the fixed iris table embedded in the binary; this
//! module exposes it together with the canonical label names.

pub mod iris;

pub use self::iris::*;
