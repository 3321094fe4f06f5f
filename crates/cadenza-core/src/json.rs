//! JSON engine used for every envelope cadenza writes.
//!
//! With the `perf` feature, encoding and decoding route through **sonic-rs**
//! (SIMD-accelerated). Without it, plain serde_json is used so the crate
//! builds everywhere.

#[cfg(feature = "perf")]
use sonic_rs as engine;

#[cfg(not(feature = "perf"))]
use serde_json as engine;

use serde::{Serialize, de::DeserializeOwned};

/// Re-export the underlying `Error` type so callers can pattern-match.
pub use engine::Error;

// ── Serialization ──────────────────────────────────────────────

/// Serialize `value` into a fresh buffer.
#[inline]
pub fn to_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, Error> {
    engine::to_vec(value)
}

/// Serialize `value` onto the end of `buf`.
///
/// Both sonic-rs and serde_json implement `to_writer` for `&mut Vec<u8>`,
/// so this takes a concrete buffer instead of a generic `Write` bound.
#[inline]
pub fn to_writer(buf: &mut Vec<u8>, value: &impl Serialize) -> Result<(), Error> {
    engine::to_writer(buf, value)
}

#[inline]
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    engine::to_string(value)
}

// ── Deserialization ────────────────────────────────────────────

#[inline]
pub fn from_slice<T: DeserializeOwned>(slice: &[u8]) -> Result<T, Error> {
    engine::from_slice(slice)
}

#[inline]
pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T, Error> {
    engine::from_str(s)
}
