//! Binary encoding of a vector clock.
//!
//! Wire layout (postcard):
//! `varint(n)` then `n` times `varint(id_len) id_utf8 varint(ticks)`,
//! ids in strictly ascending order. The same clock always encodes to the same bytes,
//! and only that byte form decodes.

use super::vector::VClock;
use crate::error::ClockError;
use crate::types::{ProcessId, Ticks};

impl VClock {
    /// Encodes the clock for transport or storage.
    ///
    /// # Panics
    /// Only if the serializer rejects a string/u64 map, which would be a bug.
    pub fn to_bytes(&self) -> Vec<u8> {
        match postcard::to_allocvec(self) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::error!(error = %err, "vector clock encode failed");
                panic!("vector clock encode: {err}");
            }
        }
    }

    /// Decodes a clock produced by [`VClock::to_bytes`].
    ///
    /// The whole slice must be one clock: truncated input, malformed varints,
    /// non UTF-8 ids, repeated or unsorted ids and trailing bytes are all rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<VClock, ClockError> {
        // Same layout as the map; decoding as a list keeps repeated ids visible.
        let (entries, rest) = postcard::take_from_bytes::<Vec<(ProcessId, Ticks)>>(bytes)
            .map_err(|err| {
                tracing::debug!(len = bytes.len(), error = %err, "vector clock decode failed");
                ClockError::from(err)
            })?;
        if !rest.is_empty() {
            tracing::debug!(trailing = rest.len(), "vector clock decode left trailing bytes");
            return Err(ClockError::TrailingBytes(rest.len()));
        }
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 >= pair[1].0) {
            tracing::debug!(id = %pair[1].0, "vector clock ids not strictly ascending");
            return Err(ClockError::NonCanonical(pair[1].0.clone()));
        }
        Ok(entries.into_iter().collect())
    }
}
