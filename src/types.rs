// Shared scalar types used across the clock, the condition flags and the codec.

/// Caller-chosen name of an independent event source (a process, replica or node).
///
/// Ids are expected to be non-empty and unique per actor. The clock does not
/// enforce either; ids are stored verbatim.
pub type ProcessId = String;

/// Number of events observed from one process id.
pub type Ticks = u64;

/// Bitwise OR of the flags in [`crate::condition`].
/// Bits 0-3 are defined (EQUAL, ANCESTOR, DESCENDANT, CONCURRENT); bits 4-7 are
/// ignored by [`crate::VClock::compare`].
pub type ConditionMask = u8;
