#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! vclock is a vector clock for tracking causality between independent processes.
//!
//! A [`VClock`] maps process ids to event counters. Processes tick their own entry
//! on every local event, merge clocks received from peers, and compare clocks to
//! decide whether two events are ordered or concurrent.
//!
//! ```
//! use vclock::{condition, Order, VClock};
//!
//! let mut a = VClock::new();
//! a.tick("A");
//!
//! let mut b = VClock::from_bytes(&a.to_bytes()).expect("valid clock");
//! b.tick("B");
//!
//! assert_eq!(b.order(&a), Order::Ancestor);
//! assert!(a.compare(&b, condition::DESCENDANT));
//!
//! a.merge(&b);
//! assert_eq!(a.to_string(), r#"{"A":1, "B":1}"#);
//! ```
//!
//! The clock is a plain value: it does no locking. Share it across threads
//! behind a mutex if it is mutated concurrently.

// Shared scalar types (ProcessId, Ticks, ConditionMask).
pub mod types;

// Order outcomes and the condition bit flags.
pub mod condition;

// Decode error types.
pub mod error;

// Vector clock, codec and rendering.
pub mod time;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use condition::Order;
pub use error::ClockError;
pub use time::VClock;
pub use types::{ConditionMask, ProcessId, Ticks};
