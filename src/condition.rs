//!
//! Causal ordering conditions.
//! Defines the four mutually exclusive outcomes of comparing two vector clocks,
//! and the bit flags used to ask about several outcomes in a single query.

use crate::types::ConditionMask; // ConditionMask is u8

/// Condition bit flags (bits 0-3 defined, 4-7 unused).
/// Flags may be ORed together and passed to [`crate::VClock::compare`].
pub mod flags {
    use super::ConditionMask;

    /// Both clocks carry exactly the same ids and counters.
    pub const EQUAL: ConditionMask = 1 << 0; // 0b0001
    /// The callee dominates the other clock.
    pub const ANCESTOR: ConditionMask = 1 << 1; // 0b0010
    /// The other clock dominates the callee.
    pub const DESCENDANT: ConditionMask = 1 << 2; // 0b0100
    /// Neither clock dominates.
    pub const CONCURRENT: ConditionMask = 1 << 3; // 0b1000

    /// Every defined condition.
    pub const ANY: ConditionMask = EQUAL | ANCESTOR | DESCENDANT | CONCURRENT;
}

pub use flags::{ANCESTOR, ANY, CONCURRENT, DESCENDANT, EQUAL};

/// Relationship between a clock (the callee) and another clock.
///
/// Exactly one variant describes any pair of clocks. Naming follows the callee:
/// `Ancestor` means the callee has seen everything the other clock has and more,
/// `Descendant` means the other clock is strictly ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Order {
    Equal,
    Ancestor,
    Descendant,
    Concurrent,
}

impl Order {
    /// The single condition flag for this outcome.
    #[inline]
    pub fn mask(self) -> ConditionMask {
        match self {
            Order::Equal => flags::EQUAL,
            Order::Ancestor => flags::ANCESTOR,
            Order::Descendant => flags::DESCENDANT,
            Order::Concurrent => flags::CONCURRENT,
        }
    }

    /// Checks whether this outcome is one of the conditions named in `mask`.
    ///
    /// Bits outside [`flags::ANY`] never match.
    #[inline]
    pub fn matches(self, mask: ConditionMask) -> bool {
        (self.mask() & mask) != 0
    }

    /// The outcome seen from the other clock's side.
    #[inline]
    pub fn reverse(self) -> Order {
        match self {
            Order::Ancestor => Order::Descendant,
            Order::Descendant => Order::Ancestor,
            same => same,
        }
    }
}

/// Returns `true` if `mask` only uses the four defined condition bits.
#[inline]
pub fn is_valid(mask: ConditionMask) -> bool {
    (mask & !flags::ANY) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Order; 4] = [Order::Equal, Order::Ancestor, Order::Descendant, Order::Concurrent];

    #[test]
    fn test_masks_are_distinct_powers_of_two() {
        let mut seen = 0;
        for order in ALL {
            let bit = order.mask();
            assert!(bit.is_power_of_two());
            assert_eq!(seen & bit, 0, "{:?} reuses a bit", order);
            seen |= bit;
        }
        assert_eq!(seen, ANY);
    }

    #[test]
    fn test_matches_single_and_combined() {
        assert!(Order::Equal.matches(EQUAL));
        assert!(!Order::Equal.matches(CONCURRENT));
        assert!(Order::Concurrent.matches(DESCENDANT | CONCURRENT));
        assert!(Order::Descendant.matches(DESCENDANT | CONCURRENT));
        assert!(!Order::Ancestor.matches(DESCENDANT | CONCURRENT));
        for order in ALL {
            assert!(order.matches(ANY));
            assert!(!order.matches(0));
        }
    }

    #[test]
    fn test_undefined_bits_never_match() {
        let undefined = 0b1111_0000;
        assert!(!is_valid(undefined));
        for order in ALL {
            assert!(!order.matches(undefined));
        }
        assert!(Order::Ancestor.matches(undefined | ANCESTOR));
    }

    #[test]
    fn test_reverse() {
        assert_eq!(Order::Ancestor.reverse(), Order::Descendant);
        assert_eq!(Order::Descendant.reverse(), Order::Ancestor);
        assert_eq!(Order::Equal.reverse(), Order::Equal);
        assert_eq!(Order::Concurrent.reverse(), Order::Concurrent);
        for order in ALL {
            assert_eq!(order.reverse().reverse(), order);
        }
    }

    #[test]
    fn test_order_serde_by_variant_name() {
        assert_eq!(serde_json::to_string(&Order::Ancestor).expect("encode"), "\"Ancestor\"");
        for order in ALL {
            let text = serde_json::to_string(&order).expect("encode");
            let back: Order = serde_json::from_str(&text).expect("decode");
            assert_eq!(back, order);
        }
        assert!(serde_json::from_str::<Order>("\"Newer\"").is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(0));
        assert!(is_valid(ANY));
        assert!(is_valid(EQUAL | CONCURRENT));
        assert!(!is_valid(1 << 4));
    }
}
