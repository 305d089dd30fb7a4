//! Deterministic text form: `{"a":1, "b":2}`.

use super::vector::VClock;
use std::fmt;

impl fmt::Display for VClock {
    /// Writes ids in ascending order, `", "` between entries, counters in decimal.
    /// Ids are written verbatim between the quotes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (id, ticks)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{}\":{}", id, ticks)?;
        }
        f.write_str("}")
    }
}

impl VClock {
    /// Same string as the `Display` impl; identical clocks always render identically.
    pub fn to_deterministic_string(&self) -> String {
        self.to_string()
    }

    /// Emits the rendered clock as a debug event under `label`.
    pub fn trace_state(&self, label: &str) {
        tracing::debug!(label, clock = %self, "vector clock state");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vc_string() {
        let mut n = VClock::new();
        for id in ["h", "g", "f", "e", "d", "c", "b", "a"] {
            n.set(id, 1);
        }
        let expected = "{\"a\":1, \"b\":1, \"c\":1, \"d\":1, \"e\":1, \"f\":1, \"g\":1, \"h\":1}";
        assert_eq!(n.to_deterministic_string(), expected);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(VClock::new().to_string(), "{}");
        let mut n = VClock::new();
        n.set("node-1", 42);
        assert_eq!(n.to_string(), "{\"node-1\":42}");
    }

    #[test]
    fn test_byte_order_sorting() {
        let mut n = VClock::new();
        n.set("b", 2);
        n.set("B", 1);
        n.set("a10", 3);
        n.set("a9", 4);
        assert_eq!(n.to_string(), "{\"B\":1, \"a10\":3, \"a9\":4, \"b\":2}");
    }
}
