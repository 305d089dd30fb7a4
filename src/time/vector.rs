//! Vector clock: the process id -> counter map, its mutation API and causal ordering.
//!
//! Absent ids behave as a counter of 0 for merging, but ordering is decided by
//! presence first (see [`VClock::order`]).

use crate::condition::Order;
use crate::types::{ConditionMask, ProcessId, Ticks};
use std::collections::{BTreeMap, HashMap};

/// Vector Clock: a map from process id to the number of events observed from it.
///
/// The clock owns its map. `Clone`/[`VClock::copy`] duplicate every entry, so a copy
/// never aliases the original. Entries are kept sorted by id, which makes both the
/// binary encoding and the [`std::fmt::Display`] rendering deterministic.
#[derive(Clone, Default, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct VClock {
    entries: BTreeMap<ProcessId, Ticks>,
}

impl VClock {
    /// Returns a new, empty vector clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an independent clock with identical entries.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns the counter for `id`, or `None` if the clock has no entry for it.
    ///
    /// `None` is distinct from `Some(0)`: an explicit zero entry still counts as
    /// present when ordering clocks.
    pub fn find_ticks(&self, id: &str) -> Option<Ticks> {
        self.entries.get(id).copied()
    }

    /// Returns `true` if the clock has an entry for `id`, whatever its value.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Assigns `ticks` to `id`, inserting the id if needed.
    ///
    /// No causality check is made: setting a smaller value than before is allowed
    /// and is the caller's responsibility.
    pub fn set(&mut self, id: impl Into<ProcessId>, ticks: Ticks) {
        self.entries.insert(id.into(), ticks);
    }

    /// Increments the counter for `id` by one and returns the new value.
    /// An absent id starts at 0, so its first tick yields 1.
    ///
    /// A counter already at `u64::MAX` stays there. Unlike [`VClock::set`], `id` is
    /// borrowed: an existing entry is bumped without allocating a new `String`.
    pub fn tick(&mut self, id: &str) -> Ticks {
        let current = self.find_ticks(id).unwrap_or(0);
        let next = match current.checked_add(1) {
            Some(next) => next,
            None => {
                tracing::warn!(id, "vector clock counter saturated at u64::MAX");
                current
            }
        };
        match self.entries.get_mut(id) {
            Some(ticks) => *ticks = next,
            None => {
                self.entries.insert(id.to_owned(), next);
            }
        }
        tracing::trace!(id, ticks = next, "tick");
        next
    }

    /// Merges another VClock into this one.
    /// For each `(id, ticks)` in `other`: `self[id] = max(self[id] or 0, ticks)`.
    /// Ids only present in `self` are retained. `other` is not modified.
    pub fn merge(&mut self, other: &VClock) {
        for (id, theirs) in &other.entries {
            match self.entries.get_mut(id) {
                Some(mine) => *mine = (*mine).max(*theirs),
                None => {
                    self.entries.insert(id.clone(), *theirs);
                }
            }
        }
        tracing::trace!(merged = other.len(), size = self.len(), "merge");
    }

    /// Determines the relationship between this clock and `other`.
    ///
    /// Ids present in only one clock make that clock "bigger" regardless of the
    /// stored value, so `{a:0}` is an `Ancestor` of `{}`. Counters are only compared
    /// for ids present in both clocks, which keeps the walk to the smaller clock.
    pub fn order(&self, other: &VClock) -> Order {
        // (self value, other value) for every id both clocks carry
        let common: Vec<(Ticks, Ticks)> = if self.len() <= other.len() {
            self.entries
                .iter()
                .filter_map(|(id, mine)| other.entries.get(id).map(|theirs| (*mine, *theirs)))
                .collect()
        } else {
            other
                .entries
                .iter()
                .filter_map(|(id, theirs)| self.entries.get(id).map(|mine| (*mine, *theirs)))
                .collect()
        };

        let mut self_bigger = self.len() > common.len();
        let mut other_bigger = other.len() > common.len();

        for (mine, theirs) in common {
            if self_bigger && other_bigger {
                break;
            }
            if mine > theirs {
                self_bigger = true;
            } else if mine < theirs {
                other_bigger = true;
            }
        }

        match (self_bigger, other_bigger) {
            (false, false) => Order::Equal,
            (true, false) => Order::Ancestor,
            (false, true) => Order::Descendant,
            (true, true) => Order::Concurrent,
        }
    }

    /// Returns `true` if [`VClock::order`] against `other` is one of the conditions in `mask`.
    ///
    /// ```
    /// use vclock::{condition, VClock};
    ///
    /// let mut a = VClock::new();
    /// a.tick("a");
    /// let mut b = a.copy();
    /// b.tick("b");
    /// assert!(a.compare(&b, condition::DESCENDANT | condition::CONCURRENT));
    /// assert!(!a.compare(&b, condition::EQUAL));
    /// ```
    pub fn compare(&self, other: &VClock, mask: ConditionMask) -> bool {
        self.order(other).matches(mask)
    }

    /// Returns the largest counter in the clock, or 0 when it is empty.
    pub fn last_update(&self) -> Ticks {
        self.entries.values().copied().max().unwrap_or(0)
    }

    /// Read-only view of the underlying map.
    pub fn as_map(&self) -> &BTreeMap<ProcessId, Ticks> {
        &self.entries
    }

    /// Iterates over `(id, ticks)` in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Ticks)> + '_ {
        self.entries.iter().map(|(id, ticks)| (id.as_str(), *ticks))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the clock and returns its map.
    pub fn into_map(self) -> BTreeMap<ProcessId, Ticks> {
        self.entries
    }
}

impl From<BTreeMap<ProcessId, Ticks>> for VClock {
    fn from(entries: BTreeMap<ProcessId, Ticks>) -> Self {
        VClock { entries }
    }
}

impl From<HashMap<ProcessId, Ticks>> for VClock {
    fn from(entries: HashMap<ProcessId, Ticks>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<ProcessId>> FromIterator<(K, Ticks)> for VClock {
    fn from_iter<I: IntoIterator<Item = (K, Ticks)>>(iter: I) -> Self {
        VClock {
            entries: iter.into_iter().map(|(id, ticks)| (id.into(), ticks)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a VClock {
    type Item = (&'a ProcessId, &'a Ticks);
    type IntoIter = std::collections::btree_map::Iter<'a, ProcessId, Ticks>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
