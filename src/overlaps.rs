//! Overlap detection, for one stride and for whole sub-tries.

use crate::base_index::{
    lower_upper_bound, octet_to_base_index, prefix_to_base_index, FIRST_HOST_IDX, LAST_HOST_IDX,
    MAX_NODE_CHILDREN, MAX_NODE_PREFIXES,
};
use crate::bitset::BitSet;
use crate::node::Node;

impl<T> Node<T> {
    /// Does any prefix or sub-trie of this node overlap `(octet, prefix_len)`?
    ///
    /// `octet` must have its host bits cleared.
    pub(crate) fn overlaps_prefix(&self, octet: u8, prefix_len: u8) -> bool {
        // 1. the query is covered by a stored prefix
        let idx = prefix_to_base_index(octet, prefix_len);
        if self.lpm_by_index(idx).is_some() {
            return true;
        }

        // 2. the query covers a stored prefix. Only slots below the query in
        // the tree can qualify, and `idx` itself was just tested, so the
        // scan starts at its first child slot.
        let (lower, upper) = lower_upper_bound(idx);
        let mut from = idx << 1;
        while let Some(route) = self.prefix_bits.next_set(from) {
            let (route_lower, route_upper) = lower_upper_bound(route);
            if lower <= route_lower && route_upper <= upper {
                return true;
            }
            from = route + 1;
        }

        // 3. the query covers a child sub-trie
        let mut from = lower - FIRST_HOST_IDX;
        while let Some(child) = self.child_bits.next_set(from) {
            let child_idx = octet_to_base_index(child as u8);
            if child_idx >= lower && child_idx <= upper {
                return true;
            }
            from = child + 1;
        }

        false
    }

    /// Does any address match a prefix in both this sub-trie and `other`?
    ///
    /// Each side expands its stored prefixes to the host routes they cover
    /// (their allotment); two sides overlap iff an allotted host route, a
    /// descended octet, or a recursed child collides. The expansion walks
    /// both bitsets in lockstep so that a collision surfaces without
    /// expanding the larger side completely.
    pub(crate) fn overlaps(&self, other: &Node<T>) -> bool {
        // phase 1: route vs. route
        let mut self_allot = BitSet::with_capacity(MAX_NODE_PREFIXES);
        let mut other_allot = BitSet::with_capacity(MAX_NODE_PREFIXES);

        let mut self_more = self.has_prefixes();
        let mut other_more = other.has_prefixes();
        let mut self_from = 0;
        let mut other_from = 0;
        while self_more || other_more {
            if self_more {
                match self.prefix_bits.next_set(self_from) {
                    Some(idx) => {
                        let (lower, upper) = lower_upper_bound(idx);
                        for host in lower..=upper {
                            if other_allot.contains(host) {
                                return true;
                            }
                            self_allot.set(host);
                        }
                        self_from = idx + 1;
                    }
                    None => self_more = false,
                }
            }
            if other_more {
                match other.prefix_bits.next_set(other_from) {
                    Some(idx) => {
                        let (lower, upper) = lower_upper_bound(idx);
                        for host in lower..=upper {
                            if self_allot.contains(host) {
                                return true;
                            }
                            other_allot.set(host);
                        }
                        other_from = idx + 1;
                    }
                    None => other_more = false,
                }
            }
        }

        // both sides may have allotted the same host within one round, with
        // neither seeing the other's mark yet
        if self.has_prefixes() && other.has_prefixes() {
            for host in FIRST_HOST_IDX..=LAST_HOST_IDX {
                if self_allot.contains(host) && other_allot.contains(host) {
                    return true;
                }
            }
        }

        // phase 2: route vs. child
        let mut self_octets = BitSet::with_capacity(MAX_NODE_CHILDREN);
        let mut other_octets = BitSet::with_capacity(MAX_NODE_CHILDREN);

        self_more = self.has_children();
        other_more = other.has_children();
        self_from = 0;
        other_from = 0;
        while self_more || other_more {
            if self_more {
                match self.child_bits.next_set(self_from) {
                    Some(octet) => {
                        if other_allot.contains(octet + FIRST_HOST_IDX) {
                            return true;
                        }
                        self_octets.set(octet);
                        self_from = octet + 1;
                    }
                    None => self_more = false,
                }
            }
            if other_more {
                match other.child_bits.next_set(other_from) {
                    Some(octet) => {
                        if self_allot.contains(octet + FIRST_HOST_IDX) {
                            return true;
                        }
                        other_octets.set(octet);
                        other_from = octet + 1;
                    }
                    None => other_more = false,
                }
            }
        }

        // phase 3: child vs. child, recurse where both descend
        if self.has_children() && other.has_children() {
            let mut from = 0;
            while let Some(octet) = self_octets.next_set(from) {
                if other_octets.contains(octet) {
                    let octet = octet as u8;
                    if let (Some(self_child), Some(other_child)) =
                        (self.get_child(octet), other.get_child(octet))
                    {
                        if self_child.overlaps(other_child) {
                            return true;
                        }
                    }
                }
                from = octet + 1;
            }
        }

        false
    }
}
