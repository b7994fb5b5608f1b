//! Multiplicity Ledger — per-pair support counts with a time-ordered
//! expiry index.
//!
//! Every in-window post that contains a pair contributes one *support*
//! for it. An edge exists in the graph exactly while its pair has at
//! least one support; the ledger tells the engine when a pair crosses
//! into or out of existence.

use crate::types::{Pair, Timestamp};
use std::cmp::Reverse;
use std::collections::binary_heap::PeekMut;
use std::collections::{BinaryHeap, HashMap};

/// Counts how many currently-in-window posts support each tag pair.
///
/// Alongside the multiplicity map the ledger keeps a min-ordered index
/// of `(timestamp, pair)` supports, so one eviction round pops exactly
/// the supports that fell below the floor instead of scanning the whole
/// ledger. The stalest support always sits at the front.
#[derive(Debug, Clone, Default)]
pub struct PairLedger {
    multiplicities: HashMap<Pair, u32>,
    expiry: BinaryHeap<Reverse<(Timestamp, Pair)>>,
}

impl PairLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one support for `pair`. Returns true when this was the
    /// pair's first in-window support, i.e. its edge must be created.
    pub fn add_support(&mut self, pair: &Pair, timestamp: Timestamp) -> bool {
        self.expiry.push(Reverse((timestamp, pair.clone())));
        match self.multiplicities.get_mut(pair) {
            Some(multiplicity) => {
                *multiplicity += 1;
                false
            }
            None => {
                self.multiplicities.insert(pair.clone(), 1);
                true
            }
        }
    }

    /// Drop every support with a timestamp strictly below `floor` and
    /// return the pairs whose multiplicity reached zero — their edges no
    /// longer have any in-window evidence.
    ///
    /// A repeated call with the same floor is a no-op.
    pub fn expire_before(&mut self, floor: Timestamp) -> Vec<Pair> {
        let mut exhausted = Vec::new();

        while let Some(entry) = self.expiry.peek_mut() {
            let Reverse((timestamp, _)) = &*entry;
            if *timestamp >= floor {
                break;
            }
            let Reverse((_, pair)) = PeekMut::pop(entry);

            if self.remove_support(&pair) {
                exhausted.push(pair);
            }
        }

        exhausted
    }

    /// Withdraw one support from a pair. Returns true when the entry was
    /// exhausted and deleted.
    fn remove_support(&mut self, pair: &Pair) -> bool {
        let Some(multiplicity) = self.multiplicities.get_mut(pair) else {
            return false;
        };
        *multiplicity -= 1;
        if *multiplicity == 0 {
            self.multiplicities.remove(pair);
            return true;
        }
        false
    }

    /// Current support count for a pair (0 when untracked).
    pub fn multiplicity(&self, pair: &Pair) -> u32 {
        self.multiplicities.get(pair).copied().unwrap_or(0)
    }

    /// Number of pairs with at least one in-window support.
    pub fn tracked_pairs(&self) -> usize {
        self.multiplicities.len()
    }

    /// Number of supports currently held in the expiry index.
    pub fn live_supports(&self) -> usize {
        self.expiry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.multiplicities.is_empty()
    }
}
