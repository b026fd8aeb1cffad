//! Double-heap streaming median engine for windows wider than the
//! sorting-network threshold (`w > 8`).
//!
//! Combines the arena, [`crate::heap::HeapPair`] and [`crate::heap::Ring`]
//! from [`crate::heap`] into the admit/update/result state machine from the
//! component design: a max-heap over the lower half of the window, a
//! min-heap over the upper half, and a NaN bucket that both policies
//! consult only when reporting the result.

use crate::classify::{classify, ValueClass};
use crate::heap::{HeapNode, HeapPair, HeapTag, Ring};
use crate::NanPolicy;

/// Streaming median engine backed by a paired max-heap/min-heap over a
/// fixed node arena, for window widths above the small-window threshold.
///
/// Only finite values (including `±∞`) ever occupy a heap slot; NaNs are
/// tracked solely by count. This means the heaps always hold exactly the
/// `k = w - nan_count` valid values of the current window, so
/// [`LargeWindowEngine::result`] realizes both [`NanPolicy`] variants from
/// the same heap state — Poison just refuses to read it while any NaN is
/// present.
pub struct LargeWindowEngine {
    w: usize,
    policy: NanPolicy,
    nodes: Vec<HeapNode>,
    pair: HeapPair,
    ring: Ring,
    nan_count: usize,
    filled: usize,
}

impl LargeWindowEngine {
    /// Builds an engine for window width `w` (expected `w > 8`, though
    /// nothing here requires it beyond the ring's own `w >= 2` requirement)
    /// and the given NaN policy. Allocates the full arena and both index
    /// arrays up front; no further allocation happens once admission
    /// starts.
    pub fn new(w: usize, policy: NanPolicy) -> Self {
        LargeWindowEngine {
            w,
            policy,
            nodes: Vec::with_capacity(w),
            pair: HeapPair::with_capacity(w),
            ring: Ring::new(w),
            nan_count: 0,
            filled: 0,
        }
    }

    /// Window width this engine was built for.
    pub fn window(&self) -> usize {
        self.w
    }

    /// `true` once `w` values have been admitted and the engine has
    /// switched from `add_new` to `update_old`.
    pub fn is_full(&self) -> bool {
        self.filled >= self.w
    }

    /// Admits `v`, dispatching to [`Self::add_new`] while filling or
    /// [`Self::update_old`] once full. Convenience wrapper so callers don't
    /// need to track the FILLING/FULL state machine themselves.
    pub fn admit(&mut self, v: f64) {
        if self.is_full() {
            self.update_old(v);
        } else {
            self.add_new(v);
        }
    }

    /// Pre-steady-state admission: allocates the next arena slot for `v`.
    ///
    /// # Panics
    /// Panics (debug builds) if the window is already full.
    pub fn add_new(&mut self, v: f64) {
        debug_assert!(!self.is_full(), "add_new called on a full window");

        let node_idx = self.nodes.len();
        self.nodes.push(HeapNode::empty());
        self.ring.link_new_head(&mut self.nodes, node_idx);
        self.nodes[node_idx].value = v;

        match classify(v) {
            ValueClass::Nan => {
                self.nodes[node_idx].is_nan = true;
                self.nodes[node_idx].tag = HeapTag::Nan;
                self.nan_count += 1;
            }
            _ => {
                self.nodes[node_idx].is_nan = false;
                let target_max = self.pair.target_is_max();
                self.pair.push(&mut self.nodes, node_idx, target_max);
            }
        }

        if self.filled > 0 {
            self.pair.rebalance(&mut self.nodes);
        }
        self.filled += 1;
        self.debug_check_invariants();
    }

    /// Steady-state admission: evicts the ring's tail, reuses its slot for
    /// `v`, and routes the transition through one of the four class cases
    /// from the component design (NaN→NaN, NaN→finite, finite→NaN,
    /// finite→finite).
    pub fn update_old(&mut self, v: f64) {
        debug_assert!(self.is_full(), "update_old called before the window filled");

        let node_idx = self.ring.advance(&mut self.nodes);
        let old_tag = self.nodes[node_idx].tag;
        let new_class = classify(v);

        match (old_tag, new_class) {
            (HeapTag::Nan, ValueClass::Nan) => {
                self.nodes[node_idx].value = v;
            }
            (HeapTag::Nan, _) => {
                self.nan_count -= 1;
                self.nodes[node_idx].value = v;
                self.nodes[node_idx].is_nan = false;
                let target_max = self.pair.target_is_max();
                self.pair.push(&mut self.nodes, node_idx, target_max);
                self.pair.rebalance(&mut self.nodes);
            }
            (_, ValueClass::Nan) => {
                let is_max = old_tag == HeapTag::Max;
                let pos = self.nodes[node_idx].heap_pos;
                self.pair.remove_at(&mut self.nodes, is_max, pos);
                self.nodes[node_idx].tag = HeapTag::Nan;
                self.nodes[node_idx].is_nan = true;
                self.nodes[node_idx].value = v;
                self.nan_count += 1;

                let max_len = self.pair.max_len() as isize;
                let min_len = self.pair.min_len() as isize;
                if max_len > min_len + 1 {
                    self.pair.move_root_across(&mut self.nodes, true);
                } else if min_len > max_len {
                    self.pair.move_root_across(&mut self.nodes, false);
                }
                self.pair.rebalance(&mut self.nodes);
            }
            (_, _) => {
                let is_max = old_tag == HeapTag::Max;
                self.nodes[node_idx].value = v;
                self.nodes[node_idx].is_nan = false;
                let pos = self.nodes[node_idx].heap_pos;
                self.pair.fix_at(&mut self.nodes, is_max, pos);
                self.pair.rebalance(&mut self.nodes);
            }
        }
        self.debug_check_invariants();
    }

    /// Computes the median of the current window under this engine's
    /// [`NanPolicy`].
    pub fn result(&self) -> f64 {
        if self.policy == NanPolicy::Poison && self.nan_count > 0 {
            return f64::NAN;
        }
        if self.pair.max_len() == 0 {
            // Either the window is all-NaN (Exclude with k == 0), or it
            // hasn't admitted anything finite yet.
            return f64::NAN;
        }
        if self.pair.max_len() != self.pair.min_len() {
            let root = self.pair.max_root().expect("max_len > 0");
            self.nodes[root].value
        } else {
            let max_root = self.pair.max_root().expect("max_len > 0");
            let min_root = self.pair.min_root().expect("min_len == max_len > 0");
            0.5 * (self.nodes[max_root].value + self.nodes[min_root].value)
        }
    }

    /// Estimated peak memory for a window of width `w`, per §4.F: the
    /// engine struct itself, plus both heaps' index arrays sized to `w`
    /// each (§9's pointer-array-sizing note), plus the `w`-slot node
    /// arena. A pure diagnostic/capacity-planning function; it does not
    /// drive a custom allocator.
    pub fn est_mem(w: usize) -> usize {
        std::mem::size_of::<Self>()
            + 2 * w * std::mem::size_of::<usize>()
            + w * std::mem::size_of::<HeapNode>()
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        self.pair.check_heap_order(&self.nodes);
        debug_assert_eq!(
            self.pair.max_len() + self.pair.min_len() + self.nan_count,
            self.filled.min(self.w)
        );
    }

    #[cfg(not(debug_assertions))]
    fn debug_check_invariants(&self) {}
}
