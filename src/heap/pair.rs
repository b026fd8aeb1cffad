//! The max-heap / min-heap pair at the core of the large-window engine.
//!
//! Both heaps are 8-ary, stored as `Vec<usize>` arrays of arena node
//! indices (§9: "index-based node identity instead of raw address
//! arithmetic"). `HeapPair` never owns the node arena itself — every method
//! takes the arena as `&mut [HeapNode]` — so the large-window engine can
//! hold the arena and the pair as sibling fields without fighting the
//! borrow checker.

use super::node::{HeapNode, HeapTag};

const ARITY: usize = 8;

#[inline(always)]
fn parent_of(i: usize) -> usize {
    (i - 1) / ARITY
}

#[inline(always)]
fn first_child_of(i: usize) -> usize {
    ARITY * i + 1
}

/// The paired max-heap (lower half) and min-heap (upper half) over a shared
/// node arena. `max` and `min` each hold arena indices, sized up to `W` per
/// §9's pointer-array-sizing note (a NaN→finite transition can transiently
/// grow one heap beyond balance before the root-move step restores it).
#[derive(Debug, Clone)]
pub struct HeapPair {
    max: Vec<usize>,
    min: Vec<usize>,
}

impl HeapPair {
    /// Builds an empty pair with index arrays reserved to `w`.
    pub fn with_capacity(w: usize) -> Self {
        HeapPair {
            max: Vec::with_capacity(w),
            min: Vec::with_capacity(w),
        }
    }

    /// Number of resident nodes in the lower-half max-heap.
    pub fn max_len(&self) -> usize {
        self.max.len()
    }

    /// Number of resident nodes in the upper-half min-heap.
    pub fn min_len(&self) -> usize {
        self.min.len()
    }

    /// Arena index of the max-heap's root (the lower median candidate), if any.
    pub fn max_root(&self) -> Option<usize> {
        self.max.first().copied()
    }

    /// Arena index of the min-heap's root (the upper median candidate), if any.
    pub fn min_root(&self) -> Option<usize> {
        self.min.first().copied()
    }

    /// Which heap a new finite value should be admitted into, per the
    /// balance rule: if `|MAX| > |MIN|` push into MIN, else push into MAX.
    /// Returns `true` when the target is MAX.
    pub fn target_is_max(&self) -> bool {
        self.max.len() <= self.min.len()
    }

    /// Pushes `node_idx` onto the max-heap (if `is_max`) or the min-heap,
    /// tags it accordingly, and sifts it up into place.
    pub fn push(&mut self, nodes: &mut [HeapNode], node_idx: usize, is_max: bool) {
        let heap = if is_max { &mut self.max } else { &mut self.min };
        let pos = heap.len();
        heap.push(node_idx);
        nodes[node_idx].tag = if is_max { HeapTag::Max } else { HeapTag::Min };
        nodes[node_idx].heap_pos = pos;
        Self::sift_up_in(heap, nodes, is_max, pos);
    }

    /// Removes the node at `pos` within the heap selected by `is_max`,
    /// restoring heap order, and returns its arena index. Used both for
    /// popping a root (`pos == 0`) and for a class-transition removal at an
    /// arbitrary position.
    pub fn remove_at(&mut self, nodes: &mut [HeapNode], is_max: bool, pos: usize) -> usize {
        let heap = if is_max { &mut self.max } else { &mut self.min };
        let removed = heap[pos];
        let last = heap.len() - 1;
        heap.swap(pos, last);
        heap.pop();
        if pos < heap.len() {
            nodes[heap[pos]].heap_pos = pos;
            Self::fix_at_in(heap, nodes, is_max, pos);
        }
        removed
    }

    /// Pops the root of the heap selected by `is_max`.
    pub fn pop_root(&mut self, nodes: &mut [HeapNode], is_max: bool) -> usize {
        self.remove_at(nodes, is_max, 0)
    }

    /// Re-seats the node at `pos` after its value changed in place: tries
    /// sift-up first, and falls back to sift-down only if sift-up left it
    /// where it started. Equivalent to the spec's "sift toward the root if
    /// the value rose, toward the leaves if it fell" for every concrete
    /// heap/direction combination, without requiring the caller to reason
    /// about which heap (max or min) the node lives in.
    pub fn fix_at(&mut self, nodes: &mut [HeapNode], is_max: bool, pos: usize) {
        let heap = if is_max { &mut self.max } else { &mut self.min };
        Self::fix_at_in(heap, nodes, is_max, pos);
    }

    fn fix_at_in(heap: &mut [usize], nodes: &mut [HeapNode], is_max: bool, pos: usize) {
        let moved = Self::sift_up_in(heap, nodes, is_max, pos);
        if moved == pos {
            Self::sift_down_in(heap, nodes, is_max, pos);
        }
    }

    /// Swaps the two roots across heaps (exchanging their tags) and sifts
    /// each new root down, restoring `MAX.root.value <= MIN.root.value`.
    /// A no-op if either heap is empty or the invariant already holds.
    pub fn rebalance(&mut self, nodes: &mut [HeapNode]) {
        let (Some(max_root), Some(min_root)) = (self.max_root(), self.min_root()) else {
            return;
        };
        if nodes[max_root].value > nodes[min_root].value {
            self.max[0] = min_root;
            self.min[0] = max_root;
            nodes[min_root].tag = HeapTag::Max;
            nodes[max_root].tag = HeapTag::Min;
            nodes[min_root].heap_pos = 0;
            nodes[max_root].heap_pos = 0;
            Self::sift_down_in(&mut self.max, nodes, true, 0);
            Self::sift_down_in(&mut self.min, nodes, false, 0);
        }
    }

    /// Moves one root across heaps to restore `|MAX| - |MIN| <= 1` /
    /// `|MIN| <= |MAX|` after a removal unbalanced the pair: pops the
    /// surplus heap's root and pushes it into the deficit heap.
    pub fn move_root_across(&mut self, nodes: &mut [HeapNode], from_max: bool) {
        let idx = self.pop_root(nodes, from_max);
        self.push(nodes, idx, !from_max);
    }

    fn sift_up_in(heap: &mut [usize], nodes: &mut [HeapNode], is_max: bool, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = parent_of(pos);
            let child_val = nodes[heap[pos]].value;
            let parent_val = nodes[heap[parent]].value;
            let should_swap = if is_max {
                child_val > parent_val
            } else {
                child_val < parent_val
            };
            if !should_swap {
                break;
            }
            heap.swap(pos, parent);
            nodes[heap[pos]].heap_pos = pos;
            nodes[heap[parent]].heap_pos = parent;
            pos = parent;
        }
        pos
    }

    fn sift_down_in(heap: &mut [usize], nodes: &mut [HeapNode], is_max: bool, mut pos: usize) -> usize {
        let len = heap.len();
        loop {
            let first = first_child_of(pos);
            if first >= len {
                break;
            }
            let last = (first + ARITY).min(len);
            let mut best = first;
            for c in (first + 1)..last {
                let better = if is_max {
                    nodes[heap[c]].value > nodes[heap[best]].value
                } else {
                    nodes[heap[c]].value < nodes[heap[best]].value
                };
                if better {
                    best = c;
                }
            }
            let dominates = if is_max {
                nodes[heap[best]].value > nodes[heap[pos]].value
            } else {
                nodes[heap[best]].value < nodes[heap[pos]].value
            };
            if !dominates {
                break;
            }
            heap.swap(pos, best);
            nodes[heap[pos]].heap_pos = pos;
            nodes[heap[best]].heap_pos = best;
            pos = best;
        }
        pos
    }

    /// Checks heap-order invariants within each bucket and the cross-heap
    /// root ordering. Only ever called from `#[cfg(debug_assertions)]`
    /// code paths — see `LargeWindowEngine::debug_check_invariants`.
    #[cfg(debug_assertions)]
    pub fn check_heap_order(&self, nodes: &[HeapNode]) {
        Self::check_one(&self.max, nodes, true);
        Self::check_one(&self.min, nodes, false);
        if let (Some(max_root), Some(min_root)) = (self.max_root(), self.min_root()) {
            debug_assert!(
                nodes[max_root].value <= nodes[min_root].value,
                "max root {} > min root {}",
                nodes[max_root].value,
                nodes[min_root].value
            );
        }
        debug_assert!(
            self.max.len() as isize - self.min.len() as isize == 0
                || self.max.len() as isize - self.min.len() as isize == 1,
            "heap size imbalance: max={}, min={}",
            self.max.len(),
            self.min.len()
        );
    }

    #[cfg(debug_assertions)]
    fn check_one(heap: &[usize], nodes: &[HeapNode], is_max: bool) {
        for pos in 0..heap.len() {
            debug_assert_eq!(nodes[heap[pos]].heap_pos, pos, "stale heap_pos at {pos}");
            let first = first_child_of(pos);
            for c in first..(first + ARITY).min(heap.len()) {
                let ok = if is_max {
                    nodes[heap[pos]].value >= nodes[heap[c]].value
                } else {
                    nodes[heap[pos]].value <= nodes[heap[c]].value
                };
                debug_assert!(ok, "heap order violated at parent {pos}, child {c}");
            }
        }
    }
}
