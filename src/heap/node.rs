//! Arena node type shared by the heap pair and the FIFO ring.

/// Which bucket a node currently belongs to.
///
/// `Nan` nodes sit outside both heaps; their value is irrelevant to heap
/// order and is only read back when the window's NaN bucket is reported
/// empty/non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapTag {
    /// Resident of the lower-half max-heap.
    Max,
    /// Resident of the upper-half min-heap.
    Min,
    /// Excluded from both heaps; the window currently treats this slot as NaN.
    Nan,
}

/// Sentinel for [`HeapNode::next`] meaning "no successor yet" — only ever
/// observed on the single most-recently-admitted node while the window is
/// still filling.
pub const NO_NEXT: usize = usize::MAX;

/// One arena slot. Nodes are never freed individually; the arena (a flat
/// `Vec<HeapNode>` owned by the large-window engine) lives for the whole
/// call and every slot is reused in place once the window reaches `W`.
#[derive(Debug, Clone, Copy)]
pub struct HeapNode {
    /// The sample this node currently represents.
    pub value: f64,
    /// Whether `value` is a NaN (redundant with `tag == HeapTag::Nan`; kept
    /// as a hot-path shortcut so `update_old`'s busiest branch need not
    /// compare the tag enum).
    pub is_nan: bool,
    /// Which bucket owns this node.
    pub tag: HeapTag,
    /// This node's current index within whichever heap's index array holds
    /// it (meaningless while `tag == HeapTag::Nan`).
    pub heap_pos: usize,
    /// Index, in the arena, of the next-admitted node (FIFO ring link).
    /// `NO_NEXT` only while the window is still filling and this is the
    /// newest node.
    pub next: usize,
}

impl HeapNode {
    /// A freshly-zeroed slot, not yet assigned to any bucket.
    pub fn empty() -> Self {
        HeapNode {
            value: 0.0,
            is_nan: false,
            tag: HeapTag::Nan,
            heap_pos: 0,
            next: NO_NEXT,
        }
    }
}
