//! Arena-backed 8-ary heap pair and FIFO ring used by the large-window
//! engine (`crate::large_window`).

pub mod node;
pub mod pair;
pub mod ring;

pub use node::{HeapNode, HeapTag};
pub use pair::HeapPair;
pub use ring::Ring;
