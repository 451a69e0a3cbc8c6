//! Tree walking and the sentinel rules.
//!
//! - **`tree`**: what can be walked (`MaskTree`, `Maskable`) and the std container impls
//! - **`mapper`**: what happens at a leaf (`SecretMapper`, `SentinelMapper`)
//!
//! Leaf registration lives in `crate::leaf`, variant resolution in `crate::resolver`.

mod mapper;
mod tree;

pub use mapper::{Mode, SecretMapper, SentinelMapper, MASKED_SECRET};
pub use tree::{MaskTree, Maskable};
