//! A self-adjusting binary search tree where recently accessed entries migrate to the root.
//!
//! # Examples
//!
//! ```
//! use splay_collections::splay_tree::SplayTree;
//!
//! let mut tree = SplayTree::new();
//! tree.insert(1, "a");
//! tree.insert(2, "b");
//! tree.insert(0, "c");
//!
//! assert_eq!(tree.root(), Some((&0, &"c")));
//! assert_eq!(tree.search(&2), Some(&"b"));
//! assert_eq!(tree.root(), Some((&2, &"b")));
//! ```

mod entry;
pub mod splay_tree;
