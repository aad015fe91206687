//! Ordered associative containers built on a probabilistic skip list:
//! sets, multisets and maps whose elements can be accessed, inserted and
//! removed in `O(log n)` expected time while staying sorted at all times.
//!
//! Conceptually, a skip list is arranged as follows:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ----------> <tail>
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ----------> <tail>
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] -> <tail>
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] -> <tail>
//! ```
//!
//! Every element lives on the bottom lane (lane 0), which is a doubly
//! linked sorted list, and each element randomly participates in some of
//! the faster lanes above.  A search starts at the head on the highest
//! occupied lane and drops down a lane each time the next step would
//! overshoot, so it skips most of the list instead of visiting every
//! element.
//!
//! Three containers share this engine:
//!
//! - [`SkipSet`]: an ordered set of unique elements,
//! - [`SkipMultiSet`]: an ordered multiset in which equivalent elements
//!   may coexist,
//! - [`SkipMap`]: an ordered map with unique keys.
//!
//! All three offer bidirectional iteration and [`Cursor`]s: copyable
//! positions that keep following their element across unrelated
//! insertions and removals.
//!
//! # Safety
//!
//! The containers rely on a well-behaved comparison function.
//! Specifically, given some ordering function `f(a, b)`, it **must**
//! satisfy the following properties:
//!
//! - Be well defined: `f(a, b)` should always return the same value.
//! - Be anti-symmetric: `f(a, b) == Greater` if and only if `f(b, a) ==
//!   Less`, and `f(a, b) == Equal == f(b, a)`.
//! - Be transitive: if `f(a, b) == Greater` and `f(b, c) == Greater` then
//!   `f(a, c) == Greater`.
//!
//! A function violating these properties never causes memory unsafety,
//! since the node graph is held in a checked arena, but the resulting
//! element order is unspecified and elements may become unfindable.

// In this crate, a 'lane' is one of the linked lists stacked in the
// diagram above, with lane 0 the bottom one holding every element.  The
// 'level' of a node is the highest lane it participates in.

#![warn(missing_docs)]

pub mod level_generator;
pub mod multiset;
pub mod skipmap;
pub mod skipset;

mod base;
mod iter;
mod node;

pub use crate::base::Cursor;
pub use crate::multiset::SkipMultiSet;
pub use crate::skipmap::SkipMap;
pub use crate::skipset::SkipSet;
