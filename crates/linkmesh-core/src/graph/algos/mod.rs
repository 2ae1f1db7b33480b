//! Path search implementations
//!
//! Both searches enumerate simple paths depth-first with backtracking and
//! keep the cheapest one:
//! - `recursive`: on the call stack
//! - `iterative`: on an explicit frame stack, for graphs too deep to recurse
//! - `shared`: visited stack, branch bookkeeping and counters

pub mod iterative;
pub mod recursive;
pub mod shared;

pub use shared::{Branch, SearchStats, VisitedStack};
