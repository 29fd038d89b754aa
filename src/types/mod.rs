//! Core chaining types.
//!
//! [`Chain`] is the value container, [`SafetyLevel`] selects how a failing
//! link is handled, and the iterator types expose the final state as a
//! 0-or-1-element sequence.
//!
//! # Examples
//!
//! ```
//! use partial_chain::{Chain, SafetyLevel};
//!
//! let chain = Chain::of_with(1, SafetyLevel::NoneCheck)
//!     .map(|n| n.map(|n| n + 1));
//!
//! assert_eq!(chain.value(), Some(&2));
//! ```

pub mod chain;
pub mod iter;
pub mod safety_level;

pub use chain::*;
pub use iter::*;
pub use safety_level::*;
