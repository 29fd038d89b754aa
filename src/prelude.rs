//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use partial_chain::prelude::*;
//! ```
//!
//! # Examples
//!
//! ```
//! use partial_chain::prelude::*;
//!
//! let chain = chain!(2, SafetyLevel::NoneCheck).map(|n| n.map(|n| n * 2));
//! assert_eq!(chain.value(), Some(&4));
//! ```

// Macros
pub use crate::chain;

// Core types
pub use crate::types::{Chain, SafetyLevel};

// Traits
pub use crate::traits::OptionExt;
