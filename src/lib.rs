//! A chaining container similar to [`Option`] that handles long call
//! chains, where one step builds on the previous one, without checking
//! every link along the way.
//!
//! Given the call chain
//!
//! ```text
//! let plan = account.subscription().plan().name();
//! ```
//!
//! where any link may come back empty, `Option` combinators already avoid
//! the manual checks. Two things set [`Chain`] apart from the plain
//! `Option` version:
//!
//! 1. when a link fails, `Option` collapses to `None` and everything the
//!    earlier links produced is lost, while [`Chain`] keeps the last good
//!    payload around as its *partial value*;
//! 2. a panicking step tears the `Option` version down, while a chain
//!    running under [`SafetyLevel::PanicCheck`] absorbs the panic and
//!    degrades to an absent value instead.
//!
//! # Examples
//!
//! ## Partial value retention
//!
//! ```
//! use partial_chain::{Chain, SafetyLevel};
//!
//! let chain = Chain::of_with(2_u32, SafetyLevel::NoneCheck)
//!     .map(|n| n.map(|n| n + 1))
//!     .map(|_| None::<u32>)
//!     .map(|n| n.map(|n| n * 10));
//!
//! // The chain failed in the middle, the first step's result survived.
//! assert_eq!(chain.value(), None);
//! assert_eq!(
//!     chain.partial().and_then(|p| p.downcast_ref::<u32>()),
//!     Some(&3),
//! );
//! ```
//!
//! ## Panic absorption
//!
//! ```
//! use partial_chain::Chain;
//!
//! let chain = Chain::of(String::from("config"))
//!     .map(|_: Option<&String>| -> Option<String> { panic!("parse failure") });
//!
//! assert_eq!(chain.value(), None);
//! assert_eq!(
//!     chain
//!         .partial()
//!         .and_then(|p| p.downcast_ref::<String>())
//!         .map(String::as_str),
//!     Some("config"),
//! );
//! ```

/// Construction macro for chains
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for building chains from standard types
pub mod traits;
/// Chain container, safety levels and iterators
pub mod types;

pub use traits::*;
pub use types::{Chain, Iter, PartialIter, SafetyLevel};
