//! Extension trait for starting a [`Chain`] from an [`Option`].
//!
//! # Examples
//!
//! ```
//! use partial_chain::prelude::*;
//!
//! let chain = Some(5).into_chain();
//! assert_eq!(chain.value(), Some(&5));
//! ```

use crate::types::{Chain, SafetyLevel};

/// Conversion from [`Option`] into [`Chain`].
///
/// [`Chain::of`] requires a value to exist; this trait covers the caller
/// that starts from a lookup which may already have come back empty. A
/// `None` turns into an absent chain that still carries the requested
/// [`SafetyLevel`].
///
/// # Examples
///
/// ```
/// use partial_chain::{OptionExt, SafetyLevel};
///
/// let missing = None::<u32>.into_chain_with(SafetyLevel::NoneCheck);
/// assert_eq!(missing.value(), None);
/// assert_eq!(missing.safety_level(), SafetyLevel::NoneCheck);
/// ```
pub trait OptionExt<T> {
    /// Starts a chain with the default [`SafetyLevel::PanicCheck`], the
    /// same default as [`Chain::of`].
    fn into_chain(self) -> Chain<T>;

    /// Starts a chain with an explicit [`SafetyLevel`].
    fn into_chain_with(self, level: SafetyLevel) -> Chain<T>;
}

impl<T: 'static> OptionExt<T> for Option<T> {
    #[inline]
    fn into_chain(self) -> Chain<T> {
        self.into_chain_with(SafetyLevel::PanicCheck)
    }

    #[inline]
    fn into_chain_with(self, level: SafetyLevel) -> Chain<T> {
        match self {
            Some(value) => Chain::of_with(value, level),
            None => Chain::empty_with(level),
        }
    }
}
