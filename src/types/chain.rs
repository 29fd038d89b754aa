use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::types::SafetyLevel;

/// A chaining container similar to [`Option`] that keeps the last good
/// intermediate value when a later link fails.
///
/// Each call to [`map`](Chain::map) or [`flat_map`](Chain::flat_map)
/// produces a brand-new `Chain`; the receiver is never mutated and can be
/// reused. Alongside the current value, every chain carries a loosely typed
/// *partial value*: the most recent payload any link produced. A failing
/// step empties the value but leaves the partial value in place, so the
/// caller can still inspect how far the chain got.
///
/// How a failing step is handled is decided by the chain's
/// [`SafetyLevel`], fixed when the root is built and inherited by every
/// derived chain.
///
/// # Examples
///
/// ```
/// use partial_chain::{Chain, SafetyLevel};
///
/// let chain = Chain::of_with(2_u32, SafetyLevel::NoneCheck)
///     .map(|n| n.map(|n| n + 1))
///     .map(|_| None::<u32>)
///     .map(|n| n.map(|n| n * 10));
///
/// // The final value is gone, the last good link is not.
/// assert_eq!(chain.value(), None);
/// let partial = chain.partial().and_then(|p| p.downcast_ref::<u32>());
/// assert_eq!(partial, Some(&3));
/// ```
#[must_use]
pub struct Chain<T> {
    /// Currently stored link payload.
    value: Option<Rc<T>>,
    /// Last non-absent payload, only replaced when a link produces a value.
    partial: Option<Rc<dyn Any>>,
    /// Safety level of the chain.
    level: SafetyLevel,
}

impl<T> Chain<T> {
    /// Starts a chain from a root value with the default
    /// [`SafetyLevel::PanicCheck`] protection.
    ///
    /// The root becomes both the current value and the partial value.
    ///
    /// # Examples
    ///
    /// ```
    /// use partial_chain::{Chain, SafetyLevel};
    ///
    /// let chain = Chain::of(42);
    /// assert_eq!(chain.value(), Some(&42));
    /// assert_eq!(chain.safety_level(), SafetyLevel::PanicCheck);
    /// ```
    #[inline]
    pub fn of(root: T) -> Self
    where
        T: 'static,
    {
        Self::of_with(root, SafetyLevel::PanicCheck)
    }

    /// Starts a chain from a root value with an explicit [`SafetyLevel`].
    ///
    /// # Examples
    ///
    /// ```
    /// use partial_chain::{Chain, SafetyLevel};
    ///
    /// let chain = Chain::of_with("root", SafetyLevel::None);
    /// assert_eq!(chain.value(), Some(&"root"));
    /// assert_eq!(chain.safety_level(), SafetyLevel::None);
    /// ```
    pub fn of_with(root: T, level: SafetyLevel) -> Self
    where
        T: 'static,
    {
        let value = Rc::new(root);
        Self {
            partial: Some(value.clone() as Rc<dyn Any>),
            value: Some(value),
            level,
        }
    }

    /// Creates a completely empty chain.
    ///
    /// Both the value and the partial value are absent and the stored level
    /// is [`SafetyLevel::NoneCheck`], so mapping over an empty chain stays
    /// absent instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use partial_chain::Chain;
    ///
    /// let empty = Chain::<u32>::empty();
    /// assert_eq!(empty.value(), None);
    /// assert!(empty.partial().is_none());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self::empty_with(SafetyLevel::NoneCheck)
    }

    /// Creates an empty chain with an explicit stored [`SafetyLevel`].
    ///
    /// This is the absent counterpart of [`Chain::of_with`], for callers
    /// that start from a value they may not have.
    #[inline]
    pub const fn empty_with(level: SafetyLevel) -> Self {
        Self { value: None, partial: None, level }
    }

    /// Applies `mapper` to the current value under the chain's own stored
    /// [`SafetyLevel`] and builds the next chain from the result.
    ///
    /// The mapper receives the current state as an [`Option`], absent state
    /// included; whether it ever sees `None` depends on the active level.
    /// A `Some` result becomes both the value and the partial value of the
    /// new chain. A `None` result (or an absorbed panic) produces a chain
    /// with an absent value that still carries the receiver's partial
    /// value. The stored level is inherited either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use partial_chain::Chain;
    ///
    /// let doubled = Chain::of(21).map(|n| n.map(|n| n * 2));
    /// assert_eq!(doubled.value(), Some(&42));
    ///
    /// let failed = doubled.map(|_| None::<i32>);
    /// assert_eq!(failed.value(), None);
    /// assert_eq!(
    ///     failed.partial().and_then(|p| p.downcast_ref::<i32>()),
    ///     Some(&42),
    /// );
    /// ```
    #[inline]
    pub fn map<R, F>(&self, mapper: F) -> Chain<R>
    where
        R: 'static,
        F: FnOnce(Option<&T>) -> Option<R>,
    {
        self.map_with(mapper, self.level)
    }

    /// Applies `mapper` like [`Chain::map`], but under `level` instead of
    /// the stored [`SafetyLevel`].
    ///
    /// The override governs only this invocation. The resulting chain still
    /// inherits the receiver's stored level.
    ///
    /// # Examples
    ///
    /// ```
    /// use partial_chain::{Chain, SafetyLevel};
    ///
    /// let chain = Chain::of_with(7, SafetyLevel::None);
    ///
    /// // One shielded step in an otherwise unprotected chain.
    /// let next = chain.map_with(
    ///     |_: Option<&i32>| -> Option<i32> { panic!("flaky step") },
    ///     SafetyLevel::PanicCheck,
    /// );
    ///
    /// assert_eq!(next.value(), None);
    /// assert_eq!(next.safety_level(), SafetyLevel::None);
    /// ```
    pub fn map_with<R, F>(&self, mapper: F, level: SafetyLevel) -> Chain<R>
    where
        R: 'static,
        F: FnOnce(Option<&T>) -> Option<R>,
    {
        match level.check(mapper, self.value.as_deref()) {
            Some(result) => Chain::of_with(result, self.level),
            None => self.partial_chain(),
        }
    }

    /// Maps the current value onto an independently built chain, without
    /// wrapping it into another chain.
    ///
    /// When the current value is absent, `mapper` is not invoked at all and
    /// the receiver's partial value and level carry over. When it is
    /// present, `mapper` runs with no safety protection whatsoever and the
    /// chain it returns replaces the receiver entirely, stored level
    /// included.
    ///
    /// # Examples
    ///
    /// ```
    /// use partial_chain::Chain;
    ///
    /// let chain = Chain::of(2).flat_map(|n| Chain::of(n + 1));
    /// assert_eq!(chain.value(), Some(&3));
    /// ```
    pub fn flat_map<R, F>(&self, mapper: F) -> Chain<R>
    where
        F: FnOnce(&T) -> Chain<R>,
    {
        match self.value.as_deref() {
            Some(value) => mapper(value),
            None => self.partial_chain(),
        }
    }

    /// Returns the current value, absent or not. Never panics.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_deref()
    }

    /// Returns the partial value, absent or not. Never panics.
    ///
    /// The payload is loosely typed because the partial value may come from
    /// any earlier link of the chain; downcast it at the use site.
    ///
    /// # Examples
    ///
    /// ```
    /// use partial_chain::Chain;
    ///
    /// let chain = Chain::of(String::from("kept")).map(|_| None::<u32>);
    ///
    /// let partial = chain.partial().and_then(|p| p.downcast_ref::<String>());
    /// assert_eq!(partial.map(String::as_str), Some("kept"));
    /// ```
    #[must_use]
    #[inline]
    pub fn partial(&self) -> Option<&dyn Any> {
        self.partial.as_deref()
    }

    /// Returns the stored safety level.
    #[must_use]
    #[inline]
    pub const fn safety_level(&self) -> SafetyLevel {
        self.level
    }

    /// Builds the failed successor: absent value, inherited partial value
    /// and level. Having a partial value is not guaranteed here, the chain
    /// may never have held one.
    fn partial_chain<R>(&self) -> Chain<R> {
        Chain {
            value: None,
            partial: self.partial.clone(),
            level: self.level,
        }
    }
}

impl<T> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            partial: self.partial.clone(),
            level: self.level,
        }
    }
}

impl<T> Default for Chain<T> {
    /// Equivalent to [`Chain::empty`].
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("value", &self.value.as_deref())
            .field("partial", &self.partial.as_ref().map(|_| "<dyn Any>"))
            .field("level", &self.level)
            .finish()
    }
}
