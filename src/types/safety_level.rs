use std::panic::{self, AssertUnwindSafe};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Failure-handling strategy for a single mapper invocation.
///
/// The level stored on a [`Chain`](crate::Chain) governs every
/// [`map`](crate::Chain::map) call made through it.
/// [`map_with`](crate::Chain::map_with) swaps the strategy for one call
/// without touching the stored level, and
/// [`flat_map`](crate::Chain::flat_map) ignores it entirely for its own
/// invocation.
///
/// # Examples
///
/// ```
/// use partial_chain::{Chain, SafetyLevel};
///
/// let chain = Chain::of_with("root", SafetyLevel::NoneCheck);
/// assert_eq!(chain.safety_level(), SafetyLevel::NoneCheck);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SafetyLevel {
    /// No protection at all.
    ///
    /// The mapper runs directly against the current state, absent or not,
    /// and anything it raises unwinds straight to the caller. Basically the
    /// same as not chaining in the first place.
    None,
    /// Skips the mapper whenever the input is absent.
    ///
    /// Covers `get().get().get()` style chains where any link may come back
    /// empty, without checking the result after each step. Offers no panic
    /// protection when the input is present.
    NoneCheck,
    /// Absorbs any panic raised while the mapper runs.
    ///
    /// The mapper is still invoked on absent input; unwrapping it panics,
    /// and that panic is converted into an absent result, so this level
    /// also degrades gracefully in every situation
    /// [`SafetyLevel::NoneCheck`] covers. Only unwinding panics are caught:
    /// aborts such as stack overflow, out of memory, or any panic in a
    /// `panic = "abort"` build still terminate the process.
    PanicCheck,
}

impl SafetyLevel {
    /// Runs `mapper` against `input` under this level's protection.
    pub(crate) fn check<T, R, F>(self, mapper: F, input: Option<&T>) -> Option<R>
    where
        F: FnOnce(Option<&T>) -> Option<R>,
    {
        match self {
            Self::None => mapper(input),
            Self::NoneCheck => match input {
                Some(_) => mapper(input),
                None => None,
            },
            Self::PanicCheck => {
                match panic::catch_unwind(AssertUnwindSafe(move || mapper(input))) {
                    Ok(result) => result,
                    Err(_payload) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            panic = panic_message(_payload.as_ref()),
                            "mapper panicked, continuing with an absent value"
                        );
                        None
                    },
                }
            },
        }
    }
}

#[cfg(feature = "tracing")]
fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "opaque panic payload"
    }
}
