//! Construction shorthand for [`Chain`](crate::Chain).

/// Starts a [`Chain`](crate::Chain) from a root value.
///
/// `chain!(root)` expands to [`Chain::of`](crate::Chain::of), and
/// `chain!(root, level)` to [`Chain::of_with`](crate::Chain::of_with).
///
/// # Examples
///
/// ```
/// use partial_chain::{chain, SafetyLevel};
///
/// let defaulted = chain!(10);
/// assert_eq!(defaulted.safety_level(), SafetyLevel::PanicCheck);
///
/// let strict = chain!(10, SafetyLevel::None);
/// assert_eq!(strict.safety_level(), SafetyLevel::None);
/// ```
#[macro_export]
macro_rules! chain {
    ($root:expr $(,)?) => {
        $crate::Chain::of($root)
    };
    ($root:expr, $level:expr $(,)?) => {
        $crate::Chain::of_with($root, $level)
    };
}
