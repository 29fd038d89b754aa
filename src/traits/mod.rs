//! Extension traits for building chains from standard types.

pub mod option_ext;

pub use option_ext::*;
