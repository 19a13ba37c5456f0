//! The standard constraint library.

pub mod not_equal;
