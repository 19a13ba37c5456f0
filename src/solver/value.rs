/// The base trait for any type used to identify a variable.
///
/// Variables are opaque to the engine: all it relies on is that they can be
/// cloned, compared, hashed, and printed in diagnostics. This is a marker
/// trait, so any type satisfying the bounds implements `Variable`.
pub trait Variable: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> Variable for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}

/// The base trait for any value that can appear in a variable's domain.
///
/// A marker trait like [`Variable`]; the engine never interprets values, it
/// only binds and compares them.
pub trait Value: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> Value for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
