use crate::solver::value::{Value, Variable};

/// A partial mapping from variables to values.
///
/// Backed by a persistent map so that each search branch can extend its own
/// copy cheaply through structural sharing; sibling branches never observe
/// each other's bindings.
pub type Assignment<V, D> = im::HashMap<V, D>;

/// A rule restricting the joint values of a fixed, ordered set of variables.
pub trait Constraint<V: Variable, D: Value>: std::fmt::Debug {
    /// The variables this constraint restricts, in declaration order.
    fn variables(&self) -> &[V];

    /// Whether the constraint holds under `assignment`.
    ///
    /// Must be a pure function of its inputs. While any of the constraint's
    /// variables is still unbound the answer is `true`; a violation is only
    /// ever reported once every mentioned variable carries a value.
    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool;
}
