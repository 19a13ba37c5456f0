use std::marker::PhantomData;

use crate::solver::{
    constraint::{Assignment, Constraint},
    value::{Value, Variable},
};

/// Requires two variables to take distinct values.
#[derive(Debug, Clone)]
pub struct NotEqualConstraint<V: Variable, D: Value> {
    vars: [V; 2],
    _marker: PhantomData<D>,
}

impl<V: Variable, D: Value> NotEqualConstraint<V, D> {
    pub fn new(a: V, b: V) -> Self {
        Self {
            vars: [a, b],
            _marker: PhantomData,
        }
    }
}

impl<V: Variable, D: Value> Constraint<V, D> for NotEqualConstraint<V, D> {
    fn variables(&self) -> &[V] {
        &self.vars
    }

    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        match (assignment.get(&self.vars[0]), assignment.get(&self.vars[1])) {
            (Some(a), Some(b)) => a != b,
            // At least one side is still unbound; nothing is violated yet.
            _ => true,
        }
    }
}
