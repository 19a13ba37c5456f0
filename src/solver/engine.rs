use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::{
    error::ValidationError,
    solver::{
        constraint::{Assignment, Constraint},
        value::{Value, Variable},
    },
};

pub type ConstraintId = usize;

/// Counters describing one [`Csp::search`] call.
///
/// Owned by the call and returned to the caller rather than accumulated in
/// shared state, so repeated searches never contaminate each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Candidate `(variable, value)` extensions attempted.
    pub nodes: u64,
    /// Branches abandoned after exhausting a variable's domain.
    pub backtracks: u64,
}

/// A single constraint satisfaction problem instance.
///
/// A `Csp` owns the ordered variable list, the candidate domain of every
/// variable, and the registered constraints together with an index from each
/// variable to the constraints touching it. It is built once per solve
/// attempt and discarded afterwards.
///
/// [`search`](Csp::search) runs a deterministic depth-first backtracking
/// search: variables are branched on in the order they were supplied at
/// construction, values are tried in domain order, and the only pruning is a
/// local consistency check of the tentative binding against the constraints
/// registered for the branching variable. There is no propagation, no
/// dynamic reordering, and no memoization, which keeps runs reproducible.
#[derive(Debug)]
pub struct Csp<V: Variable, D: Value> {
    variables: Vec<V>,
    domains: HashMap<V, Vec<D>>,
    constraints: Vec<Box<dyn Constraint<V, D>>>,
    index: HashMap<V, Vec<ConstraintId>>,
}

impl<V: Variable, D: Value> Csp<V, D> {
    /// Creates an instance over `variables` with the given candidate
    /// domains.
    ///
    /// Every variable must carry a non-empty domain: a missing entry is a
    /// [`ValidationError::MissingDomain`] and an empty one a
    /// [`ValidationError::EmptyDomain`]. An empty domain makes the problem
    /// trivially unsatisfiable, so it is rejected here instead of ever
    /// reaching the search.
    pub fn new(variables: Vec<V>, domains: HashMap<V, Vec<D>>) -> Result<Self, ValidationError> {
        for var in &variables {
            match domains.get(var) {
                None => return Err(ValidationError::MissingDomain(format!("{var:?}"))),
                Some(domain) if domain.is_empty() => {
                    return Err(ValidationError::EmptyDomain(format!("{var:?}")))
                }
                Some(_) => {}
            }
        }
        Ok(Self {
            variables,
            domains,
            constraints: Vec::new(),
            index: HashMap::new(),
        })
    }

    /// Registers `constraint` against every variable it mentions.
    ///
    /// Fails with [`ValidationError::UnknownVariable`] if the constraint
    /// mentions a variable the instance does not know about.
    pub fn add_constraint(
        &mut self,
        constraint: Box<dyn Constraint<V, D>>,
    ) -> Result<(), ValidationError> {
        for var in constraint.variables() {
            if !self.domains.contains_key(var) {
                return Err(ValidationError::UnknownVariable(format!("{var:?}")));
            }
        }
        let id: ConstraintId = self.constraints.len();
        for var in constraint.variables() {
            self.index.entry(var.clone()).or_default().push(id);
        }
        self.constraints.push(constraint);
        Ok(())
    }

    /// The variables of this instance, in branching order.
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// The number of registered constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Attempts to find an assignment satisfying every constraint.
    ///
    /// Returns `(Some(assignment), stats)` with a complete assignment if one
    /// exists, or `(None, stats)` once the search space is exhausted. An
    /// unsatisfiable instance is a normal outcome, not an error.
    pub fn search(&self) -> (Option<Assignment<V, D>>, SearchStats) {
        let mut stats = SearchStats::default();
        let solution = self.backtrack(Assignment::new(), &mut stats);
        debug!(
            nodes = stats.nodes,
            backtracks = stats.backtracks,
            solved = solution.is_some(),
            "search finished"
        );
        (solution, stats)
    }

    fn backtrack(
        &self,
        assignment: Assignment<V, D>,
        stats: &mut SearchStats,
    ) -> Option<Assignment<V, D>> {
        // Base case: every variable is bound.
        if assignment.len() == self.variables.len() {
            return Some(assignment);
        }

        // Fixed variable ordering: the first unassigned variable in
        // construction order.
        let Some(var) = self.variables.iter().find(|v| !assignment.contains_key(*v)) else {
            // Unreachable while the completeness check above holds, but we
            // handle it.
            return Some(assignment);
        };

        for value in &self.domains[var] {
            stats.nodes += 1;
            let guess = assignment.update(var.clone(), value.clone());
            if self.is_consistent(var, &guess) {
                if let Some(found) = self.backtrack(guess, stats) {
                    // Short-circuit: the first solution wins, remaining
                    // values are never tried.
                    return Some(found);
                }
            }
        }

        // Every value for `var` failed; this branch is a dead end.
        stats.backtracks += 1;
        None
    }

    /// Checks the tentative assignment against every constraint registered
    /// for `var`. Constraints with unbound variables report no violation, so
    /// this amounts to consistency against the already-fixed neighbours.
    fn is_consistent(&self, var: &V, assignment: &Assignment<V, D>) -> bool {
        match self.index.get(var) {
            Some(ids) => ids
                .iter()
                .all(|&id| self.constraints[id].satisfied(assignment)),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use crate::{
        error::ValidationError,
        solver::constraints::not_equal::NotEqualConstraint,
    };

    use super::Csp;

    fn not_equal(a: &'static str, b: &'static str) -> Box<NotEqualConstraint<&'static str, i64>> {
        Box::new(NotEqualConstraint::new(a, b))
    }

    #[test]
    fn missing_domain_is_rejected() {
        let domains = HashMap::from([("a", vec![1i64])]);
        let err = Csp::new(vec!["a", "b"], domains).unwrap_err();
        assert_eq!(err, ValidationError::MissingDomain("\"b\"".to_string()));
    }

    #[test]
    fn empty_domain_is_rejected_before_any_search() {
        let domains = HashMap::from([("a", vec![1i64]), ("b", vec![])]);
        let err = Csp::new(vec!["a", "b"], domains).unwrap_err();
        assert_eq!(err, ValidationError::EmptyDomain("\"b\"".to_string()));
    }

    #[test]
    fn constraint_over_unknown_variable_is_rejected() {
        let domains = HashMap::from([("a", vec![1i64])]);
        let mut csp = Csp::new(vec!["a"], domains).unwrap();
        let err = csp.add_constraint(not_equal("a", "z")).unwrap_err();
        assert_eq!(err, ValidationError::UnknownVariable("\"z\"".to_string()));
        assert_eq!(csp.constraint_count(), 0);
    }

    #[test]
    fn forced_not_equal_is_solved() {
        let _ = tracing_subscriber::fmt::try_init();

        let domains = HashMap::from([("a", vec![1i64, 2]), ("b", vec![1i64])]);
        let mut csp = Csp::new(vec!["a", "b"], domains).unwrap();
        csp.add_constraint(not_equal("a", "b")).unwrap();

        let (solution, _stats) = csp.search();
        let solution = solution.unwrap();
        assert_eq!(solution.get("a"), Some(&2));
        assert_eq!(solution.get("b"), Some(&1));
    }

    #[test]
    fn fully_assigned_consistent_instance_is_returned_unchanged() {
        let domains = HashMap::from([("a", vec![1i64]), ("b", vec![2i64]), ("c", vec![3i64])]);
        let mut csp = Csp::new(vec!["a", "b", "c"], domains).unwrap();
        csp.add_constraint(not_equal("a", "b")).unwrap();
        csp.add_constraint(not_equal("b", "c")).unwrap();

        let (solution, stats) = csp.search();
        let solution = solution.unwrap();
        assert_eq!(solution.get("a"), Some(&1));
        assert_eq!(solution.get("b"), Some(&2));
        assert_eq!(solution.get("c"), Some(&3));
        assert_eq!(stats.backtracks, 0);
        // One node per variable: each singleton is bound exactly once.
        assert_eq!(stats.nodes, 3);
    }

    #[test]
    fn exhausted_search_space_reports_no_solution() {
        let domains = HashMap::from([("a", vec![1i64]), ("b", vec![1i64])]);
        let mut csp = Csp::new(vec!["a", "b"], domains).unwrap();
        csp.add_constraint(not_equal("a", "b")).unwrap();

        let (solution, stats) = csp.search();
        assert!(solution.is_none());
        assert!(stats.backtracks > 0);
    }

    #[test]
    fn search_is_deterministic() {
        let build = || {
            let domains = HashMap::from([
                ("a", vec![3i64, 1, 2]),
                ("b", vec![2i64, 3]),
                ("c", vec![1i64, 2, 3]),
            ]);
            let mut csp = Csp::new(vec!["a", "b", "c"], domains).unwrap();
            csp.add_constraint(not_equal("a", "b")).unwrap();
            csp.add_constraint(not_equal("b", "c")).unwrap();
            csp.add_constraint(not_equal("a", "c")).unwrap();
            csp
        };

        let (first, first_stats) = build().search();
        let (second, second_stats) = build().search();
        assert_eq!(first, second);
        assert_eq!(first_stats, second_stats);

        // Domain order decides ties: `a` keeps its first candidate.
        let first = first.unwrap();
        assert_eq!(first.get("a"), Some(&3));
        assert_eq!(first.get("b"), Some(&2));
        assert_eq!(first.get("c"), Some(&1));
    }

    #[test]
    fn unconstrained_variables_take_their_first_candidate() {
        let domains = HashMap::from([("a", vec![7i64, 8]), ("b", vec![9i64, 7])]);
        let csp = Csp::new(vec!["a", "b"], domains).unwrap();

        let (solution, stats) = csp.search();
        let solution = solution.unwrap();
        assert_eq!(solution.get("a"), Some(&7));
        assert_eq!(solution.get("b"), Some(&9));
        assert_eq!(stats.nodes, 2);
    }
}
