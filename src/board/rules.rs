//! Rule-set configuration passed to every move query.

use once_cell::sync::Lazy;

use super::filters::{DefenderStrategy, Shield};
use super::types::EdgePolicy;

static STANDARD_RULES: Lazy<Rules> = Lazy::new(Rules::default);

/// Edge handling plus the ordered defender strategies.
///
/// The default rule set wraps at the side edges like plain index arithmetic
/// and registers [`Shield`].
///
/// ```
/// use powerup_chess::{Board, EdgePolicy, Rules};
///
/// let rules = Rules::default().with_edge_policy(EdgePolicy::Bounded);
/// let board = Board::standard();
/// assert_eq!(rules.moves(1, &board), vec![18, 16]);
/// ```
#[derive(Debug)]
pub struct Rules {
    pub(crate) edge_policy: EdgePolicy,
    pub(crate) strategies: Vec<Box<dyn DefenderStrategy>>,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            edge_policy: EdgePolicy::default(),
            strategies: vec![Box::new(Shield)],
        }
    }
}

impl Rules {
    /// Shared default rule set, built on first use.
    #[must_use]
    pub fn standard() -> &'static Rules {
        &STANDARD_RULES
    }

    #[must_use]
    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// Append a defender strategy after the ones already registered.
    #[must_use]
    pub fn with_strategy<S>(mut self, strategy: S) -> Self
    where
        S: DefenderStrategy + 'static,
    {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Drop every registered strategy, Shield included.
    #[must_use]
    pub fn without_strategies(mut self) -> Self {
        self.strategies.clear();
        self
    }

    #[inline]
    #[must_use]
    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge_policy
    }

    #[must_use]
    pub fn strategies(&self) -> &[Box<dyn DefenderStrategy>] {
        &self.strategies
    }
}
