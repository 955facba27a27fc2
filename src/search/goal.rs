//! Goal specification
//!
//! A search goal is either a literal node or a predicate over nodes. Both
//! resolve to a single [`GoalPredicate`] before the search loop starts, so
//! the loop never has to care which one the caller supplied.

use super::callbacks::goal_fn;
use super::error::CallbackError;
use super::traits::GoalPredicate;
use crate::graph::NodeId;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// What the search is looking for
#[derive(Clone)]
pub enum GoalSpec {
    /// Exactly this node
    Exact(NodeId),
    /// Any node the predicate accepts
    Predicate(Arc<dyn GoalPredicate>),
}

impl GoalSpec {
    /// Goal matching the canonical id of `node`
    pub fn exact(node: impl fmt::Display) -> Self {
        Self::Exact(NodeId::of(node))
    }

    pub fn predicate(predicate: impl GoalPredicate + 'static) -> Self {
        Self::Predicate(Arc::new(predicate))
    }

    /// Goal from a synchronous closure
    pub fn when<F>(f: F) -> Self
    where
        F: Fn(&NodeId) -> bool + Send + Sync + 'static,
    {
        Self::predicate(goal_fn(f))
    }

    /// Normalize into a uniform predicate
    pub fn resolve(self) -> Arc<dyn GoalPredicate> {
        match self {
            Self::Exact(id) => Arc::new(ExactMatch(id)),
            Self::Predicate(predicate) => predicate,
        }
    }
}

impl fmt::Debug for GoalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(id) => f.debug_tuple("Exact").field(id).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl fmt::Display for GoalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(id) => write!(f, "{}", id),
            Self::Predicate(_) => f.write_str("<predicate>"),
        }
    }
}

impl From<NodeId> for GoalSpec {
    fn from(id: NodeId) -> Self {
        Self::Exact(id)
    }
}

impl From<&NodeId> for GoalSpec {
    fn from(id: &NodeId) -> Self {
        Self::Exact(id.clone())
    }
}

impl From<&str> for GoalSpec {
    fn from(id: &str) -> Self {
        Self::Exact(id.into())
    }
}

impl From<String> for GoalSpec {
    fn from(id: String) -> Self {
        Self::Exact(id.into())
    }
}

impl From<Arc<dyn GoalPredicate>> for GoalSpec {
    fn from(predicate: Arc<dyn GoalPredicate>) -> Self {
        Self::Predicate(predicate)
    }
}

/// Accepts exactly one node id
#[derive(Debug, Clone)]
pub struct ExactMatch(pub NodeId);

#[async_trait]
impl GoalPredicate for ExactMatch {
    async fn is_goal(&self, node: &NodeId) -> Result<bool, CallbackError> {
        Ok(&self.0 == node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn exact_goal_matches_only_its_node() {
        let goal = GoalSpec::from("b").resolve();
        assert!(goal.is_goal(&"b".into()).await.unwrap());
        assert!(!goal.is_goal(&"a".into()).await.unwrap());
    }

    #[tokio::test]
    async fn exact_goal_coerces_to_string_form() {
        let goal = GoalSpec::exact(7).resolve();
        assert!(goal.is_goal(&NodeId::from("7")).await.unwrap());
    }

    #[tokio::test]
    async fn predicate_goal_resolves_to_itself() {
        let goal = GoalSpec::when(|node| node.as_str().starts_with('d')).resolve();
        assert!(goal.is_goal(&"d".into()).await.unwrap());
        assert!(!goal.is_goal(&"e".into()).await.unwrap());
    }

    #[test]
    fn display_forms() {
        assert_eq!(GoalSpec::from("f").to_string(), "f");
        assert_eq!(GoalSpec::when(|_| true).to_string(), "<predicate>");
    }
}
