//! Closure adapters for the collaborator traits
//!
//! The `*_fn` constructors wrap plain synchronous closures; the
//! `*_async_fn` constructors wrap closures returning futures, which may fail.

use super::error::CallbackError;
use super::traits::{EdgeCost, EdgeSource, GoalPredicate, Heuristic};
use crate::graph::{GraphEdge, NodeId};
use async_trait::async_trait;
use std::future::Future;

/// Wraps a synchronous closure as a callback
#[derive(Clone)]
pub struct SyncFn<F>(F);

/// Wraps a closure returning a future as a callback
#[derive(Clone)]
pub struct AsyncFn<F>(F);

impl<F> std::fmt::Debug for SyncFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SyncFn")
    }
}

impl<F> std::fmt::Debug for AsyncFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AsyncFn")
    }
}

/// Edge source from `Fn(&NodeId) -> Vec<E>`
pub fn edges_fn<E, F>(f: F) -> SyncFn<F>
where
    F: Fn(&NodeId) -> Vec<E> + Send + Sync + 'static,
{
    SyncFn(f)
}

/// Edge source from `Fn(NodeId) -> impl Future<Output = Result<Vec<E>, _>>`
pub fn edges_async_fn<E, F, Fut>(f: F) -> AsyncFn<F>
where
    F: Fn(NodeId) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<E>, CallbackError>> + Send + 'static,
{
    AsyncFn(f)
}

/// Heuristic from `Fn(&NodeId, &NodeId) -> f64`
pub fn heuristic_fn<F>(f: F) -> SyncFn<F>
where
    F: Fn(&NodeId, &NodeId) -> f64 + Send + Sync + 'static,
{
    SyncFn(f)
}

/// Heuristic from `Fn(NodeId, NodeId) -> impl Future<Output = Result<f64, _>>`
pub fn heuristic_async_fn<F, Fut>(f: F) -> AsyncFn<F>
where
    F: Fn(NodeId, NodeId) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<f64, CallbackError>> + Send + 'static,
{
    AsyncFn(f)
}

/// Edge cost from `Fn(&E) -> f64`
pub fn cost_fn<E, F>(f: F) -> SyncFn<F>
where
    F: Fn(&E) -> f64 + Send + Sync + 'static,
{
    SyncFn(f)
}

/// Edge cost from `Fn(E) -> impl Future<Output = Result<f64, _>>`
pub fn cost_async_fn<E, F, Fut>(f: F) -> AsyncFn<F>
where
    F: Fn(E) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<f64, CallbackError>> + Send + 'static,
{
    AsyncFn(f)
}

/// Goal predicate from `Fn(&NodeId) -> bool`
pub fn goal_fn<F>(f: F) -> SyncFn<F>
where
    F: Fn(&NodeId) -> bool + Send + Sync + 'static,
{
    SyncFn(f)
}

/// Goal predicate from `Fn(NodeId) -> impl Future<Output = Result<bool, _>>`
pub fn goal_async_fn<F, Fut>(f: F) -> AsyncFn<F>
where
    F: Fn(NodeId) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<bool, CallbackError>> + Send + 'static,
{
    AsyncFn(f)
}

#[async_trait]
impl<E, F> EdgeSource<E> for SyncFn<F>
where
    E: GraphEdge,
    F: Fn(&NodeId) -> Vec<E> + Send + Sync + 'static,
{
    async fn exit_arcs(&self, node: &NodeId) -> Result<Vec<E>, CallbackError> {
        Ok((self.0)(node))
    }
}

#[async_trait]
impl<E, F, Fut> EdgeSource<E> for AsyncFn<F>
where
    E: GraphEdge,
    F: Fn(NodeId) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<E>, CallbackError>> + Send + 'static,
{
    async fn exit_arcs(&self, node: &NodeId) -> Result<Vec<E>, CallbackError> {
        (self.0)(node.clone()).await
    }
}

#[async_trait]
impl<F> Heuristic for SyncFn<F>
where
    F: Fn(&NodeId, &NodeId) -> f64 + Send + Sync + 'static,
{
    async fn estimate(&self, from: &NodeId, to: &NodeId) -> Result<f64, CallbackError> {
        Ok((self.0)(from, to))
    }
}

#[async_trait]
impl<F, Fut> Heuristic for AsyncFn<F>
where
    F: Fn(NodeId, NodeId) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<f64, CallbackError>> + Send + 'static,
{
    async fn estimate(&self, from: &NodeId, to: &NodeId) -> Result<f64, CallbackError> {
        (self.0)(from.clone(), to.clone()).await
    }
}

#[async_trait]
impl<E, F> EdgeCost<E> for SyncFn<F>
where
    E: GraphEdge,
    F: Fn(&E) -> f64 + Send + Sync + 'static,
{
    async fn cost(&self, edge: &E) -> Result<f64, CallbackError> {
        Ok((self.0)(edge))
    }
}

#[async_trait]
impl<E, F, Fut> EdgeCost<E> for AsyncFn<F>
where
    E: GraphEdge,
    F: Fn(E) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<f64, CallbackError>> + Send + 'static,
{
    async fn cost(&self, edge: &E) -> Result<f64, CallbackError> {
        (self.0)(edge.clone()).await
    }
}

#[async_trait]
impl<F> GoalPredicate for SyncFn<F>
where
    F: Fn(&NodeId) -> bool + Send + Sync + 'static,
{
    async fn is_goal(&self, node: &NodeId) -> Result<bool, CallbackError> {
        Ok((self.0)(node))
    }
}

#[async_trait]
impl<F, Fut> GoalPredicate for AsyncFn<F>
where
    F: Fn(NodeId) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<bool, CallbackError>> + Send + 'static,
{
    async fn is_goal(&self, node: &NodeId) -> Result<bool, CallbackError> {
        (self.0)(node.clone()).await
    }
}
