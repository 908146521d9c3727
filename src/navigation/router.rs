//! The router collaborator

use std::fmt;
use std::future::Future;

use super::url::ResolveError;

/// A client-side router the enhancer can wrap
///
/// Only the two operations the enhancer needs: navigate in place and
/// resolve a destination to an href.
pub trait Router {
    /// What `push` accepts: a path, a named route, ...
    type Location: fmt::Debug;
    /// What a completed navigation resolves to
    type Output;
    /// Navigation failure reported by the router
    type Error;

    /// Navigate to `to` in the current tab
    fn push(&self, to: Self::Location) -> impl Future<Output = Result<Self::Output, Self::Error>>;

    /// Resolve `to` to an href usable with `window.open`
    fn resolve(&self, to: &Self::Location) -> Result<String, ResolveError>;
}
