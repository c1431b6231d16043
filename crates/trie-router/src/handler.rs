//! Handler abstraction.
//!
//! The router stores handlers as opaque values and never calls them. A
//! caller that wants to dispatch a successful match can use any type
//! implementing [`Handler`]; plain closures taking `&PathParams` qualify.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::params::PathParams;

/// Something invokable with the bound path parameters.
pub trait Handler: Send + Sync {
    /// What a call produces.
    type Output;

    /// Calls the handler.
    fn call(&self, params: &PathParams) -> Self::Output;
}

impl<F, O> Handler for F
where
    F: Fn(&PathParams) -> O + Send + Sync,
{
    type Output = O;

    fn call(&self, params: &PathParams) -> O {
        self(params)
    }
}

/// A boxed async handler.
pub type AsyncHandler<T> = Arc<dyn Fn(PathParams) -> BoxFuture<'static, T> + Send + Sync>;

/// Boxes an async function so routes with different future types can
/// share one router.
///
/// ```
/// use trie_router::{async_handler, AsyncHandler, RouterBuilder};
///
/// let router = RouterBuilder::<AsyncHandler<String>>::new()
///     .get("/user/:id", async_handler(|params| async move {
///         format!("User: {}", params.get("id").unwrap_or("unknown"))
///     }))
///     .build()
///     .unwrap();
/// assert!(router.match_route("GET", "/user/7").is_ok());
/// ```
#[must_use]
pub fn async_handler<F, Fut, T>(handler: F) -> AsyncHandler<T>
where
    F: Fn(PathParams) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = T> + Send + 'static,
{
    Arc::new(move |params| Box::pin(handler(params)))
}
