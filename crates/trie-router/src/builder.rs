//! Route registration.

use tracing::{debug, warn};

use crate::config::{ParamConflict, RouterConfig};
use crate::error::{Result, RouterError};
use crate::method::Method;
use crate::router::Router;
use crate::segment::Segment;
use crate::trie::Node;

/// Collects routes and compiles them into an immutable [`Router`].
///
/// Registering the same method and path shape twice keeps the last
/// handler.
#[derive(Debug)]
pub struct RouterBuilder<H> {
    root: Node<H>,
    config: RouterConfig,
    route_count: usize,
    /// First refused registration, reported by `build`.
    error: Option<RouterError>,
}

impl<H> Default for RouterBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouterBuilder<H> {
    /// Creates an empty builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Creates an empty builder.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            root: Node::new(),
            config,
            route_count: 0,
            error: None,
        }
    }

    /// Registers `handler` for `method` on `pattern`.
    ///
    /// Segments starting with `:` are named parameters. Leading and
    /// trailing slashes are ignored; `/` and the empty string both
    /// register the root.
    pub fn add_route(&mut self, method: impl Into<Method>, pattern: &str, handler: H) -> &mut Self {
        let method = method.into();
        let segments = Segment::parse_pattern(pattern);

        for (existing, requested) in self.param_conflicts(&segments) {
            match self.config.param_conflict {
                ParamConflict::Overwrite => {
                    warn!(%method, pattern, %existing, %requested, "Renaming parameter slot");
                }
                ParamConflict::Reject => {
                    warn!(%method, pattern, %existing, %requested, "Refusing conflicting parameter name");
                    self.error.get_or_insert(RouterError::ParamConflict {
                        pattern: pattern.to_string(),
                        existing,
                        requested,
                    });
                    return self;
                }
            }
        }

        let mut node = &mut self.root;
        for segment in &segments {
            node = node.ensure_child(segment);
        }

        if node.set_handler(method.clone(), handler).is_some() {
            warn!(%method, pattern, "Replacing existing handler");
        } else {
            self.route_count += 1;
        }
        debug!(%method, pattern, "Registered route");
        self
    }

    /// Adds a route with any method.
    #[must_use]
    pub fn route(mut self, method: impl Into<Method>, pattern: &str, handler: H) -> Self {
        self.add_route(method, pattern, handler);
        self
    }

    /// Adds a GET route.
    #[must_use]
    pub fn get(self, pattern: &str, handler: H) -> Self {
        self.route(Method::Get, pattern, handler)
    }

    /// Adds a POST route.
    #[must_use]
    pub fn post(self, pattern: &str, handler: H) -> Self {
        self.route(Method::Post, pattern, handler)
    }

    /// Adds a PUT route.
    #[must_use]
    pub fn put(self, pattern: &str, handler: H) -> Self {
        self.route(Method::Put, pattern, handler)
    }

    /// Adds a PATCH route.
    #[must_use]
    pub fn patch(self, pattern: &str, handler: H) -> Self {
        self.route(Method::Patch, pattern, handler)
    }

    /// Adds a DELETE route.
    #[must_use]
    pub fn delete(self, pattern: &str, handler: H) -> Self {
        self.route(Method::Delete, pattern, handler)
    }

    /// Adds a HEAD route.
    #[must_use]
    pub fn head(self, pattern: &str, handler: H) -> Self {
        self.route(Method::Head, pattern, handler)
    }

    /// Adds an OPTIONS route.
    #[must_use]
    pub fn options(self, pattern: &str, handler: H) -> Self {
        self.route(Method::Options, pattern, handler)
    }

    /// Ends the build phase.
    ///
    /// # Errors
    ///
    /// Returns the first refused registration when the builder was
    /// configured with [`ParamConflict::Reject`].
    pub fn build(self) -> Result<Router<H>> {
        if let Some(err) = self.error {
            return Err(err);
        }
        debug!(routes = self.route_count, "Router built");
        Ok(Router::new(self.root, self.route_count))
    }

    /// Parameter slots along `segments` whose recorded name differs from
    /// the one requested, as `(existing, requested)` pairs.
    fn param_conflicts(&self, segments: &[Segment<'_>]) -> Vec<(String, String)> {
        let mut conflicts = Vec::new();
        let mut node = &self.root;
        for segment in segments {
            let Some(child) = node.child_for(segment) else {
                break;
            };
            if let (Segment::Param(requested), Some(existing)) = (segment, child.param_name()) {
                if existing != *requested {
                    conflicts.push((existing.to_string(), (*requested).to_string()));
                }
            }
            node = child;
        }
        conflicts
    }
}
