//! Compiled router and request matching.

use tracing::debug;

use crate::builder::RouterBuilder;
use crate::method::Method;
use crate::outcome::Match;
use crate::params::PathParams;
use crate::segment::split_path;
use crate::trie::Node;

/// An immutable route tree produced by [`RouterBuilder::build`].
///
/// Matching only reads the tree, so a `Router` can be shared between
/// threads (e.g. behind an `Arc`) once built.
#[derive(Debug, Clone)]
pub struct Router<H> {
    root: Node<H>,
    route_count: usize,
}

impl<H> Router<H> {
    pub(crate) const fn new(root: Node<H>, route_count: usize) -> Self {
        Self { root, route_count }
    }

    /// Starts a new build phase.
    #[must_use]
    pub fn builder() -> RouterBuilder<H> {
        RouterBuilder::new()
    }

    /// Matches a request method and path.
    ///
    /// At each level a literal edge beats the parameter edge; there is no
    /// backtracking. The outcome is one of:
    /// - [`Status::Ok`](crate::Status::Ok) with the handler and bindings,
    /// - [`Status::NotFound`](crate::Status::NotFound) when the path leaves
    ///   the tree or stops at a node where no route ends,
    /// - [`Status::MethodNotAllowed`](crate::Status::MethodNotAllowed) with
    ///   the bindings and the methods registered for that path.
    ///
    /// # Example
    ///
    /// ```
    /// use trie_router::{RouterBuilder, Status};
    ///
    /// let router = RouterBuilder::new()
    ///     .get("/user/:id", "show_user")
    ///     .build()
    ///     .unwrap();
    ///
    /// let m = router.match_route("GET", "/user/42");
    /// assert_eq!(m.status, Status::Ok);
    /// assert_eq!(m.params.get("id"), Some("42"));
    ///
    /// let m = router.match_route("POST", "/user/42");
    /// assert_eq!(m.status, Status::MethodNotAllowed);
    /// assert_eq!(m.allow_header(), "GET");
    /// ```
    #[must_use]
    pub fn match_route(&self, method: impl AsRef<str>, path: &str) -> Match<'_, H> {
        let method = method.as_ref();
        let mut node = &self.root;
        let mut params = PathParams::new();

        for segment in split_path(path) {
            if let Some(child) = node.literal_child(segment) {
                node = child;
            } else if let Some(child) = node.param_child() {
                if let Some(name) = child.param_name() {
                    params.insert(name, segment);
                }
                node = child;
            } else {
                debug!(method, path, segment, "No route");
                return Match::not_found(path);
            }
        }

        if !node.is_terminal() {
            debug!(method, path, "Path is a prefix, not a route");
            return Match::not_found(path);
        }

        let Some(handler) = node.handler(method) else {
            debug!(method, path, "Method not allowed");
            return Match::method_not_allowed(method, path, params, node.methods().cloned().collect());
        };
        debug!(method, path, "Matched route");
        Match::found(handler, params)
    }

    /// Number of distinct method and path shape registrations.
    #[must_use]
    pub const fn route_count(&self) -> usize {
        self.route_count
    }

    /// Every registered route as `(method, pattern, handler)`, sorted by
    /// pattern. Methods sharing a pattern keep their registration order.
    #[must_use]
    pub fn routes(&self) -> Vec<(Method, String, &H)> {
        let mut out = Vec::with_capacity(self.route_count);
        self.root.collect_routes(&mut Vec::new(), &mut out);
        out.sort_by(|a, b| a.1.cmp(&b.1));
        out
    }
}
