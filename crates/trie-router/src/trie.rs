//! Segment trie storage.
//!
//! One node per distinct path position. Literal segments are keyed by
//! their text; every parameter segment at a position shares the single
//! reserved parameter slot, so branching stays bounded no matter how
//! many parameter names are registered.

use std::collections::HashMap;

use crate::method::Method;
use crate::segment::Segment;

/// A position in the route tree.
#[derive(Debug, Clone)]
pub struct Node<H> {
    /// Literal edges.
    children: HashMap<String, Node<H>>,
    /// The reserved parameter edge.
    param: Option<Box<Node<H>>>,
    /// Binding name, set only on nodes reached through a parameter edge.
    param_name: Option<String>,
    /// Handlers in registration order. Non-empty iff a route ends here.
    handlers: Vec<(Method, H)>,
}

impl<H> Default for Node<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Node<H> {
    /// Creates an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            param: None,
            param_name: None,
            handlers: Vec::new(),
        }
    }

    /// Descends one level, creating the child if needed.
    ///
    /// A parameter segment always lands in the reserved slot and records
    /// its name there, replacing whatever name the slot had before.
    pub fn ensure_child(&mut self, segment: &Segment<'_>) -> &mut Self {
        match *segment {
            Segment::Literal(token) => self.children.entry(token.to_string()).or_default(),
            Segment::Param(name) => {
                let child = self.param.get_or_insert_with(Box::default);
                if child.param_name.as_deref() != Some(name) {
                    child.param_name = Some(name.to_string());
                }
                &mut **child
            }
        }
    }

    /// Exact lookup of a literal edge.
    #[must_use]
    pub fn literal_child(&self, token: &str) -> Option<&Self> {
        self.children.get(token)
    }

    /// Returns true if the reserved parameter slot is occupied.
    #[must_use]
    pub const fn has_param_child(&self) -> bool {
        self.param.is_some()
    }

    /// The node behind the reserved parameter slot.
    #[must_use]
    pub fn param_child(&self) -> Option<&Self> {
        self.param.as_deref()
    }

    /// The child a pattern segment would descend into, without creating it.
    #[must_use]
    pub fn child_for(&self, segment: &Segment<'_>) -> Option<&Self> {
        match *segment {
            Segment::Literal(token) => self.literal_child(token),
            Segment::Param(_) => self.param_child(),
        }
    }

    /// Name bound when this node is reached through a parameter edge.
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        self.param_name.as_deref()
    }

    /// Returns true if at least one route ends at this node.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !self.handlers.is_empty()
    }

    /// Sets the handler for `method`, returning the one it replaced.
    ///
    /// A replaced method keeps its original position in [`Node::methods`].
    pub fn set_handler(&mut self, method: Method, handler: H) -> Option<H> {
        let token = method.as_str();
        if let Some((_, slot)) = self.handlers.iter_mut().find(|(m, _)| m.as_str() == token) {
            return Some(std::mem::replace(slot, handler));
        }
        self.handlers.push((method, handler));
        None
    }

    /// Looks up the handler registered for a method token.
    #[must_use]
    pub fn handler(&self, method: &str) -> Option<&H> {
        self.handlers
            .iter()
            .find(|(m, _)| m.as_str() == method)
            .map(|(_, h)| h)
    }

    /// Registered methods, in registration order.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.handlers.iter().map(|(m, _)| m)
    }

    /// Appends every route at or below this node to `out`, as
    /// `(method, pattern, handler)`. `prefix` holds the segments leading here.
    pub(crate) fn collect_routes<'n>(
        &'n self,
        prefix: &mut Vec<String>,
        out: &mut Vec<(Method, String, &'n H)>,
    ) {
        if self.is_terminal() {
            let pattern = format!("/{}", prefix.join("/"));
            out.extend(
                self.handlers
                    .iter()
                    .map(|(m, h)| (m.clone(), pattern.clone(), h)),
            );
        }
        for (token, child) in &self.children {
            prefix.push(token.clone());
            child.collect_routes(prefix, out);
            prefix.pop();
        }
        if let Some(child) = self.param_child() {
            prefix.push(format!(":{}", child.param_name().unwrap_or_default()));
            child.collect_routes(prefix, out);
            prefix.pop();
        }
    }
}
