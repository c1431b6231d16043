//! Match outcomes.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::handler::Handler;
use crate::method::Method;
use crate::params::PathParams;

/// Outcome class of a match, numbered after the HTTP status it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// A handler was found for the method and path.
    Ok,
    /// No registered route has this path shape.
    NotFound,
    /// The path shape is registered, but not for this method.
    MethodNotAllowed,
}

impl Status {
    /// The HTTP status code.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
        }
    }

    /// The HTTP reason phrase.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

/// Result of [`Router::match_route`](crate::Router::match_route).
///
/// Borrows the matched handler from the router.
#[derive(Debug)]
pub struct Match<'r, H> {
    /// Outcome class.
    pub status: Status,
    /// The handler; present iff `status` is [`Status::Ok`].
    pub handler: Option<&'r H>,
    /// Bindings collected along the walk. Always empty for [`Status::NotFound`].
    pub params: PathParams,
    /// Human-readable description of the outcome.
    pub message: String,
    /// Methods registered at the matched node, in registration order;
    /// non-empty iff `status` is [`Status::MethodNotAllowed`].
    pub allowed_methods: Vec<Method>,
}

impl<'r, H> Match<'r, H> {
    pub(crate) fn found(handler: &'r H, params: PathParams) -> Self {
        Self {
            status: Status::Ok,
            handler: Some(handler),
            params,
            message: "Route matched successfully".to_string(),
            allowed_methods: Vec::new(),
        }
    }

    pub(crate) fn not_found(path: &str) -> Self {
        Self {
            status: Status::NotFound,
            handler: None,
            params: PathParams::new(),
            message: format!("Route '{path}' not found"),
            allowed_methods: Vec::new(),
        }
    }

    pub(crate) fn method_not_allowed(
        method: &str,
        path: &str,
        params: PathParams,
        allowed_methods: Vec<Method>,
    ) -> Self {
        Self {
            status: Status::MethodNotAllowed,
            handler: None,
            params,
            message: format!("Method '{method}' not allowed for route '{path}'"),
            allowed_methods,
        }
    }

    /// Returns true for [`Status::Ok`].
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Value for an `Allow` response header, e.g. `GET, POST`.
    #[must_use]
    pub fn allow_header(&self) -> String {
        self.allowed_methods
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Owned, serializable view of this outcome.
    #[must_use]
    pub fn report(&self) -> MatchReport
    where
        H: fmt::Display,
    {
        MatchReport {
            status: self.status,
            handler: self.handler.map(ToString::to_string),
            params: self.params.clone(),
            message: self.message.clone(),
            allowed_methods: self.allowed_methods.clone(),
        }
    }
}

impl<H: Handler> Match<'_, H> {
    /// Calls the matched handler with the bound parameters.
    ///
    /// Returns `None` unless the match succeeded.
    #[must_use]
    pub fn invoke(&self) -> Option<H::Output> {
        self.handler.map(|h| h.call(&self.params))
    }
}

impl<H> Clone for Match<'_, H> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            handler: self.handler,
            params: self.params.clone(),
            message: self.message.clone(),
            allowed_methods: self.allowed_methods.clone(),
        }
    }
}

/// Two matches are equal when every field is, and the handlers are the
/// same registered value.
impl<H> PartialEq for Match<'_, H> {
    fn eq(&self, other: &Self) -> bool {
        let same_handler = match (self.handler, other.handler) {
            (Some(a), Some(b)) => std::ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_handler
            && self.status == other.status
            && self.params == other.params
            && self.message == other.message
            && self.allowed_methods == other.allowed_methods
    }
}

/// Serializable match outcome with the handler rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    /// Numeric status code.
    pub status: Status,
    /// The handler's display form, for successful matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
    /// Bound parameters.
    pub params: PathParams,
    /// Human-readable description.
    pub message: String,
    /// Allowed methods for 405 outcomes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_methods: Vec<Method>,
}
