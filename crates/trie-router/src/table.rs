//! JSON route tables.
//!
//! A route table names its handlers instead of carrying code, which is
//! enough to check how requests would be routed:
//!
//! ```json
//! {
//!   "config": { "param_conflict": "reject" },
//!   "routes": [
//!     { "method": "GET", "path": "/user/:id", "handler": "show_user" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::builder::RouterBuilder;
use crate::config::RouterConfig;
use crate::error::Result;
use crate::method::Method;
use crate::router::Router;

/// One registration in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Method token.
    pub method: Method,
    /// Route pattern.
    pub path: String,
    /// Handler name.
    pub handler: String,
}

/// A list of named routes plus the configuration to register them with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    /// Registration settings.
    #[serde(default)]
    pub config: RouterConfig,
    /// Routes, registered in order.
    pub routes: Vec<RouteEntry>,
}

impl RouteTable {
    /// Parses a route table from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Json`](crate::RouterError::Json) if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a route table file.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Io`](crate::RouterError::Io) if the file can't be read and
    /// [`RouterError::Json`](crate::RouterError::Json) if its contents don't parse, the same as
    /// [`RouteTable::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_json(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), routes = table.routes.len(), "Loaded route table");
        Ok(table)
    }

    /// Registers every entry, in order, on a builder using the table's
    /// configuration.
    #[must_use]
    pub fn into_builder(self) -> RouterBuilder<String> {
        let mut builder = RouterBuilder::with_config(self.config);
        for entry in self.routes {
            builder.add_route(entry.method, &entry.path, entry.handler);
        }
        builder
    }

    /// Builds a router from this table.
    ///
    /// # Errors
    ///
    /// Propagates registration errors from [`RouterBuilder::build`].
    pub fn build(self) -> Result<Router<String>> {
        self.into_builder().build()
    }
}
