//! # trie-router
//!
//! HTTP-style route matching on a segment trie.
//!
//! This crate provides:
//! - Route registration with `:name` path parameters
//! - Matching of a method and path to a handler, with bound parameters
//! - Distinct outcomes for "no such route" (404) and "route exists, wrong
//!   method" (405), the latter listing the allowed methods
//! - A build phase ([`RouterBuilder`]) separate from the read-only serving
//!   phase ([`Router`])
//!
//! ## Quick Start
//!
//! ```
//! use trie_router::{PathParams, RouterBuilder, Status};
//!
//! fn show_user(params: &PathParams) -> String {
//!     format!("User ID: {}", params.get("id").unwrap_or("unknown"))
//! }
//!
//! let router = RouterBuilder::new()
//!     .get("/user/:id", show_user)
//!     .build()
//!     .unwrap();
//!
//! let m = router.match_route("GET", "/user/123");
//! assert_eq!(m.status, Status::Ok);
//! assert_eq!(m.invoke(), Some("User ID: 123".to_string()));
//! ```
//!
//! ## Matching Rules
//!
//! Paths are split on `/` after trimming leading and trailing slashes, so
//! `/user/1/` and `user/1` are the same path, and `/` is the root. At each
//! segment a literal edge wins over the parameter edge regardless of
//! registration order:
//!
//! ```
//! use trie_router::RouterBuilder;
//!
//! let router = RouterBuilder::new()
//!     .get("/user/:id", "show_user")
//!     .get("/user/profile", "profile")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(router.match_route("GET", "/user/profile").handler, Some(&"profile"));
//! assert_eq!(router.match_route("GET", "/user/7").handler, Some(&"show_user"));
//! ```
//!
//! ## Sharing
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use trie_router::RouterBuilder;
//!
//! let router = Arc::new(RouterBuilder::new().get("/ping", "pong").build().unwrap());
//! let worker = {
//!     let router = Arc::clone(&router);
//!     thread::spawn(move || router.match_route("GET", "/ping").is_ok())
//! };
//! assert!(worker.join().unwrap());
//! ```

mod builder;
mod config;
mod error;
mod handler;
mod method;
mod outcome;
mod params;
mod router;
mod segment;
mod table;
mod trie;

pub use builder::RouterBuilder;
pub use config::{ParamConflict, RouterConfig};
pub use error::{Result, RouterError};
pub use handler::{async_handler, AsyncHandler, Handler};
pub use method::Method;
pub use outcome::{Match, MatchReport, Status};
pub use params::PathParams;
pub use router::Router;
pub use segment::{split_path, Segment};
pub use table::{RouteEntry, RouteTable};
pub use trie::Node;
