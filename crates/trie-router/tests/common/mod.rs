#![allow(dead_code)]

use trie_router::{Match, PathParams, Router, RouterBuilder, Status};

/// A home page, users, and user posts.
pub fn demo_router() -> Router<&'static str> {
    RouterBuilder::new()
        .get("/", "home")
        .get("/user/:id", "show_user")
        .get("/user/:id/post/:postId", "show_post")
        .post("/user/:id", "update_user")
        .build()
        .unwrap_or_else(|e| panic!("Failed to build demo router: {e}"))
}

pub fn params(pairs: &[(&str, &str)]) -> PathParams {
    pairs.iter().copied().collect()
}

pub fn expect_ok<'r, H: std::fmt::Debug>(router: &'r Router<H>, method: &str, path: &str) -> Match<'r, H> {
    let m = router.match_route(method, path);
    assert_eq!(m.status, Status::Ok, "Expected 200 for {method} {path}, got {m:?}");
    m
}

pub fn expect_status<H: std::fmt::Debug>(router: &Router<H>, method: &str, path: &str, status: Status) {
    let m = router.match_route(method, path);
    assert_eq!(m.status, status, "Unexpected outcome for {method} {path}: {m:?}");
}
