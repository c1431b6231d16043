//! Tests for match outcomes and precedence.

mod common;
use common::*;

use trie_router::{Method, RouterBuilder, Status};

#[test]
fn test_substituted_params_bind_declared_names() {
    let router = demo_router();
    let m = expect_ok(&router, "GET", "/user/123/post/456");
    assert_eq!(m.handler, Some(&"show_post"));
    assert_eq!(m.params, params(&[("id", "123"), ("postId", "456")]));
}

#[test]
fn test_static_segment_beats_parameter_registered_first() {
    let router = RouterBuilder::new()
        .get("/user/:id", "show_user")
        .get("/user/profile", "profile")
        .build()
        .unwrap();
    let m = expect_ok(&router, "GET", "/user/profile");
    assert_eq!(m.handler, Some(&"profile"));
    assert!(m.params.is_empty());
}

#[test]
fn test_static_segment_beats_parameter_registered_last() {
    let router = RouterBuilder::new()
        .get("/user/profile", "profile")
        .get("/user/:id", "show_user")
        .build()
        .unwrap();
    assert_eq!(expect_ok(&router, "GET", "/user/profile").handler, Some(&"profile"));
    assert_eq!(expect_ok(&router, "GET", "/user/42").handler, Some(&"show_user"));
}

#[test]
fn test_no_backtracking_into_parameter_edge() {
    // "profile" takes the literal edge, which has no "edit" child; the
    // parameter branch is not retried.
    let router = RouterBuilder::new()
        .get("/user/profile", "profile")
        .get("/user/:id/edit", "edit_user")
        .build()
        .unwrap();
    expect_status(&router, "GET", "/user/profile/edit", Status::NotFound);
    expect_ok(&router, "GET", "/user/7/edit");
}

#[test]
fn test_unregistered_path_is_not_found() {
    let router = demo_router();
    let m = router.match_route("GET", "/not/found");
    assert_eq!(m.status, Status::NotFound);
    assert!(m.handler.is_none());
    assert!(m.params.is_empty());
    assert!(m.allowed_methods.is_empty());
}

#[test]
fn test_wrong_method_is_method_not_allowed() {
    let router = RouterBuilder::new()
        .get("/user/:id", "show_user")
        .build()
        .unwrap();
    let m = router.match_route("POST", "/user/42");
    assert_eq!(m.status, Status::MethodNotAllowed);
    assert_eq!(m.status.code(), 405);
    assert_eq!(m.allowed_methods, vec![Method::Get]);
    assert_eq!(m.params, params(&[("id", "42")]));
    assert!(m.handler.is_none());
}

#[test]
fn test_root_route_matches_with_empty_params() {
    let router = demo_router();
    let m = expect_ok(&router, "GET", "/");
    assert_eq!(m.handler, Some(&"home"));
    assert!(m.params.is_empty());
    expect_status(&router, "POST", "/", Status::MethodNotAllowed);
}

#[test]
fn test_reregistration_replaces_handler() {
    let router = RouterBuilder::new()
        .get("/user/:id", "old")
        .get("/user/:id", "new")
        .build()
        .unwrap();
    assert_eq!(expect_ok(&router, "GET", "/user/1").handler, Some(&"new"));
    assert_eq!(router.route_count(), 1);
}

#[test]
fn test_spelled_out_method_replaces_standard_variant() {
    let router = RouterBuilder::new()
        .get("/user/:id", "old")
        .route(Method::Extension("GET".to_string()), "/user/:id", "new")
        .build()
        .unwrap();
    assert_eq!(expect_ok(&router, "GET", "/user/1").handler, Some(&"new"));
    assert_eq!(router.route_count(), 1);
    assert_eq!(router.match_route("POST", "/user/1").allow_header(), "GET");
}

#[test]
fn test_matching_is_idempotent() {
    let router = demo_router();
    let first = router.match_route("DELETE", "/user/9");
    for _ in 0..10 {
        assert_eq!(router.match_route("DELETE", "/user/9"), first);
        assert_eq!(router.match_route("GET", "/nope"), router.match_route("GET", "/nope"));
    }
    // Unrelated routes still resolve the same way afterwards.
    assert_eq!(expect_ok(&router, "GET", "/").handler, Some(&"home"));
    assert_eq!(router.routes().len(), 4);
}

#[test]
fn test_method_tokens_are_case_sensitive() {
    let router = demo_router();
    expect_status(&router, "get", "/", Status::MethodNotAllowed);
}

#[test]
fn test_extension_methods_route_like_standard_ones() {
    let router = RouterBuilder::new()
        .route("PURGE", "/cache/:key", "purge")
        .build()
        .unwrap();
    let m = expect_ok(&router, "PURGE", "/cache/abc");
    assert_eq!(m.params.get("key"), Some("abc"));
    let m = router.match_route("GET", "/cache/abc");
    assert_eq!(m.allow_header(), "PURGE");
}

#[test]
fn test_duplicate_param_names_last_one_wins() {
    let router = RouterBuilder::new()
        .get("/a/:id/b/:id", "twice")
        .build()
        .unwrap();
    let m = expect_ok(&router, "GET", "/a/1/b/2");
    assert_eq!(m.params, params(&[("id", "2")]));
}

#[test]
fn test_bare_colon_is_a_literal_segment() {
    let router = RouterBuilder::new().get("/x/:", "colon").build().unwrap();
    expect_ok(&router, "GET", "/x/:");
    expect_status(&router, "GET", "/x/anything", Status::NotFound);
}

#[test]
fn test_request_segment_with_colon_binds_as_value() {
    let router = demo_router();
    let m = expect_ok(&router, "GET", "/user/:id");
    assert_eq!(m.params.get("id"), Some(":id"));
}

#[test]
fn test_empty_interior_segment_is_matched_structurally() {
    let router = RouterBuilder::new().get("/a/:x/b", "ab").build().unwrap();
    let m = expect_ok(&router, "GET", "/a//b");
    assert_eq!(m.params.get("x"), Some(""));
}

#[test]
fn test_invoke_calls_handler_with_bindings() {
    let router = RouterBuilder::new()
        .get("/user/:id", |p: &trie_router::PathParams| {
            format!("User ID: {}", p.get("id").unwrap_or_default())
        })
        .build()
        .unwrap();
    let m = router.match_route("GET", "/user/789");
    assert_eq!(m.invoke(), Some("User ID: 789".to_string()));
    assert_eq!(router.match_route("POST", "/user/789").invoke(), None);
}
