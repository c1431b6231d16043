//! Tests for loading route tables from disk.

use std::io::Write;

use tempfile::NamedTempFile;
use trie_router::{Method, RouteTable, RouterError, Status};

fn write_table(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_match() {
    let file = write_table(
        r#"{
            "routes": [
                { "method": "GET", "path": "/", "handler": "home" },
                { "method": "GET", "path": "/user/:id", "handler": "show_user" },
                { "method": "POST", "path": "/user/:id", "handler": "update_user" }
            ]
        }"#,
    );
    let router = RouteTable::load(file.path()).unwrap().build().unwrap();

    let m = router.match_route("POST", "/user/789");
    assert_eq!(m.status, Status::Ok);
    assert_eq!(m.handler.map(String::as_str), Some("update_user"));

    let m = router.match_route("DELETE", "/user/789");
    assert_eq!(m.allowed_methods, vec![Method::Get, Method::Post]);
}

#[test]
fn test_report_serializes_for_405() {
    let file = write_table(
        r#"{ "routes": [ { "method": "GET", "path": "/user/:id", "handler": "show_user" } ] }"#,
    );
    let router = RouteTable::load(file.path()).unwrap().build().unwrap();
    let report = router.match_route("POST", "/user/42").report();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "status": 405,
            "params": { "id": "42" },
            "message": "Method 'POST' not allowed for route '/user/42'",
            "allowed_methods": ["GET"],
        })
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RouteTable::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, RouterError::Io(_)));
}

#[test]
fn test_malformed_file_is_json_error() {
    let file = write_table("{ not json");
    let from_disk = RouteTable::load(file.path()).unwrap_err();
    let in_memory = RouteTable::from_json("{ not json").unwrap_err();
    assert!(matches!(from_disk, RouterError::Json(_)));
    assert!(matches!(in_memory, RouterError::Json(_)));
}
