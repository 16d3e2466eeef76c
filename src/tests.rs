//! Builder behaviour end to end: path, query, clone and round-trip rules.

use crate::Plug;
use std::collections::HashMap;

fn test_dev() -> Plug {
    Plug::new("http://test.dev").unwrap()
}

#[test]
fn test_at() {
    let mut p = test_dev();
    p.at(["a", "b", "c", "d"]);
    assert_eq!(p.to_string(), "http://test.dev/a/b/c/d");
}

#[test]
fn test_at_accumulates() {
    let mut p = test_dev();
    p.at(["a", "b", "c", "d"]).at(["e", "f", "g", "h"]);
    assert_eq!(p.to_string(), "http://test.dev/a/b/c/d/e/f/g/h");
}

#[test]
fn test_at_with_owned_segments() {
    let segments: Vec<String> = vec!["users".into(), 42.to_string()];
    let mut p = test_dev();
    p.at(&segments);
    assert_eq!(p.to_string(), "http://test.dev/users/42");
}

#[test]
fn test_at_path() {
    let mut p = test_dev();
    p.at_path("a/b/c/d");
    assert_eq!(p.to_string(), "http://test.dev/a/b/c/d");
}

#[test]
fn test_at_path_starting_with_forward_slash() {
    let mut p = test_dev();
    p.at_path("/a/b/c/d");
    assert_eq!(p.to_string(), "http://test.dev/a/b/c/d");
}

#[test]
fn test_clone() {
    let mut p = test_dev();
    let mut p2 = p.clone();
    p2.at(["mypath"]);
    p.at(["a", "b", "c", "d"]);
    assert_eq!(p.to_string(), "http://test.dev/a/b/c/d");
    assert_eq!(p2.to_string(), "http://test.dev/mypath");
}

#[test]
fn test_clone_interleaved_mutation() {
    let mut p = test_dev();
    p.with_user_password("user", "pw").with_header("X-A", "1");

    let mut p2 = p.clone();
    p.at(["left"]);
    p2.at(["right"]).with("side", "r").with_user("other");
    p.with_header("X-A", "changed");
    p2.with_header("X-B", "2");
    p.at(["more"]);

    assert_eq!(p.to_string(), "http://user:pw@test.dev/left/more");
    assert_eq!(p2.to_string(), "http://other@test.dev/right?side=r");
    assert_eq!(p.header("X-A"), Some("changed"));
    assert_eq!(p.header("X-B"), None);
    assert_eq!(p2.header("X-A"), Some("1"));
    assert_eq!(p2.header("X-B"), Some("2"));
}

#[test]
fn test_with_params_adds_parameters() {
    let mut p = test_dev();
    p.with_params(HashMap::from([("param1", "value1"), ("param2", "value2")]));
    assert_eq!(p.get_param("param1"), "value1");
    assert_eq!(p.get_param("param2"), "value2");
    assert_eq!(p.to_string(), "http://test.dev/?param1=value1&param2=value2");
}

#[test]
fn test_with_params_order_independent() {
    let mut forward = test_dev();
    forward.with_params([("b", "2"), ("a", "1"), ("c", "3")]);

    let mut backward = test_dev();
    backward.with_params([("c", "3"), ("a", "1"), ("b", "2")]);

    assert_eq!(forward.to_string(), backward.to_string());
    assert_eq!(forward.url().query(), Some("a=1&b=2&c=3"));
}

#[test]
fn test_with_adds_parameters() {
    let mut p = test_dev();
    p.with("param1", "value1").with("param2", "value2");
    assert_eq!(p.get_param("param1"), "value1");
    assert_eq!(p.get_param("param2"), "value2");
}

#[test]
fn test_without_removes_parameters() {
    let mut p = test_dev();
    p.with("param1", "value1")
        .with("param2", "value2")
        .without("param2");
    assert_eq!(p.get_param("param1"), "value1");
    assert_eq!(p.get_param("param2"), "");
}

#[test]
fn test_without_absent_key_is_noop() {
    let mut p = test_dev();
    p.with("param1", "value1");
    let before = p.to_string();

    p.without("nope").without("nope");
    assert_eq!(p.to_string(), before);
}

#[test]
fn test_round_trip() {
    let mut p = Plug::new("https://example.com:8080").unwrap();
    p.at(["a b", "c"]).with_header("X-Ignored", "1");

    let reparsed = Plug::new(&p.to_string()).unwrap();
    assert_eq!(reparsed.url(), p.url());
    assert_eq!(reparsed.to_string(), p.to_string());
}
