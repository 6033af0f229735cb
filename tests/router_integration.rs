use pathdart::{HttpMethod, PatternError, RouteMatch, Router, RouterError};

fn demo_router() -> Router<&'static str> {
    let mut router = Router::new();
    for (pattern, handler) in [
        ("/", "root"),
        ("/user", "user-index"),
        ("/user/:id", "user"),
        ("/user/:id/profile", "user-profile"),
        ("/user/:id/profile/:theme", "user-profile-theme"),
        ("/user/:id/:something", "user-something"),
        ("/user/*", "user-wild"),
        ("/user/:id=^\\d+$/books", "user-books"),
        ("/admin", "admin-index"),
        ("/admin/:role=^\\d+$", "admin-role"),
        ("/中国人", "cn"),
    ] {
        router
            .get(pattern, handler)
            .unwrap_or_else(|err| panic!("{pattern} should register: {err}"));
    }
    router
}

#[test]
fn demo_routes_resolve_as_documented() {
    let sealed = demo_router().seal();

    match sealed.find(HttpMethod::Get, "/") {
        RouteMatch::Static { handler } => assert_eq!(*handler, "root"),
        other => panic!("expected static root, got {other:?}"),
    }

    match sealed.find(HttpMethod::Get, "/user/123/books") {
        RouteMatch::Parametric { handler, params } => {
            assert_eq!(*handler, "user-books");
            assert_eq!(params.count(), 1);
            assert_eq!(params.by_name("id"), "123");
        }
        other => panic!("expected books match, got {other:?}"),
    }

    match sealed.find(HttpMethod::Get, "/user/guest") {
        RouteMatch::Parametric { handler, params } => {
            assert_eq!(*handler, "user");
            assert_eq!(params.by_name("id"), "guest");
        }
        other => panic!("expected user match, got {other:?}"),
    }

    match sealed.find(HttpMethod::Get, "/user/guest/profile/456") {
        RouteMatch::Parametric { handler, params } => {
            assert_eq!(*handler, "user-profile-theme");
            assert_eq!(params.by_name("id"), "guest");
            assert_eq!(params.by_name("theme"), "456");
        }
        other => panic!("expected theme match, got {other:?}"),
    }

    match sealed.find(HttpMethod::Get, "/user/guest/456/x") {
        RouteMatch::Parametric { handler, params } => {
            assert_eq!(*handler, "user-wild");
            assert_eq!(params.count(), 1);
            assert_eq!(params.name(0), Some(""));
            assert_eq!(params.value(0), Some("guest/456/x"));
        }
        other => panic!("expected wildcard match, got {other:?}"),
    }

    assert!(sealed.find(HttpMethod::Get, "/中国").is_none());
    assert!(!sealed.find(HttpMethod::Get, "/中国人").is_none());

    assert!(sealed.find(HttpMethod::Post, "/").is_none());
}

#[test]
fn intermediate_parametric_routes_resolve() {
    let sealed = demo_router().seal();

    match sealed.find(HttpMethod::Get, "/user/guest/profile") {
        RouteMatch::Parametric { handler, params } => {
            assert_eq!(*handler, "user-profile");
            assert_eq!(params.count(), 1);
            assert_eq!(params.by_name("id"), "guest");
        }
        other => panic!("expected profile match, got {other:?}"),
    }

    match sealed.find(HttpMethod::Get, "/user/guest/settings") {
        RouteMatch::Parametric { handler, params } => {
            assert_eq!(*handler, "user-something");
            assert_eq!(params.by_name("something"), "settings");
        }
        other => panic!("expected something match, got {other:?}"),
    }
}

#[test]
fn api_accepts_canonical_method_names() {
    let mut router = Router::new();
    for method in [
        "GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "CONNECT", "TRACE", "OPTIONS",
    ] {
        router
            .api(method, "/probe", "probe")
            .unwrap_or_else(|err| panic!("{method} should register: {err}"));
    }
    let sealed = router.seal();

    for method in HttpMethod::ALL {
        assert_eq!(sealed.find(method, "/probe").handler(), Some(&"probe"));
    }
}

#[test]
fn api_rejects_unknown_methods() {
    let mut router = Router::new();
    let err = router
        .api("PICK", "/", "handler")
        .expect_err("unknown method should fail");
    match err {
        RouterError::UnknownMethod { method } => assert_eq!(method, "PICK"),
        other => panic!("unexpected error: {other:?}"),
    }

    // method names are case-sensitive and canonical
    assert!(router.api("get", "/", "handler").is_err());
}

#[test]
fn registration_errors_carry_the_pattern_kind() {
    let mut router = Router::new();

    match router.get("/user//admin", "h") {
        Err(RouterError::Pattern(PatternError::EmptySegment { .. })) => {}
        other => panic!("unexpected result: {other:?}"),
    }
    match router.get("/user/*id/books", "h") {
        Err(RouterError::Pattern(PatternError::WildcardNotLast { .. })) => {}
        other => panic!("unexpected result: {other:?}"),
    }
    match router.get("/user/:id=/books", "h") {
        Err(RouterError::Pattern(PatternError::EmptyRegex { .. })) => {}
        other => panic!("unexpected result: {other:?}"),
    }
    match router.get("no-slash", "h") {
        Err(RouterError::Pattern(PatternError::NoLeadingSlash { .. })) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn find_named_distinguishes_unknown_methods() {
    let mut router = Router::new();
    router.get("/here", "here").expect("route should register");
    let sealed = router.seal();

    let found = sealed
        .find_named("GET", "/here")
        .expect("GET should be a known method");
    assert_eq!(found.handler(), Some(&"here"));

    let missed = sealed
        .find_named("GET", "/elsewhere")
        .expect("GET should be a known method");
    assert!(missed.is_none());

    assert!(sealed.find_named("PICK", "/here").is_none());
}

#[test]
fn get_post_registers_both_methods() {
    let mut router = Router::new();
    router
        .get_post("/form", "form")
        .expect("route should register");
    let sealed = router.seal();

    assert_eq!(sealed.find(HttpMethod::Get, "/form").handler(), Some(&"form"));
    assert_eq!(sealed.find(HttpMethod::Post, "/form").handler(), Some(&"form"));
    assert!(sealed.find(HttpMethod::Put, "/form").is_none());
}

#[test]
fn sealed_router_is_shareable_across_threads() {
    let mut router = Router::new();
    router.get("/ping/:n", "pong").expect("route should register");
    let sealed = std::sync::Arc::new(router.seal());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let sealed = sealed.clone();
            std::thread::spawn(move || {
                let path = format!("/ping/{i}");
                match sealed.find(HttpMethod::Get, &path) {
                    RouteMatch::Parametric { handler, params } => {
                        assert_eq!(*handler, "pong");
                        assert_eq!(params.by_name("n"), i.to_string());
                    }
                    other => panic!("expected parametric match, got {other:?}"),
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("reader thread should succeed");
    }
}

#[test]
fn many_routes_build_and_resolve() {
    let mut router = Router::new();
    for i in 0..500 {
        let pattern = format!("/api/v{}/resource{}/:id", i % 3, i);
        router
            .get(&pattern, "bulk")
            .expect("bulk route should register");
    }
    let sealed = router.seal();

    for i in (0..500).step_by(97) {
        let path = format!("/api/v{}/resource{}/item-{}", i % 3, i, i);
        match sealed.find(HttpMethod::Get, &path) {
            RouteMatch::Parametric { handler, params } => {
                assert_eq!(*handler, "bulk");
                assert_eq!(params.by_name("id"), format!("item-{i}"));
            }
            other => panic!("expected match for {path}, got {other:?}"),
        }
    }
}
