use pathdart::{HttpMethod, RouteMatch, Router};
use proptest::prelude::*;

proptest! {
    // Substituting any non-empty, slash-free strings into the parameter
    // positions of a registered pattern yields the handler and the
    // substituted values as captures.
    #[test]
    fn substituted_parameters_round_trip(
        shop in "[a-zA-Z0-9_.-]{1,12}",
        item in "[a-zA-Z0-9_.-]{1,12}",
    ) {
        let mut router = Router::new();
        router
            .get("/shops/:shop/items/:item", "item")
            .expect("route should register");
        let sealed = router.seal();

        let path = format!("/shops/{shop}/items/{item}");
        match sealed.find(HttpMethod::Get, &path) {
            RouteMatch::Parametric { handler, params } => {
                prop_assert_eq!(*handler, "item");
                prop_assert_eq!(params.count(), 2);
                prop_assert_eq!(params.by_name("shop"), shop.as_str());
                prop_assert_eq!(params.by_name("item"), item.as_str());
            }
            other => prop_assert!(false, "expected parametric match, got {:?}", other),
        }
    }

    // A wildcard returns the rest of the path verbatim, slashes included.
    #[test]
    fn wildcard_rest_round_trips(rest in "[a-z0-9][a-z0-9/.]{0,30}") {
        let mut router = Router::new();
        router
            .get("/files/*rest", "files")
            .expect("route should register");
        let sealed = router.seal();

        let path = format!("/files/{rest}");
        match sealed.find(HttpMethod::Get, &path) {
            RouteMatch::Parametric { handler, params } => {
                prop_assert_eq!(*handler, "files");
                prop_assert_eq!(params.by_name("rest"), rest.as_str());
            }
            other => prop_assert!(false, "expected wildcard match, got {:?}", other),
        }
    }

    // Registering and matching literal patterns behaves like a hash map.
    #[test]
    fn static_registration_behaves_like_a_map(
        segments in prop::collection::vec("[a-z]{1,8}", 1..5),
    ) {
        let path = format!("/{}", segments.join("/"));

        let mut router = Router::new();
        router.get(&path, "static").expect("route should register");
        let sealed = router.seal();

        match sealed.find(HttpMethod::Get, &path) {
            RouteMatch::Static { handler } => prop_assert_eq!(*handler, "static"),
            other => prop_assert!(false, "expected static match, got {:?}", other),
        }

        let longer = format!("{path}/tail");
        prop_assert!(sealed.find(HttpMethod::Get, &longer).is_none());
    }
}
