// src/tests/router_tests/home_tests.rs

use crate::tests::utils::{body_string, get, make_state, post_form, send};

#[test]
fn home_links_to_both_views() {
    let (state, _dir) = make_state();

    let mut resp = send(&state, get("/"));
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains(r#"href="/submit""#));
    assert!(body.contains(r#"href="/complaints""#));
    assert!(body.contains("Juntos por uma Caratinga melhor"));
}

#[test]
fn unknown_route_is_404_page() {
    let (state, _dir) = make_state();

    let mut resp = send(&state, get("/nope"));
    assert_eq!(resp.status(), 404);
    assert!(body_string(&mut resp).contains("Erro 404"));

    let resp = send(&state, post_form("/complaints/abc/delete", &[]));
    assert_eq!(resp.status(), 404);
}
