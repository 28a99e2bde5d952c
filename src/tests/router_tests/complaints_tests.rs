// src/tests/router_tests/complaints_tests.rs

use crate::db::kv::KeyValueStore;
use crate::domain::complaint::{Complaint, ComplaintStatus, ComplaintType};
use crate::state::State;
use crate::store::COMPLAINTS_KEY;
use crate::tests::utils::{body_string, get, location, make_state, post_form, send};
use chrono::{TimeZone, Utc};

fn seed(state: &State, id: &str, address: &str, status: ComplaintStatus, minute: u32) -> Complaint {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap();
    let c = Complaint {
        id: id.to_string(),
        name: format!("Morador {id}"),
        address: address.to_string(),
        kind: ComplaintType::Other,
        description: "Problema relatado pela vizinhança".to_string(),
        status,
        created_at: ts,
        updated_at: ts,
    };
    state.store.append(c.clone()).unwrap();
    c
}

fn seed_all_statuses(state: &State) {
    seed(state, "p1", "Rua das Flores, 10", ComplaintStatus::Pending, 1);
    seed(state, "i1", "Rua do Comércio, 5", ComplaintStatus::InProgress, 2);
    seed(state, "r1", "Praça Central, 1", ComplaintStatus::Resolved, 3);
}

#[test]
fn empty_collection_offers_to_submit() {
    let (state, _dir) = make_state();

    let mut resp = send(&state, get("/complaints"));
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains(r#"id="complaints-empty""#));
    assert!(body.contains(r#"href="/submit""#));
    assert!(!body.contains(r#"id="complaints-no-matches""#));
}

#[test]
fn status_filter_via_query() {
    let (state, _dir) = make_state();
    seed_all_statuses(&state);

    let mut resp = send(&state, get("/complaints?status=in_progress"));
    let body = body_string(&mut resp);

    assert!(body.contains("complaint-i1"));
    assert!(!body.contains("complaint-p1"));
    assert!(!body.contains("complaint-r1"));
    assert!(body.contains("1 denúncia encontrada"));
}

#[test]
fn search_via_query_is_case_insensitive() {
    let (state, _dir) = make_state();
    seed_all_statuses(&state);

    let mut resp = send(&state, get("/complaints?q=FLORES"));
    let body = body_string(&mut resp);
    assert!(body.contains("complaint-p1"));
    assert!(!body.contains("complaint-i1"));

    let mut resp = send(&state, get("/complaints?q=flores%20"));
    let body = body_string(&mut resp);
    assert!(body.contains(r#"id="complaints-no-matches""#));

    let mut resp = send(&state, get("/complaints?q=Avenida"));
    let body = body_string(&mut resp);
    assert!(body.contains(r#"id="complaints-no-matches""#));
    assert!(body.contains("/complaints/reset"));
}

#[test]
fn combined_filter_can_yield_nothing() {
    let (state, _dir) = make_state();
    seed_all_statuses(&state);

    let mut resp = send(&state, get("/complaints?status=resolved&q=flores"));
    let body = body_string(&mut resp);

    assert!(body.contains(r#"id="complaints-no-matches""#));
    assert!(body.contains("Nenhuma denúncia encontrada"));
}

#[test]
fn unknown_status_query_falls_back_to_all() {
    let (state, _dir) = make_state();
    seed_all_statuses(&state);

    let mut resp = send(&state, get("/complaints?status=closed"));
    let body = body_string(&mut resp);
    assert!(body.contains("3 denúncias encontradas"));
}

#[test]
fn reset_shows_unfiltered_list() {
    let (state, _dir) = make_state();
    seed_all_statuses(&state);

    let mut resp = send(&state, get("/complaints/reset?status=resolved&q=avenida"));
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(!body.contains(r#"id="complaints-no-matches""#));
    assert!(body.contains("complaint-p1"));
    assert!(body.contains("complaint-i1"));
    assert!(body.contains("complaint-r1"));
    assert!(!body.contains(r#"value="avenida""#));
}

#[test]
fn status_change_persists_and_keeps_filters() {
    let (state, _dir) = make_state();
    seed_all_statuses(&state);
    let before = state.store.load_all().unwrap();
    let p1_before = before.iter().find(|c| c.id == "p1").unwrap().clone();

    let resp = send(
        &state,
        post_form(
            "/complaints/p1/status",
            &[("status", "resolved"), ("filter", "resolved"), ("q", "flores")],
        ),
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(
        location(&resp),
        "/complaints?status=resolved&q=flores&notice=status_resolved"
    );

    let after = state.store.load_all().unwrap();
    let p1 = after.iter().find(|c| c.id == "p1").unwrap();
    assert_eq!(p1.status, ComplaintStatus::Resolved);
    assert_eq!(p1.created_at, p1_before.created_at);
    assert!(p1.updated_at > p1_before.updated_at);

    let mut resp = send(&state, get(&location(&resp)));
    let body = body_string(&mut resp);
    assert!(body.contains("complaint-p1"));
    assert!(body.contains("Denúncia marcada como resolvida"));
}

#[test]
fn same_status_does_not_touch_updated_at() {
    let (state, _dir) = make_state();
    let original = seed(&state, "a", "Rua A, 1", ComplaintStatus::InProgress, 0);

    let resp = send(
        &state,
        post_form("/complaints/a/status", &[("status", "in_progress")]),
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/complaints");

    let stored = state.store.load_all().unwrap();
    assert_eq!(stored[0].updated_at, original.updated_at);
}

#[test]
fn unknown_id_is_ignored() {
    let (state, _dir) = make_state();
    seed_all_statuses(&state);

    let resp = send(
        &state,
        post_form(
            "/complaints/missing/status",
            &[("status", "resolved"), ("filter", "pending")],
        ),
    );
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/complaints?status=pending");

    let all = state.store.load_all().unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|c| c.id != "missing"));
}

#[test]
fn invalid_status_is_bad_request() {
    let (state, _dir) = make_state();
    seed_all_statuses(&state);

    let resp = send(&state, post_form("/complaints/p1/status", &[("status", "done")]));
    assert_eq!(resp.status(), 400);

    let resp = send(&state, post_form("/complaints/p1/status", &[]));
    assert_eq!(resp.status(), 400);
}

#[test]
fn corrupt_storage_shows_load_error() {
    let (state, dir) = make_state();
    let db = crate::db::connection::Database::new(dir.path().join("complaints.sqlite").to_string_lossy());
    db.set(COMPLAINTS_KEY, "{\"broken\":").unwrap();

    let mut resp = send(&state, get("/complaints"));
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Erro ao carregar denúncias"));
    assert!(body.contains(r#"id="complaints-empty""#));
}
