// src/tests/router_tests/submit_tests.rs

use crate::db::kv::KeyValueStore;
use crate::domain::complaint::{ComplaintStatus, ComplaintType};
use crate::store::COMPLAINTS_KEY;
use crate::tests::utils::{body_string, get, location, make_state, post_form, send};

const ANA: &[(&str, &str)] = &[
    ("name", "Ana"),
    ("address", "Rua A, 1"),
    ("type", "water_outage"),
    ("description", "Sem água desde ontem"),
];

#[test]
fn empty_form_renders_every_type() {
    let (state, _dir) = make_state();

    let mut resp = send(&state, get("/submit"));
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    for kind in ComplaintType::ALL {
        assert!(body.contains(kind.as_str()), "missing option {kind}");
    }
    assert!(!body.contains("field-error"));
}

#[test]
fn valid_submission_redirects_and_persists() {
    let (state, _dir) = make_state();

    let resp = send(&state, post_form("/submit", ANA));
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/complaints?notice=submitted");

    let all = state.store.load_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Ana");
    assert_eq!(all[0].kind, ComplaintType::WaterOutage);
    assert_eq!(all[0].status, ComplaintStatus::Pending);
    assert_eq!(all[0].created_at, all[0].updated_at);

    let mut resp = send(&state, get(&location(&resp)));
    let body = body_string(&mut resp);
    assert!(body.contains("Denúncia enviada com sucesso!"));
    assert!(body.contains("Sem água desde ontem"));
}

#[test]
fn invalid_submission_shows_field_errors_and_keeps_input() {
    let (state, _dir) = make_state();

    let mut resp = send(
        &state,
        post_form(
            "/submit",
            &[
                ("name", ""),
                ("address", "Rua A, 1"),
                ("type", "water_outage"),
                ("description", "short"),
            ],
        ),
    );
    assert_eq!(resp.status(), 422);

    let body = body_string(&mut resp);
    assert!(body.contains(r#"id="name-error""#));
    assert!(body.contains(r#"id="description-error""#));
    assert!(!body.contains(r#"id="address-error""#));
    assert!(!body.contains(r#"id="type-error""#));
    assert!(body.contains("Por favor, corrija os erros no formulário."));
    assert!(body.contains(r#"value="Rua A, 1""#));

    assert!(state.store.load_all().unwrap().is_empty());
}

#[test]
fn missing_type_is_reported() {
    let (state, _dir) = make_state();

    let mut resp = send(
        &state,
        post_form(
            "/submit",
            &[
                ("name", "Ana"),
                ("address", "Rua A, 1"),
                ("description", "Sem água desde ontem"),
            ],
        ),
    );

    assert_eq!(resp.status(), 422);
    let body = body_string(&mut resp);
    assert!(body.contains(r#"id="type-error""#));
    assert!(!body.contains(r#"id="name-error""#));
}

#[test]
fn newest_submission_comes_first() {
    let (state, _dir) = make_state();

    send(&state, post_form("/submit", ANA));
    send(
        &state,
        post_form(
            "/submit",
            &[
                ("name", "Bruno"),
                ("address", "Av. Central, 200"),
                ("type", "road_damage"),
                ("description", "Buraco grande na pista"),
            ],
        ),
    );

    let all = state.store.load_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Bruno");
    assert_ne!(all[0].id, all[1].id);
}

#[test]
fn submission_over_corrupt_storage_still_saves() {
    let (state, dir) = make_state();
    let db = crate::db::connection::Database::new(dir.path().join("complaints.sqlite").to_string_lossy());
    db.set(COMPLAINTS_KEY, "not json at all").unwrap();

    let resp = send(&state, post_form("/submit", ANA));
    assert_eq!(resp.status(), 303);
    assert_eq!(state.store.load_all().unwrap().len(), 1);
}

#[test]
fn submit_then_resolve_scenario() {
    let (state, _dir) = make_state();

    send(&state, post_form("/submit", ANA));
    let created = state.store.load_all().unwrap().remove(0);
    assert_eq!(created.status, ComplaintStatus::Pending);

    let later = created.created_at + chrono::Duration::minutes(10);
    state
        .store
        .update_status_at(&created.id, ComplaintStatus::Resolved, later)
        .unwrap();

    let all = state.store.load_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, created.id);
    assert_eq!(all[0].status, ComplaintStatus::Resolved);
    assert_eq!(all[0].created_at, created.created_at);
    assert!(all[0].updated_at > created.updated_at);
}

#[test]
fn oversized_body_is_rejected_and_not_saved() {
    let (state, _dir) = make_state();
    let description = "a".repeat(70 * 1024);

    let resp = send(
        &state,
        post_form(
            "/submit",
            &[
                ("name", "Ana"),
                ("address", "Rua A, 1"),
                ("type", "water_outage"),
                ("description", &description),
            ],
        ),
    );

    assert_eq!(resp.status(), 400);
    assert!(state.store.load_all().unwrap().is_empty());
}

#[test]
fn invalid_fields_can_be_cleared_while_editing() {
    let (state, _dir) = make_state();

    let mut resp = send(&state, post_form("/submit", &[("address", "Rua A, 1")]));
    assert_eq!(resp.status(), 422);

    let body = body_string(&mut resp);
    assert!(body.contains("getElementById('name-error')"));
    assert!(body.contains("getElementById('description-error')"));
    assert!(!body.contains("getElementById('address-error')"));
}
