// src/tests/router_tests/add_listing_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{
    body_string, get, htmx_get, post_form, set_cookie, state_with_delays, test_state, with_cookie,
};
use std::thread;
use std::time::Duration;

const JOB_VALUES: [(&str, &str); 9] = [
    ("title", "Backend Engineer"),
    ("company", "Paystack"),
    ("location", "Lagos"),
    ("jobType", "Full-time"),
    ("industry", "Technology"),
    ("experienceLevel", "Mid Level"),
    ("salaryRange", "₦500k - ₦1M"),
    ("workArrangement", "Hybrid"),
    ("description", "Build payment APIs."),
];

/// Picks `listing_type` without a cookie, which starts a form session, and
/// returns the session's cookie pair.
fn open_session(state: &AppState, listing_type: &str) -> String {
    let resp = handle(
        post_form("/add-listing/type", &[("type", listing_type)], None),
        state,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    set_cookie(&resp, "listing_form").expect("new session sets a cookie")
}

fn post(state: &AppState, uri: &str, pairs: &[(&str, &str)], cookie: &str) -> String {
    let resp = handle(post_form(uri, pairs, Some(cookie)), state).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(set_cookie(&resp, "listing_form").is_none(), "session was replaced");
    body_string(resp)
}

fn status(state: &AppState, cookie: &str) -> String {
    body_string(handle(with_cookie(htmx_get("/add-listing/status"), cookie), state).unwrap())
}

#[test]
fn first_visit_shows_type_picker_without_a_session() {
    let state = test_state();

    let resp = handle(get("/add-listing"), &state).unwrap();
    assert!(resp.headers().get("Set-Cookie").is_none());
    let html = body_string(resp);

    assert!(html.contains("Add a New Listing"));
    assert!(html.contains(r#"value="realestate""#));
    assert_eq!(state.forms.len(), 0);
}

#[test]
fn cookieless_reads_never_allocate_sessions() {
    let state = test_state();

    for _ in 0..3 {
        let html = body_string(handle(htmx_get("/add-listing/status"), &state).unwrap());
        assert!(html.contains("Add a New Listing"));
        let html = body_string(handle(post_form("/add-listing/cancel", &[], None), &state).unwrap());
        assert!(html.contains("Add a New Listing"));
    }

    assert_eq!(state.forms.len(), 0);
}

#[test]
fn picking_a_type_starts_the_session() {
    let state = test_state();

    let resp = handle(post_form("/add-listing/type", &[("type", "job")], None), &state).unwrap();
    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();

    assert!(cookie.starts_with("listing_form="));
    assert!(cookie.contains("HttpOnly"));
    assert!(body_string(resp).contains("Create Job Listing"));
    assert_eq!(state.forms.len(), 1);
}

#[test]
fn edits_without_a_session_are_rejected() {
    let state = test_state();

    for uri in ["/add-listing/field", "/add-listing/submit"] {
        let result = handle(post_form(uri, &[("title", "x")], None), &state);
        assert!(matches!(result, Err(ServerError::BadRequest(_))), "{uri}");
    }
    assert_eq!(state.forms.len(), 0);
}

#[test]
fn selecting_a_type_renders_its_schema() {
    let state = test_state();
    let cookie = open_session(&state, "place");

    let html = post(&state, "/add-listing/type", &[("type", "job")], &cookie);

    assert!(html.starts_with(r#"<div id="add-listing""#));
    assert!(html.contains("Create Job Listing"));
    assert!(html.contains(r#"name="salaryRange""#));
    assert!(!html.contains("Add a New Listing"));
}

#[test]
fn unknown_listing_type_is_rejected() {
    let state = test_state();

    let result = handle(
        post_form("/add-listing/type", &[("type", "spaceship")], None),
        &state,
    );

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert_eq!(state.forms.len(), 0);
}

#[test]
fn category_change_resolves_and_clears_subcategory() {
    let state = test_state();
    let cookie = open_session(&state, "place");

    let html = post(
        &state,
        "/add-listing/field",
        &[("category", "Restaurant")],
        &cookie,
    );
    assert!(html.contains(r#"<option value="Fast Food">"#));
    assert!(html.contains(r#"<option value="Fine Dining">"#));

    let html = post(
        &state,
        "/add-listing/field",
        &[("category", "Restaurant"), ("subcategory", "Fine Dining")],
        &cookie,
    );
    assert!(html.contains(r#"<option value="Fine Dining" selected>"#));

    let html = post(
        &state,
        "/add-listing/field",
        &[("category", "Cafe"), ("subcategory", "Fine Dining")],
        &cookie,
    );
    assert!(html.contains(r#"<option value="Coffee Shop">"#));
    assert!(!html.contains("Fine Dining"));
}

#[test]
fn invalid_submit_reports_each_missing_field() {
    let state = test_state();
    let cookie = open_session(&state, "job");

    let html = post(
        &state,
        "/add-listing/submit",
        &[("title", "Backend Engineer")],
        &cookie,
    );

    assert!(html.contains("Company is required"));
    assert!(html.contains("Job Description is required"));
    assert!(!html.contains("Job Title is required"));
    assert!(!html.contains("Creating Your Listing"));
    assert!(html.contains(r#"value="Backend Engineer""#));
}

#[test]
fn valid_submit_runs_to_success_then_resets() {
    let state = state_with_delays(Duration::from_millis(150), Duration::from_millis(600));
    let cookie = open_session(&state, "job");

    let html = post(&state, "/add-listing/submit", &JOB_VALUES, &cookie);
    assert!(html.contains("Creating Your Listing"));
    assert!(html.contains(r#"hx-get="/add-listing/status""#));

    // edits are ignored while the submission is in flight
    let html = post(&state, "/add-listing/field", &[("title", "Changed")], &cookie);
    assert!(html.contains(r#"value="Backend Engineer""#));

    thread::sleep(Duration::from_millis(400));
    let html = status(&state, &cookie);
    assert!(html.contains("Listing Created Successfully!"));
    assert!(html.contains("Your job listing is now live"));

    thread::sleep(Duration::from_millis(800));
    let html = status(&state, &cookie);
    assert!(html.contains("Add a New Listing"));
    assert!(!html.contains(r#"hx-trigger="every"#));
}

#[test]
fn cancel_during_submission_stops_the_timers() {
    let state = state_with_delays(Duration::from_millis(100), Duration::from_millis(100));
    let cookie = open_session(&state, "job");
    post(&state, "/add-listing/submit", &JOB_VALUES, &cookie);

    let html = post(&state, "/add-listing/cancel", &[], &cookie);
    assert!(html.contains("Add a New Listing"));

    post(&state, "/add-listing/type", &[("type", "car")], &cookie);
    thread::sleep(Duration::from_millis(350));

    let html = status(&state, &cookie);
    assert!(html.contains("Create Car Listing"));
    assert!(!html.contains("Listing Created Successfully!"));
}

#[test]
fn sessions_are_isolated_per_cookie() {
    let state = test_state();
    let first = open_session(&state, "event");
    let second = open_session(&state, "car");
    assert_ne!(first, second);

    post(&state, "/add-listing/cancel", &[], &second);

    assert!(status(&state, &first).contains("Create Event Listing"));
    assert!(status(&state, &second).contains("Add a New Listing"));
}

#[test]
fn stale_cookie_shows_the_picker_until_a_type_is_picked() {
    let state = test_state();
    let stale = "listing_form=not-a-live-session";

    let resp = handle(with_cookie(get("/add-listing"), stale), &state).unwrap();
    assert!(set_cookie(&resp, "listing_form").is_none());
    assert!(body_string(resp).contains("Add a New Listing"));

    let resp = handle(
        post_form("/add-listing/type", &[("type", "job")], Some(stale)),
        &state,
    )
    .unwrap();
    let cookie = set_cookie(&resp, "listing_form").unwrap();
    assert_ne!(cookie, stale);
    assert!(status(&state, &cookie).contains("Create Job Listing"));
}
