// src/tests/router_tests/contact_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, test_state};

#[test]
fn contact_page_renders_form() {
    let state = test_state();

    let html = body_string(handle(get("/contact"), &state).unwrap());

    assert!(html.contains("Get in Touch"));
    assert!(html.contains(r#"id="contact-form""#));
    assert!(!html.contains("Message Sent!"));
}

#[test]
fn invalid_contact_keeps_values_and_shows_errors() {
    let state = test_state();

    let resp = handle(
        post_form(
            "/contact",
            &[("name", "Ada"), ("email", "not-an-email"), ("message", "")],
            None,
        ),
        &state,
    )
    .unwrap();
    let html = body_string(resp);

    assert!(html.starts_with(r#"<form id="contact-form""#));
    assert!(html.contains(r#"value="Ada""#));
    assert!(html.contains("Enter a valid email address"));
    assert!(html.contains("Message is required"));
    assert!(!html.contains("Message Sent!"));
}

#[test]
fn valid_contact_clears_form_and_confirms() {
    let state = test_state();

    let resp = handle(
        post_form(
            "/contact",
            &[
                ("name", "Ada"),
                ("email", "Ada@Example.com"),
                ("message", "Do you list pharmacies?"),
            ],
            None,
        ),
        &state,
    )
    .unwrap();
    let html = body_string(resp);

    assert!(html.contains("Message Sent!"));
    assert!(!html.contains(r#"value="Ada""#));
}
