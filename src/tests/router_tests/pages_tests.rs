// src/tests/router_tests/pages_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header_value, htmx_get, set_cookie, test_state, with_cookie};

#[test]
fn home_renders_layout_and_carousels() -> Result<(), ServerError> {
    let state = test_state();

    let resp = handle(get("/"), &state)?;

    assert_eq!(resp.status(), 200);
    assert_eq!(
        header_value(&resp, "Content-Type"),
        Some("text/html; charset=utf-8")
    );
    let html = body_string(resp);
    assert!(html.contains("Home | Contact365"));
    assert!(html.contains("Featured Businesses"));
    assert!(html.contains("/listings/coastal-spa"));
    Ok(())
}

#[test]
fn explore_fragment_filters_by_base_category() -> Result<(), ServerError> {
    let state = test_state();

    let resp = handle(htmx_get("/explore?category=jobs"), &state)?;
    let html = body_string(resp);

    assert!(!html.contains("<html"));
    assert!(html.starts_with(r#"<section id="explore-results""#));
    assert!(html.contains("/listings/registered-nurse"));
    assert!(html.contains("/listings/sales-executive"));
    assert!(!html.contains("/listings/coastal-spa"));
    assert!(!html.contains("/listings/kia-rio-2016"));
    Ok(())
}

#[test]
fn explore_other_bucket_collects_unknown_categories() -> Result<(), ServerError> {
    let state = test_state();

    let html = body_string(handle(htmx_get("/explore?category=Other"), &state)?);

    for slug in [
        "merci-solar-energy",
        "lagos-tech-hub",
        "fresh-groceries",
        "quickfix-auto-repair",
        "sparkle-laundry",
    ] {
        assert!(html.contains(&format!("/listings/{slug}")), "{slug}");
    }
    assert!(!html.contains("/listings/registered-nurse"));
    Ok(())
}

#[test]
fn explore_shows_empty_state_for_unmatched_search() -> Result<(), ServerError> {
    let state = test_state();

    let html = body_string(handle(htmx_get("/explore?q=zzzz-nothing"), &state)?);

    assert!(html.contains("No listings match your search"));
    assert!(html.contains("All (0)"));
    Ok(())
}

#[test]
fn explore_full_page_paginates() -> Result<(), ServerError> {
    let state = test_state();

    let first = body_string(handle(get("/explore"), &state)?);
    let third = body_string(handle(htmx_get("/explore?page=3"), &state)?);

    assert!(first.contains("<html"));
    assert!(first.contains("Explore | Contact365"));
    // 30 listings, 12 per page, newest first
    assert!(third.contains("/listings/fresh-groceries"));
    assert!(third.contains("/listings/merci-solar-energy"));
    assert!(!third.contains("/listings/sparkle-laundry"));
    Ok(())
}

#[test]
fn explore_sorts_by_rating_on_request() -> Result<(), ServerError> {
    let state = test_state();

    let html = body_string(handle(htmx_get("/explore?category=Cars&sort=rating"), &state)?);

    let lexus = html.find("/listings/lexus-rx350-2020").unwrap();
    let kia = html.find("/listings/kia-rio-2016").unwrap();
    assert!(html.contains(r#"href="/explore?category=Cars&amp;sort=rating" class="active""#));
    assert!(lexus < kia);
    Ok(())
}

#[test]
fn listing_detail_and_slug_alias() -> Result<(), ServerError> {
    let state = test_state();

    let direct = handle(get("/listings/coastal-spa"), &state)?;
    assert_eq!(direct.status(), 200);
    assert!(body_string(direct).contains("Coastal Spa | Contact365"));

    let alias = handle(get("/coastal-spa"), &state)?;
    assert_eq!(alias.status(), 200);
    assert!(body_string(alias).contains("Coastal Spa"));
    Ok(())
}

#[test]
fn unknown_listing_renders_not_found_inline() -> Result<(), ServerError> {
    let state = test_state();

    let resp = handle(get("/listings/no-such-business"), &state)?;

    assert_eq!(resp.status(), 404);
    let html = body_string(resp);
    assert!(html.contains("Business not found"));
    assert!(html.contains("<html"));
    Ok(())
}

#[test]
fn profile_tab_swaps_fragment_for_htmx() -> Result<(), ServerError> {
    let state = test_state();

    let html = body_string(handle(htmx_get("/listings/coastal-spa?tab=reviews"), &state)?);

    assert!(html.starts_with(r#"<section id="profile-tabs""#));
    assert!(html.contains(r#"class="tab active""#));
    assert!(!html.contains("<html"));
    Ok(())
}

#[test]
fn blog_index_and_posts() -> Result<(), ServerError> {
    let state = test_state();

    let index = body_string(handle(get("/blog"), &state)?);
    assert!(index.contains("Our Blog"));
    assert!(index.contains("/blog/1"));

    let post = body_string(handle(get("/blog/2"), &state)?);
    assert!(post.contains("How to Find Remote Jobs in Nigeria"));

    let missing = handle(get("/blog/999"), &state)?;
    assert_eq!(missing.status(), 404);
    assert!(body_string(missing).contains("Blog post not found"));
    Ok(())
}

#[test]
fn unknown_routes_are_not_found() {
    let state = test_state();

    for uri in ["/no/such/page", "/definitely-not-a-listing"] {
        assert!(matches!(
            handle(get(uri), &state),
            Err(ServerError::NotFound)
        ));
    }
}

#[test]
fn theme_toggle_persists_and_redirects_back() -> Result<(), ServerError> {
    let state = test_state();

    let resp = handle(get("/theme/toggle?back=%2Fexplore%3Fq%3Dspa"), &state)?;

    assert_eq!(resp.status(), 303);
    assert_eq!(header_value(&resp, "Location"), Some("/explore?q=spa"));
    assert_eq!(set_cookie(&resp, "theme").as_deref(), Some("theme=dark"));

    let dark = body_string(handle(with_cookie(get("/"), "theme=dark"), &state)?);
    assert!(dark.contains(r#"<html lang="en" class="dark""#));

    let back = handle(with_cookie(get("/theme/toggle?back=//evil.example"), "theme=dark"), &state)?;
    assert_eq!(header_value(&back, "Location"), Some("/"));
    assert_eq!(set_cookie(&back, "theme").as_deref(), Some("theme=light"));
    Ok(())
}

#[test]
fn client_hint_sets_initial_theme() -> Result<(), ServerError> {
    let state = test_state();
    let mut req = get("/");
    req.headers_mut()
        .insert("Sec-CH-Prefers-Color-Scheme", "\"dark\"".parse().unwrap());

    let html = body_string(handle(req, &state)?);

    assert!(html.contains(r#"class="dark""#));
    Ok(())
}

#[test]
fn stylesheet_is_served() -> Result<(), ServerError> {
    let state = test_state();

    let resp = handle(get("/static/main.css"), &state)?;

    assert_eq!(resp.status(), 200);
    assert_eq!(header_value(&resp, "Content-Type"), Some("text/css; charset=utf-8"));
    assert!(body_string(resp).contains(".listing-card"));
    Ok(())
}

#[test]
fn pages_reference_no_unserved_local_assets() -> Result<(), ServerError> {
    let state = test_state();

    for uri in ["/", "/explore", "/listings/coastal-spa", "/blog/1"] {
        let html = body_string(handle(get(uri), &state)?);
        assert!(!html.contains(r#"src="/"#), "{uri}");
        assert!(!html.contains("/images/"), "{uri}");
        assert!(!html.contains("/favicon.ico"), "{uri}");
    }

    let html = body_string(handle(get("/listings/coastal-spa"), &state)?);
    assert!(html.contains(r#"<div class="img-placeholder hero-image" role="img" aria-label="Coastal Spa" hidden>"#));
    assert!(html.contains("this.nextElementSibling.hidden=false"));
    Ok(())
}
