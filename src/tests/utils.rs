use crate::config::Config;
use crate::state::AppState;
use astra::{Body, Request, Response};
use std::io::Read;
use std::time::Duration;

/// State over the embedded catalog, with submit delays short enough to wait out.
pub fn test_state() -> AppState {
    state_with_delays(Duration::from_millis(40), Duration::from_millis(80))
}

pub fn state_with_delays(submit: Duration, reset: Duration) -> AppState {
    AppState::build(Config {
        submit_delay: submit,
        reset_delay: reset,
        ..Config::default()
    })
    .unwrap_or_else(|e| panic!("test state failed to build: {e:#}"))
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn htmx_get(uri: &str) -> Request {
    let mut req = get(uri);
    req.headers_mut()
        .insert("HX-Request", "true".parse().unwrap());
    req
}

/// Form-encoded POST. `cookie` is sent as-is in the `Cookie` header.
pub fn post_form(uri: &str, pairs: &[(&str, &str)], cookie: Option<&str>) -> Request {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    let mut builder = http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn with_cookie(mut req: Request, cookie: &str) -> Request {
    req.headers_mut()
        .insert("Cookie", cookie.parse().unwrap());
    req
}

pub fn body_string(resp: Response) -> String {
    let mut body = resp.into_body();
    let mut out = String::new();
    body.reader().read_to_string(&mut out).unwrap();
    out
}

pub fn header_value<'a>(resp: &'a Response, name: &str) -> Option<&'a str> {
    resp.headers().get(name).and_then(|v| v.to_str().ok())
}

/// `name=value` part of the first matching `Set-Cookie` header.
pub fn set_cookie(resp: &Response, name: &str) -> Option<String> {
    resp.headers()
        .get_all("Set-Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{name}=")))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}
