// request.rs
//
// Small readers over astra requests: query strings, form bodies, cookies.

use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use tracing::warn;

/// Upper bound on a urlencoded form body.
pub const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn query_params(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| parse_urlencoded(q.as_bytes()))
        .unwrap_or_default()
}

pub fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| {
            warn!("failed to read request body: {e}");
            ServerError::BadRequest("Unreadable request body".into())
        })?;

    if buf.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Form body too large".into()));
    }

    Ok(parse_urlencoded(&buf))
}

/// Later keys win, like a browser submitting a single value per name.
fn parse_urlencoded(input: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(input).into_owned().collect()
}

pub fn header<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Value of cookie `name`, searching every `Cookie` header.
pub fn cookie<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}

pub fn is_htmx(req: &Request) -> bool {
    header(req, "HX-Request") == Some("true")
}
