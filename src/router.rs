use crate::domain::contact::{ContactErrors, ContactForm};
use crate::domain::listing::BASE_CATEGORIES;
use crate::domain::profile::ProfileTab;
use crate::domain::query::{category_counts, query_listings, ListingQuery, Pager, SortOrder};
use crate::errors::ServerError;
use crate::forms::{AddListingForm, FormError, FormHandle, ListingType, FORM_COOKIE};
use crate::request::{cookie, header, is_htmx, query_params, read_form};
use crate::responses::{
    css_response, html_response, html_with_status, redirect, with_cookies, ResultResp,
};
use crate::state::AppState;
use crate::templates::pages;
use crate::templates::PageContext;
use crate::theme::{request_theme, toggle_theme, CookieThemeStore};
use astra::Request;
use tracing::{debug, info};

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Featured and trending carousels show at most this many cards.
const CAROUSEL_LIMIT: usize = 10;
const RELATED_LIMIT: usize = 4;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, htmx = is_htmx(&req), "request");

    let ctx = page_context(&req);

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home(state, &ctx),
        ("GET", "/explore") => explore(&req, state, &ctx),
        ("GET", "/blog") => html_response(pages::blog_index(state.catalog.posts(), &ctx)),
        ("GET", "/contact") => html_response(pages::contact_page(&ctx)),
        ("POST", "/contact") => contact_submit(&mut req, &ctx),

        ("GET", "/add-listing") | ("GET", "/add-listing/status") => {
            let handle = find_form(&req, state)?;
            form_response(&req, state, handle.as_ref(), &ctx)
        }
        ("POST", "/add-listing/type") => add_listing_type(&mut req, state, &ctx),
        ("POST", "/add-listing/field") => add_listing_field(&mut req, state, &ctx),
        ("POST", "/add-listing/submit") => add_listing_submit(&mut req, state, &ctx),
        ("POST", "/add-listing/cancel") => {
            let handle = find_form(&req, state)?;
            if let Some(handle) = &handle {
                state.forms.cancel(handle)?;
            }
            form_response(&req, state, handle.as_ref(), &ctx)
        }

        ("GET", "/theme/toggle") => theme_toggle(&req),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),

        ("GET", p) => {
            if let Some(slug) = p.strip_prefix("/listings/") {
                listing(&req, state, slug, &ctx)
            } else if let Some(id) = p.strip_prefix("/blog/") {
                blog_post(state, id, &ctx)
            } else {
                // `/{slug}` is an alias for a listing; anything else is a plain 404
                let slug = p.trim_start_matches('/');
                if !slug.is_empty()
                    && !slug.contains('/')
                    && state.catalog.find_listing(slug).is_some()
                {
                    listing(&req, state, slug, &ctx)
                } else {
                    Err(ServerError::NotFound)
                }
            }
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Theme and return path for rendering `req`; also used for error pages.
pub fn page_context(req: &Request) -> PageContext {
    let path = match req.uri().query() {
        Some(q) => format!("{}?{q}", req.uri().path()),
        None => req.uri().path().to_string(),
    };
    PageContext::new(request_theme(req), path)
}

fn home(state: &AppState, ctx: &PageContext) -> ResultResp {
    let listings = state.catalog.listings();
    let vm = pages::HomeVm {
        featured: query_listings(listings, &ListingQuery::new().featured().limit(CAROUSEL_LIMIT))
            .items,
        trending: query_listings(listings, &ListingQuery::new().trending().limit(CAROUSEL_LIMIT))
            .items,
        posts: state.catalog.posts(),
    };
    html_response(pages::home_page(&vm, ctx))
}

fn explore(req: &Request, state: &AppState, ctx: &PageContext) -> ResultResp {
    let params = query_params(req);
    let search = params
        .get("q")
        .map(|q| q.trim().to_string())
        .unwrap_or_default();
    let category = params
        .get("category")
        .map(|c| c.trim())
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"))
        .map(str::to_string);
    let page = params
        .get("page")
        .and_then(|p| p.parse::<usize>().ok())
        .filter(|p| *p > 0)
        .unwrap_or(1);
    let view = params
        .get("view")
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();
    let sort = params
        .get("sort")
        .map(|s| SortOrder::parse(s))
        .unwrap_or_default();
    let page_size = state.config.page_size;
    let listings = state.catalog.listings();

    let mut query = ListingQuery::new()
        .search(search.as_str())
        .base_categories(BASE_CATEGORIES)
        .sort(sort)
        .page(page, page_size);
    if let Some(category) = &category {
        query = query.category(category.as_str());
    }
    let results = query_listings(listings, &query);

    let vm = pages::ExploreVm {
        counts: category_counts(listings, &search, &BASE_CATEGORIES),
        pager: Pager::new(page, page_size, results.items.len()),
        items: results.items,
        loading: results.loading,
        featured: query_listings(listings, &ListingQuery::new().featured().limit(CAROUSEL_LIMIT))
            .items,
        trending: query_listings(listings, &ListingQuery::new().trending().limit(CAROUSEL_LIMIT))
            .items,
        search,
        category,
        view,
        sort,
    };

    if is_htmx(req) {
        html_response(pages::explore_results(&vm))
    } else {
        html_response(pages::explore_page(&vm, ctx))
    }
}

fn listing(req: &Request, state: &AppState, slug: &str, ctx: &PageContext) -> ResultResp {
    let Some(listing) = state.catalog.find_listing(slug) else {
        debug!(slug, "unknown listing");
        return html_with_status(404, pages::listing_not_found(ctx));
    };

    let params = query_params(req);
    let tab_param = params.get("tab").map(String::as_str);
    let tab = ProfileTab::parse_or_default(tab_param);

    if is_htmx(req) && tab_param.is_some() {
        return html_response(pages::profile_tabs(listing, tab));
    }

    let related = state.catalog.related(slug, RELATED_LIMIT);
    html_response(pages::listing_page(listing, tab, &related, ctx))
}

fn blog_post(state: &AppState, id: &str, ctx: &PageContext) -> ResultResp {
    match id.parse::<u32>().ok().and_then(|id| state.catalog.find_post(id)) {
        Some(post) => html_response(pages::blog_post(post, ctx)),
        None => html_with_status(404, pages::blog_post_not_found(ctx)),
    }
}

fn contact_submit(req: &mut Request, ctx: &PageContext) -> ResultResp {
    let params = read_form(req)?;
    let form = ContactForm::from_params(&params);

    let (form, errors, sent) = match form.validate() {
        Ok(message) => {
            info!(name = %message.name, email = %message.email, "contact message received");
            (ContactForm::default(), ContactErrors::new(), true)
        }
        Err(errors) => {
            debug!(fields = errors.len(), "contact form rejected");
            (form, errors, false)
        }
    };

    if is_htmx(req) {
        html_response(pages::contact_form(&form, &errors, sent))
    } else {
        html_response(pages::contact_page_with(&form, &errors, sent, ctx))
    }
}

fn find_form(req: &Request, state: &AppState) -> Result<Option<FormHandle>, ServerError> {
    state.forms.find(cookie(req, FORM_COOKIE))
}

/// Field edits and submits need a session, which only picking a type starts.
fn require_form(req: &Request, state: &AppState) -> Result<FormHandle, ServerError> {
    find_form(req, state)?.ok_or_else(|| ServerError::from(FormError::NoTypeSelected))
}

/// The add-listing panel for htmx, the full page otherwise. Without a
/// session the type picker is rendered from a blank form; a new session
/// gets its cookie here.
fn form_response(
    req: &Request,
    state: &AppState,
    handle: Option<&FormHandle>,
    ctx: &PageContext,
) -> ResultResp {
    let render = |form: &AddListingForm| {
        if is_htmx(req) {
            pages::add_listing_panel(form)
        } else {
            pages::add_listing_page(form, ctx)
        }
    };
    let markup = match handle {
        Some(handle) => handle.with(|form| render(form))?,
        None => render(&state.forms.blank_form()),
    };
    let resp = html_response(markup)?;

    let cookie = handle.filter(|h| h.is_new).map(|h| {
        format!(
            "{FORM_COOKIE}={}; Path=/add-listing; HttpOnly; SameSite=Lax",
            h.token
        )
    });
    with_cookies(resp, cookie)
}

/// Edits that arrive while a submission is in flight are dropped; the
/// re-rendered panel shows the locked form.
fn unless_submitting(result: Result<(), FormError>) -> Result<(), ServerError> {
    match result {
        Err(FormError::SubmissionInProgress) => {
            debug!("edit ignored during submission");
            Ok(())
        }
        other => other.map_err(ServerError::from),
    }
}

fn add_listing_type(req: &mut Request, state: &AppState, ctx: &PageContext) -> ResultResp {
    let posted = read_form(req)?;
    let listing_type = posted
        .get("type")
        .and_then(|t| t.parse::<ListingType>().ok())
        .ok_or_else(|| ServerError::BadRequest("Unknown listing type".to_string()))?;

    let handle = state.forms.open(cookie(req, FORM_COOKIE))?;
    unless_submitting(handle.with(|form| form.select_type(listing_type))?)?;
    form_response(req, state, Some(&handle), ctx)
}

fn add_listing_field(req: &mut Request, state: &AppState, ctx: &PageContext) -> ResultResp {
    let posted = read_form(req)?;
    let handle = require_form(req, state)?;
    unless_submitting(handle.with(|form| form.apply(&posted))?)?;
    form_response(req, state, Some(&handle), ctx)
}

fn add_listing_submit(req: &mut Request, state: &AppState, ctx: &PageContext) -> ResultResp {
    let posted = read_form(req)?;
    let handle = require_form(req, state)?;

    let outcome = handle.with(|form| {
        form.apply(&posted)?;
        form.submit()
    })?;

    match outcome {
        Ok(submission) => state.forms.schedule_completion(&handle, &submission)?,
        Err(FormError::Invalid(errors)) => {
            debug!(fields = ?errors.keys().collect::<Vec<_>>(), "listing submission invalid");
        }
        Err(err) => unless_submitting(Err(err))?,
    }
    form_response(req, state, Some(&handle), ctx)
}

fn theme_toggle(req: &Request) -> ResultResp {
    let mut store = CookieThemeStore::from_request(req);
    let theme = toggle_theme(&mut store, header(req, "Sec-CH-Prefers-Color-Scheme"));
    debug!(theme = theme.as_str(), "theme toggled");

    let back = query_params(req)
        .get("back")
        .filter(|b| is_local_path(b))
        .cloned()
        .unwrap_or_else(|| "/".to_string());

    with_cookies(redirect(&back)?, store.set_cookie())
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}
