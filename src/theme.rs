// theme.rs
//
// Light/dark preference. Storage is behind `ThemeStore` so handlers don't
// care where the preference lives.

use crate::request::{cookie, header};
use astra::Request;
use strum::{EnumString, IntoStaticStr};

pub const THEME_COOKIE: &str = "theme";
const ONE_YEAR_SECS: u64 = 60 * 60 * 24 * 365;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme);
}

/// Stored preference first, then the browser's color-scheme hint, then light.
pub fn resolve_theme(store: &impl ThemeStore, hint: Option<&str>) -> Theme {
    store
        .load()
        .or_else(|| hint.and_then(|h| h.trim().trim_matches('"').parse().ok()))
        .unwrap_or_default()
}

pub fn toggle_theme(store: &mut impl ThemeStore, hint: Option<&str>) -> Theme {
    let next = resolve_theme(store, hint).toggled();
    store.save(next);
    next
}

/// Reads the preference from the request cookie; saving queues a
/// `Set-Cookie` value for the response.
#[derive(Debug, Default)]
pub struct CookieThemeStore {
    stored: Option<Theme>,
    pending: Option<Theme>,
}

impl CookieThemeStore {
    pub fn from_request(req: &Request) -> Self {
        Self {
            stored: cookie(req, THEME_COOKIE).and_then(|v| v.parse().ok()),
            pending: None,
        }
    }

    pub fn set_cookie(&self) -> Option<String> {
        self.pending.map(|theme| {
            format!(
                "{THEME_COOKIE}={}; Path=/; Max-Age={ONE_YEAR_SECS}; SameSite=Lax",
                theme.as_str()
            )
        })
    }
}

impl ThemeStore for CookieThemeStore {
    fn load(&self) -> Option<Theme> {
        self.pending.or(self.stored)
    }

    fn save(&mut self, theme: Theme) {
        self.pending = Some(theme);
    }
}

/// Theme for rendering `req`.
pub fn request_theme(req: &Request) -> Theme {
    resolve_theme(
        &CookieThemeStore::from_request(req),
        header(req, "Sec-CH-Prefers-Color-Scheme"),
    )
}
