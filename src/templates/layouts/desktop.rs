use crate::theme::Theme;
use maud::{html, Markup, DOCTYPE};

const NAV_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Explore", "/explore"),
    ("Blog", "/blog"),
    ("Contact", "/contact"),
];

/// Per-request bits the layout needs.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub theme: Theme,
    /// Path plus query of the current page, used as the theme toggle's way back.
    pub path: String,
}

impl PageContext {
    pub fn new(theme: Theme, path: impl Into<String>) -> Self {
        Self {
            theme,
            path: path.into(),
        }
    }

    fn toggle_href(&self) -> String {
        let back: String = url::form_urlencoded::byte_serialize(self.path.as_bytes()).collect();
        format!("/theme/toggle?back={back}")
    }

    fn is_current(&self, href: &str) -> bool {
        let path = self.path.split('?').next().unwrap_or("/");
        if href == "/" {
            path == "/"
        } else {
            path == href || path.starts_with(&format!("{href}/"))
        }
    }
}

pub fn desktop_layout(title: &str, ctx: &PageContext, content: Markup) -> Markup {
    let dark = ctx.theme == Theme::Dark;

    html! {
        (DOCTYPE)
        html lang="en" class=[dark.then_some("dark")] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Contact365" }
                // empty icon keeps browsers from requesting /favicon.ico
                link rel="icon" href="data:,";
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header class="site-header" {
                    (logo())
                    nav {
                        ul {
                            @for (name, href) in NAV_LINKS {
                                li {
                                    a href=(href) class=[ctx.is_current(href).then_some("active")] { (name) }
                                }
                            }
                        }
                    }
                    div class="header-actions" {
                        a href=(ctx.toggle_href()) class="theme-toggle" title="Toggle theme" {
                            @if dark { "☀" } @else { "☾" }
                        }
                        a href="/add-listing" class="btn primary" { "Add Listing" }
                    }
                }

                (content)

                (footer())
            }
        }
    }
}

/// Text wordmark; colours follow the theme through CSS variables.
fn logo() -> Markup {
    html! {
        a href="/" class="logo" aria-label="Contact365 home" {
            "Contact" span class="logo-accent" { "365" }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-grid" {
                div {
                    (logo())
                    p class="muted" {
                        "Contact365 is your trusted local business directory. "
                        "Discover businesses, connect with services, and grow your network."
                    }
                }
                div {
                    h4 { "Quick Links" }
                    ul {
                        @for (name, href) in NAV_LINKS {
                            li { a href=(href) { (name) } }
                        }
                    }
                }
                div {
                    h4 { "Follow Us" }
                    ul class="social" {
                        li { a href="https://facebook.com" target="_blank" { "Facebook" } }
                        li { a href="https://twitter.com" target="_blank" { "Twitter" } }
                        li { a href="https://instagram.com" target="_blank" { "Instagram" } }
                        li { a href="https://linkedin.com" target="_blank" { "LinkedIn" } }
                    }
                }
            }
            p class="copyright" { "© Contact365. All rights reserved." }
        }
    }
}
