use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

/// Full error page inside the normal layout.
pub fn error_page(status: u16, message: &str, ctx: &PageContext) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        ctx,
        html! {
            main class="container error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        },
    )
}

/// Inline "nothing here" block, e.g. an unknown business or blog post.
pub fn not_found_notice(title: &str, back_href: &str, back_label: &str) -> Markup {
    html! {
        section class="not-found" {
            h2 { (title) }
            a href=(back_href) class="btn" { (back_label) }
        }
    }
}
