use crate::domain::listing::Listing;
use crate::domain::profile::{ProfileTab, CONTACT_PHONE, CONTACT_WEBSITE, EVENTS, JOBS, PRODUCTS, REVIEWS};
use crate::templates::components::{
    event_card, image_with_fallback, job_card, not_found_notice, product_card, review_card,
};
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};
use strum::IntoEnumIterator;

const ACTIONS: [&str; 5] = ["Call", "Website", "Save", "Share", "Claim"];

pub fn listing_page(
    listing: &Listing,
    tab: ProfileTab,
    related: &[&Listing],
    ctx: &PageContext,
) -> Markup {
    desktop_layout(
        &listing.title,
        ctx,
        html! {
            main class="container profile" {
                div class="profile-hero" {
                    (image_with_fallback(&listing.image, &listing.title, "hero-image"))
                    div class="profile-hero-text" {
                        h1 { (listing.title) }
                        p { (listing.category) }
                    }
                }

                div class="profile-actions" {
                    @for label in ACTIONS {
                        button type="button" class="action" { (label) }
                    }
                }

                (profile_tabs(listing, tab))

                @if !related.is_empty() {
                    section class="related" {
                        h3 { "View Related Pages" }
                        div class="listing-grid" {
                            @for other in related {
                                a href=(other.href()) class="card related-card" {
                                    (image_with_fallback(&other.image, &other.title, "card-image"))
                                    div class="card-body" {
                                        h4 { (other.title) }
                                        p class="muted" { (other.category) }
                                        @if let Some(price) = other.display_price() {
                                            p class="price" { (price) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

/// Tab strip plus the active tab's content; htmx swaps this block alone.
pub fn profile_tabs(listing: &Listing, active: ProfileTab) -> Markup {
    html! {
        section id="profile-tabs" {
            nav class="tabs" {
                @for tab in ProfileTab::iter() {
                    @let href = format!("{}?tab={}", listing.href(), tab.id());
                    a href=(href)
                        hx-get=(href)
                        hx-target="#profile-tabs"
                        hx-swap="outerHTML"
                        class=(if tab == active { "tab active" } else { "tab" })
                    {
                        (tab.label())
                    }
                }
            }

            div class="tab-content" {
                @match active {
                    ProfileTab::Profile => {
                        div class="card about" {
                            h3 { "About" }
                            p { (listing.description) }
                            ul class="contact-lines" {
                                li { "📍 " (listing.location) }
                                li { "📞 " (CONTACT_PHONE) }
                                li { "🌐 " (CONTACT_WEBSITE) }
                            }
                        }
                    }
                    ProfileTab::Reviews => {
                        div class="grid-2" { @for r in REVIEWS { (review_card(r)) } }
                    }
                    ProfileTab::Events => {
                        div class="grid-3" { @for e in EVENTS { (event_card(e)) } }
                    }
                    ProfileTab::Jobs => {
                        div class="grid-3" { @for j in JOBS { (job_card(j)) } }
                    }
                    ProfileTab::Store => {
                        div class="grid-3" { @for p in PRODUCTS { (product_card(p)) } }
                    }
                }
            }
        }
    }
}

pub fn listing_not_found(ctx: &PageContext) -> Markup {
    desktop_layout(
        "Business not found",
        ctx,
        html! {
            main class="container" {
                (not_found_notice("Business not found", "/explore", "Try exploring other listings"))
            }
        },
    )
}
