use crate::domain::listing::Listing;
use crate::domain::profile::{EventTeaser, JobTeaser, Product, Review};
use crate::templates::components::media::image_with_fallback;
use maud::{html, Markup};

/// Five stars, `rating` of them filled (rounded).
pub fn star_rating(rating: f32) -> Markup {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    html! {
        span class="stars" aria-label=(format!("{rating:.1} out of 5")) {
            @for i in 0..5 {
                span class=(if i < filled { "star filled" } else { "star" }) { "★" }
            }
        }
    }
}

pub fn listing_card(listing: &Listing) -> Markup {
    html! {
        a href=(listing.href()) class="card listing-card" {
            (image_with_fallback(&listing.image, &listing.title, "card-image"))
            div class="card-body" {
                @if !listing.category.is_empty() {
                    span class="badge" { (listing.category) }
                }
                h3 { (listing.title) }
                p class="muted" { (listing.location) }
                div class="card-meta" {
                    (star_rating(listing.rating))
                    span class="rating" { (format!("{:.1}", listing.rating)) }
                    @if let Some(price) = listing.display_price() {
                        span class="price" { (price) }
                    }
                }
            }
        }
    }
}

/// Wide variant for the explore page's list view.
pub fn listing_row(listing: &Listing) -> Markup {
    html! {
        a href=(listing.href()) class="card listing-row" {
            (image_with_fallback(&listing.image, &listing.title, "row-image"))
            div class="card-body" {
                h3 { (listing.title) }
                p class="muted" { (listing.location) }
                p { (listing.description) }
                div class="card-meta" {
                    (star_rating(listing.rating))
                    @if let Some(price) = listing.display_price() {
                        span class="price" { (price) }
                    }
                }
            }
        }
    }
}

/// Small card used inside carousels.
pub fn compact_card(listing: &Listing) -> Markup {
    html! {
        a href=(listing.href()) class="card compact-card" {
            (image_with_fallback(&listing.image, &listing.title, "compact-image"))
            div class="card-body" {
                h3 class="line-clamp-1" { (listing.title) }
                p class="muted" { (listing.location) }
            }
        }
    }
}

pub fn review_card(review: &Review) -> Markup {
    html! {
        div class="card review-card" {
            div class="review-head" {
                (image_with_fallback(review.avatar, review.name, "avatar"))
                span class="name" { (review.name) }
                (star_rating(f32::from(review.rating)))
            }
            p class="muted" { (review.comment) }
        }
    }
}

pub fn event_card(event: &EventTeaser) -> Markup {
    html! {
        div class="card event-card" {
            span class="icon" { "📅" }
            div {
                p class="title" { (event.title) }
                p class="muted" { (event.date) }
            }
        }
    }
}

pub fn job_card(job: &JobTeaser) -> Markup {
    html! {
        div class="card job-card" {
            span { span class="icon" { "💼" } (job.title) }
            span class="muted" { (job.kind) }
        }
    }
}

pub fn product_card(product: &Product) -> Markup {
    html! {
        div class="card product-card" {
            span class="icon" { "🛍" }
            p class="title" { (product.name) }
            p class="muted" { (product.price) }
        }
    }
}
