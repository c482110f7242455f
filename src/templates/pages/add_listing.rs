// templates/pages/add_listing.rs

use crate::forms::{AddListingForm, FieldKind, ListingType, SubmitPhase};
use crate::templates::components::form_field;
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};
use strum::IntoEnumIterator;

pub const STATUS_POLL: &str = "every 500ms";

pub fn add_listing_page(form: &AddListingForm, ctx: &PageContext) -> Markup {
    desktop_layout(
        "Add Listing",
        ctx,
        html! {
            main class="container add-listing" {
                (add_listing_panel(form))
            }
        },
    )
}

/// Everything under `#add-listing`. Each htmx action swaps this block.
/// While a submission is in flight the block polls the status endpoint
/// until the form is back at the type picker.
pub fn add_listing_panel(form: &AddListingForm) -> Markup {
    let phase = form.phase();
    let polling = phase != SubmitPhase::Editing;

    html! {
        div id="add-listing"
            hx-get=[polling.then_some("/add-listing/status")]
            hx-trigger=[polling.then_some(STATUS_POLL)]
            hx-swap=[polling.then_some("outerHTML")]
        {
            @match form.selected() {
                None => (type_picker()),
                Some(listing_type) => (listing_form(form, listing_type)),
            }

            @if phase == SubmitPhase::Submitting {
                div class="overlay" role="status" {
                    div class="overlay-card" {
                        div class="spinner" {}
                        h3 { "Creating Your Listing" }
                        p class="muted" { "Please wait while we process your submission..." }
                    }
                }
            }

            @if phase == SubmitPhase::Succeeded {
                div class="overlay" role="status" {
                    div class="overlay-card success" {
                        div class="check" { "✓" }
                        h3 { "Listing Created Successfully!" }
                        @if let Some(listing_type) = form.selected() {
                            p class="muted" {
                                "Your " (listing_type.name().to_lowercase())
                                " listing is now live and visible to users."
                            }
                        }
                        p class="small muted" { "Redirecting you back to the main page..." }
                    }
                }
            }
        }
    }
}

fn type_picker() -> Markup {
    html! {
        section class="type-picker" {
            h1 { "Add a New Listing" }
            p class="muted" {
                "Choose the type of listing you'd like to create. "
                "Our smart forms will guide you through the process."
            }
            form method="post" action="/add-listing/type"
                hx-post="/add-listing/type"
                hx-target="#add-listing"
                hx-swap="outerHTML"
            {
                div class="type-grid" {
                    @for listing_type in ListingType::iter() {
                        button type="submit" name="type" value=(listing_type.id()) class="card type-card" {
                            h3 { (listing_type.name()) }
                            p class="muted" { (listing_type.description()) }
                        }
                    }
                }
            }
        }
    }
}

fn listing_form(form: &AddListingForm, listing_type: ListingType) -> Markup {
    let locked = form.phase() != SubmitPhase::Editing;

    html! {
        section class="listing-form" {
            div class="form-head" {
                button type="button" class="back" aria-label="Back"
                    hx-post="/add-listing/cancel" hx-target="#add-listing" hx-swap="outerHTML"
                    disabled[locked]
                { "←" }
                div {
                    h2 { "Create " (listing_type.name()) " Listing" }
                    p class="muted" { "Fill out the form below to create your listing" }
                }
            }

            form class="card" method="post" action="/add-listing/submit"
                hx-post="/add-listing/submit"
                hx-target="#add-listing"
                hx-swap="outerHTML"
            {
                fieldset disabled[locked] {
                    div class="form-grid" {
                        @for field in form.visible_fields() {
                            div class=[matches!(field.def.kind, FieldKind::TextArea).then_some("span-2")] {
                                (form_field(&field))
                            }
                        }
                    }
                    div class="form-actions" {
                        button type="submit" formaction="/add-listing/cancel"
                            hx-post="/add-listing/cancel"
                            class="btn"
                        { "Cancel" }
                        button type="submit" class="btn primary" {
                            @if locked { "Creating Listing..." } @else { "Create Listing" }
                        }
                    }
                }
            }
        }
    }
}
