use crate::domain::listing::Listing;
use crate::templates::components::card::compact_card;
use maud::{html, Markup};

/// Image with an in-page stand-in. A blank `src` renders the stand-in
/// directly; a failed load hides the image and reveals its sibling.
pub fn image_with_fallback(src: &str, alt: &str, class: &str) -> Markup {
    let placeholder = format!("img-placeholder {class}");
    html! {
        @if src.trim().is_empty() {
            div class=(placeholder) role="img" aria-label=(alt) { span { "No image" } }
        } @else {
            img src=(src) alt=(alt) class=(class) loading="lazy"
                onerror="this.hidden=true;this.nextElementSibling.hidden=false";
            div class=(placeholder) role="img" aria-label=(alt) hidden { span { "No image" } }
        }
    }
}

/// Local ad slot. Without an image, or when it fails to load, a grey
/// "Ad Space" box of the same height is shown.
pub fn ad_banner(src: Option<&str>, alt: &str, height: u32) -> Markup {
    let style = format!("height: {height}px");
    html! {
        div class="ad-banner" {
            @if let Some(src) = src {
                img src=(src) alt=(alt) style=(style) loading="lazy"
                    onerror="this.hidden=true;this.nextElementSibling.hidden=false";
                div class="ad-placeholder" style=(style) hidden { span { "Ad Space" } }
            } @else {
                div class="ad-placeholder" style=(style) { span { "Ad Space" } }
            }
        }
    }
}

/// Horizontally scrolling strip of compact cards. Renders nothing for an
/// empty list.
pub fn carousel(id: &str, title: &str, items: &[&Listing]) -> Markup {
    let scroll = |dx: i32| format!("document.getElementById('{id}').scrollBy({{left: {dx}, behavior: 'smooth'}})");
    html! {
        @if !items.is_empty() {
            section class="carousel" {
                h2 { (title) }
                div class="carousel-frame" {
                    div id=(id) class="carousel-track" {
                        @for item in items {
                            (compact_card(item))
                        }
                    }
                    button type="button" class="carousel-prev" aria-label="Previous" onclick=(scroll(-300)) { "‹" }
                    button type="button" class="carousel-next" aria-label="Next" onclick=(scroll(300)) { "›" }
                }
            }
        }
    }
}
