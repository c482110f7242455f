// templates/pages/home.rs

use crate::domain::blog::BlogPost;
use crate::domain::listing::Listing;
use crate::templates::components::{carousel, image_with_fallback};
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup, PreEscaped};

struct Slide {
    title: &'static str,
    subtitle: &'static str,
    image: &'static str,
}

const SLIDES: [Slide; 3] = [
    Slide {
        title: "Discover Businesses Near You",
        subtitle: "Find the best restaurants, shops, and services in your area.",
        image: "https://images.unsplash.com/photo-1469474968028-56623f02e42e?q=80&w=1920&auto=format&fit=crop",
    },
    Slide {
        title: "Events, Jobs & Real Estate",
        subtitle: "Everything happening around you, all in one place.",
        image: "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1920&auto=format&fit=crop",
    },
    Slide {
        title: "Grow with Contact365",
        subtitle: "List your business and reach more local customers.",
        image: "https://images.unsplash.com/photo-1496302662116-35cc4f36df92?q=80&w=1920&auto=format&fit=crop",
    },
];

const FEATURES: [(&str, &str); 3] = [
    ("Discover", "Find local businesses and services near you."),
    ("Connect", "Engage with trusted providers and communities."),
    ("Grow", "Expand your business reach with Contact365."),
];

// Rotates the hero every 6s by toggling the `active` class.
const SLIDER_JS: &str = r#"(function(){var s=document.querySelectorAll('.hero-slide'),i=0;if(s.length<2)return;setInterval(function(){s[i].classList.remove('active');i=(i+1)%s.length;s[i].classList.add('active');},6000);})();"#;

pub struct HomeVm<'a> {
    pub featured: Vec<&'a Listing>,
    pub trending: Vec<&'a Listing>,
    pub posts: &'a [BlogPost],
}

pub fn home_page(vm: &HomeVm<'_>, ctx: &PageContext) -> Markup {
    desktop_layout(
        "Home",
        ctx,
        html! {
            section class="hero" {
                @for (i, slide) in SLIDES.iter().enumerate() {
                    div class=(if i == 0 { "hero-slide active" } else { "hero-slide" })
                        style=(format!("background-image: url({})", slide.image))
                    {
                        h1 { (slide.title) }
                        p { (slide.subtitle) }
                    }
                }
                form class="hero-search" method="get" action="/explore" {
                    input type="search" name="q" placeholder="What are you looking for?";
                    button type="submit" class="btn primary" { "Search" }
                }
                script { (PreEscaped(SLIDER_JS)) }
            }

            main class="container" {
                section class="features" {
                    @for (title, text) in FEATURES {
                        div class="card feature" {
                            h3 { (title) }
                            p class="muted" { (text) }
                        }
                    }
                }

                (carousel("featured-carousel", "Featured Businesses", &vm.featured))
                (carousel("trending-carousel", "Trending Now", &vm.trending))

                @if !vm.posts.is_empty() {
                    section class="blog-teaser" {
                        h2 { "From the Blog" }
                        div class="listing-grid" {
                            @for post in vm.posts.iter().take(3) {
                                a href=(post.href()) class="card" {
                                    (image_with_fallback(&post.image, &post.title, "card-image"))
                                    div class="card-body" {
                                        span class="badge" { (post.category) }
                                        h3 { (post.title) }
                                        p class="muted" { (post.excerpt) }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section class="cta" {
                h2 { "Grow your business with Contact365" }
                p { "Join thousands of businesses already listed." }
                a href="/add-listing" class="btn" { "Add Your Listing" }
            }
        },
    )
}
