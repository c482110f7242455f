use crate::domain::blog::BlogPost;
use crate::templates::components::{ad_banner, image_with_fallback, not_found_notice};
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};

const POST_ADS: [&str; 2] = [
    "https://images.unsplash.com/photo-1607082349566-187342350d9f?w=600&q=80&auto=format",
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=600&q=80&auto=format",
];

fn byline(post: &BlogPost) -> Markup {
    html! {
        div class="byline muted" {
            span { "👤 " (post.author) }
            span { "📅 " (post.display_date()) }
        }
    }
}

pub fn blog_index(posts: &[BlogPost], ctx: &PageContext) -> Markup {
    desktop_layout(
        "Blog",
        ctx,
        html! {
            main class="container" {
                h1 { "Our Blog" }
                div class="listing-grid" {
                    @for post in posts {
                        article class="card" {
                            a href=(post.href()) {
                                (image_with_fallback(&post.image, &post.title, "card-image"))
                            }
                            div class="card-body" {
                                span class="badge" { (post.category) }
                                a href=(post.href()) { h2 { (post.title) } }
                                p class="muted" { (post.excerpt) }
                                (byline(post))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn blog_post(post: &BlogPost, ctx: &PageContext) -> Markup {
    desktop_layout(
        &post.title,
        ctx,
        html! {
            main class="container blog-post" {
                div class="post-main" {
                    a href="/blog" class="back" { "← Back" }
                    (image_with_fallback(&post.image, &post.title, "hero-image"))
                    span class="badge" { (post.category) }
                    h1 { (post.title) }
                    (byline(post))
                    article {
                        @for para in post.paragraphs() {
                            p { (para) }
                        }
                    }
                }
                aside class="sidebar" {
                    @for (i, src) in POST_ADS.iter().enumerate() {
                        (ad_banner(Some(*src), &format!("Ad Banner {}", i + 1), 300))
                    }
                }
            }
        },
    )
}

pub fn blog_post_not_found(ctx: &PageContext) -> Markup {
    desktop_layout(
        "Blog post not found",
        ctx,
        html! {
            main class="container" {
                (not_found_notice("Blog post not found", "/blog", "Back to blog"))
            }
        },
    )
}
