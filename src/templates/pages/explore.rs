use crate::domain::listing::Listing;
use crate::domain::query::{CategoryCount, Pager, SortOrder};
use crate::templates::components::{ad_banner, carousel, listing_card, listing_row};
use crate::templates::{desktop_layout, PageContext};
use maud::{html, Markup};
use strum::{EnumString, IntoStaticStr};
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

const SIDEBAR_ADS: [(&str, u32); 3] = [
    (
        "https://images.unsplash.com/photo-1607082349566-187342350d9f?w=600&q=80&auto=format",
        250,
    ),
    (
        "https://images.unsplash.com/photo-1505691938895-1758d7feb511?w=600&q=80&auto=format",
        400,
    ),
    (
        "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=600&q=80&auto=format",
        250,
    ),
];

pub struct ExploreVm<'a> {
    pub search: String,
    /// `None` means "All".
    pub category: Option<String>,
    pub view: ViewMode,
    pub sort: SortOrder,
    pub counts: Vec<CategoryCount>,
    pub items: Vec<&'a Listing>,
    pub loading: bool,
    pub pager: Pager,
    pub featured: Vec<&'a Listing>,
    pub trending: Vec<&'a Listing>,
}

impl ExploreVm<'_> {
    fn href(&self, category: Option<&str>, page: usize, view: ViewMode) -> String {
        self.link(category, page, view, self.sort)
    }

    fn link(&self, category: Option<&str>, page: usize, view: ViewMode, sort: SortOrder) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(category) = category {
            query.append_pair("category", category);
        }
        if !self.search.is_empty() {
            query.append_pair("q", &self.search);
        }
        if page > 1 {
            query.append_pair("page", &page.to_string());
        }
        if view != ViewMode::Grid {
            query.append_pair("view", view.as_str());
        }
        if sort != SortOrder::Recent {
            query.append_pair("sort", sort.as_str());
        }
        let query = query.finish();
        if query.is_empty() {
            "/explore".to_string()
        } else {
            format!("/explore?{query}")
        }
    }

    fn sorted_href(&self, sort: SortOrder) -> String {
        self.link(self.category.as_deref(), 1, self.view, sort)
    }

    fn is_active(&self, label: &str) -> bool {
        match &self.category {
            None => label == "All",
            Some(c) => c.eq_ignore_ascii_case(label),
        }
    }
}

pub fn explore_page(vm: &ExploreVm<'_>, ctx: &PageContext) -> Markup {
    desktop_layout(
        "Explore",
        ctx,
        html! {
            main class="container explore" {
                div class="explore-main" {
                    div class="explore-top" {
                        h1 { "Explore Listings" }
                        div class="view-toggle" {
                            a href=(vm.href(vm.category.as_deref(), vm.pager.page, ViewMode::Grid))
                                class=[(vm.view == ViewMode::Grid).then_some("active")] { "Grid" }
                            a href=(vm.href(vm.category.as_deref(), vm.pager.page, ViewMode::List))
                                class=[(vm.view == ViewMode::List).then_some("active")] { "List" }
                        }
                    }

                    form class="search-bar" method="get" action="/explore"
                        hx-get="/explore"
                        hx-trigger="keyup changed delay:300ms from:input[name=q], submit"
                        hx-target="#explore-results"
                        hx-swap="outerHTML"
                        hx-push-url="true"
                    {
                        @if let Some(category) = &vm.category {
                            input type="hidden" name="category" value=(category);
                        }
                        @if vm.view != ViewMode::Grid {
                            input type="hidden" name="view" value=(vm.view.as_str());
                        }
                        @if vm.sort != SortOrder::Recent {
                            input type="hidden" name="sort" value=(vm.sort.as_str());
                        }
                        input type="search" name="q" value=(vm.search) placeholder="Search listings..." autocomplete="off";
                    }

                    (carousel("featured-carousel", "Featured Businesses", &vm.featured))
                    (carousel("trending-carousel", "Trending Now", &vm.trending))

                    (explore_results(vm))
                }

                aside class="sidebar" {
                    h3 { "Sponsored" }
                    @for (i, (src, height)) in SIDEBAR_ADS.iter().enumerate() {
                        (ad_banner(Some(*src), &format!("Sponsored Content {}", i + 1), *height))
                    }
                    (ad_banner(None, "Sponsored", 250))
                }
            }
        },
    )
}

/// Filter buttons, results and pager. Swapped on its own for htmx searches.
pub fn explore_results(vm: &ExploreVm<'_>) -> Markup {
    html! {
        section id="explore-results" class="results" {
            div class="category-filters" {
                @for count in &vm.counts {
                    @let target = (count.label != "All").then_some(count.label.as_str());
                    a href=(vm.href(target, 1, vm.view))
                        class=(if vm.is_active(&count.label) { "chip active" } else { "chip" })
                    {
                        (count.label) " (" (count.count) ")"
                    }
                }
            }

            div class="results-head" {
                h2 { "Other Businesses" }
                div class="sort-toggle" {
                    @for (sort, label) in [(SortOrder::Recent, "Newest"), (SortOrder::Rating, "Top rated")] {
                        a href=(vm.sorted_href(sort))
                            class=[(vm.sort == sort).then_some("active")]
                        { (label) }
                    }
                }
            }

            @if vm.loading {
                p class="muted" { "Loading..." }
            } @else if vm.items.is_empty() {
                p class="empty" { "No listings match your search" }
            } @else {
                div class=(if vm.view == ViewMode::Grid { "listing-grid" } else { "listing-list" }) {
                    @for item in &vm.items {
                        @if vm.view == ViewMode::Grid {
                            (listing_card(item))
                        } @else {
                            (listing_row(item))
                        }
                    }
                }
            }

            nav class="pager" {
                @if vm.pager.has_prev {
                    a href=(vm.href(vm.category.as_deref(), vm.pager.page - 1, vm.view)) class="btn" { "Prev" }
                } @else {
                    span class="btn disabled" aria-disabled="true" { "Prev" }
                }
                span { "Page " (vm.pager.page) }
                @if vm.pager.has_next {
                    a href=(vm.href(vm.category.as_deref(), vm.pager.page + 1, vm.view)) class="btn" { "Next" }
                } @else {
                    span class="btn disabled" aria-disabled="true" { "Next" }
                }
            }
        }
    }
}
