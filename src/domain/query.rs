// src/domain/query.rs

use crate::domain::listing::{Listing, OTHER_CATEGORY};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Highest id first. Ids are assigned in insertion order, so higher means newer.
    #[default]
    Recent,
    Rating,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("rating") {
            SortOrder::Rating
        } else {
            SortOrder::Recent
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Recent => "recent",
            SortOrder::Rating => "rating",
        }
    }
}

/// Filter/sort/pagination options for [`query_listings`].
///
/// Empty strings and zero numbers count as "not given", so callers can pass
/// raw request values straight through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub featured: bool,
    pub trending: bool,
    pub search: Option<String>,
    pub sort: SortOrder,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub limit: Option<usize>,
    /// Categories that do NOT fall into the "Other" bucket.
    pub base_categories: Vec<String>,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn trending(mut self) -> Self {
        self.trending = true;
        self
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// 1-based page number.
    pub fn page(mut self, page: usize, page_size: usize) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn base_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.base_categories = categories
            .into_iter()
            .map(|c| c.as_ref().to_string())
            .collect();
        self
    }
}

/// Result of a query. `loading` exists for the page templates; an in-memory
/// query is always settled by the time it returns.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView<'a> {
    pub items: Vec<&'a Listing>,
    pub loading: bool,
}

/// Category comparison with "Other" bucketing.
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    base: HashSet<String>,
}

impl CategoryMatcher {
    pub fn new<S: AsRef<str>>(base_categories: &[S]) -> Self {
        Self {
            base: base_categories
                .iter()
                .map(|c| normalize(c.as_ref()))
                .collect(),
        }
    }

    /// Empty, unknown, or literally "other"/"others".
    pub fn is_other(&self, category: &str) -> bool {
        let c = normalize(category);
        c.is_empty() || !self.base.contains(&c) || is_other_bucket(&c)
    }

    pub fn matches(&self, selected: &str, category: &str) -> bool {
        let selected = normalize(selected);
        if is_other_bucket(&selected) {
            self.is_other(category)
        } else {
            normalize(category) == selected
        }
    }
}

fn normalize(category: &str) -> String {
    category.trim().to_lowercase()
}

fn is_other_bucket(normalized: &str) -> bool {
    normalized == "other" || normalized == "others"
}

/// Runs the fixed pipeline: category, featured, trending, search, sort,
/// pagination, limit. Each step works on the output of the previous one.
pub fn query_listings<'a>(source: &'a [Listing], query: &ListingQuery) -> ListingView<'a> {
    let mut items: Vec<&Listing> = source.iter().collect();

    let selected = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    if let Some(selected) = selected {
        let matcher = CategoryMatcher::new(&query.base_categories);
        items.retain(|l| matcher.matches(selected, &l.category));
    }

    if query.featured {
        items.retain(|l| l.featured);
    }

    if query.trending {
        items.retain(|l| l.trending);
    }

    if let Some(q) = query.search.as_deref().filter(|q| !q.is_empty()) {
        let q = q.to_lowercase();
        items.retain(|l| {
            l.title.to_lowercase().contains(&q)
                || l.location.to_lowercase().contains(&q)
                || l.description.to_lowercase().contains(&q)
        });
    }

    match query.sort {
        SortOrder::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOrder::Recent => items.sort_by(|a, b| b.id.cmp(&a.id)),
    }

    let page = query.page.filter(|p| *p > 0);
    let page_size = query.page_size.filter(|s| *s > 0);
    if let (Some(page), Some(size)) = (page, page_size) {
        let start = (page - 1).saturating_mul(size);
        items = items.into_iter().skip(start).take(size).collect();
    }

    if let Some(limit) = query.limit.filter(|n| *n > 0) {
        items.truncate(limit);
    }

    ListingView {
        items,
        loading: false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Counts for the explore filter buttons: "All", each base category, then
/// "Other". Computed over the unpaginated search result.
pub fn category_counts<S: AsRef<str>>(
    source: &[Listing],
    search: &str,
    base_categories: &[S],
) -> Vec<CategoryCount> {
    let matching = query_listings(source, &ListingQuery::new().search(search)).items;
    let matcher = CategoryMatcher::new(base_categories);

    let mut counts = Vec::with_capacity(base_categories.len() + 2);
    counts.push(CategoryCount {
        label: "All".to_string(),
        count: matching.len(),
    });
    for base in base_categories {
        let base = base.as_ref();
        counts.push(CategoryCount {
            label: base.to_string(),
            count: matching
                .iter()
                .filter(|l| matcher.matches(base, &l.category))
                .count(),
        });
    }
    counts.push(CategoryCount {
        label: OTHER_CATEGORY.to_string(),
        count: matching.iter().filter(|l| matcher.is_other(&l.category)).count(),
    });
    counts
}

/// Prev/next state for a page of results. There is no total count on the
/// page, so "next" is offered whenever the page came back full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: usize,
    pub page_size: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Pager {
    pub fn new(page: usize, page_size: usize, returned: usize) -> Self {
        let page = page.max(1);
        Self {
            page,
            page_size,
            has_prev: page > 1,
            has_next: returned >= page_size && page_size > 0,
        }
    }
}
