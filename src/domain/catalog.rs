// src/domain/catalog.rs

use crate::domain::blog::BlogPost;
use crate::domain::listing::Listing;
use std::collections::HashSet;
use thiserror::Error;

const LISTINGS_JSON: &str = include_str!("../../data/listings.json");
const BLOG_POSTS_JSON: &str = include_str!("../../data/blog_posts.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid {what} data: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate listing slug `{0}`")]
    DuplicateSlug(String),
}

/// The static directory content: listings and blog posts.
/// Loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
    posts: Vec<BlogPost>,
}

impl Catalog {
    /// Catalog compiled into the binary from `data/`.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(LISTINGS_JSON, BLOG_POSTS_JSON)
    }

    pub fn from_json(listings: &str, posts: &str) -> Result<Self, CatalogError> {
        let listings = serde_json::from_str(listings).map_err(|source| CatalogError::Parse {
            what: "listing",
            source,
        })?;
        let posts = serde_json::from_str(posts).map_err(|source| CatalogError::Parse {
            what: "blog post",
            source,
        })?;
        Self::new(listings, posts)
    }

    pub fn new(listings: Vec<Listing>, posts: Vec<BlogPost>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for listing in &listings {
            if !seen.insert(listing.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(listing.slug.clone()));
            }
        }
        Ok(Self { listings, posts })
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn find_listing(&self, slug: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.slug == slug)
    }

    /// First `n` listings other than `slug`, in catalog order.
    pub fn related(&self, slug: &str, n: usize) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|l| l.slug != slug)
            .take(n)
            .collect()
    }

    pub fn find_post(&self, id: u32) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }
}
