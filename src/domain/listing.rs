use serde::Deserialize;

/// Categories shown as explicit filters on the explore page.
/// Anything else buckets into [`OTHER_CATEGORY`].
pub const BASE_CATEGORIES: [&str; 5] = ["Places", "Events", "Jobs", "Real Estate", "Cars"];

pub const OTHER_CATEGORY: &str = "Other";

/// A single directory record: business, job, event, property or car.
/// Identity is the slug, which is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub slug: String,
    pub title: String,
    // Missing or empty category lands in the "Other" bucket.
    #[serde(default)]
    pub category: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub rating: f32,
    #[serde(default)]
    pub price: Option<u64>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub trending: bool,
}

impl Listing {
    pub fn href(&self) -> String {
        format!("/listings/{}", self.slug)
    }

    /// Price in naira with thousands separators, e.g. `₦1,400,000`.
    pub fn display_price(&self) -> Option<String> {
        self.price.map(format_naira)
    }
}

pub fn format_naira(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('₦');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
