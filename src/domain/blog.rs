use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author: String,
    pub date: NaiveDate,
    pub category: String,
}

impl BlogPost {
    pub fn href(&self) -> String {
        format!("/blog/{}", self.id)
    }

    /// e.g. "Aug 24, 2025"
    pub fn display_date(&self) -> String {
        self.date.format("%b %d, %Y").to_string()
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}
