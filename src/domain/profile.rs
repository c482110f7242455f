// src/domain/profile.rs
//
// Sample content shown on every business profile tab. The directory has no
// per-business reviews or stock yet, so each profile shows the same set.

use strum::{EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProfileTab {
    #[default]
    Profile,
    Reviews,
    Events,
    Jobs,
    Store,
}

impl ProfileTab {
    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Profile => "Profile",
            ProfileTab::Reviews => "Reviews",
            ProfileTab::Events => "Events",
            ProfileTab::Jobs => "Jobs",
            ProfileTab::Store => "Store",
        }
    }

    /// Unknown or missing tab names fall back to the profile tab.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|t| t.parse().ok()).unwrap_or_default()
    }
}

pub struct Review {
    pub name: &'static str,
    pub rating: u8,
    pub comment: &'static str,
    pub avatar: &'static str,
}

pub struct EventTeaser {
    pub title: &'static str,
    pub date: &'static str,
}

pub struct JobTeaser {
    pub title: &'static str,
    pub kind: &'static str,
}

pub struct Product {
    pub name: &'static str,
    pub price: &'static str,
}

pub const CONTACT_PHONE: &str = "+234 800 123 4567";
pub const CONTACT_WEBSITE: &str = "www.example.com";

pub const REVIEWS: &[Review] = &[
    Review {
        name: "John Doe",
        rating: 5,
        comment: "Excellent service!",
        avatar: "https://randomuser.me/api/portraits/men/32.jpg",
    },
    Review {
        name: "Jane Smith",
        rating: 4,
        comment: "Good experience overall.",
        avatar: "https://randomuser.me/api/portraits/women/44.jpg",
    },
];

pub const EVENTS: &[EventTeaser] = &[
    EventTeaser {
        title: "Networking Night",
        date: "Sept 15, 2025",
    },
    EventTeaser {
        title: "Business Expo",
        date: "Oct 10, 2025",
    },
];

pub const JOBS: &[JobTeaser] = &[
    JobTeaser {
        title: "Frontend Developer",
        kind: "Full-time",
    },
    JobTeaser {
        title: "Customer Support Officer",
        kind: "Part-time",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Product A",
        price: "₦20,000",
    },
    Product {
        name: "Product B",
        price: "₦45,000",
    },
    Product {
        name: "Product C",
        price: "₦75,000",
    },
];
