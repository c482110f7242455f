pub mod add_listing;
pub mod blog;
pub mod contact;
pub mod explore;
pub mod home;
pub mod listing;

pub use add_listing::{add_listing_page, add_listing_panel};
pub use blog::{blog_index, blog_post, blog_post_not_found};
pub use contact::{contact_form, contact_page, contact_page_with};
pub use explore::{explore_page, explore_results, ExploreVm};
pub use home::{home_page, HomeVm};
pub use listing::{listing_not_found, listing_page, profile_tabs};
