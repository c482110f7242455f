pub mod card;
pub mod error;
pub mod form_field;
pub mod media;

pub use card::{event_card, job_card, listing_card, listing_row, product_card, review_card};
pub use error::{error_page, not_found_notice};
pub use form_field::form_field;
pub use media::{ad_banner, carousel, image_with_fallback};
