mod add_listing_tests;
mod contact_tests;
mod pages_tests;
